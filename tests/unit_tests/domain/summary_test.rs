use docsum::domain::{Summary, SummaryLength};

#[test]
fn given_known_lengths_when_parsing_then_maps_to_sentence_ranges() {
    assert_eq!(
        SummaryLength::parse(Some("short")).sentence_range(),
        "2-3 sentences"
    );
    assert_eq!(
        SummaryLength::parse(Some("medium")).sentence_range(),
        "4-5 sentences"
    );
    assert_eq!(
        SummaryLength::parse(Some("long")).sentence_range(),
        "7-8 sentences"
    );
}

#[test]
fn given_missing_or_unknown_length_when_parsing_then_defaults_to_medium() {
    assert_eq!(SummaryLength::parse(None), SummaryLength::Medium);
    assert_eq!(SummaryLength::parse(Some("epic")), SummaryLength::Medium);
}

#[test]
fn given_summary_when_serialized_then_uses_camel_case_key_points() {
    let summary = Summary {
        summary: "A short report.".to_string(),
        key_points: vec!["First".to_string()],
    };

    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["summary"], "A short report.");
    assert_eq!(json["keyPoints"][0], "First");
}
