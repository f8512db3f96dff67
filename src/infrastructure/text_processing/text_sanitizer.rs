use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());

/// Normalizes text coming out of the PDF parser or the OCR engine.
///
/// Ligatures are folded (NFKC), words hyphenated across a line break are rejoined,
/// form feeds become line breaks, other control characters are dropped, runs of
/// blank lines collapse to one paragraph break and inner whitespace to one space.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter_map(|ch| match ch {
            '\u{000B}' | '\u{000C}' => Some('\n'),
            '\n' | '\r' | '\t' => Some(ch),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect();
    let de_hyphenated = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");

    let mut result = String::with_capacity(de_hyphenated.len());
    let mut pending_break = false;

    for line in de_hyphenated.lines().map(str::trim) {
        if line.is_empty() {
            pending_break = !result.is_empty();
            continue;
        }
        if !result.is_empty() {
            result.push_str(if pending_break { "\n\n" } else { "\n" });
        }
        collapse_internal_whitespace(line, &mut result);
        pending_break = false;
    }

    result
}

/// Sanitizes each page and joins the non-empty ones with a paragraph break.
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    pages
        .into_iter()
        .map(|page| sanitize_extracted_text(page.as_ref()))
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn collapse_internal_whitespace(line: &str, out: &mut String) {
    let mut prev_was_space = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}
