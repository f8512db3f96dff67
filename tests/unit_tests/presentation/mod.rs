mod status_mapping_test;
