// tests/fields.rs
//
// Placeholder extraction and synonym normalization. Results are sets;
// every comparison here is order-insensitive by construction (BTreeSet).
//
use std::collections::BTreeSet;

use license_scrape::template::{FIELD_MAP, extract_placeholder_tokens, normalize_fields};

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn extracts_square_bracket_tokens() {
    let tokens = extract_placeholder_tokens("Copyright (C) [year] [fullname] <email>");
    assert_eq!(tokens, set(&["year", "fullname", "email"]));
}

#[test]
fn extracts_angle_bracket_tokens() {
    let tokens = extract_placeholder_tokens("Copyright (C) <year> <fullname> [email]");
    assert_eq!(tokens, set(&["year", "fullname", "email"]));
}

#[test]
fn bracket_shape_is_irrelevant_to_output() {
    // Same token in both shapes still yields one entry.
    let tokens = extract_placeholder_tokens("[year] and <year>");
    assert_eq!(tokens, set(&["year"]));
}

#[test]
fn no_tokens_yields_empty_set() {
    assert!(extract_placeholder_tokens("").is_empty());
    assert!(extract_placeholder_tokens("no placeholders here").is_empty());
    assert!(extract_placeholder_tokens("Copyright (C) All rights reserved.").is_empty());
}

#[test]
fn empty_interior_does_not_match() {
    assert!(extract_placeholder_tokens("[] <> [ ]").contains(" "));
    assert!(extract_placeholder_tokens("[]<>").is_empty());
}

#[test]
fn multiword_tokens_survive() {
    let tokens =
        extract_placeholder_tokens("[project] is developed by [name of author]. Contact [email].");
    assert_eq!(tokens, set(&["project", "name of author", "email"]));
}

#[test]
fn unclosed_brackets_do_not_eat_later_tokens() {
    let tokens = extract_placeholder_tokens("a [b <c>");
    assert_eq!(tokens, set(&["c"]));
}

#[test]
fn nested_same_kind_opener_restarts_the_scan() {
    let tokens = extract_placeholder_tokens("[[year]]");
    assert_eq!(tokens, set(&["year"]));
}

#[test]
fn other_kind_brackets_allowed_inside() {
    let tokens = extract_placeholder_tokens("<a[b> [c<d]");
    assert_eq!(tokens, set(&["a[b", "c<d"]));
}

#[test]
fn normalization_maps_synonyms_to_canonical_names() {
    let raw = set(&["project", "name of author", "email"]);
    let fields = normalize_fields(&raw, FIELD_MAP);
    assert_eq!(fields, set(&["project", "fullname", "email"]));
}

#[test]
fn synonyms_collapse_to_one_entry() {
    let raw = set(&["Year", "yyyy", "year"]);
    let fields = normalize_fields(&raw, FIELD_MAP);
    assert_eq!(fields, set(&["year"]));
}

#[test]
fn unknown_tokens_are_dropped_silently() {
    let raw = set(&["year", "see attached notice", "COPYRIGHT"]);
    let fields = normalize_fields(&raw, FIELD_MAP);
    assert_eq!(fields, set(&["year"]));
}

#[test]
fn normalization_is_idempotent() {
    let raw = set(&[
        "Software Name",
        "projecturl",
        "yyyy",
        "name of copyright holder",
        "email",
        "unrelated",
    ]);
    let once = normalize_fields(&raw, FIELD_MAP);
    let twice = normalize_fields(&once, FIELD_MAP);
    assert_eq!(once, twice);
}

#[test]
fn end_to_end_over_a_license_body() {
    let body = "MIT License

Copyright (c) [year] [fullname]

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software (the \"Software\")...";
    let fields = normalize_fields(&extract_placeholder_tokens(body), FIELD_MAP);
    assert_eq!(fields, set(&["year", "fullname"]));
}
