// src/template/fields.rs

use std::collections::BTreeSet;

/// Recognized placeholder spellings → canonical field name.
///
/// Data, not logic: new synonyms are added here, the scan below never changes.
/// Canonical names are their own keys, so normalization is idempotent.
pub static FIELD_MAP: &[(&str, &str)] = &[
    // Project
    ("project", "project"),
    ("Software Name", "project"),
    ("projecturl", "projecturl"),
    // License year
    ("year", "year"),
    ("yyyy", "year"),
    ("Year", "year"),
    // Copyright owner
    ("fullname", "fullname"),
    ("name of copyright owner", "fullname"),
    ("name of copyright holder", "fullname"),
    ("name of author", "fullname"),
    ("email", "email"),
];

/// Collect the raw bracketed tokens in `text`: `[...]` and `<...>`, interior
/// non-empty and free of brackets of the same kind. One left-to-right pass;
/// duplicates (and the same token in both bracket shapes) collapse into a
/// single entry.
pub fn extract_placeholder_tokens(text: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    let mut i = 0;

    while i < text.len() {
        let Some(rel) = text[i..].find(['[', '<']) else {
            break;
        };
        let open = i + rel;
        let (oc, cc) = if text.as_bytes()[open] == b'[' {
            ('[', ']')
        } else {
            ('<', '>')
        };
        let inner_start = open + 1;

        // Next bracket of the same kind decides the token's fate.
        match text[inner_start..].find([oc, cc]) {
            Some(rel) => {
                let pos = inner_start + rel;
                if text[pos..].starts_with(cc) {
                    if pos > inner_start {
                        out.insert(s!(&text[inner_start..pos]));
                    }
                    // Empty interior ("[]") matches nothing; skip the closer.
                    i = pos + 1;
                } else {
                    // Same opener again before any closer; rescan from it.
                    i = pos;
                }
            }
            // Unclosed opener; tokens of the other kind may still follow.
            None => i = inner_start,
        }
    }

    out
}

/// Map raw tokens through the synonym table. Unrecognized tokens are dropped
/// silently: free-form bracketed text is data, not an error. The result is a
/// set, so each canonical name appears at most once no matter how many
/// spellings referenced it.
pub fn normalize_fields(
    raw_tokens: &BTreeSet<String>,
    table: &[(&str, &str)],
) -> BTreeSet<String> {
    raw_tokens
        .iter()
        .filter_map(|token| {
            table
                .iter()
                .find(|(raw, _)| *raw == token.as_str())
                .map(|(_, canonical)| s!(*canonical))
        })
        .collect()
}
