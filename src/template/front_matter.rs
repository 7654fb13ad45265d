// src/template/front_matter.rs

use super::TemplateError;

/// Parsed front-matter metadata for one license template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseMetadata {
    pub title: String,
    pub spdx_id: String,
    pub nickname: Option<String>,
}

/// Scan `text` for the `title:`, `spdx-id:` and `nickname:` front-matter keys.
///
/// First matching line wins; later duplicates are ignored. The match is a
/// literal prefix including the colon, so `titles: foo` does not count as
/// `title`. The value is whatever follows the first `": "` on the line,
/// trimmed at both ends but otherwise untouched.
///
/// `title` and `spdx-id` are required and must be non-empty; `nickname` is
/// optional. Values are not validated beyond that.
pub fn parse_front_matter(text: &str) -> Result<LicenseMetadata, TemplateError> {
    let lines: Vec<&str> = text.lines().collect();

    let title = required(&lines, "title:", "title")?;
    let spdx_id = required(&lines, "spdx-id:", "spdx_id")?;
    let nickname = value_of(&lines, "nickname:").map(String::from);

    Ok(LicenseMetadata {
        title: s!(title),
        spdx_id: s!(spdx_id),
        nickname,
    })
}

fn required<'a>(
    lines: &[&'a str],
    key: &str,
    field: &'static str,
) -> Result<&'a str, TemplateError> {
    value_of(lines, key).ok_or(TemplateError::MissingField { field })
}

/// First line starting with `key`, split on its first `": "`, value trimmed.
/// A line without the separator, or with an all-whitespace value, yields None.
fn value_of<'a>(lines: &[&'a str], key: &str) -> Option<&'a str> {
    lines
        .iter()
        .find(|line| line.starts_with(key))
        .and_then(|line| line.split_once(": "))
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// License text after the closing `---` fence.
///
/// Mirrors the front-matter layout: the last `---` in the file is the fence,
/// followed by one blank line, then the body. Only the fence and that blank
/// line are consumed; all other whitespace is left exactly as fetched, since
/// license bodies are saved verbatim. Input without a fence is returned whole.
pub fn license_body(text: &str) -> &str {
    match text.rfind("---") {
        Some(idx) => {
            let rest = &text[idx + 3..];
            let rest = strip_newline(rest);
            strip_newline(rest)
        }
        None => text,
    }
}

fn strip_newline(s: &str) -> &str {
    s.strip_prefix("\r\n")
        .or_else(|| s.strip_prefix('\n'))
        .unwrap_or(s)
}
