use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use crate::metadata::NoteRecord;

const TITLE_SCAN_LINES: usize = 20;
const DATE_PREFIX_CHARS: usize = 10;

// Whitespace includes U+FEFF. `ANY` stops at every line terminator, not only `\n`.
const WS: &str = r"[\s\x{FEFF}]";
const ANY: &str = r"[^\n\r\x{2028}\x{2029}]";

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").unwrap());
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^#{WS}+({ANY}+){WS}*$")).unwrap());
static TITLE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(&format!("^#{WS}+")).unwrap());
static SECTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(&format!("^##{WS}+")).unwrap());
static META_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^([A-Za-z][A-Za-z0-9_-]*):{WS}*({ANY}*){WS}*$")).unwrap()
});
static META_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*:").unwrap());

fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub(crate) fn split_lines(content: &str) -> Vec<&str> {
    LINE_BREAK.split(content).collect()
}

/// Strips a trailing `.md`, whatever its case.
pub(crate) fn slug_for(file_name: &str) -> &str {
    match file_name.len().checked_sub(3) {
        Some(cut)
            if file_name
                .get(cut..)
                .is_some_and(|ext| ext.eq_ignore_ascii_case(".md")) =>
        {
            &file_name[..cut]
        }
        _ => file_name,
    }
}

pub(crate) fn extract_title(lines: &[&str]) -> Option<String> {
    let caps = lines
        .iter()
        .take(TITLE_SCAN_LINES)
        .find_map(|line| TITLE.captures(line))?;
    let title = trim_text(&caps[1]);
    (!title.is_empty()).then(|| title.to_string())
}

/// `Key: value` lines of the leading block, up to the first `##` section.
pub(crate) fn extract_metadata(lines: &[&str]) -> HashMap<String, String> {
    let mut meta = HashMap::new();
    for line in lines {
        if SECTION.is_match(line) {
            break;
        }
        if let Some(caps) = META_FIELD.captures(line) {
            meta.insert(caps[1].to_string(), trim_text(&caps[2]).to_string());
        }
    }
    meta
}

pub(crate) fn parse_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(trim_text)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExcerptState {
    BeforeMetadata,
    AfterMetadata,
}

/// First non-blank line following a metadata line, before any `##` section.
/// `#` headings are skipped wherever they appear.
pub(crate) fn extract_excerpt(lines: &[&str]) -> Option<String> {
    let mut state = ExcerptState::BeforeMetadata;
    for line in lines {
        if TITLE_MARKER.is_match(line) {
            continue;
        }
        if META_KEY.is_match(line) {
            state = ExcerptState::AfterMetadata;
            continue;
        }
        if SECTION.is_match(line) {
            return None;
        }
        if state == ExcerptState::BeforeMetadata {
            continue;
        }
        let text = trim_text(line);
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }
    None
}

pub(crate) fn parse_note(file_name: &str, path: String, content: &str) -> NoteRecord {
    let lines = split_lines(content);
    let slug = slug_for(file_name).to_string();
    let meta = extract_metadata(&lines);

    let date = meta
        .get("Date")
        .map(|d| trim_text(d))
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| file_name.chars().take(DATE_PREFIX_CHARS).collect());
    let tags = meta.get("Tags").map(|t| parse_tags(t)).unwrap_or_default();

    NoteRecord {
        title: extract_title(&lines).unwrap_or_else(|| slug.clone()),
        slug,
        path,
        date,
        tags,
        excerpt: extract_excerpt(&lines),
    }
}
