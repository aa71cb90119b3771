//! Utility functions for text normalization.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

static TRAILING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[^\S\n]+$").unwrap());

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

static SCRIPT_OR_STYLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style|noscript)\b[^>]*>.*?</(script|style|noscript)\s*>").unwrap()
});

static LANGUAGE_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"language-(\w+)").unwrap());

/// Collapse every run of whitespace, newlines included, to a single space
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s, " ").into_owned()
}

/// Final cleanup of converted Markdown.
///
/// Trailing whitespace is removed from every line before newline runs are
/// collapsed, so whitespace-only lines cannot leave three newlines behind.
pub fn clean_markdown(markdown: &str) -> String {
    let trimmed_lines = TRAILING_WHITESPACE.replace_all(markdown, "");
    let collapsed = EXCESS_NEWLINES.replace_all(&trimmed_lines, "\n\n");
    collapsed.trim().to_string()
}

/// Remove markup with regular expressions.
///
/// Last-resort fallback for input no parser could handle. Script and style
/// bodies are dropped along with the tags and a handful of common entities
/// are decoded.
pub fn strip_tags(html: &str) -> String {
    let without_scripts = SCRIPT_OR_STYLE.replace_all(html, "");
    let text = TAG.replace_all(&without_scripts, "");
    decode_basic_entities(&text).trim().to_string()
}

fn decode_basic_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Extract the language name from a `language-*` class attribute
pub fn code_language(class: Option<&str>) -> Option<&str> {
    LANGUAGE_CLASS
        .captures(class?)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Escape pipes so cell content cannot split a table row
pub fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Links whose target would run script are rendered as plain text
pub fn is_unsafe_href(href: &str) -> bool {
    let href = href.trim_start();
    href.get(..11)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("javascript:"))
}
