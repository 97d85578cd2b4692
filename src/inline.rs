use std::sync::LazyLock;

use regex::Regex;

use crate::block::Span;

/// A backtick pair with at least one non-backtick character between them
static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`").expect("code span pattern is valid"));

/// Scheme followed by one or more non-whitespace characters
static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("url pattern is valid"));

/// Split one line of text into plain, code and link spans.
///
/// Backtick-quoted runs become code spans and are never scanned for links.
/// Everything outside them is scanned for `http://` / `https://` URLs.
/// Always returns at least one span.
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for code in CODE_SPAN.find_iter(text) {
        push_text_and_links(&text[last..code.start()], &mut spans);
        // Both delimiters are single-byte backticks
        let inner = &text[code.start() + 1..code.end() - 1];
        spans.push(Span::Code(inner.to_string()));
        last = code.end();
    }
    push_text_and_links(&text[last..], &mut spans);

    if spans.is_empty() {
        spans.push(Span::Text(text.to_string()));
    }
    spans
}

fn push_text_and_links(text: &str, spans: &mut Vec<Span>) {
    let mut last = 0;
    for url in URL.find_iter(text) {
        push_text(&text[last..url.start()], spans);
        spans.push(Span::link(url.as_str()));
        last = url.end();
    }
    push_text(&text[last..], spans);
}

fn push_text(text: &str, spans: &mut Vec<Span>) {
    if !text.is_empty() {
        spans.push(Span::Text(text.to_string()));
    }
}
