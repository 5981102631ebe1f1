use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::{SpanKind, TextSpan};
use crate::error::{Error, Result};
use crate::html::LeafNode;

static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("image pattern is valid"));

// Same shape without the leading `!`; matches preceded by `!` are skipped.
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("link pattern is valid"));

/// Delimiter passes, in the order they must run. Bold has to go before
/// italic so that `**` is never read as two italic markers.
const DELIMITER_RULES: [(&str, SpanKind); 3] = [
    ("**", SpanKind::Bold),
    ("*", SpanKind::Italic),
    ("`", SpanKind::Code),
];

/// Tokenize a run of inline markdown into typed spans.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    let spans = DELIMITER_RULES.iter().try_fold(
        vec![TextSpan::plain(text)],
        |spans, &(delimiter, kind)| split_delimiter(spans, delimiter, kind),
    )?;
    let spans = split_images(spans)?;
    split_links(spans)
}

/// Split every plain span on `delimiter`, alternating plain and `kind`.
///
/// Non-plain spans pass through untouched. Empty parts are dropped.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(Error::UnterminatedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            out.push(TextSpan::new(part_kind, part));
        }
    }

    Ok(out)
}

/// `(alt, url)` pairs of every `![alt](url)` in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_embedded(text, SpanKind::Image)
        .into_iter()
        .map(|found| (found.label, found.url))
        .collect()
}

/// `(text, url)` pairs of every `[text](url)` in `text` not preceded by `!`.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_embedded(text, SpanKind::Link)
        .into_iter()
        .map(|found| (found.label, found.url))
        .collect()
}

struct Embedded {
    range: Range<usize>,
    label: String,
    url: String,
}

fn find_embedded(text: &str, kind: SpanKind) -> Vec<Embedded> {
    let pattern = match kind {
        SpanKind::Image => &*IMAGE_PATTERN,
        _ => &*LINK_PATTERN,
    };
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(caps) = pattern.captures_at(text, pos) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        if kind == SpanKind::Link && text[..whole.start()].ends_with('!') {
            pos = whole.start() + 1;
            continue;
        }
        found.push(Embedded {
            range: whole.range(),
            label: caps[1].to_string(),
            url: caps[2].to_string(),
        });
        pos = whole.end();
    }

    found
}

pub fn split_images(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    split_embedded(spans, SpanKind::Image)
}

pub fn split_links(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    split_embedded(spans, SpanKind::Link)
}

fn split_embedded(spans: Vec<TextSpan>, kind: SpanKind) -> Result<Vec<TextSpan>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut cursor = 0;
        for found in find_embedded(text, kind) {
            // Matches must be ordered, non-overlapping and inside the text.
            let (Some(before), Some(_)) = (
                text.get(cursor..found.range.start),
                text.get(found.range.clone()),
            ) else {
                return Err(Error::UnterminatedImageOrLink {
                    markdown: match kind {
                        SpanKind::Image => format!("![{}]({})", found.label, found.url),
                        _ => format!("[{}]({})", found.label, found.url),
                    },
                    text: span.text.clone(),
                });
            };
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(TextSpan {
                kind,
                text: found.label,
                url: Some(found.url),
            });
            cursor = found.range.end;
        }

        let remaining = &text[cursor..];
        if !remaining.is_empty() {
            out.push(TextSpan::plain(remaining));
        }
    }

    Ok(out)
}

/// Map a span to the leaf element that renders it.
pub fn span_to_leaf(span: &TextSpan) -> LeafNode {
    let url = span.url.as_deref().unwrap_or_default();
    match span.kind {
        SpanKind::Plain => LeafNode::text(&span.text),
        SpanKind::Bold => LeafNode::element("b", &span.text),
        SpanKind::Italic => LeafNode::element("i", &span.text),
        SpanKind::Code => LeafNode::element("code", &span.text),
        SpanKind::Link => LeafNode::element("a", &span.text).with_attr("href", url),
        SpanKind::Image => LeafNode::element("img", "")
            .with_attr("src", url)
            .with_attr("alt", &span.text),
    }
}
