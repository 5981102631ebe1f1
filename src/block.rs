use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Formatting applied to a run of inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanKind::Plain => "plain",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        };
        f.write_str(name)
    }
}

/// Inline text span with a single formatting kind.
///
/// `url` is only meaningful for [`SpanKind::Link`] and [`SpanKind::Image`],
/// where `text` holds the link text or the image's alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub kind: SpanKind,
    pub text: String,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Plain, text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Link,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Image,
            text: alt.into(),
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "TextSpan({}, {}, {})", self.text, self.kind, url),
            None => write!(f, "TextSpan({}, {}, None)", self.text, self.kind),
        }
    }
}

/// Structural type assigned to a blank-line-delimited block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Heading(level) => write!(f, "heading{level}"),
            BlockType::Code => f.write_str("code"),
            BlockType::Quote => f.write_str("quote"),
            BlockType::UnorderedList => f.write_str("unordered_list"),
            BlockType::OrderedList => f.write_str("ordered_list"),
            BlockType::Paragraph => f.write_str("paragraph"),
        }
    }
}

impl FromStr for BlockType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(BlockType::Code),
            "quote" => Ok(BlockType::Quote),
            "unordered_list" => Ok(BlockType::UnorderedList),
            "ordered_list" => Ok(BlockType::OrderedList),
            "paragraph" => Ok(BlockType::Paragraph),
            _ => match s.strip_prefix("heading").map(str::parse::<u8>) {
                Some(Ok(level @ 1..=6)) => Ok(BlockType::Heading(level)),
                _ => Err(Error::UnknownBlockType(s.to_string())),
            },
        }
    }
}
