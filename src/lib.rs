mod block;
mod blocks;
mod config;
mod convert;
mod error;
mod html;
mod inline;

pub use block::{BlockType, SpanKind, TextSpan};
pub use blocks::{classify_block, split_into_blocks};
pub use config::{Config, OutputConfig};
pub use convert::block_to_node;
pub use error::{Error, Result};
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode, render};
pub use inline::{
    extract_images, extract_links, span_to_leaf, split_delimiter, split_images, split_links,
};

/// Split markdown into blocks and classify each one.
pub fn parse_blocks(markdown: &str) -> Vec<(BlockType, String)> {
    blocks::split_into_blocks(markdown)
        .into_iter()
        .map(|block| (blocks::classify_block(&block), block))
        .collect()
}

/// Tokenize a run of inline markdown into typed spans.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    inline::tokenize(text)
}

/// Convert markdown to an HTML tree rooted at a `div`.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    convert::markdown_to_node(markdown)
}

/// Convert markdown to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_html_node(markdown)?.render()
}

/// Extract the document title from its first `# ` heading.
pub fn extract_title(markdown: &str) -> Result<String> {
    convert::extract_title(markdown)
}
