use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::BlockType;

static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6}) .").expect("heading pattern is valid"));

static UNORDERED_ITEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[*-] .").expect("unordered item pattern is valid"));

pub const CODE_FENCE: &str = "```";

/// Split a document into blank-line separated blocks.
///
/// Every line is trimmed; lines within a block are rejoined with `\n`.
/// Never yields an empty block.
pub fn split_into_blocks(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    log::debug!("split document into {} blocks", blocks.len());
    blocks
}

/// Assign a structural type to a block.
///
/// Headings and code fences are recognised on the whole block. Everything
/// else is decided by counting line patterns: a block is a quote or a list
/// only when every one of its lines matches, otherwise it is a paragraph.
pub fn classify_block(block: &str) -> BlockType {
    let block_type = classify(block);
    log::trace!("classified {:?} as {block_type}", first_line(block));
    block_type
}

fn classify(block: &str) -> BlockType {
    if let Some(caps) = HEADING_PATTERN.captures(block) {
        return BlockType::Heading(caps[1].len() as u8);
    }

    if block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE) {
        return BlockType::Code;
    }

    let mut line_count = 0;
    let mut quote_lines = 0;
    let mut unordered_lines = 0;
    // Next expected item number; stops advancing at the first out-of-sequence line.
    let mut ordered_next = 1;
    let mut ordered_in_sequence = true;

    for line in block.split('\n') {
        line_count += 1;

        if line.starts_with('>') {
            quote_lines += 1;
        }

        if UNORDERED_ITEM_PATTERN.is_match(line) {
            unordered_lines += 1;
        }

        if ordered_in_sequence && line.starts_with(&format!("{ordered_next}. ")) {
            ordered_next += 1;
        } else {
            ordered_in_sequence = false;
        }
    }

    if quote_lines == line_count {
        BlockType::Quote
    } else if unordered_lines == line_count {
        BlockType::UnorderedList
    } else if ordered_next == line_count + 1 {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

pub(crate) fn first_line(block: &str) -> &str {
    block.split('\n').next().unwrap_or_default()
}
