use crate::block::BlockType;
use crate::blocks::{CODE_FENCE, classify_block, first_line, split_into_blocks};
use crate::error::{Error, Result};
use crate::html::{HtmlNode, ParentNode};
use crate::inline::{span_to_leaf, tokenize};

/// Convert a markdown document into a tree rooted at a single `div`.
pub fn markdown_to_node(markdown: &str) -> Result<HtmlNode> {
    let children = split_into_blocks(markdown)
        .iter()
        .map(|block| block_to_node(block, classify_block(block)))
        .collect::<Result<Vec<_>>>()?;

    Ok(ParentNode::new("div", children).into())
}

/// Build the subtree for one classified block.
pub fn block_to_node(block: &str, block_type: BlockType) -> Result<HtmlNode> {
    log::debug!("assembling {block_type} block {:?}", first_line(block));

    let node = match block_type {
        BlockType::Heading(_) => heading_to_node(block)?,
        BlockType::Code => {
            let body = block.replace(CODE_FENCE, "");
            let code = ParentNode::new("code", text_to_children(&body)?);
            ParentNode::new("pre", vec![code.into()])
        }
        BlockType::Quote => {
            let text = block
                .split('\n')
                .map(|line| line.strip_prefix('>').unwrap_or(line).trim())
                .collect::<Vec<_>>()
                .join("\n");
            ParentNode::new("blockquote", text_to_children(&text)?)
        }
        BlockType::UnorderedList => {
            let items = list_items(block, |line| line.get(2..).unwrap_or_default())?;
            ParentNode::new("ul", items)
        }
        BlockType::OrderedList => {
            let items = list_items(block, |line| match line.split_once(". ") {
                Some((_, rest)) => rest,
                None => line,
            })?;
            ParentNode::new("ol", items)
        }
        BlockType::Paragraph => {
            let text = block.split('\n').collect::<Vec<_>>().join(" ");
            ParentNode::new("p", text_to_children(&text)?)
        }
    };

    Ok(node.into())
}

/// The level is the position of the first space, which equals the number of
/// leading `#` for any block classified as a heading.
fn heading_to_node(block: &str) -> Result<ParentNode> {
    let (hashes, content) = block.split_once(' ').unwrap_or((block, ""));
    let tag = format!("h{}", hashes.len());
    Ok(ParentNode::new(&tag, text_to_children(content)?))
}

fn list_items<'a>(block: &'a str, item_text: impl Fn(&'a str) -> &'a str) -> Result<Vec<HtmlNode>> {
    block
        .split('\n')
        .map(|line| -> Result<HtmlNode> {
            Ok(ParentNode::new("li", text_to_children(item_text(line))?).into())
        })
        .collect()
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(tokenize(text)?
        .iter()
        .map(|span| span_to_leaf(span).into())
        .collect())
}

/// Text of the first level-1 heading line in the document.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.trim().strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::MissingTitle)
}
