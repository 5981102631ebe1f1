//! HTML element tree produced by conversion.
//!
//! Nodes are plain data: structurally incomplete nodes (a leaf without a
//! value, a parent without a tag or children) can be built freely and only
//! fail once rendered.

use crate::error::{Error, Result};

/// Element attributes, serialized in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize as ` key="value"` pairs. Values are not escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        for (key, value) in &self.0 {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// A node without children: raw text when untagged, otherwise a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attrs: Attributes,
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }

    pub fn element(tag: &str, value: impl Into<String>) -> Self {
        Self::new(Some(tag), value)
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key, value);
        self
    }
}

/// A tagged element whose content is the concatenation of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    pub attrs: Attributes,
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            attrs: Attributes::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key, value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn render(&self) -> Result<String> {
        render(self)
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(node: LeafNode) -> Self {
        HtmlNode::Leaf(node)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(node: ParentNode) -> Self {
        HtmlNode::Parent(node)
    }
}

/// Serialize a node tree to an HTML string.
pub fn render(node: &HtmlNode) -> Result<String> {
    let mut out = String::new();
    render_into(node, &mut out)?;
    Ok(out)
}

fn render_into(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf(leaf) => render_leaf(leaf, out),
        HtmlNode::Parent(parent) => render_parent(parent, out),
    }
}

fn render_leaf(leaf: &LeafNode, out: &mut String) -> Result<()> {
    let value = leaf.value.as_deref().ok_or(Error::MissingValue)?;

    let Some(tag) = leaf.tag.as_deref() else {
        out.push_str(value);
        return Ok(());
    };

    open_tag(tag, &leaf.attrs, out);
    out.push_str(value);
    close_tag(tag, out);
    Ok(())
}

fn render_parent(parent: &ParentNode, out: &mut String) -> Result<()> {
    let tag = parent.tag.as_deref().ok_or(Error::MissingTag)?;
    let children = parent
        .children
        .as_deref()
        .ok_or_else(|| Error::MissingChildren {
            tag: tag.to_string(),
        })?;

    open_tag(tag, &parent.attrs, out);
    for child in children {
        render_into(child, out)?;
    }
    close_tag(tag, out);
    Ok(())
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    attrs.write_html(out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
