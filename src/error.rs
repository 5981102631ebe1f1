use thiserror::Error;

/// Everything that can go wrong while converting or rendering markdown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid Markdown: no closing delimiter `{delimiter}` in {text:?}")]
    UnterminatedDelimiter { delimiter: String, text: String },

    #[error("Invalid Markdown: could not isolate `{markdown}` in {text:?}")]
    UnterminatedImageOrLink { markdown: String, text: String },

    #[error("Invalid HTML: no value")]
    MissingValue,

    #[error("Invalid HTML: no tag")]
    MissingTag,

    #[error("Invalid HTML: no children for <{tag}>")]
    MissingChildren { tag: String },

    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),

    #[error("No level-1 heading found to use as a title")]
    MissingTitle,
}

pub type Result<T> = std::result::Result<T, Error>;
