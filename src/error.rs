use thiserror::Error;

use crate::library::Tag;

/// Errors that can occur while configuring or loading a shuffle chain.
#[derive(Error, Debug)]
pub enum Error {
    /// A shuffle chain needs room for at least one item per pool.
    #[error("Window size must be at least 1 (got {0})")]
    InvalidWindowSize(usize),

    /// Arises when a rule names a tag kind that doesn't exist.
    #[error("Unknown tag kind ({0})")]
    UnknownTag(String),

    /// A tag kind was given on the command line without a pattern after it.
    #[error("Tag {0} has no pattern to match against")]
    MissingPattern(Tag),

    /// A rule was configured without any patterns.
    #[error("Rule has no patterns")]
    EmptyRule,

    /// Any IO error that could arise while reading an identifier stream.
    #[error("An IO error occurred: {0}")]
    Io(#[from] std::io::Error),

    /// The library collaborator failed to answer a query.
    #[error(transparent)]
    Library(#[from] anyhow::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
