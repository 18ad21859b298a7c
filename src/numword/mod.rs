mod canonical;
mod special;
mod words;

pub(crate) use canonical::Canonical;
pub(crate) use special::special_phrase;
pub(crate) use words::expand;

/// Why [transform](crate::transform) rejected its source without converting anything.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
#[derive(thiserror::Error)]
pub enum TransformError {
    /// The source sequence is absent.
    #[error("source is null")]
    NullSource,
    /// The source sequence has no elements.
    #[error("source is empty")]
    EmptySource,
}
