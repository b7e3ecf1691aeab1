use thiserror::Error;

/// Failure of a tree operation.
///
/// Both variants are deterministic given the tree contents. A failed
/// operation leaves the tree unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A null-equivalent (`None`) key or bulk-construction element.
    #[error("INVALID_ARGUMENT: {0}")]
    InvalidArgument(&'static str),
    /// No stored key compares equal to the requested one.
    #[error("NOT_FOUND")]
    NotFound,
}

pub(crate) fn require<T>(key: Option<T>) -> Result<T, TreeError> {
    key.ok_or(TreeError::InvalidArgument("key is None"))
}
