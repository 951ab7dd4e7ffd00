use thiserror::Error;

/// The allocation strategy could not reserve storage for a node.
///
/// Operations that fail with `AllocError` leave the list exactly as it
/// was before the call; no partially linked node is ever observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to reserve storage for a list node")]
pub struct AllocError;

/// An element value could not be produced.
///
/// Raised by the fallible construction traits ([`TryClone`], [`TryDefault`])
/// when duplicating or defaulting an element fails. The node storage
/// reserved for the element is always released before this propagates.
///
/// [`TryClone`]: crate::TryClone
/// [`TryDefault`]: crate::TryDefault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to construct a list element")]
pub struct ConstructError;

/// Any failure a list operation can surface.
///
/// Operations that only move values in can fail solely with
/// [`AllocError`] and say so in their signature; operations that also
/// construct elements (cloning, defaulting) return this combined type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Alloc(#[from] AllocError),
    #[error(transparent)]
    Construct(#[from] ConstructError),
}
