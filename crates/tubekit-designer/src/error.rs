//! Error types for the designer layer.

use thiserror::Error;

use tubekit_bending::SequenceError;

/// Errors raised by designer operations.
///
/// File-level persistence failures surface as `anyhow` errors at the call
/// sites that touch the filesystem; this enum covers the domain-level
/// failures a UI is expected to branch on.
#[derive(Error, Debug)]
pub enum DesignerError {
    /// No template registered under the given id.
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// No material registered under the given id.
    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    /// A generated or loaded bend layout violates the sequence invariants.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
