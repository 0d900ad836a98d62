//! Error types for the attribute layer.
//!
//! Only the textual parse surface of the value containers produces
//! errors. Accessor get/set failures are reported as `false` by
//! contract and never reach this module.

use thiserror::Error;

/// Errors from parsing a value container out of text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The input text does not parse as the container's payload type.
    #[error("cannot parse {input:?} as {target}")]
    Parse {
        input: String,
        target: &'static str,
    },
}
