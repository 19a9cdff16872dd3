//! Combinators wrapping other validators
//!
//! - [`Optional`]: `None` passes, `Some(v)` is validated by the inner rule
//! - [`WithMessage`]: swaps the failure message for a caller-supplied one

pub mod message;
pub mod optional;

pub use message::{WithMessage, with_message};
pub use optional::{Optional, optional};
