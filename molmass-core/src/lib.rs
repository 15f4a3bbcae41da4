//! Shared primitives for the molmass formula engine.
//!
//! - **Error types** — [`MolmassError`], [`SyntaxErrorKind`] and [`Result`]
//! - **Traits** — [`Summarizable`] and [`Annotated`] for display-oriented collaborators

pub mod error;
pub mod traits;

pub use error::{MolmassError, Result, SyntaxErrorKind};
pub use traits::*;
