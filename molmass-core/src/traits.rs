//! Core trait definitions shared by molmass crates.

/// A type that carries a human-readable name.
pub trait Annotated {
    /// A human-readable name. May be empty when nothing is known about the value.
    fn name(&self) -> &str;
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
