//! Chemical formula parsing and molar mass calculation.
//!
//! Parses formulas with nested `()`/`[]` groups and multipliers, aggregates
//! per-element quantities and sums their standard atomic weights.
//!
//! # Example
//!
//! ```
//! use molmass_chem::{lookup_element, parse_compound, Annotated, Summarizable};
//!
//! let phosphate = parse_compound("Mg3(PO4)2").unwrap();
//! let counts: Vec<(&str, u64)> = phosphate
//!     .elements()
//!     .iter()
//!     .map(|e| (e.symbol(), e.quantity))
//!     .collect();
//! assert_eq!(counts, vec![("O", 8), ("Mg", 3), ("P", 2)]);
//! assert_eq!(phosphate.molar_mass(), 262.857722);
//!
//! assert_eq!(phosphate.summary(), "Mg3(PO4)2 M=262.858 g/mol (O8 Mg3 P2)");
//! assert_eq!(phosphate.elements()[1].element.name(), "Magnesium");
//!
//! assert_eq!(lookup_element("Na").unwrap().name, "Sodium");
//! assert!(parse_compound("C2h4o2").is_err());
//! ```

pub mod compound;
pub mod element;
pub mod formula;
pub mod normalize;

pub use compound::{round_mass, Compound, CompoundEntry, MASS_DECIMALS};
pub use element::{
    element_by_number, element_count, lookup_element, Element, ElementRecord, UnknownElement,
};
pub use formula::parse_formula;
pub use normalize::normalize;

pub use molmass_core::{Annotated, MolmassError, Result, Summarizable, SyntaxErrorKind};

/// Parse a formula into a [`Compound`]; see [`Compound::parse`].
pub fn parse_compound(formula: &str) -> Result<Compound> {
    Compound::parse(formula)
}
