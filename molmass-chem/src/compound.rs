//! Compounds: a parsed formula with resolved elements and its molar mass.

use std::fmt;
use std::str::FromStr;

use molmass_core::{MolmassError, Result, Summarizable};

use crate::element::Element;
use crate::formula::parse_formula;
use crate::normalize::normalize;

/// Decimal places kept in a compound's molar mass.
pub const MASS_DECIMALS: i32 = 6;

/// Round a summed mass to [`MASS_DECIMALS`] places, dropping the last-bit
/// error the fold accumulates (`262.85772199999997` becomes `262.857722`).
pub fn round_mass(mass: f64) -> f64 {
    let scale = 10f64.powi(MASS_DECIMALS);
    (mass * scale).round() / scale
}

/// One distinct element of a compound and how many atoms of it there are.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompoundEntry {
    pub element: Element,
    pub quantity: u64,
}

impl CompoundEntry {
    pub fn symbol(&self) -> &str {
        self.element.symbol()
    }

    /// Mass contributed to the compound: atomic mass × quantity.
    pub fn mass(&self) -> f64 {
        self.element.mass() * self.quantity as f64
    }
}

/// A parsed chemical formula.
///
/// Entries are ordered by atomic number; unknown symbols (atomic number 0)
/// come first, in the order they appear in the formula.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Compound {
    formula: String,
    elements: Vec<CompoundEntry>,
    molar_mass: f64,
}

impl Compound {
    /// Parse a raw formula such as `"Mg3(PO4)2"` or `"CuSO4 . 5H2O"`.
    ///
    /// Whitespace, `_`, `.`, `+`, `-` and `=` are ignored. Symbols missing from the
    /// periodic table are kept with zero mass rather than rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let formula = normalize(raw);
        log::trace!(formula = formula.as_str(); "parsing formula");

        let tally = parse_formula(&formula).inspect_err(|err| {
            log::debug!(position = err.position(); "rejected formula {formula:?}: {}", err.kind());
        })?;

        let mut elements: Vec<CompoundEntry> = tally
            .into_iter()
            .map(|(symbol, quantity)| CompoundEntry {
                element: Element::resolve(symbol),
                quantity,
            })
            .collect();
        // stable: unknown symbols keep their relative order
        elements.sort_by_key(|entry| entry.element.atomic_number());

        let molar_mass = round_mass(elements.iter().fold(0.0, |acc, entry| acc + entry.mass()));
        log::debug!(molar_mass; "parsed formula {formula:?} into {} elements", elements.len());

        Ok(Compound {
            formula,
            elements,
            molar_mass,
        })
    }

    /// The formula with ignorable characters removed.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn elements(&self) -> &[CompoundEntry] {
        &self.elements
    }

    /// Molar mass in g/mol, rounded to [`MASS_DECIMALS`] places.
    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    /// The entry for `symbol`, if the compound contains it.
    pub fn entry(&self, symbol: &str) -> Option<&CompoundEntry> {
        self.elements.iter().find(|entry| entry.symbol() == symbol)
    }

    /// Share of the molar mass contributed by `symbol`, in `0.0..=1.0`.
    ///
    /// Zero for every symbol of a massless compound.
    pub fn mass_fraction(&self, symbol: &str) -> Option<f64> {
        let entry = self.entry(symbol)?;
        if self.molar_mass == 0.0 {
            return Some(0.0);
        }
        Some(entry.mass() / self.molar_mass)
    }
}

impl FromStr for Compound {
    type Err = MolmassError;

    fn from_str(s: &str) -> Result<Self> {
        Compound::parse(s)
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula)
    }
}

impl Summarizable for Compound {
    fn summary(&self) -> String {
        let counts: Vec<String> = self
            .elements
            .iter()
            .map(|entry| format!("{}{}", entry.symbol(), entry.quantity))
            .collect();
        format!(
            "{} M={:.3} g/mol ({})",
            self.formula,
            self.molar_mass,
            counts.join(" ")
        )
    }
}
