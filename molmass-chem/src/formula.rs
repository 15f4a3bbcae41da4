//! Formula grammar: validation and recursive-descent group resolution.
//!
//! Operates on a normalized formula (see [`crate::normalize`]):
//!
//! ```text
//! Formula  := Term+
//! Term     := Unit [Quantity]
//! Unit     := Group | Symbol
//! Group    := '(' Formula ')' | '[' Formula ']'
//! Symbol   := Upper [Lower]
//! Quantity := Digit+
//! ```
//!
//! A two-letter symbol is only taken when it names a known element, so
//! unknown symbols are always a single uppercase letter.

use indexmap::IndexMap;
use molmass_core::{MolmassError, Result, SyntaxErrorKind};

use crate::element::lookup_element;

/// Groups nested deeper than this are rejected.
pub const MAX_NESTING: usize = 256;

/// Symbol → quantity aggregate in the order symbols were first merged.
pub type Tally<'a> = IndexMap<&'a str, u64>;

/// Parse a normalized formula into its per-symbol quantities.
///
/// Group quantities multiply every quantity inside the group, and repeated
/// symbols are summed into a single entry.
pub fn parse_formula(formula: &str) -> Result<Tally<'_>> {
    FormulaParser::new(formula).parse()
}

struct FormulaParser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> FormulaParser<'a> {
    fn new(input: &'a str) -> Self {
        FormulaParser {
            input,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn prev(&self) -> Option<u8> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.input.as_bytes().get(i).copied())
    }

    fn error(&self, kind: SyntaxErrorKind, position: usize) -> MolmassError {
        MolmassError::syntax(kind, position, self.input)
    }

    fn parse(mut self) -> Result<Tally<'a>> {
        if self.input.is_empty() {
            return Err(self.error(SyntaxErrorKind::Empty, 0));
        }
        let tally = self.parse_terms()?;
        match self.peek() {
            None => Ok(tally),
            // parse_terms only stops early on a closing bracket
            Some(_) => Err(self.error(SyntaxErrorKind::UnmatchedClose, self.pos)),
        }
    }

    /// `Term*` up to the end of input or a closing bracket. Rejects a closing
    /// bracket before the first term.
    fn parse_terms(&mut self) -> Result<Tally<'a>> {
        let mut tally = Tally::new();
        let mut terms = 0usize;

        while let Some(ch) = self.peek() {
            match ch {
                b'(' | b'[' => {
                    let group = self.parse_group()?;
                    let at = self.pos;
                    let quantity = self.parse_quantity()?;
                    for (symbol, count) in group {
                        let scaled = count
                            .checked_mul(quantity)
                            .ok_or_else(|| self.error(SyntaxErrorKind::QuantityOverflow, at))?;
                        self.merge(&mut tally, symbol, scaled, at)?;
                    }
                }
                b')' | b']' if terms > 0 => break,
                b'A'..=b'Z' => {
                    let symbol = self.parse_symbol();
                    let at = self.pos;
                    let quantity = self.parse_quantity()?;
                    self.merge(&mut tally, symbol, quantity, at)?;
                }
                _ => return Err(self.unexpected()),
            }
            terms += 1;
        }

        Ok(tally)
    }

    fn parse_group(&mut self) -> Result<Tally<'a>> {
        let open_pos = self.pos;
        let close = if self.peek() == Some(b'(') { b')' } else { b']' };
        if self.depth >= MAX_NESTING {
            return Err(self.error(SyntaxErrorKind::NestingTooDeep, open_pos));
        }
        self.pos += 1;

        self.depth += 1;
        let inner = self.parse_terms()?;
        self.depth -= 1;

        match self.peek() {
            Some(ch) if ch == close => {
                self.pos += 1;
                Ok(inner)
            }
            Some(_) => Err(self.error(SyntaxErrorKind::MismatchedClose, self.pos)),
            None => Err(self.error(SyntaxErrorKind::UnclosedGroup, open_pos)),
        }
    }

    fn parse_symbol(&mut self) -> &'a str {
        let start = self.pos;
        self.pos += 1;
        if self.peek().is_some_and(|ch| ch.is_ascii_lowercase())
            && lookup_element(&self.input[start..start + 2]).is_some()
        {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Trailing digits, or 1 when there are none.
    fn parse_quantity(&mut self) -> Result<u64> {
        let start = self.pos;
        let mut value: u64 = 0;
        while let Some(digit) = self.peek().filter(u8::is_ascii_digit) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(digit - b'0')))
                .ok_or_else(|| self.error(SyntaxErrorKind::QuantityOverflow, start))?;
            self.pos += 1;
        }
        Ok(if self.pos == start { 1 } else { value })
    }

    fn merge(&self, tally: &mut Tally<'a>, symbol: &'a str, quantity: u64, at: usize) -> Result<()> {
        let slot = tally.entry(symbol).or_insert(0);
        *slot = slot
            .checked_add(quantity)
            .ok_or_else(|| self.error(SyntaxErrorKind::QuantityOverflow, at))?;
        Ok(())
    }

    /// Classify the character at the cursor, which no grammar rule accepts here.
    fn unexpected(&self) -> MolmassError {
        let kind = match (self.prev(), self.peek()) {
            (_, Some(ch)) if !is_formula_byte(ch) => {
                let found = self.input[self.pos..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                SyntaxErrorKind::InvalidCharacter(found)
            }
            (None, _) => SyntaxErrorKind::InvalidStart,
            (Some(b'(' | b'['), Some(b')' | b']')) => SyntaxErrorKind::EmptyGroup,
            (Some(b'(' | b'['), _) => SyntaxErrorKind::InvalidGroupStart,
            (Some(prev), _) if prev.is_ascii_digit() => SyntaxErrorKind::LowercaseAfterQuantity,
            (Some(b')' | b']'), _) => SyntaxErrorKind::LowercaseAfterGroup,
            _ => SyntaxErrorKind::UnexpectedLowercase,
        };
        self.error(kind, self.pos)
    }
}

fn is_formula_byte(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, b'(' | b')' | b'[' | b']')
}
