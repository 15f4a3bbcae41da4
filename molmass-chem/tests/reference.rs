//! Reference formulas with known element breakdowns and molar masses.

use molmass_chem::{lookup_element, parse_compound, Element, MolmassError};

const VALID: &[(&str, &[(&str, u64)], f64)] = &[
    ("H", &[("H", 1)], 1.00794),
    ("OH", &[("H", 1), ("O", 1)], 17.00734),
    ("H2", &[("H", 2)], 2.01588),
    ("(S8)", &[("S", 8)], 256.52),
    ("H2O", &[("H", 2), ("O", 1)], 18.01528),
    ("C12H22O11", &[("H", 22), ("C", 12), ("O", 11)], 342.29648),
    ("H(CO)(CHOH)5H", &[("H", 12), ("C", 6), ("O", 6)], 180.15588),
    ("Na", &[("Na", 1)], 22.98977),
    ("NaOH", &[("H", 1), ("O", 1), ("Na", 1)], 39.99711),
    ("Cr2O7", &[("O", 7), ("Cr", 2)], 215.988),
    ("Ca(OH)2", &[("H", 2), ("O", 2), ("Ca", 1)], 74.09268),
    ("Mg3(PO4)2", &[("O", 8), ("Mg", 3), ("P", 2)], 262.857722),
    ("((((Pt)7)5))", &[("Pt", 35)], 6827.73),
    ("(Fe2)O3", &[("O", 3), ("Fe", 2)], 159.6882),
    (
        "CH3(CH2)10C(=O)NH(CH2)3[N+](CH3)(CH3)CH2C([O-])=O",
        &[("H", 38), ("C", 19), ("N", 2), ("O", 3)],
        342.51662,
    ),
    ("H0", &[("H", 0)], 0.0),
    ("(OH)0", &[("H", 0), ("O", 0)], 0.0),
    (
        "NH4[Cr(SCN)4(NH3)2]",
        &[("H", 10), ("C", 4), ("N", 7), ("S", 4), ("Cr", 1)],
        336.4252,
    ),
    ("(CH_3)_2CHOH", &[("H", 8), ("C", 3), ("O", 1)], 60.09502),
    ("CH3CH2C(=O)OH", &[("H", 6), ("C", 3), ("O", 2)], 74.07854),
    (
        "AlAsO4.(H2O)8",
        &[("H", 16), ("O", 12), ("Al", 1), ("As", 1)],
        310.022978,
    ),
    ("CH3 CO O H", &[("H", 4), ("C", 2), ("O", 2)], 60.05196),
    ("Cl-", &[("Cl", 1)], 35.453),
    ("Na+", &[("Na", 1)], 22.98977),
    ("(A)", &[("A", 1)], 0.0),
];

const INVALID: &[&str] = &[
    "(k)", "4(Zn)", ")He", "C2h4o2", "Tc()", "K2SO4(", "Cl^2", "pCH4", "H2O(2)", "(CH3)cH3",
    "((A", "A))", "((A)B)C)", "(A)B)", "(A)(B", "",
];

#[test]
fn reference_formulas() {
    for &(formula, expected, mass) in VALID {
        let cmpd = parse_compound(formula)
            .unwrap_or_else(|err| panic!("{formula} failed to parse: {err}"));
        let got: Vec<(&str, u64)> = cmpd
            .elements()
            .iter()
            .map(|e| (e.symbol(), e.quantity))
            .collect();
        assert_eq!(got, expected, "element order for {formula}");
        assert_eq!(cmpd.molar_mass(), mass, "molar mass for {formula}");
    }
}

#[test]
fn known_entries_carry_table_records() {
    let cmpd = parse_compound("Cr2O7").unwrap();
    assert_eq!(cmpd.elements()[0].element, Element::Known(lookup_element("O").unwrap()));
    assert_eq!(cmpd.elements()[1].element, Element::Known(lookup_element("Cr").unwrap()));
}

#[test]
fn unknown_symbol_is_a_placeholder() {
    let cmpd = parse_compound("HX2").unwrap();
    let x = &cmpd.elements()[0];
    assert_eq!(x.symbol(), "X");
    assert_eq!(x.quantity, 2);
    assert_eq!(x.element.atomic_number(), 0);
    assert_eq!(x.element.mass(), 0.0);
    assert!(x.element.record().is_none());
    assert_eq!(cmpd.molar_mass(), 1.00794);
}

#[test]
fn reference_rejections() {
    for &formula in INVALID {
        match parse_compound(formula) {
            Err(MolmassError::Syntax { .. }) => {}
            Ok(cmpd) => panic!("{formula:?} parsed as {cmpd:?}"),
        }
    }
}
