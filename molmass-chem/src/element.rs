//! Periodic table data and element lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

use molmass_core::Annotated;

/// A chemical element from the periodic table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementRecord {
    pub name: &'static str,
    pub symbol: &'static str,
    pub atomic_number: u8,
    /// Standard atomic weight in g/mol.
    pub mass: f64,
}

impl Annotated for ElementRecord {
    fn name(&self) -> &str {
        self.name
    }
}

const fn record(
    atomic_number: u8,
    symbol: &'static str,
    name: &'static str,
    mass: f64,
) -> ElementRecord {
    ElementRecord {
        name,
        symbol,
        atomic_number,
        mass,
    }
}

/// Elements 1–118 (H through Og), indexed by atomic number − 1.
static ELEMENTS: [ElementRecord; 118] = [
    record(1, "H", "Hydrogen", 1.00794),
    record(2, "He", "Helium", 4.002602),
    record(3, "Li", "Lithium", 6.941),
    record(4, "Be", "Beryllium", 9.012182),
    record(5, "B", "Boron", 10.811),
    record(6, "C", "Carbon", 12.0107),
    record(7, "N", "Nitrogen", 14.0067),
    record(8, "O", "Oxygen", 15.9994),
    record(9, "F", "Fluorine", 18.9984032),
    record(10, "Ne", "Neon", 20.1797),
    record(11, "Na", "Sodium", 22.98977),
    record(12, "Mg", "Magnesium", 24.305),
    record(13, "Al", "Aluminum", 26.981538),
    record(14, "Si", "Silicon", 28.0855),
    record(15, "P", "Phosphorus", 30.973761),
    record(16, "S", "Sulfur", 32.065),
    record(17, "Cl", "Chlorine", 35.453),
    record(18, "Ar", "Argon", 39.948),
    record(19, "K", "Potassium", 39.0983),
    record(20, "Ca", "Calcium", 40.078),
    record(21, "Sc", "Scandium", 44.95591),
    record(22, "Ti", "Titanium", 47.867),
    record(23, "V", "Vanadium", 50.9415),
    record(24, "Cr", "Chromium", 51.9961),
    record(25, "Mn", "Manganese", 54.938049),
    record(26, "Fe", "Iron", 55.845),
    record(27, "Co", "Cobalt", 58.9332),
    record(28, "Ni", "Nickel", 58.6934),
    record(29, "Cu", "Copper", 63.546),
    record(30, "Zn", "Zinc", 65.409),
    record(31, "Ga", "Gallium", 69.723),
    record(32, "Ge", "Germanium", 72.64),
    record(33, "As", "Arsenic", 74.9216),
    record(34, "Se", "Selenium", 78.96),
    record(35, "Br", "Bromine", 79.904),
    record(36, "Kr", "Krypton", 83.798),
    record(37, "Rb", "Rubidium", 85.4678),
    record(38, "Sr", "Strontium", 87.62),
    record(39, "Y", "Yttrium", 88.90585),
    record(40, "Zr", "Zirconium", 91.224),
    record(41, "Nb", "Niobium", 92.90638),
    record(42, "Mo", "Molybdenum", 95.94),
    record(43, "Tc", "Technetium", 98.0),
    record(44, "Ru", "Ruthenium", 101.07),
    record(45, "Rh", "Rhodium", 102.9055),
    record(46, "Pd", "Palladium", 106.42),
    record(47, "Ag", "Silver", 107.8682),
    record(48, "Cd", "Cadmium", 112.411),
    record(49, "In", "Indium", 114.818),
    record(50, "Sn", "Tin", 118.71),
    record(51, "Sb", "Antimony", 121.76),
    record(52, "Te", "Tellurium", 127.6),
    record(53, "I", "Iodine", 126.90447),
    record(54, "Xe", "Xenon", 131.293),
    record(55, "Cs", "Cesium", 132.90545),
    record(56, "Ba", "Barium", 137.327),
    record(57, "La", "Lanthanum", 138.9055),
    record(58, "Ce", "Cerium", 140.116),
    record(59, "Pr", "Praseodymium", 140.90765),
    record(60, "Nd", "Neodymium", 144.24),
    record(61, "Pm", "Promethium", 145.0),
    record(62, "Sm", "Samarium", 150.36),
    record(63, "Eu", "Europium", 151.964),
    record(64, "Gd", "Gadolinium", 157.25),
    record(65, "Tb", "Terbium", 158.92534),
    record(66, "Dy", "Dysprosium", 162.5),
    record(67, "Ho", "Holmium", 164.93032),
    record(68, "Er", "Erbium", 167.259),
    record(69, "Tm", "Thulium", 168.93421),
    record(70, "Yb", "Ytterbium", 173.04),
    record(71, "Lu", "Lutetium", 174.967),
    record(72, "Hf", "Hafnium", 178.49),
    record(73, "Ta", "Tantalum", 180.9479),
    record(74, "W", "Tungsten", 183.84),
    record(75, "Re", "Rhenium", 186.207),
    record(76, "Os", "Osmium", 190.23),
    record(77, "Ir", "Iridium", 192.217),
    record(78, "Pt", "Platinum", 195.078),
    record(79, "Au", "Gold", 196.96655),
    record(80, "Hg", "Mercury", 200.59),
    record(81, "Tl", "Thallium", 204.3833),
    record(82, "Pb", "Lead", 207.2),
    record(83, "Bi", "Bismuth", 208.98038),
    record(84, "Po", "Polonium", 209.0),
    record(85, "At", "Astatine", 210.0),
    record(86, "Rn", "Radon", 222.0),
    record(87, "Fr", "Francium", 223.0),
    record(88, "Ra", "Radium", 226.0),
    record(89, "Ac", "Actinium", 227.0),
    record(90, "Th", "Thorium", 232.0381),
    record(91, "Pa", "Protactinium", 231.03588),
    record(92, "U", "Uranium", 238.02891),
    record(93, "Np", "Neptunium", 237.0),
    record(94, "Pu", "Plutonium", 244.0),
    record(95, "Am", "Americium", 243.0),
    record(96, "Cm", "Curium", 247.0),
    record(97, "Bk", "Berkelium", 247.0),
    record(98, "Cf", "Californium", 251.0),
    record(99, "Es", "Einsteinium", 252.0),
    record(100, "Fm", "Fermium", 257.0),
    record(101, "Md", "Mendelevium", 258.0),
    record(102, "No", "Nobelium", 259.0),
    record(103, "Lr", "Lawrencium", 262.0),
    record(104, "Rf", "Rutherfordium", 261.0),
    record(105, "Db", "Dubnium", 262.0),
    record(106, "Sg", "Seaborgium", 266.0),
    record(107, "Bh", "Bohrium", 264.0),
    record(108, "Hs", "Hassium", 277.0),
    record(109, "Mt", "Meitnerium", 268.0),
    record(110, "Ds", "Darmstadtium", 281.0),
    record(111, "Rg", "Roentgenium", 272.0),
    record(112, "Cn", "Copernicium", 285.0),
    record(113, "Nh", "Nihonium", 284.0),
    record(114, "Fl", "Flerovium", 289.0),
    record(115, "Mc", "Moscovium", 288.0),
    record(116, "Lv", "Livermorium", 293.0),
    record(117, "Ts", "Tennessine", 294.0),
    record(118, "Og", "Oganesson", 294.0),
];

static BY_SYMBOL: LazyLock<HashMap<&'static str, &'static ElementRecord>> =
    LazyLock::new(|| ELEMENTS.iter().map(|e| (e.symbol, e)).collect());

/// Look up an element by its symbol (e.g. "C", "Fe"). Case-sensitive.
pub fn lookup_element(symbol: &str) -> Option<&'static ElementRecord> {
    BY_SYMBOL.get(symbol).copied()
}

/// Look up an element by its atomic number (1-based).
pub fn element_by_number(n: u8) -> Option<&'static ElementRecord> {
    match n {
        1..=118 => Some(&ELEMENTS[(n - 1) as usize]),
        _ => None,
    }
}

/// Number of known element symbols.
pub fn element_count() -> usize {
    BY_SYMBOL.len()
}

/// A parsed symbol that has no entry in the periodic table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnknownElement {
    pub symbol: String,
}

/// A symbol resolved against the periodic table.
///
/// Unknown symbols stay in the result with an empty name, atomic number 0 and
/// zero mass, so mass summation never has to special-case them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Element {
    Known(&'static ElementRecord),
    Unknown(UnknownElement),
}

impl Element {
    /// Resolve `symbol`, falling back to an unknown placeholder.
    pub fn resolve(symbol: &str) -> Self {
        match lookup_element(symbol) {
            Some(record) => Element::Known(record),
            None => {
                log::debug!(symbol; "unknown element symbol");
                Element::Unknown(UnknownElement {
                    symbol: symbol.to_string(),
                })
            }
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Element::Known(record) => record.symbol,
            Element::Unknown(unknown) => &unknown.symbol,
        }
    }

    pub fn atomic_number(&self) -> u8 {
        match self {
            Element::Known(record) => record.atomic_number,
            Element::Unknown(_) => 0,
        }
    }

    pub fn mass(&self) -> f64 {
        match self {
            Element::Known(record) => record.mass,
            Element::Unknown(_) => 0.0,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Element::Known(_))
    }

    /// The table record, if the symbol is known.
    pub fn record(&self) -> Option<&'static ElementRecord> {
        match self {
            Element::Known(record) => Some(*record),
            Element::Unknown(_) => None,
        }
    }
}

impl Annotated for Element {
    fn name(&self) -> &str {
        match self {
            Element::Known(record) => record.name,
            Element::Unknown(_) => "",
        }
    }
}
