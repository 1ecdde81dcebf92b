use std::{collections::HashSet, fs, path::Path, str::FromStr};

use serde_derive::{Deserialize, Serialize};

use crate::{convert, CatalogError, Conversion, ConvertError};

/// The number of groups (columns) in the periodic table
pub const GROUPS: u8 = 18;
/// The number of periods (rows) in the periodic table
pub const PERIODS: u8 = 7;

const BUILTIN: &str = include_str!("../elements.toml");

/// A chemical element and the wavelength of its spectral line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Element {
    /// The chemical symbol
    pub symbol: String,
    /// The full name
    pub name: String,
    /// The periodic table group (column), from 1 to 18
    pub group: u8,
    /// The periodic table period (row), from 1 to 7
    pub period: u8,
    /// The wavelength of the element's spectral line in nanometers
    pub wavelength: f64,
}

impl Element {
    /// Convert this element's wavelength into a note
    ///
    /// # Errors
    ///
    /// Returns an error if the element's wavelength is not a finite positive number
    pub fn convert(&self) -> Result<Conversion, ConvertError> {
        convert(self.wavelength)
    }
    /// Get the category used to color this element
    pub fn category(&self) -> Category {
        Category::of(self.group)
    }
}

/// A family of elements, used for coloring the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Category {
    AlkaliMetal,
    AlkalineEarth,
    TransitionMetal,
    PostTransition,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Uncategorized,
}

impl Category {
    /// Get the category of the elements in a group
    pub fn of(group: u8) -> Self {
        match group {
            1 => Category::AlkaliMetal,
            2 => Category::AlkalineEarth,
            3..=12 => Category::TransitionMetal,
            13 => Category::PostTransition,
            14 => Category::Metalloid,
            15 | 16 => Category::Nonmetal,
            17 => Category::Halogen,
            18 => Category::NobleGas,
            _ => Category::Uncategorized,
        }
    }
    /// Get a human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Category::AlkaliMetal => "alkali metal",
            Category::AlkalineEarth => "alkaline earth metal",
            Category::TransitionMetal => "transition metal",
            Category::PostTransition => "post-transition metal",
            Category::Metalloid => "metalloid",
            Category::Nonmetal => "nonmetal",
            Category::Halogen => "halogen",
            Category::NobleGas => "noble gas",
            Category::Uncategorized => "uncategorized",
        }
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    element: Vec<Element>,
}

/// An ordered list of elements
///
/// An element's atomic number is its position in the catalog, starting at 1.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    elements: Vec<Element>,
}

impl Catalog {
    /// Load the catalog that ships with Spectone
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in catalog is malformed
    pub fn builtin() -> Result<Self, CatalogError> {
        BUILTIN.parse()
    }
    /// Load a catalog from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if it is not a valid catalog
    pub fn open<P>(path: P) -> Result<Self, CatalogError>
    where
        P: AsRef<Path>,
    {
        fs::read_to_string(path)?.parse()
    }
    /// Create a catalog from a list of elements
    ///
    /// # Errors
    ///
    /// Returns an error if two elements share a symbol or if an element lies outside the table
    pub fn new(elements: Vec<Element>) -> Result<Self, CatalogError> {
        let mut symbols = HashSet::new();
        for elem in &elements {
            if !symbols.insert(elem.symbol.to_lowercase()) {
                return Err(CatalogError::DuplicateSymbol(elem.symbol.clone()));
            }
            if !(1..=GROUPS).contains(&elem.group) || !(1..=PERIODS).contains(&elem.period) {
                return Err(CatalogError::Position {
                    symbol: elem.symbol.clone(),
                    group: elem.group,
                    period: elem.period,
                });
            }
        }
        Ok(Catalog { elements })
    }
    /// Find an element by its symbol, ignoring case
    pub fn get(&self, symbol: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|elem| elem.symbol.eq_ignore_ascii_case(symbol))
    }
    /// Get the atomic number of the element with the given symbol
    pub fn atomic_number(&self, symbol: &str) -> Option<usize> {
        self.elements
            .iter()
            .position(|elem| elem.symbol.eq_ignore_ascii_case(symbol))
            .map(|i| i + 1)
    }
    /// Find the element at a position in the table
    pub fn at(&self, group: u8, period: u8) -> Option<&Element> {
        self.elements
            .iter()
            .find(|elem| elem.group == group && elem.period == period)
    }
    /// Iterate over the elements in order
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }
    /// Get the number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    /// Check if the catalog has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FromStr for Catalog {
    type Err = CatalogError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let file: CatalogFile = toml::from_str(s)?;
        Catalog::new(file.element)
    }
}
