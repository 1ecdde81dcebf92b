use thiserror::Error;

/// An error converting a wavelength into a note
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The wavelength (or a frequency derived from it) is not a finite positive number
    #[error("Invalid argument: {what} must be a finite positive number, got {value}")]
    InvalidArgument {
        /// What the value was
        what: &'static str,
        /// The rejected value
        value: f64,
    },
    /// Octave folding did not settle within the step limit
    #[error("Octave folding of {0} Hz did not settle")]
    FoldLimit(f64),
    /// A note name could not be parsed
    #[error("Invalid note name: {0:?}")]
    InvalidNote(String),
}

/// An error loading an element catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An IO error
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    /// A syntax error in the catalog file
    #[error("Catalog syntax error: {0}")]
    Deserialization(#[from] toml::de::Error),
    /// Two elements share a symbol
    #[error("Duplicate element symbol {0:?}")]
    DuplicateSymbol(String),
    /// An element does not fit in the table
    #[error("Element {symbol:?} has an invalid position (group {group}, period {period})")]
    Position {
        /// The element's symbol
        symbol: String,
        /// The element's group
        group: u8,
        /// The element's period
        period: u8,
    },
}
