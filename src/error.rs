use std::io;

use spectone_core::{CatalogError, ConvertError};
use structopt::clap;
use thiserror::Error;

/// The Spectone error type
#[derive(Debug, Error)]
pub enum SpectoneError {
    /// An IO error
    #[error("IO error: {0}")]
    IO(#[from] io::Error),
    /// An error converting a wavelength
    #[error("{0}")]
    Convert(#[from] ConvertError),
    /// An error loading an element catalog
    #[error("{0}")]
    Catalog(#[from] CatalogError),
    /// A syntax error in a config file
    #[error("Config syntax error: {0}")]
    Config(#[from] toml::de::Error),
    /// A command line error
    #[error("{0}")]
    CLI(#[from] clap::Error),
    /// No element has the given symbol
    #[error("There is no element with the symbol {0:?}")]
    UnknownElement(String),
    /// An element's wavelength cannot be converted into a note
    #[error("Unable to play {symbol}: {source}")]
    InvalidElement {
        /// The element's symbol
        symbol: String,
        /// Why the conversion failed
        source: ConvertError,
    },
    /// An error with an audio device
    #[error("Audio device error: {0}")]
    Audio(String),
    /// No audio output device matched the requested name
    #[error("No available audio output device matching {0:?}")]
    UnknownDevice(String),
    /// There is no default audio output device
    #[error("Unable to get default audio output device")]
    NoOutputDevice,
}

/// The Spectone result type
pub type SpectoneResult<T> = Result<T, SpectoneError>;
