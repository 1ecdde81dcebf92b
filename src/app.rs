use std::path::PathBuf;

use spectone_core::WaveForm;
use structopt::{clap::AppSettings, StructOpt};

/// The Spectone command line arguments
#[derive(Debug, StructOpt)]
#[structopt(
    name = "spectone",
    about = "Listen to the spectral lines of the chemical elements"
)]
pub struct SpectoneApp {
    /// A substring of the name of the audio output device to use
    #[structopt(long, short)]
    pub output: Option<String>,
    /// The output sample rate
    #[structopt(long, short)]
    pub sample_rate: Option<u32>,
    /// An element catalog file to use instead of the built-in one
    #[structopt(long, short)]
    pub catalog: Option<PathBuf>,
    /// A config file to use instead of ~/.spectone/config.toml
    #[structopt(long)]
    pub config: Option<PathBuf>,
    #[structopt(subcommand)]
    #[allow(missing_docs)]
    pub sub: Option<SpectoneSubcommand>,
}

/// Things Spectone can do without opening an audio device
#[derive(Debug, StructOpt)]
pub enum SpectoneSubcommand {
    /// List the available audio output devices
    #[structopt(about = "List the available audio output devices")]
    OutputList,
    /// Convert wavelengths in nanometers into notes
    #[structopt(
        about = "Convert wavelengths in nanometers into notes",
        setting = AppSettings::AllowNegativeNumbers
    )]
    Convert {
        #[structopt(required = true, allow_hyphen_values = true)]
        #[allow(missing_docs)]
        wavelengths: Vec<f64>,
    },
    /// Print the periodic table
    #[structopt(about = "Print the periodic table")]
    Table,
}

/// A command entered at the Spectone prompt
#[derive(Debug, StructOpt)]
#[allow(missing_docs)]
pub enum SpectoneCommand {
    #[structopt(about = "Quit spectone", alias = "exit")]
    Quit,
    #[structopt(
        about = "Toggle the sound of one or more elements",
        aliases = &["p", "toggle"]
    )]
    Play {
        #[structopt(required = true)]
        symbols: Vec<String>,
    },
    #[structopt(about = "Stop the sound of one or more elements")]
    Stop {
        #[structopt(required = true)]
        symbols: Vec<String>,
    },
    #[structopt(about = "Stop all sounds", alias = "sa")]
    StopAll,
    #[structopt(about = "Set the master volume, from 0 to 1", alias = "vol")]
    Volume { volume: f32 },
    #[structopt(about = "Set the waveform: sine, square, sawtooth or triangle")]
    Wave { form: WaveForm },
    #[structopt(about = "Show how an element's wavelength becomes a note")]
    Info { symbol: String },
    #[structopt(about = "Print the periodic table")]
    Table,
    #[structopt(about = "Draw the waveform of the playing elements")]
    Scope,
    #[structopt(about = "List the elements and their notes", alias = "ls")]
    List,
    #[structopt(about = "Open the config directory")]
    Config,
}
