use std::{
    fs, io,
    path::{Path, PathBuf},
};

use spectone_core::{Catalog, Config};

use crate::SpectoneResult;

/// Get the Spectone directory in the user's home folder, creating it if necessary
///
/// # Errors
///
/// Returns an error if the home folder cannot be found or the directory cannot be created
pub fn spectone_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Unable to determine home folder directory",
        )
    })?;
    ensure_dir_exists("Spectone dir", home.join(".spectone"))
}

/// Get the path of the default config file, creating the file if it does not exist
///
/// # Errors
///
/// Returns an error if the Spectone directory or the config file cannot be created
pub fn config_path() -> SpectoneResult<PathBuf> {
    let path = spectone_dir()?.join("config.toml");
    if !path.exists() {
        println!("Config file does not exist. Creating it...");
        write_default_config(&path)?;
        println!("type \"config\" to open the config directory and edit it");
    }
    Ok(path)
}

/// Write a config file with every setting at its default
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn write_default_config<P>(path: P) -> SpectoneResult<()>
where
    P: AsRef<Path>,
{
    // Defaulted fields are skipped when serializing, so they are listed as comments instead
    let config = Config::default();
    let env = config.envelope;
    let text = format!(
        "# volume = {}\n# wave = \"{}\"\n# sample_rate = {}\n# debounce_ms = {}\n\
         # catalog = \"elements.toml\"\n\n# [envelope]\n# attack = {}\n# decay = {}\n\
         # peak = {}\n# sustain = {}\n# release = {}\n",
        config.volume,
        config.wave,
        config.sample_rate,
        config.debounce_ms,
        env.attack,
        env.decay,
        env.peak,
        env.sustain,
        env.release,
    );
    fs::write(path, text)?;
    Ok(())
}

/// Load a config file
///
/// Relative catalog paths are resolved against the config file's directory.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_config<P>(path: P) -> SpectoneResult<Config>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "loading config");
    let mut config: Config = fs::read_to_string(path)?.parse()?;
    if let (Some(catalog), Some(dir)) = (&config.catalog, path.parent()) {
        if catalog.is_relative() {
            config.catalog = Some(dir.join(catalog));
        }
    }
    Ok(config)
}

/// Load the catalog named by a path, or the built-in one
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or is invalid
pub fn load_catalog(path: Option<&Path>) -> SpectoneResult<Catalog> {
    let catalog = if let Some(path) = path {
        tracing::info!(path = %path.display(), "loading catalog");
        Catalog::open(path)?
    } else {
        Catalog::builtin()?
    };
    for elem in catalog.iter() {
        if let Err(e) = elem.convert() {
            tracing::warn!(symbol = %elem.symbol, "{}", e);
        }
    }
    Ok(catalog)
}

fn ensure_dir_exists(name: &str, path: PathBuf) -> io::Result<PathBuf> {
    if !path.exists() {
        println!("{} does not exist. Creating it...", name);
        fs::create_dir_all(&path)?;
    }
    Ok(path)
}
