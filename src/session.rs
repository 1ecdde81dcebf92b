use std::time::{Duration, Instant};

use colored::Colorize;
use spectone_core::{Catalog, Config, Conversion};
use structopt::StructOpt;

use crate::{
    colorprintln, info_panel, list_line, parse_commands, render_legend, render_table, scope,
    Debouncer, Player, SourceLock, SpectoneCommand, SpectoneError, SpectoneResult,
};

/// The width of the waveform preview
const SCOPE_WIDTH: usize = 72;
/// The height of the waveform preview
const SCOPE_HEIGHT: usize = 9;

/// What happened when an element was clicked
#[derive(Debug, Clone, PartialEq)]
pub enum Click {
    /// The click came too soon after the last one on the same element
    Ignored,
    /// The element started playing
    Started(Conversion),
    /// The element stopped playing
    Stopped,
}

/// Ties the element catalog to a player and handles commands from the prompt
pub struct Session {
    catalog: Catalog,
    player: SourceLock<Player>,
    debouncer: Debouncer,
    scope_offset: usize,
}

impl Session {
    /// Create a new session
    pub fn new(catalog: Catalog, player: SourceLock<Player>, config: &Config) -> Self {
        Session {
            catalog,
            player,
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            scope_offset: 0,
        }
    }
    /// Get the element catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
    /// Get the player
    pub fn player(&self) -> &SourceLock<Player> {
        &self.player
    }
    /// Click on an element, toggling its sound
    ///
    /// # Errors
    ///
    /// Returns an error if there is no element with the symbol
    /// or if the element's wavelength cannot be converted
    pub fn click(&mut self, symbol: &str, now: Instant) -> SpectoneResult<Click> {
        let elem = self
            .catalog
            .get(symbol)
            .ok_or_else(|| SpectoneError::UnknownElement(symbol.into()))?;
        if !self.debouncer.accept(&elem.symbol, now) {
            tracing::debug!(symbol = %elem.symbol, "ignoring click");
            return Ok(Click::Ignored);
        }
        // A releasing element keeps releasing
        let sounding = self.player.update(|player| {
            let sounding = player.is_sounding(&elem.symbol);
            if sounding {
                player.release(&elem.symbol);
            }
            sounding
        });
        if sounding {
            return Ok(Click::Stopped);
        }
        let conv = elem
            .convert()
            .map_err(|source| SpectoneError::InvalidElement {
                symbol: elem.symbol.clone(),
                source,
            })?;
        self.player
            .update(|player| player.start(&elem.symbol, conv.quantized_frequency));
        Ok(Click::Started(conv))
    }
    /// Stop an element's sound
    ///
    /// Returns whether the element was playing.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no element with the symbol
    pub fn stop(&mut self, symbol: &str) -> SpectoneResult<bool> {
        let elem = self
            .catalog
            .get(symbol)
            .ok_or_else(|| SpectoneError::UnknownElement(symbol.into()))?;
        Ok(self.player.update(|player| player.release(&elem.symbol)))
    }
    /// Render the periodic table with the playing elements highlighted
    pub fn table(&self) -> String {
        self.player
            .get(|player| render_table(&self.catalog, &player.playing()))
    }
    /// Render the waveform preview and scroll it forward
    pub fn scope(&mut self) -> Vec<String> {
        let frequencies = self.player.get(Player::frequencies);
        let lines = scope::render(&frequencies, self.scope_offset, SCOPE_WIDTH, SCOPE_HEIGHT);
        self.scope_offset = scope::advance(self.scope_offset);
        lines
    }
    /// Queue a line of commands
    ///
    /// An empty line stops all sounds. Returns `false` if the session should end.
    ///
    /// # Errors
    ///
    /// Returns an error if a command fails to parse or process
    pub fn queue_command(&mut self, text: &str) -> SpectoneResult<bool> {
        if let Some(commands) = parse_commands(text) {
            for args in commands {
                match SpectoneCommand::from_iter_safe(&args)? {
                    SpectoneCommand::Quit => return Ok(false),
                    command => self.process_command(command)?,
                }
            }
        } else {
            self.player.update(Player::release_all);
        }
        Ok(true)
    }
    fn process_command(&mut self, command: SpectoneCommand) -> SpectoneResult<()> {
        match command {
            SpectoneCommand::Quit => {}
            SpectoneCommand::Play { symbols } => {
                let now = Instant::now();
                for symbol in symbols {
                    // A bad element should not keep the others from playing
                    match self.click(&symbol, now) {
                        Ok(Click::Started(conv)) => {
                            if let Some(elem) = self.catalog.get(&symbol) {
                                println!("{}", info_panel(elem, &conv));
                            }
                        }
                        Ok(Click::Stopped) => colorprintln!("Stopped {}", bright_cyan, symbol),
                        Ok(Click::Ignored) => {}
                        Err(e) => colorprintln!("{}", bright_red, e),
                    }
                }
            }
            SpectoneCommand::Stop { symbols } => {
                for symbol in symbols {
                    if let Err(e) = self.stop(&symbol) {
                        colorprintln!("{}", bright_red, e);
                    }
                }
            }
            SpectoneCommand::StopAll => {
                self.player.update(Player::release_all);
            }
            SpectoneCommand::Volume { volume } => {
                let volume = self.player.update(|player| {
                    player.set_volume(volume);
                    player.volume()
                });
                colorprintln!("Volume {}", bright_cyan, volume);
            }
            SpectoneCommand::Wave { form } => {
                self.player.update(|player| player.set_wave_form(form));
                colorprintln!("Waveform {}", bright_cyan, form);
            }
            SpectoneCommand::Info { symbol } => {
                let elem = self
                    .catalog
                    .get(&symbol)
                    .ok_or_else(|| SpectoneError::UnknownElement(symbol.clone()))?;
                match elem.convert() {
                    Ok(conv) => println!("{}", info_panel(elem, &conv)),
                    Err(source) => colorprintln!(
                        "{}",
                        bright_red,
                        SpectoneError::InvalidElement {
                            symbol: elem.symbol.clone(),
                            source
                        }
                    ),
                }
            }
            SpectoneCommand::Table => {
                println!("{}", self.table());
                println!("{}", render_legend(&self.catalog));
            }
            SpectoneCommand::Scope => {
                let lines = self.scope();
                if lines.is_empty() {
                    println!("{}", "Nothing is playing".dimmed());
                }
                for line in lines {
                    colorprintln!("{}", bright_cyan, line);
                }
            }
            SpectoneCommand::List => {
                for (i, elem) in self.catalog.iter().enumerate() {
                    println!("{}", list_line(i + 1, elem));
                }
            }
            SpectoneCommand::Config => {
                let dir = crate::spectone_dir()?;
                open::that(dir)?;
            }
        }
        Ok(())
    }
}
