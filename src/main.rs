use std::{
    io::{stdin, stdout, BufRead, Write},
    process::exit,
};

use colored::Colorize;
use spectone::*;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stdout because stderr is silenced below
    let filter = EnvFilter::try_from_env("SPECTONE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stdout)
        .init();

    // Supress stderr
    let shh = shh::stderr();

    let app = SpectoneApp::from_args();

    if let Err(e) = run(app) {
        println!("{}", e.to_string().bright_red());
        exit(1);
    }

    drop(shh);
}

fn run(app: SpectoneApp) -> SpectoneResult<()> {
    match app.sub {
        #[cfg(feature = "playback")]
        Some(SpectoneSubcommand::OutputList) => return list_output_devices(),
        #[cfg(not(feature = "playback"))]
        Some(SpectoneSubcommand::OutputList) => {
            println!("Spectone was built without audio playback");
            return Ok(());
        }
        Some(SpectoneSubcommand::Convert { ref wavelengths }) => {
            for &wavelength in wavelengths {
                match convert(wavelength) {
                    Ok(conv) => println!(
                        "{} nm -> {:.2} Hz {}",
                        wavelength, conv.quantized_frequency, conv.note
                    ),
                    Err(e) => println!("{}", e.to_string().bright_red()),
                }
            }
            return Ok(());
        }
        _ => {}
    }

    let path = match app.config {
        Some(path) => path,
        None => config_path()?,
    };
    let mut config = load_config(&path)?;
    if let Some(sample_rate) = app.sample_rate {
        config.sample_rate = sample_rate;
    }
    let catalog = load_catalog(app.catalog.as_deref().or_else(|| config.catalog.as_deref()))?;

    if let Some(SpectoneSubcommand::Table) = app.sub {
        println!("{}", render_table(&catalog, &[]));
        println!("{}", render_legend(&catalog));
        return Ok(());
    }

    print!("Initializing...\r");
    stdout().flush()?;

    let player = SourceLock::new(Player::from_config(&config));

    #[cfg(feature = "playback")]
    let _sink = open_sink(app.output.as_deref(), player.clone())?;
    #[cfg(not(feature = "playback"))]
    colorprintln!("Spectone was built without audio playback", bright_yellow);

    let mut session = Session::new(catalog, player, &config);
    println!("{}", session.table());
    println!("{}", render_legend(session.catalog()));
    colorprintln!(
        "Type \"play <symbol>\" to toggle an element, \"help\" for more commands",
        bright_cyan
    );

    // Main loop
    for line in stdin().lock().lines().filter_map(Result::ok) {
        match session.queue_command(&line) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("{}", e.to_string().bright_red()),
        }
    }
    Ok(())
}

#[cfg(feature = "playback")]
fn open_sink(output: Option<&str>, player: SourceLock<Player>) -> SpectoneResult<rodio::Sink> {
    use rodio::DeviceTrait;

    let device = if let Some(output) = output {
        let mut devices =
            rodio::output_devices().map_err(|e| SpectoneError::Audio(e.to_string()))?;
        devices
            .find(|dev| dev.name().map_or(false, |name| name.contains(output)))
            .ok_or_else(|| SpectoneError::UnknownDevice(output.into()))?
    } else {
        rodio::default_output_device().ok_or(SpectoneError::NoOutputDevice)?
    };

    let sink = std::panic::catch_unwind(|| rodio::Sink::new(&device))
        .map_err(|_| SpectoneError::Audio("Unable to initialize audio device".into()))?;

    let name = device
        .name()
        .map_err(|e| SpectoneError::Audio(e.to_string()))?;
    colorprintln!("Using audio output device {:?}", bright_cyan, name);
    tracing::info!(sample_rate = player.get(Player::sample_rate), "opened audio output");

    sink.append(player);
    Ok(sink)
}
