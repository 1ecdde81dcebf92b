use std::{iter::once, sync::Arc, sync::PoisonError};

use crossbeam_utils::sync::ShardedLock;

#[cfg(feature = "playback")]
use rodio::{DeviceTrait, Sample, Source};

#[cfg(feature = "playback")]
use crate::{SpectoneError, SpectoneResult};

/// Print a formatted line in a color
#[macro_export]
macro_rules! colorprintln {
    ($fmt:literal, $col:ident $(,$item:expr)* $(,)?) => {
        println!("{}", colored::Colorize::$col(format!($fmt, $($item),*).as_str()))
    };
}

/// Print the available audio output devices
///
/// # Errors
///
/// Returns an error if the devices or their names cannot be queried
#[cfg(feature = "playback")]
pub fn list_output_devices() -> SpectoneResult<()> {
    let devices = rodio::output_devices().map_err(|e| SpectoneError::Audio(e.to_string()))?;
    for (i, device) in devices.enumerate() {
        let name = device
            .name()
            .map_err(|e| SpectoneError::Audio(e.to_string()))?;
        colorprintln!("{}. {}", bright_cyan, i, name);
    }
    Ok(())
}

/// A lock for sharing a sound source between the audio thread and the command line
#[derive(Debug)]
pub struct SourceLock<T>(Arc<ShardedLock<T>>);

impl<T> Clone for SourceLock<T> {
    fn clone(&self) -> Self {
        SourceLock(Arc::clone(&self.0))
    }
}

impl<T> SourceLock<T> {
    /// Wrap a value in a new lock
    pub fn new(inner: T) -> Self {
        SourceLock(Arc::new(ShardedLock::new(inner)))
    }
    /// Read the locked value
    pub fn get<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&*self.0.read().unwrap_or_else(PoisonError::into_inner))
    }
    /// Modify the locked value
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut *self.0.write().unwrap_or_else(PoisonError::into_inner))
    }
}

impl<T> Iterator for SourceLock<T>
where
    T: Iterator,
{
    type Item = T::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.update(Iterator::next)
    }
}

#[cfg(feature = "playback")]
impl<T> Source for SourceLock<T>
where
    T: Source,
    T::Item: Sample,
{
    fn current_frame_len(&self) -> Option<usize> {
        self.get(Source::current_frame_len)
    }
    fn channels(&self) -> u16 {
        self.get(Source::channels)
    }
    fn sample_rate(&self) -> u32 {
        self.get(Source::sample_rate)
    }
    fn total_duration(&self) -> Option<std::time::Duration> {
        self.get(Source::total_duration)
    }
}

/// Split a line into commands separated by commas,
/// each prefixed with the program name so it can be parsed as a command line
pub fn parse_commands(text: &str) -> Option<Vec<Vec<String>>> {
    if text.trim().is_empty() {
        None
    } else {
        Some(
            text.split(',')
                .map(|text| {
                    once("spectone".into())
                        .chain(parse_args(text.trim()))
                        .collect::<Vec<_>>()
                })
                .collect(),
        )
    }
}

/// Split a command into arguments on whitespace, keeping quoted text together
pub fn parse_args(s: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut in_quotes = false;
    let mut arg = String::new();
    macro_rules! insert_arg {
        () => {{
            let mut next_arg = String::new();
            std::mem::swap(&mut next_arg, &mut arg);
            args.push(next_arg);
        }};
    }
    for c in s.chars() {
        match c {
            '"' => {
                if in_quotes {
                    in_quotes = false;
                    insert_arg!();
                } else {
                    in_quotes = true;
                }
            }
            c if c.is_whitespace() => {
                if in_quotes {
                    arg.push(c)
                } else if !arg.is_empty() {
                    insert_arg!();
                }
            }
            c => arg.push(c),
        }
    }
    if !arg.is_empty() {
        insert_arg!();
    }
    args
}
