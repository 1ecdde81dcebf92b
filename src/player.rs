use std::{
    collections::HashMap,
    f32::consts::{FRAC_2_PI, PI},
};

use spectone_core::{Config, Envelope, WaveForm};

#[cfg(feature = "playback")]
use crate::CHANNELS;
use crate::{Frame, SampleType, MIN_ENERGY};

/// What happened when an element was toggled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The element started sounding
    Started,
    /// The element was released
    Stopped,
}

#[derive(Debug, Clone)]
struct Voice {
    freq: SampleType,
    /// Position within the current cycle, from 0 to 1
    phase: SampleType,
    start: Frame,
    /// The frame at which the voice was released and its level at that time
    released: Option<(Frame, SampleType)>,
}

/// Plays a tone for every element that has been clicked
///
/// Voices are keyed by element symbol. A released voice keeps sounding
/// until its envelope release has finished.
#[derive(Debug, Clone)]
pub struct Player {
    sample_rate: u32,
    volume: SampleType,
    form: WaveForm,
    envelope: Envelope,
    voices: HashMap<String, Voice>,
    /// The index of the current frame
    i: Frame,
}

impl Player {
    /// Create a new player with the default settings
    pub fn new(sample_rate: u32) -> Self {
        Player {
            sample_rate: sample_rate.max(1),
            volume: spectone_core::default::VOLUME,
            form: WaveForm::default(),
            envelope: Envelope::default(),
            voices: HashMap::new(),
            i: 0,
        }
    }
    /// Create a new player with the settings from a config
    pub fn from_config(config: &Config) -> Self {
        let mut player = Player::new(config.sample_rate);
        player.set_volume(config.volume);
        player.set_wave_form(config.wave);
        player.set_envelope(config.envelope);
        player
    }
    /// Get the sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
    /// Get the master volume
    pub fn volume(&self) -> SampleType {
        self.volume
    }
    /// Set the master volume
    ///
    /// The volume is clamped between 0 and 1.
    pub fn set_volume(&mut self, volume: SampleType) {
        self.volume = if volume.is_nan() {
            0.0
        } else {
            volume.max(0.0).min(1.0)
        };
    }
    /// Get the waveform
    pub fn wave_form(&self) -> WaveForm {
        self.form
    }
    /// Set the waveform for all voices, including those already sounding
    pub fn set_wave_form(&mut self, form: WaveForm) {
        self.form = form;
    }
    /// Get the volume envelope
    pub fn envelope(&self) -> Envelope {
        self.envelope
    }
    /// Set the volume envelope
    pub fn set_envelope(&mut self, envelope: Envelope) {
        self.envelope = envelope;
    }
    /// Start a tone for an element
    ///
    /// This replaces any voice the element already has.
    pub fn start(&mut self, symbol: &str, freq: f64) {
        tracing::debug!(symbol, freq, "starting voice");
        self.voices.insert(
            symbol.into(),
            Voice {
                freq: freq as SampleType,
                phase: 0.0,
                start: self.i,
                released: None,
            },
        );
    }
    /// Release the tone of an element
    ///
    /// Returns whether the element was playing.
    pub fn release(&mut self, symbol: &str) -> bool {
        let i = self.i;
        let sample_rate = self.sample_rate;
        let envelope = self.envelope;
        match self.voices.get_mut(symbol) {
            Some(voice) if voice.released.is_none() => {
                let level = envelope.level_at(seconds(i - voice.start, sample_rate));
                voice.released = Some((i, level));
                tracing::debug!(symbol, "releasing voice");
                true
            }
            _ => false,
        }
    }
    /// Release every playing tone
    ///
    /// Returns the number of tones released.
    pub fn release_all(&mut self) -> usize {
        let symbols: Vec<String> = self.playing().into_iter().map(Into::into).collect();
        symbols.iter().filter(|symbol| self.release(symbol)).count()
    }
    /// Release an element if it can be heard, otherwise start it
    ///
    /// Toggling an element during its release leaves it releasing.
    pub fn toggle(&mut self, symbol: &str, freq: f64) -> Toggle {
        if self.is_sounding(symbol) {
            self.release(symbol);
            Toggle::Stopped
        } else {
            self.start(symbol, freq);
            Toggle::Started
        }
    }
    /// Check if an element is playing and has not been released
    pub fn is_playing(&self, symbol: &str) -> bool {
        self.voices
            .get(symbol)
            .map_or(false, |voice| voice.released.is_none())
    }
    /// Check if an element can still be heard, including during its release
    pub fn is_sounding(&self, symbol: &str) -> bool {
        self.voices.contains_key(symbol)
    }
    /// Get the symbols of the playing elements in order
    pub fn playing(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self
            .voices
            .iter()
            .filter(|(_, voice)| voice.released.is_none())
            .map(|(symbol, _)| symbol.as_str())
            .collect();
        symbols.sort_unstable();
        symbols
    }
    /// Get the frequencies of the playing elements
    pub fn frequencies(&self) -> Vec<f64> {
        self.playing()
            .into_iter()
            .map(|symbol| f64::from(self.voices[symbol].freq))
            .collect()
    }
    fn level(&self, voice: &Voice) -> SampleType {
        match voice.released {
            None => self
                .envelope
                .level_at(seconds(self.i - voice.start, self.sample_rate)),
            Some((frame, level)) => self
                .envelope
                .release_level(level, seconds(self.i - frame, self.sample_rate)),
        }
    }
    fn finished(&self, voice: &Voice) -> bool {
        voice.released.map_or(false, |(frame, _)| {
            self.envelope
                .finished(seconds(self.i - frame, self.sample_rate))
        })
    }
}

fn seconds(frames: Frame, sample_rate: u32) -> SampleType {
    frames as SampleType / sample_rate as SampleType
}

/// Get the value of a waveform at a position within its cycle
pub fn oscillate(form: WaveForm, phase: SampleType) -> SampleType {
    let t = phase % 1.0;
    let s = match form {
        WaveForm::Sine => (t * 2.0 * PI).sin(),
        WaveForm::Square => {
            if t < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        WaveForm::Sawtooth => 2.0 * t - 1.0,
        WaveForm::Triangle => 2.0 * (2.0 * t - 1.0).abs() - 1.0,
    };
    s * MIN_ENERGY / waveform_energy(form)
}

fn waveform_energy(form: WaveForm) -> SampleType {
    match form {
        WaveForm::Sine => FRAC_2_PI,
        WaveForm::Square => 1.0,
        WaveForm::Sawtooth => 0.5,
        WaveForm::Triangle => 0.5,
    }
}

impl Iterator for Player {
    type Item = SampleType;
    fn next(&mut self) -> Option<Self::Item> {
        let mut mixed = 0.0;
        let mut voices = std::mem::take(&mut self.voices);
        for voice in voices.values_mut() {
            mixed += oscillate(self.form, voice.phase) * self.level(voice);
            voice.phase = (voice.phase + voice.freq / self.sample_rate as SampleType) % 1.0;
        }
        self.i += 1;
        voices.retain(|_, voice| !self.finished(voice));
        self.voices = voices;
        Some((mixed * self.volume).max(-1.0).min(1.0))
    }
}

#[cfg(feature = "playback")]
impl rodio::Source for Player {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }
    fn channels(&self) -> u16 {
        CHANNELS
    }
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
    fn total_duration(&self) -> Option<std::time::Duration> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: u32 = 1000;

    fn run(player: &mut Player, frames: usize) -> Vec<SampleType> {
        player.take(frames).collect()
    }

    #[test]
    fn toggle_starts_and_stops() {
        let mut player = Player::new(RATE);
        assert_eq!(player.toggle("H", 415.3), Toggle::Started);
        assert!(player.is_playing("H"));
        assert_eq!(player.playing(), vec!["H"]);
        assert_eq!(player.toggle("H", 415.3), Toggle::Stopped);
        assert!(!player.is_playing("H"));
        assert!(player.is_sounding("H"));
        assert!(player.playing().is_empty());
    }

    #[test]
    fn released_voices_are_dropped_after_release() {
        let mut player = Player::new(RATE);
        player.start("Na", 466.16);
        run(&mut player, 500);
        assert!(player.release("Na"));
        assert!(!player.release("Na"));
        // Default release is 0.2 seconds
        run(&mut player, 150);
        assert!(player.is_sounding("Na"));
        run(&mut player, 60);
        assert!(!player.is_sounding("Na"));
        assert!(run(&mut player, 10).iter().all(|s| *s == 0.0));
    }

    #[test]
    fn toggling_a_releasing_voice_keeps_releasing() {
        let mut player = Player::new(RATE);
        player.start("He", 300.0);
        run(&mut player, 10);
        player.release("He");
        assert_eq!(player.toggle("He", 300.0), Toggle::Stopped);
        assert!(!player.is_playing("He"));
        assert!(player.is_sounding("He"));
        run(&mut player, 250);
        assert!(!player.is_sounding("He"));
        assert_eq!(player.toggle("He", 300.0), Toggle::Started);
        assert!(player.is_playing("He"));
    }

    #[test]
    fn envelope_shapes_output() {
        let mut player = Player::new(RATE);
        player.set_volume(1.0);
        player.set_wave_form(WaveForm::Square);
        player.start("H", 1.0);
        let samples = run(&mut player, 400);
        // A 1 Hz square wave stays high for the first half second
        assert_eq!(samples[0], 0.0);
        assert!((samples[50] - 0.35 * MIN_ENERGY).abs() < 1e-3);
        assert!((samples[100] - 0.7 * MIN_ENERGY).abs() < 1e-3);
        assert!((samples[350] - 0.5 * MIN_ENERGY).abs() < 1e-3);
    }

    #[test]
    fn silent_at_zero_volume() {
        let mut player = Player::new(RATE);
        player.set_volume(-3.0);
        assert_eq!(player.volume(), 0.0);
        player.start("Fe", 261.63);
        assert!(run(&mut player, 100).iter().all(|s| *s == 0.0));
    }

    #[test]
    fn output_is_clamped() {
        let mut player = Player::new(RATE);
        player.set_volume(1.0);
        player.set_wave_form(WaveForm::Square);
        player.set_envelope(Envelope {
            attack: 0.001,
            decay: 0.001,
            peak: 1.0,
            sustain: 1.0,
            release: 0.1,
        });
        for symbol in &["H", "He", "Li", "Be", "B"] {
            player.start(symbol, 1.0);
        }
        assert!(run(&mut player, 100).iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn release_all() {
        let mut player = Player::new(RATE);
        player.start("H", 415.3);
        player.start("He", 300.0);
        player.release("He");
        assert_eq!(player.release_all(), 1);
        assert!(player.playing().is_empty());
        assert_eq!(player.frequencies(), Vec::<f64>::new());
    }

    #[test]
    fn frequencies_follow_symbol_order() {
        let mut player = Player::new(RATE);
        player.start("O", 500.0);
        player.start("C", 250.0);
        assert_eq!(player.playing(), vec!["C", "O"]);
        assert_eq!(player.frequencies(), vec![250.0, 500.0]);
    }

    #[test]
    fn waveforms() {
        for form in WaveForm::ALL.iter() {
            let peak = (0..100)
                .map(|i| oscillate(*form, i as SampleType / 100.0).abs())
                .fold(0.0, SampleType::max);
            assert!(peak > 0.0 && peak <= 1.0, "{} peaks at {}", form, peak);
        }
        assert_eq!(oscillate(WaveForm::Sawtooth, 0.0), -MIN_ENERGY / 0.5);
        assert_eq!(oscillate(WaveForm::Triangle, 0.5), -MIN_ENERGY / 0.5);
    }
}
