use std::{fmt, path::PathBuf, str::FromStr};

use serde_derive::{Deserialize, Serialize};

use crate::default;

/// An oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum WaveForm {
    Sine,
    Square,
    #[serde(alias = "saw")]
    Sawtooth,
    Triangle,
}

impl Default for WaveForm {
    fn default() -> Self {
        default::WAVE
    }
}

impl WaveForm {
    /// All waveforms
    pub const ALL: [WaveForm; 4] = [
        WaveForm::Sine,
        WaveForm::Square,
        WaveForm::Sawtooth,
        WaveForm::Triangle,
    ];
    /// Get the name used for this waveform in commands and config files
    pub fn name(self) -> &'static str {
        match self {
            WaveForm::Sine => "sine",
            WaveForm::Square => "square",
            WaveForm::Sawtooth => "sawtooth",
            WaveForm::Triangle => "triangle",
        }
    }
}

impl fmt::Display for WaveForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for WaveForm {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sine" | "sin" => Ok(WaveForm::Sine),
            "square" => Ok(WaveForm::Square),
            "sawtooth" | "saw" => Ok(WaveForm::Sawtooth),
            "triangle" | "tri" => Ok(WaveForm::Triangle),
            _ => Err(format!(
                "Unknown waveform {:?}. Expected one of sine, square, sawtooth, triangle",
                s
            )),
        }
    }
}

/// A volume envelope
///
/// The level ramps linearly from silence to `peak` over `attack` seconds,
/// then to `sustain` over `decay` seconds, where it stays until the note is released.
/// On release it ramps to silence over `release` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    /// Seconds from silence to the peak
    #[serde(default = "default::attack", skip_serializing_if = "default::is_attack")]
    pub attack: f32,
    /// Seconds from the peak to the sustain level
    #[serde(default = "default::decay", skip_serializing_if = "default::is_decay")]
    pub decay: f32,
    /// The level at the end of the attack
    #[serde(default = "default::peak", skip_serializing_if = "default::is_peak")]
    pub peak: f32,
    /// The level held until release
    #[serde(default = "default::sustain", skip_serializing_if = "default::is_sustain")]
    pub sustain: f32,
    /// Seconds from release to silence
    #[serde(default = "default::release", skip_serializing_if = "default::is_release")]
    pub release: f32,
}

impl Default for Envelope {
    fn default() -> Self {
        Envelope {
            attack: default::ATTACK,
            decay: default::DECAY,
            peak: default::PEAK,
            sustain: default::SUSTAIN,
            release: default::RELEASE,
        }
    }
}

impl Envelope {
    /// Get the level at a time in seconds since the note started
    pub fn level_at(&self, t: f32) -> f32 {
        if t < 0.0 {
            0.0
        } else if t < self.attack {
            t / self.attack * self.peak
        } else if t < self.attack + self.decay {
            let t_after_attack = t - self.attack;
            self.peak + (self.sustain - self.peak) * (t_after_attack / self.decay)
        } else {
            self.sustain
        }
    }
    /// Get the level at a time in seconds since release, given the level when the note was released
    pub fn release_level(&self, released_at: f32, t: f32) -> f32 {
        if self.finished(t) {
            0.0
        } else {
            released_at * (1.0 - t / self.release)
        }
    }
    /// Check if a released note is silent at a time in seconds since release
    pub fn finished(&self, t: f32) -> bool {
        t >= self.release
    }
}

/// The contents of a Spectone config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The master volume, from 0 to 1
    #[serde(default = "default::volume", skip_serializing_if = "default::is_volume")]
    pub volume: f32,
    /// The oscillator waveform
    #[serde(default = "default::wave", skip_serializing_if = "default::is_wave")]
    pub wave: WaveForm,
    /// The output sample rate
    #[serde(
        default = "default::sample_rate",
        skip_serializing_if = "default::is_sample_rate"
    )]
    pub sample_rate: u32,
    /// Milliseconds during which repeated clicks on the same element are ignored
    #[serde(
        default = "default::debounce_ms",
        skip_serializing_if = "default::is_debounce_ms"
    )]
    pub debounce_ms: u64,
    /// The volume envelope applied to every tone
    #[serde(default)]
    pub envelope: Envelope,
    /// A path to an element catalog to use instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            volume: default::VOLUME,
            wave: default::WAVE,
            sample_rate: default::SAMPLE_RATE,
            debounce_ms: default::DEBOUNCE_MS,
            envelope: Envelope::default(),
            catalog: None,
        }
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_config() {
        let config: Config = "volume = 0.8\nwave = \"saw\"\n[envelope]\nrelease = 1.5\n"
            .parse()
            .unwrap();
        assert_eq!(config.volume, 0.8);
        assert_eq!(config.wave, WaveForm::Sawtooth);
        assert_eq!(config.envelope.release, 1.5);
        assert_eq!(config.envelope.attack, default::ATTACK);
        assert_eq!(config.debounce_ms, 300);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!("volum = 0.8".parse::<Config>().is_err());
    }

    #[test]
    fn default_envelope_shape() {
        let env = Envelope::default();
        assert_eq!(env.level_at(0.0), 0.0);
        assert!((env.level_at(0.05) - 0.35).abs() < 1e-6);
        assert!((env.level_at(0.1) - 0.7).abs() < 1e-6);
        assert!((env.level_at(0.2) - 0.6).abs() < 1e-6);
        assert!((env.level_at(0.3) - 0.5).abs() < 1e-6);
        assert_eq!(env.level_at(10.0), 0.5);
        assert!((env.release_level(0.5, 0.1) - 0.25).abs() < 1e-6);
        assert_eq!(env.release_level(0.5, 0.2), 0.0);
        assert!(env.finished(0.2));
        assert!(!env.finished(0.19));
    }

    #[test]
    fn wave_form_names() {
        for form in WaveForm::ALL.iter() {
            assert_eq!(form.name().parse::<WaveForm>().unwrap(), *form);
        }
        assert_eq!("Saw".parse::<WaveForm>().unwrap(), WaveForm::Sawtooth);
        assert!("noise".parse::<WaveForm>().is_err());
    }
}
