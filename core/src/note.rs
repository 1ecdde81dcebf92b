use std::{fmt, str::FromStr};

use crate::{semitone_frequency, ConvertError, SEMITONES_PER_OCTAVE};

/// A pitch class label
///
/// Pitch classes are indexed from 0 to 11 starting at A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum PitchClass {
    A,
    ASharp,
    B,
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
}

impl PitchClass {
    /// All pitch classes in index order
    pub const ALL: [PitchClass; 12] = [
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
    ];
    /// Get the pitch class at an index
    ///
    /// The index wraps around, so negative indices work too.
    pub fn from_index(index: i32) -> Self {
        PitchClass::ALL[index.rem_euclid(SEMITONES_PER_OCTAVE) as usize]
    }
    /// Get this pitch class's index
    pub fn index(self) -> i32 {
        self as i32
    }
    /// Get the display label
    pub fn label(self) -> &'static str {
        match self {
            PitchClass::A => "A",
            PitchClass::ASharp => "A#/Bb",
            PitchClass::B => "B",
            PitchClass::C => "C",
            PitchClass::CSharp => "C#/Db",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#/Eb",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#/Gb",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#/Ab",
        }
    }
    fn from_label(s: &str) -> Option<Self> {
        Some(match s {
            "A" => PitchClass::A,
            "A#/Bb" | "A#" | "Bb" => PitchClass::ASharp,
            "B" => PitchClass::B,
            "C" => PitchClass::C,
            "C#/Db" | "C#" | "Db" => PitchClass::CSharp,
            "D" => PitchClass::D,
            "D#/Eb" | "D#" | "Eb" => PitchClass::DSharp,
            "E" => PitchClass::E,
            "F" => PitchClass::F,
            "F#/Gb" | "F#" | "Gb" => PitchClass::FSharp,
            "G" => PitchClass::G,
            "G#/Ab" | "G#" | "Ab" => PitchClass::GSharp,
            _ => return None,
        })
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The offset added to semitones from A4 before splitting them into a pitch class and an octave
const INDEX_OFFSET: i32 = 9;

/// A named note: a pitch class in an octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    /// The pitch class
    pub pitch_class: PitchClass,
    /// The octave number
    pub octave: i32,
}

impl Note {
    /// Name the note the given number of semitones away from A4
    ///
    /// Division and remainder are both floored, so offsets below the
    /// start of octave 4 land in lower octaves with a valid pitch class.
    pub fn from_semitones(semitones: i32) -> Self {
        let n = semitones + INDEX_OFFSET;
        Note {
            pitch_class: PitchClass::from_index(n),
            octave: 4 + n.div_euclid(SEMITONES_PER_OCTAVE),
        }
    }
    /// Get the number of semitones between this note and A4
    pub fn semitones_from_a4(self) -> i32 {
        self.pitch_class.index() + SEMITONES_PER_OCTAVE * (self.octave - 4) - INDEX_OFFSET
    }
    /// Get the equal-tempered frequency of this note
    pub fn frequency(self) -> f64 {
        semitone_frequency(self.semitones_from_a4())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

impl FromStr for Note {
    type Err = ConvertError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c == '-' || c.is_ascii_digit())
            .ok_or_else(|| ConvertError::InvalidNote(s.into()))?;
        let (label, octave) = s.split_at(split);
        let pitch_class =
            PitchClass::from_label(label).ok_or_else(|| ConvertError::InvalidNote(s.into()))?;
        let octave = octave
            .parse()
            .map_err(|_| ConvertError::InvalidNote(s.into()))?;
        Ok(Note {
            pitch_class,
            octave,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(Note::from_semitones(-9).to_string(), "A4");
        assert_eq!(Note::from_semitones(-1).to_string(), "F4");
        assert_eq!(Note::from_semitones(0).to_string(), "F#/Gb4");
        assert_eq!(Note::from_semitones(3).to_string(), "A5");
        assert_eq!(Note::from_semitones(-8).to_string(), "A#/Bb4");
    }

    #[test]
    fn negative_offsets_use_floored_division() {
        let note = Note::from_semitones(-14);
        assert_eq!(note.pitch_class, PitchClass::E);
        assert_eq!(note.octave, 3);
        assert_eq!(Note::from_semitones(-10).to_string(), "G#/Ab3");
        assert_eq!(Note::from_semitones(-21).to_string(), "A3");
        assert_eq!(Note::from_semitones(-22).to_string(), "G#/Ab2");
    }

    #[test]
    fn round_trip() {
        for s in -60..60 {
            let note = Note::from_semitones(s);
            assert_eq!(note.semitones_from_a4(), s);
            let parsed: Note = note.to_string().parse().unwrap();
            assert_eq!(parsed, note);
        }
    }

    #[test]
    fn parse_single_spellings() {
        assert_eq!("Bb3".parse::<Note>().unwrap().to_string(), "A#/Bb3");
        assert_eq!("F#-1".parse::<Note>().unwrap().octave, -1);
        assert!("H4".parse::<Note>().is_err());
        assert!("C".parse::<Note>().is_err());
        assert!("".parse::<Note>().is_err());
    }

    #[test]
    fn pitch_class_index_wraps() {
        assert_eq!(PitchClass::from_index(-1), PitchClass::GSharp);
        assert_eq!(PitchClass::from_index(12), PitchClass::A);
        assert_eq!(PitchClass::CSharp.index(), 4);
    }
}
