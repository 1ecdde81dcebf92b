use crate::{ConvertError, Note};

/// The speed of light in meters per second
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// One nanometer in meters
pub const NANOMETER: f64 = 1e-9;
/// The lowest frequency on a piano (A0)
pub const MIN_AUDIBLE_FREQ: f64 = 27.5;
/// The highest frequency on a piano (C8)
pub const MAX_AUDIBLE_FREQ: f64 = 4186.01;
/// The frequency of middle C
pub const MIDDLE_C_FREQUENCY: f64 = 261.63;
/// The tuning reference, 9 semitones above middle C
pub const A4_FREQUENCY: f64 = 440.0;
/// Semitones per octave
pub const SEMITONES_PER_OCTAVE: i32 = 12;
/// The most halvings and doublings octave folding may perform
///
/// This is larger than the whole exponent range of `f64`.
pub const MAX_FOLD_STEPS: u32 = 4096;

/// The result of converting a spectral line wavelength into a note
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// The wavelength in nanometers
    pub original_wavelength: f64,
    /// The electromagnetic frequency of the light in Hz
    pub em_frequency: f64,
    /// The octave-folded frequency in Hz, before quantization
    pub audible_frequency: f64,
    /// The folded frequency snapped to the nearest semitone, in Hz
    pub quantized_frequency: f64,
    /// The note of the quantized frequency
    pub note: Note,
}

/// Convert a wavelength in nanometers into an audible note
///
/// # Errors
///
/// Returns [`ConvertError::InvalidArgument`] if the wavelength is not a finite positive number
pub fn convert(wavelength: f64) -> Result<Conversion, ConvertError> {
    let em_frequency = wavelength_to_frequency(wavelength)?;
    let audible_frequency = fold_to_audible(em_frequency)?;
    let (quantized_frequency, note) = quantize(audible_frequency)?;
    Ok(Conversion {
        original_wavelength: wavelength,
        em_frequency,
        audible_frequency,
        quantized_frequency,
        note,
    })
}

/// Get the frequency of light in Hz from its wavelength in nanometers
///
/// # Errors
///
/// Returns an error if the wavelength is not a finite positive number
/// or if it is so small that the frequency overflows
pub fn wavelength_to_frequency(wavelength: f64) -> Result<f64, ConvertError> {
    check_positive("wavelength", wavelength)?;
    let frequency = SPEED_OF_LIGHT / (wavelength * NANOMETER);
    check_positive("electromagnetic frequency", frequency)?;
    Ok(frequency)
}

/// Move a frequency by whole octaves until it lies within an octave of middle C
///
/// The frequency is first brought within the range of a piano and then narrowed
/// to the octaves around middle C. Comparisons are strict, so a frequency sitting
/// exactly on a bound is left where it is.
///
/// # Errors
///
/// Returns an error if the frequency is not a finite positive number
pub fn fold_to_audible(frequency: f64) -> Result<f64, ConvertError> {
    check_positive("frequency", frequency)?;
    let mut folder = Folder {
        freq: frequency,
        steps: 0,
    };
    folder.halve_while(|f| f > MAX_AUDIBLE_FREQ)?;
    folder.double_while(|f| f < MIN_AUDIBLE_FREQ)?;
    folder.halve_while(|f| f > MIDDLE_C_FREQUENCY * 2.0)?;
    folder.double_while(|f| f < MIDDLE_C_FREQUENCY / 2.0)?;
    Ok(folder.freq)
}

/// Snap a frequency to the nearest semitone of equal temperament tuned to A4 = 440 Hz
///
/// # Errors
///
/// Returns an error if the frequency is not a finite positive number
pub fn quantize(frequency: f64) -> Result<(f64, Note), ConvertError> {
    check_positive("frequency", frequency)?;
    let semitones = semitones_from_a4(frequency);
    Ok((semitone_frequency(semitones), Note::from_semitones(semitones)))
}

/// Get the nearest whole number of semitones between a frequency and A4
///
/// Halfway values round up.
pub fn semitones_from_a4(frequency: f64) -> i32 {
    let exact = f64::from(SEMITONES_PER_OCTAVE) * (frequency / A4_FREQUENCY).log2();
    (exact + 0.5).floor() as i32
}

/// Get the frequency of the pitch the given number of semitones away from A4
pub fn semitone_frequency(semitones: i32) -> f64 {
    A4_FREQUENCY * 2f64.powf(f64::from(semitones) / f64::from(SEMITONES_PER_OCTAVE))
}

fn check_positive(what: &'static str, value: f64) -> Result<(), ConvertError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConvertError::InvalidArgument { what, value })
    }
}

struct Folder {
    freq: f64,
    steps: u32,
}

impl Folder {
    fn halve_while(&mut self, cond: impl Fn(f64) -> bool) -> Result<(), ConvertError> {
        self.shift_while(cond, 0.5)
    }
    fn double_while(&mut self, cond: impl Fn(f64) -> bool) -> Result<(), ConvertError> {
        self.shift_while(cond, 2.0)
    }
    fn shift_while(&mut self, cond: impl Fn(f64) -> bool, factor: f64) -> Result<(), ConvertError> {
        while cond(self.freq) {
            if self.steps == MAX_FOLD_STEPS {
                return Err(ConvertError::FoldLimit(self.freq));
            }
            self.freq *= factor;
            self.steps += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} to be within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn hydrogen_alpha() {
        let conv = convert(656.28).unwrap();
        assert_eq!(conv.original_wavelength, 656.28);
        assert_close(conv.em_frequency, 4.568_057_201_194_612e14, 1e3);
        assert_close(conv.audible_frequency, 415.462_382_188_217_1, 1e-9);
        assert_close(conv.quantized_frequency, 415.304_697_579_945_1, 1e-2);
        assert_eq!(conv.note.to_string(), "F4");
    }

    #[test]
    fn hydrogen_beta() {
        let conv = convert(486.13).unwrap();
        assert_close(conv.audible_frequency, 280.439_030_899_639_14, 1e-9);
        assert_close(conv.quantized_frequency, 277.182_630_976_872, 1e-2);
        assert_eq!(conv.note.to_string(), "A#/Bb4");
    }

    #[test]
    fn extreme_short_wavelength_terminates() {
        let conv = convert(1.0).unwrap();
        assert_close(conv.em_frequency, 2.997_924_58e17, 1e3);
        assert_close(conv.quantized_frequency, 261.625_565_300_598_5, 1e-2);
        assert_eq!(conv.note.to_string(), "A4");
        assert!(conv.quantized_frequency >= MIN_AUDIBLE_FREQ);
        assert!(conv.quantized_frequency <= MAX_AUDIBLE_FREQ);
    }

    #[test]
    fn invalid_wavelengths() {
        for &wavelength in &[0.0, -0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match convert(wavelength) {
                Err(ConvertError::InvalidArgument { what, .. }) => assert_eq!(what, "wavelength"),
                other => panic!("{} converted to {:?}", wavelength, other),
            }
        }
    }

    #[test]
    fn subnormal_wavelength_overflows() {
        let err = convert(f64::MIN_POSITIVE / 4.0).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidArgument {
                what: "electromagnetic frequency",
                ..
            }
        ));
    }

    #[test]
    fn em_frequency_formula() {
        for &w in &[121.567, 393.37, 589.0, 852.11, 1e6] {
            assert_eq!(wavelength_to_frequency(w).unwrap(), SPEED_OF_LIGHT / (w * 1e-9));
        }
    }

    #[test]
    fn folding_keeps_bounds() {
        // Values already in range are untouched
        assert_eq!(fold_to_audible(300.0).unwrap(), 300.0);
        // Exactly twice middle C is not above it
        assert_eq!(
            fold_to_audible(MIDDLE_C_FREQUENCY * 2.0).unwrap(),
            MIDDLE_C_FREQUENCY * 2.0
        );
        assert_eq!(fold_to_audible(1000.0).unwrap(), 500.0);
        assert_eq!(fold_to_audible(100.0).unwrap(), 200.0);
        assert_eq!(fold_to_audible(1.0).unwrap(), 256.0);
    }

    #[test]
    fn folding_extremes() {
        let high = fold_to_audible(f64::MAX).unwrap();
        assert!(high > MIDDLE_C_FREQUENCY / 2.0 && high <= MIDDLE_C_FREQUENCY * 2.0);
        let low = fold_to_audible(f64::MIN_POSITIVE / 1e10).unwrap();
        assert!(low >= MIDDLE_C_FREQUENCY / 2.0 && low <= MIDDLE_C_FREQUENCY * 2.0);
        assert!(fold_to_audible(0.0).is_err());
        assert!(fold_to_audible(f64::NAN).is_err());
    }

    #[test]
    fn quantize_snaps_to_grid() {
        let (freq, note) = quantize(445.0).unwrap();
        assert_eq!(freq, 440.0);
        assert_eq!(note.semitones_from_a4(), 0);
        let (freq, _) = quantize(460.0).unwrap();
        assert_close(freq, 466.163_761_518_089_9, 1e-9);
    }

    #[test]
    fn rounding_halves_up() {
        // Exactly halfway between G#4 and A4
        let halfway = A4_FREQUENCY * 2f64.powf(-0.5 / 12.0);
        let s = semitones_from_a4(halfway);
        assert!(s == 0 || s == -1);
        assert_eq!(semitones_from_a4(A4_FREQUENCY * 2f64.powf(-0.49 / 12.0)), 0);
        assert_eq!(semitones_from_a4(A4_FREQUENCY * 2f64.powf(-0.51 / 12.0)), -1);
    }
}
