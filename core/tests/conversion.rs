use spectone_core::*;

/// Wavelengths from deep ultraviolet to microwaves, spread geometrically
///
/// Every wavelength here, and twice it, has a light frequency above twice middle C,
/// so folding always lands in the octave just above middle C.
fn sweep() -> impl Iterator<Item = f64> {
    (0..2000).map(|i| 0.5 * 1.0165_f64.powi(i))
}

#[test]
fn determinism() {
    for w in sweep() {
        let a = convert(w).unwrap();
        let b = convert(w).unwrap();
        assert_eq!(a.em_frequency.to_bits(), b.em_frequency.to_bits());
        assert_eq!(a.audible_frequency.to_bits(), b.audible_frequency.to_bits());
        assert_eq!(a.quantized_frequency.to_bits(), b.quantized_frequency.to_bits());
        assert_eq!(a.note, b.note);
    }
}

#[test]
fn folded_frequency_is_near_middle_c() {
    for w in sweep() {
        let conv = convert(w).unwrap();
        assert_eq!(conv.em_frequency, SPEED_OF_LIGHT / (w * 1e-9));
        assert!(
            conv.audible_frequency > MIDDLE_C_FREQUENCY / 2.0
                && conv.audible_frequency <= MIDDLE_C_FREQUENCY * 2.0,
            "{} nm folded to {} Hz",
            w,
            conv.audible_frequency
        );
    }
}

#[test]
fn octave_equivalence() {
    for w in sweep() {
        let conv = convert(w).unwrap();
        for &other in &[w / 2.0, w * 2.0] {
            let other = convert(other).unwrap();
            assert_eq!(conv.note, other.note, "{} nm", w);
            assert_eq!(conv.quantized_frequency, other.quantized_frequency);
            assert_eq!(conv.audible_frequency, other.audible_frequency);
        }
    }
}

#[test]
fn quantized_frequencies_lie_on_the_semitone_grid() {
    for w in sweep() {
        let conv = convert(w).unwrap();
        let n = 12.0 * (conv.quantized_frequency / A4_FREQUENCY).log2();
        assert!((n - n.round()).abs() < 1e-9, "{} Hz is off the grid", conv.quantized_frequency);
        // Never more than half a semitone away from the folded frequency
        let distance = 12.0 * (conv.quantized_frequency / conv.audible_frequency).log2();
        assert!(distance.abs() <= 0.5 + 1e-9);
    }
}

#[test]
fn note_names_decode_to_the_quantized_frequency() {
    for w in sweep() {
        let conv = convert(w).unwrap();
        let decoded: Note = conv.note.to_string().parse().unwrap();
        assert_eq!(decoded, conv.note);
        assert_eq!(decoded.frequency(), conv.quantized_frequency);
    }
}

#[test]
fn hydrogen_balmer_series() {
    let expected = [
        (656.28, "F4", 415.30),
        (486.13, "A#/Bb4", 277.18),
        (434.05, "C4", 311.13),
        (410.17, "C#/Db4", 329.63),
    ];
    for &(w, note, freq) in &expected {
        let conv = convert(w).unwrap();
        assert_eq!(conv.note.to_string(), note, "{} nm", w);
        assert!((conv.quantized_frequency - freq).abs() < 1e-2, "{} nm", w);
    }
}

#[test]
fn radio_wavelengths_fold_upwards() {
    // 1e17 nm is about 3 Hz, below the piano, so it is doubled up into octave 3
    let conv = convert(1e17).unwrap();
    assert!((conv.em_frequency - 2.997_924_58).abs() < 1e-9);
    assert!((conv.audible_frequency - 191.867_173_12).abs() < 1e-6);
    assert_eq!(conv.note.to_string(), "E3");
    assert!((conv.quantized_frequency - 195.997_717_990_874_6).abs() < 1e-6);
}

#[test]
fn low_frequencies_keep_their_octave_within_the_window() {
    // Light at 200 Hz and 400 Hz is already between half and twice middle C
    let low = convert(SPEED_OF_LIGHT / 200.0 / NANOMETER).unwrap();
    let high = convert(SPEED_OF_LIGHT / 400.0 / NANOMETER).unwrap();
    assert_eq!(low.note.pitch_class, high.note.pitch_class);
    assert_eq!(low.note.to_string(), "E3");
    assert_eq!(high.note.to_string(), "E4");
}

#[test]
fn invalid_input_is_an_error() {
    assert!(convert(0.0).is_err());
    assert!(convert(-5.0).is_err());
    assert!(convert(f64::NAN).is_err());
    assert!(convert(f64::INFINITY).is_err());
}
