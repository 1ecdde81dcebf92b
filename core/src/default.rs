//! All the Spectone config default values
use crate::WaveForm;

macro_rules! default {
    (#[$attr:meta] const $constant:ident: $type:ty = $val:expr; $def_fn_name:ident; $is_def_fn_name:ident;) => {
        #[$attr]
        pub const $constant: $type = $val;
        pub(crate) fn $def_fn_name() -> $type {
            $constant
        }
        #[allow(clippy::trivially_copy_pass_by_ref, clippy::float_cmp)]
        pub(crate) fn $is_def_fn_name(val: &$type) -> bool {
            val == &$constant
        }
    };
}

default! {
    /// The default master volume
    const VOLUME: f32 = 0.5;
    volume;
    is_volume;
}

default! {
    /// The default oscillator waveform
    const WAVE: WaveForm = WaveForm::Sine;
    wave;
    is_wave;
}

default! {
    /// The default output sample rate
    const SAMPLE_RATE: u32 = 44100;
    sample_rate;
    is_sample_rate;
}

default! {
    /// The default time in milliseconds during which repeated clicks on an element are ignored
    const DEBOUNCE_MS: u64 = 300;
    debounce_ms;
    is_debounce_ms;
}

default! {
    /// The default envelope attack time in seconds
    const ATTACK: f32 = 0.1;
    attack;
    is_attack;
}

default! {
    /// The default envelope decay time in seconds
    const DECAY: f32 = 0.2;
    decay;
    is_decay;
}

default! {
    /// The default envelope level reached at the end of the attack
    const PEAK: f32 = 0.7;
    peak;
    is_peak;
}

default! {
    /// The default envelope sustain level
    const SUSTAIN: f32 = 0.5;
    sustain;
    is_sustain;
}

default! {
    /// The default envelope release time in seconds
    const RELEASE: f32 = 0.2;
    release;
    is_release;
}
