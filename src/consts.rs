/// The type of a single audio sample
pub type SampleType = f32;

/// An index of a sample since the player was created
pub type Frame = u64;

/// Every tone is mono
pub const CHANNELS: u16 = 1;

/// Waveforms are scaled so that they all sound about as loud as this
pub const MIN_ENERGY: SampleType = 0.5;
