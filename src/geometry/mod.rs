pub mod line;
pub mod waveform;
