//! Buzzer output

/// Audible signal output
pub trait Chime {
    /// Play the platform's short hourly signal
    fn play_signal(&mut self);
}
