//! Low-power tick animation

/// Blinking tick shown while the watch is in low-energy mode
///
/// The animation runs in hardware and survives between calls; callers
/// check [`TickAnimation::is_running`] before starting or stopping it.
pub trait TickAnimation {
    /// Start the animation with the given blink period
    fn start_tick_animation(&mut self, interval_ms: u32);

    /// Stop the animation
    fn stop_tick_animation(&mut self);

    /// Check if the animation is currently running
    fn is_tick_animation_running(&self) -> bool;
}
