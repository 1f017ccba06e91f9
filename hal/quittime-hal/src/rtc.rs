//! Real-time clock access

/// Real-time clock
///
/// The clock exposes its calendar register as a single packed word.
/// Layout, least significant bit first: second (6 bits), minute (6),
/// hour (5), day (5), month (4), year offset (6).
pub trait RealTimeClock {
    /// Read the current packed date-time register
    fn read_register(&mut self) -> u32;
}
