//! Supply voltage sensing

/// Supply voltage sensor
///
/// The ADC draws current while enabled, so every read must be bracketed
/// by [`VoltageSensor::enable`] and [`VoltageSensor::disable`].
pub trait VoltageSensor {
    /// Power up the ADC
    fn enable(&mut self);

    /// Power down the ADC
    fn disable(&mut self);

    /// Read the supply voltage in millivolts
    ///
    /// Only valid between `enable` and `disable`.
    fn read_millivolts(&mut self) -> u16;

    /// Take a single supply sample, leaving the ADC powered down
    fn sample_millivolts(&mut self) -> u16 {
        self.enable();
        let millivolts = self.read_millivolts();
        self.disable();
        millivolts
    }
}
