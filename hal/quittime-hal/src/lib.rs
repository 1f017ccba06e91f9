//! Quittime Hardware Abstraction Layer
//!
//! This crate defines the traits the watch face calls into. The host
//! firmware (movement loop) implements them on top of the real RTC,
//! segment LCD, ADC and buzzer; tests implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Watch face (quittime-core)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  quittime-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Host firmware / test mocks             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`rtc::RealTimeClock`] - Packed date-time register
//! - [`display::SegmentDisplay`] - Character cells, colon and indicators
//! - [`animation::TickAnimation`] - Low-power blinking tick
//! - [`adc::VoltageSensor`] - Supply voltage sampling
//! - [`buzzer::Chime`] - Hourly signal playback

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod animation;
pub mod buzzer;
pub mod display;
pub mod rtc;

// Re-export key traits at crate root for convenience
pub use adc::VoltageSensor;
pub use animation::TickAnimation;
pub use buzzer::Chime;
pub use display::{Indicator, SegmentDisplay};
pub use rtc::RealTimeClock;
