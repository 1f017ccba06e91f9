//! Timezone offset table

/// UTC offsets in minutes for the zones the watch ships with
///
/// Index 0 is UTC. The order is part of the stored settings format.
pub const STANDARD_OFFSETS: [i16; 41] = [
    0,    //  0 : UTC
    60,   //  1 : Central European Time
    120,  //  2 : South African Standard Time
    180,  //  3 : Arabia Standard Time
    210,  //  4 : Iran Standard Time
    240,  //  5 : Georgia Standard Time
    270,  //  6 : Afghanistan Time
    300,  //  7 : Pakistan Standard Time
    330,  //  8 : Indian Standard Time
    345,  //  9 : Nepal Time
    360,  // 10 : Kyrgyzstan Time
    390,  // 11 : Myanmar Time
    420,  // 12 : Thailand Standard Time
    480,  // 13 : China Standard Time
    525,  // 14 : Australian Central Western Standard Time
    540,  // 15 : Japan Standard Time
    570,  // 16 : Australian Central Standard Time
    600,  // 17 : Australian Eastern Standard Time
    630,  // 18 : Lord Howe Standard Time
    660,  // 19 : Solomon Islands Time
    720,  // 20 : New Zealand Standard Time
    765,  // 21 : Chatham Standard Time
    780,  // 22 : Tonga Time
    825,  // 23 : Chatham Daylight Time
    840,  // 24 : Line Islands Time
    -720, // 25 : Baker Island Time
    -660, // 26 : Niue Time
    -600, // 27 : Hawaii-Aleutian Standard Time
    -570, // 28 : Marquesas Islands Time
    -540, // 29 : Alaska Standard Time
    -480, // 30 : Pacific Standard Time
    -420, // 31 : Mountain Standard Time
    -360, // 32 : Central Standard Time
    -300, // 33 : Eastern Standard Time
    -270, // 34 : Venezuelan Standard Time
    -240, // 35 : Atlantic Standard Time
    -210, // 36 : Newfoundland Standard Time
    -180, // 37 : Brasilia Time
    -150, // 38 : Newfoundland Daylight Time
    -120, // 39 : Fernando de Noronha Time
    -60,  // 40 : Azores Standard Time
];

/// Read-only lookup from settings index to UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneTable {
    offsets_minutes: &'static [i16],
}

impl Default for TimezoneTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TimezoneTable {
    /// The table the watch ships with
    pub const STANDARD: Self = Self::new(&STANDARD_OFFSETS);

    /// Create a table over custom offsets (minutes east of UTC)
    pub const fn new(offsets_minutes: &'static [i16]) -> Self {
        Self { offsets_minutes }
    }

    /// Number of zones in the table
    pub fn len(&self) -> usize {
        self.offsets_minutes.len()
    }

    /// Check if the table has no zones
    pub fn is_empty(&self) -> bool {
        self.offsets_minutes.is_empty()
    }

    /// Offset in minutes for a zone index
    pub fn offset_minutes(&self, index: u8) -> Option<i16> {
        self.offsets_minutes.get(usize::from(index)).copied()
    }

    /// Offset in seconds for a zone index
    pub fn offset_seconds(&self, index: u8) -> Option<i32> {
        self.offset_minutes(index).map(|m| i32::from(m) * 60)
    }
}
