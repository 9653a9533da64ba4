//! `HijriMonth` — Solar Hijri month-of-year enum.

/// Month of the Solar Hijri (Afghan) year.
///
/// Variants are numbered 1–12, Hamal = 1 opening the year at the March
/// equinox and Hoot = 12 closing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HijriMonth {
    /// Hamal (1), begins March 21.
    Hamal = 1,
    /// Sawr (2), begins April 21.
    Sawr = 2,
    /// Jawza (3), begins May 22.
    Jawza = 3,
    /// Saratan (4), begins June 22.
    Saratan = 4,
    /// Asad (5), begins July 23.
    Asad = 5,
    /// Sonbola (6), begins August 23.
    Sonbola = 6,
    /// Mizan (7), begins September 23.
    Mizan = 7,
    /// Aqrab (8), begins October 23.
    Aqrab = 8,
    /// Qaws (9), begins November 22.
    Qaws = 9,
    /// Jadi (10), begins December 22.
    Jadi = 10,
    /// Dalw (11), begins January 21.
    Dalw = 11,
    /// Hoot (12), begins February 20.
    Hoot = 12,
}

impl HijriMonth {
    /// Construct from a number (1 = Hamal … 12 = Hoot).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(HijriMonth::Hamal),
            2 => Some(HijriMonth::Sawr),
            3 => Some(HijriMonth::Jawza),
            4 => Some(HijriMonth::Saratan),
            5 => Some(HijriMonth::Asad),
            6 => Some(HijriMonth::Sonbola),
            7 => Some(HijriMonth::Mizan),
            8 => Some(HijriMonth::Aqrab),
            9 => Some(HijriMonth::Qaws),
            10 => Some(HijriMonth::Jadi),
            11 => Some(HijriMonth::Dalw),
            12 => Some(HijriMonth::Hoot),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the Latin transliteration (`"Hamal"`, `"Sawr"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            HijriMonth::Hamal => "Hamal",
            HijriMonth::Sawr => "Sawr",
            HijriMonth::Jawza => "Jawza",
            HijriMonth::Saratan => "Saratan",
            HijriMonth::Asad => "Asad",
            HijriMonth::Sonbola => "Sonbola",
            HijriMonth::Mizan => "Mizan",
            HijriMonth::Aqrab => "Aqrab",
            HijriMonth::Qaws => "Qaws",
            HijriMonth::Jadi => "Jadi",
            HijriMonth::Dalw => "Dalw",
            HijriMonth::Hoot => "Hoot",
        }
    }

    /// Return the Dari name (`"حمل"` for Hamal, …).
    pub fn dari_name(&self) -> &'static str {
        match self {
            HijriMonth::Hamal => "حمل",
            HijriMonth::Sawr => "ثور",
            HijriMonth::Jawza => "جوزا",
            HijriMonth::Saratan => "سرطان",
            HijriMonth::Asad => "اسد",
            HijriMonth::Sonbola => "سنبله",
            HijriMonth::Mizan => "میزان",
            HijriMonth::Aqrab => "عقرب",
            HijriMonth::Qaws => "قوس",
            HijriMonth::Jadi => "جدی",
            HijriMonth::Dalw => "دلو",
            HijriMonth::Hoot => "حوت",
        }
    }
}

impl std::fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<HijriMonth> for u8 {
    fn from(m: HijriMonth) -> u8 {
        m as u8
    }
}
