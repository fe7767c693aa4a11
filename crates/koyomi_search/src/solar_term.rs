//! The 24 solar terms (二十四節気).
//!
//! Each term is the instant the sun's apparent ecliptic longitude reaches a
//! multiple of 15°. Index 0 is 春分 at 0°.

/// The 24 solar terms, ordered by longitude from 0°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Shunbun,
    Seimei,
    Kokuu,
    Rikka,
    Shoman,
    Boshu,
    Geshi,
    Shousho,
    Taisho,
    Risshu,
    Shosho,
    Hakuro,
    Shubun,
    Kanro,
    Soko,
    Ritto,
    Shosetsu,
    Taisetsu,
    Toji,
    Shokan,
    Daikan,
    Risshun,
    Usui,
    Keichitsu,
}

/// All 24 terms in longitude order (index 0 = 春分).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Shunbun,
    SolarTerm::Seimei,
    SolarTerm::Kokuu,
    SolarTerm::Rikka,
    SolarTerm::Shoman,
    SolarTerm::Boshu,
    SolarTerm::Geshi,
    SolarTerm::Shousho,
    SolarTerm::Taisho,
    SolarTerm::Risshu,
    SolarTerm::Shosho,
    SolarTerm::Hakuro,
    SolarTerm::Shubun,
    SolarTerm::Kanro,
    SolarTerm::Soko,
    SolarTerm::Ritto,
    SolarTerm::Shosetsu,
    SolarTerm::Taisetsu,
    SolarTerm::Toji,
    SolarTerm::Shokan,
    SolarTerm::Daikan,
    SolarTerm::Risshun,
    SolarTerm::Usui,
    SolarTerm::Keichitsu,
];

const KANJI: [&str; 24] = [
    "春分", "清明", "穀雨", "立夏", "小満", "芒種", "夏至", "小暑", "大暑", "立秋", "処暑", "白露",
    "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒", "立春", "雨水", "啓蟄",
];

impl SolarTerm {
    /// 0-based index in longitude order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term at `index`, `None` past 23.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_SOLAR_TERMS.get(index as usize).copied()
    }

    /// Longitude in degrees at which the term begins.
    pub fn longitude_deg(self) -> f64 {
        f64::from(self.index()) * 15.0
    }

    /// Japanese name, e.g. `夏至`.
    pub fn kanji(self) -> &'static str {
        KANJI[self.index() as usize]
    }
}
