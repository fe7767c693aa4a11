//! Sexagenary (60-element) cycle indexing of days and years.
//!
//! Ten stems and twelve branches advance in lock-step from a single
//! counter, so only 60 of the 120 stem/branch pairs ever occur. The counter
//! is the Euclidean remainder of the distance from a configurable epoch,
//! which keeps dates and years before the epoch well defined.

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

/// Length of the cycle.
pub const CYCLE_LEN: u8 = 60;

/// Number of heavenly stems.
pub const STEM_COUNT: u8 = 10;

/// Number of earthly branches.
pub const BRANCH_COUNT: u8 = 12;

/// Stem names, index 0 = 甲.
pub const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// Branch names, index 0 = 子.
pub const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Stem index of 戊, the stem of social days.
pub const STEM_TSUCHINOE: u8 = 4;

/// One position in the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CycleEntry {
    ordinal: u8,
    stem: u8,
    branch: u8,
}

impl CycleEntry {
    /// Entry at counter value `n` (any integer, reduced mod 60).
    pub fn from_offset(n: i64) -> Self {
        let k = n.rem_euclid(i64::from(CYCLE_LEN)) as u8;
        Self {
            ordinal: k + 1,
            stem: k % STEM_COUNT,
            branch: k % BRANCH_COUNT,
        }
    }

    /// Entry with the given 1-based ordinal, `None` outside 1..=60.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        (1..=CYCLE_LEN)
            .contains(&ordinal)
            .then(|| Self::from_offset(i64::from(ordinal) - 1))
    }

    /// Entry with the given stem and branch.
    ///
    /// `None` when the indices are out of range or of different parity;
    /// such pairs never occur in the cycle.
    pub fn from_stem_branch(stem: u8, branch: u8) -> Option<Self> {
        if stem >= STEM_COUNT || branch >= BRANCH_COUNT || stem % 2 != branch % 2 {
            return None;
        }
        // n ≡ stem (mod 10), n ≡ branch (mod 12)
        let n = 6 * i64::from(stem) - 5 * i64::from(branch);
        Some(Self::from_offset(n))
    }

    /// 1-based position, 1 = 甲子 .. 60 = 癸亥.
    pub fn ordinal(self) -> u8 {
        self.ordinal
    }

    /// Stem index 0..=9.
    pub fn stem(self) -> u8 {
        self.stem
    }

    /// Branch index 0..=11.
    pub fn branch(self) -> u8 {
        self.branch
    }

    pub fn stem_name(self) -> &'static str {
        STEM_NAMES[self.stem as usize]
    }

    pub fn branch_name(self) -> &'static str {
        BRANCH_NAMES[self.branch as usize]
    }

    /// Two-character name, e.g. `甲子`.
    pub fn name(self) -> String {
        format!("{}{}", self.stem_name(), self.branch_name())
    }
}

impl Display for CycleEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem_name(), self.branch_name())
    }
}

/// Maps calendar dates and years to cycle entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleIndex {
    epoch_date: NaiveDate,
    epoch_year: i32,
}

/// 2024-01-01, a 甲子 day.
pub fn default_epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Year 4 CE was a 甲子 year, so `stem = (year + 6) mod 10` and
/// `branch = (year + 8) mod 12`.
pub const DEFAULT_EPOCH_YEAR: i32 = 4;

impl Default for CycleIndex {
    fn default() -> Self {
        Self::new(default_epoch_date(), DEFAULT_EPOCH_YEAR)
    }
}

impl CycleIndex {
    /// Index anchored so that `epoch_date` and `epoch_year` are ordinal 1.
    pub fn new(epoch_date: NaiveDate, epoch_year: i32) -> Self {
        Self {
            epoch_date,
            epoch_year,
        }
    }

    pub fn epoch_date(&self) -> NaiveDate {
        self.epoch_date
    }

    pub fn epoch_year(&self) -> i32 {
        self.epoch_year
    }

    /// Entry of a calendar date.
    pub fn for_date(&self, date: NaiveDate) -> CycleEntry {
        CycleEntry::from_offset((date - self.epoch_date).num_days())
    }

    /// Entry of a year.
    pub fn for_year(&self, year: i32) -> CycleEntry {
        CycleEntry::from_offset(i64::from(year) - i64::from(self.epoch_year))
    }

    /// Every date in `[first, last]` whose entry satisfies `pred`.
    pub fn dates_matching<F>(&self, first: NaiveDate, last: NaiveDate, pred: F) -> Vec<NaiveDate>
    where
        F: Fn(CycleEntry) -> bool,
    {
        first
            .iter_days()
            .take_while(|d| *d <= last)
            .filter(|d| pred(self.for_date(*d)))
            .collect()
    }
}
