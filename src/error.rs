use thiserror::Error;

use crate::constants::Kviah;

/// Errors surfaced by the calendar engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The Hebrew month is outside 1..=12 (or 1..=13 in a leap year).
    #[error("month {month} is invalid for Hebrew year {year}")]
    InvalidMonth { year: i32, month: u8 },

    /// The day of month does not exist in the given month and year.
    #[error("day {day} is invalid for month {month} of Hebrew year {year}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    /// The date is earlier than 18 Teves 3761, the Hebrew equivalent of
    /// 1 January 1 CE, which is the earliest supported date.
    #[error("{year}-{month}-{day} is earlier than 18 Teves 3761 (1 Jan 1 CE)")]
    BeforeEpoch { year: i32, month: u8, day: u8 },

    /// The civil (year, month, day) triple does not name a real date.
    #[error("{year}-{month:02}-{day:02} is not a valid civil date")]
    InvalidCivil { year: i32, month: u32, day: u32 },

    /// The absolute day number precedes 1 January 1 CE, or falls outside
    /// the range representable as a civil date.
    #[error("absolute day {0} is outside the supported range")]
    InvalidOrdinal(i32),

    /// A molad component is out of range: hours must be 0..=23, minutes
    /// 0..=59 and chalakim 0..=17. Larger chalakim counts should be broken
    /// into minutes at 18 chalakim per minute.
    #[error("molad {hours}h {minutes}m {chalakim}ch has a component out of range")]
    InvalidMolad { hours: i64, minutes: i64, chalakim: i64 },

    /// The Hebrew numeral formatter only handles 0..=9999.
    #[error("{0} cannot be formatted as a Hebrew numeral (supported range 0..=9999)")]
    NumeralOutOfRange(i32),

    /// No parsha schedule exists for the computed year type. The dechiyos
    /// only ever produce fourteen year types per locale, so reaching this
    /// indicates a defect in the elapsed-days computation.
    #[error(
        "no parsha schedule for year type (rosh hashana weekday {rosh_hashana_weekday}, \
         {kviah:?}, leap {leap})"
    )]
    UnreachableConfiguration {
        rosh_hashana_weekday: u8,
        kviah: Kviah,
        leap: bool,
    },
}
