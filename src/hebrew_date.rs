use chrono::{Datelike, NaiveDate};

use crate::constants::*;
use crate::error::CalendarError;

/// Return true if the year is a Hebrew leap year. Years 3, 6, 8, 11, 14, 17
/// and 19 in the 19 year cycle are leap years.
pub fn is_leap_year(year: i32) -> bool {
    (7 * year + 1) % 19 < 7
}

/// The last month of a Hebrew year: Adar, or Adar II in a leap year.
pub fn last_month_of_year(year: i32) -> HebrewMonth {
    if is_leap_year(year) {
        HebrewMonth::AdarII
    } else {
        HebrewMonth::Adar
    }
}

/// Re-bases a Nissan-indexed month onto a Tishrei-indexed position, as the
/// molad year starts in Tishrei.
fn month_of_year(year: i32, month: HebrewMonth) -> i32 {
    let month = u8::from(month) as i32;
    let leap = is_leap_year(year);
    (month + if leap { 6 } else { 5 }) % if leap { 13 } else { 12 } + 1
}

/// The number of chalakim from the hypothetical molad tohu to the molad of
/// the given year and month.
pub fn chalakim_since_molad_tohu(year: i32, month: HebrewMonth) -> i64 {
    let prior = (year - 1) as i64;
    let months_elapsed = 235 * (prior / 19) // months in complete 19 year cycles so far
        + 12 * (prior % 19) // regular months in this cycle
        + (7 * (prior % 19) + 1) / 19 // leap months this cycle
        + (month_of_year(year, month) as i64 - 1); // months since the start of the year
    CHALAKIM_MOLAD_TOHU + CHALAKIM_PER_MONTH * months_elapsed
}

/// The number of days from the Sunday prior to molad tohu to Rosh Hashana of
/// the given year, after applying the four dechiyos.
pub fn elapsed_days(year: i32) -> i32 {
    let chalakim = chalakim_since_molad_tohu(year, HebrewMonth::Tishrei);
    let molad_day = chalakim / CHALAKIM_PER_DAY;
    let molad_parts = chalakim - molad_day * CHALAKIM_PER_DAY;

    let mut rosh_hashana_day = molad_day;
    // Molad Zaken: the molad is at or after midday (18 * 1080 chalakim).
    // GaTRaD: Tuesday, 9 hours 204 chalakim or later, in a non-leap year.
    // BeTuTaKFoT: Monday, 15 hours 589 chalakim or later, following a leap year.
    if molad_parts >= 19440
        || (molad_day % 7 == 2 && molad_parts >= 9924 && !is_leap_year(year))
        || (molad_day % 7 == 1 && molad_parts >= 16789 && is_leap_year(year - 1))
    {
        rosh_hashana_day += 1;
    }
    // Lo ADU Rosh: Rosh Hashana cannot fall on Sunday, Wednesday or Friday.
    if matches!(rosh_hashana_day % 7, 0 | 3 | 5) {
        rosh_hashana_day += 1;
    }
    rosh_hashana_day as i32
}

/// The number of days in a Hebrew year: 353, 354, 355, 383, 384 or 385.
pub fn days_in_year(year: i32) -> i32 {
    elapsed_days(year + 1) - elapsed_days(year)
}

/// Whether Cheshvan has 30 days in the given year.
pub fn is_cheshvan_long(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

/// Whether Kislev has 29 days in the given year.
pub fn is_kislev_short(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

/// The kviah of the year, derived from the Cheshvan and Kislev lengths.
pub fn kviah(year: i32) -> Kviah {
    match days_in_cheshvan_kislev(year) {
        (29, 29) => Kviah::Chaseirim,
        (30, 30) => Kviah::Shleimim,
        _ => Kviah::Kesidran,
    }
}

fn days_in_cheshvan_kislev(year: i32) -> (u8, u8) {
    let days = days_in_year(year);
    let cheshvan = if days % 10 == 5 { 30 } else { 29 };
    let kislev = if days % 10 == 3 { 29 } else { 30 };
    (cheshvan, kislev)
}

/// The number of days in a Hebrew month for a given year.
pub fn days_in_month(month: HebrewMonth, year: i32) -> u8 {
    match month {
        HebrewMonth::Iyar
        | HebrewMonth::Tammuz
        | HebrewMonth::Elul
        | HebrewMonth::Teves
        | HebrewMonth::AdarII => 29,
        HebrewMonth::Cheshvan => {
            if is_cheshvan_long(year) {
                30
            } else {
                29
            }
        }
        HebrewMonth::Kislev => {
            if is_kislev_short(year) {
                29
            } else {
                30
            }
        }
        HebrewMonth::Adar => {
            if is_leap_year(year) {
                30
            } else {
                29
            }
        }
        _ => 30,
    }
}

/// The month that follows within the Tishrei-to-Elul cycle of a year whose
/// leap status is `leap`. Elul wraps to Tishrei; the caller is responsible
/// for advancing the year number at that boundary.
pub(crate) fn month_after(month: HebrewMonth, leap: bool) -> HebrewMonth {
    match month {
        HebrewMonth::Elul => HebrewMonth::Tishrei,
        HebrewMonth::Adar if !leap => HebrewMonth::Nissan,
        HebrewMonth::AdarII => HebrewMonth::Nissan,
        _ => {
            // Every month but AdarII has a numeric successor in the enum
            #[allow(clippy::unwrap_used)]
            let next = HebrewMonth::try_from(u8::from(month) + 1).unwrap();
            next
        }
    }
}

/// The inverse of [`month_after`]. Tishrei wraps to Elul; the caller is
/// responsible for decrementing the year number at that boundary.
pub(crate) fn month_before(month: HebrewMonth, leap: bool) -> HebrewMonth {
    match month {
        HebrewMonth::Tishrei => HebrewMonth::Elul,
        HebrewMonth::Nissan => {
            if leap {
                HebrewMonth::AdarII
            } else {
                HebrewMonth::Adar
            }
        }
        _ => {
            // Every month but Nissan has a numeric predecessor in the enum
            #[allow(clippy::unwrap_used)]
            let previous = HebrewMonth::try_from(u8::from(month) - 1).unwrap();
            previous
        }
    }
}

/// The absolute day number of a Hebrew date. Day 1 is 1 January 1 CE.
pub fn hebrew_to_absolute(year: i32, month: HebrewMonth, day: u8) -> i32 {
    let leap = is_leap_year(year);
    let mut days = day as i32;
    if month < HebrewMonth::Tishrei {
        // From Nissan to Elul: add the months from Tishrei through the end
        // of the year, then from Nissan up to the requested month.
        let last = last_month_of_year(year);
        let mut m = HebrewMonth::Tishrei;
        loop {
            days += days_in_month(m, year) as i32;
            if m == last {
                break;
            }
            m = month_after(m, leap);
        }
        let mut m = HebrewMonth::Nissan;
        while m < month {
            days += days_in_month(m, year) as i32;
            m = month_after(m, leap);
        }
    } else {
        let mut m = HebrewMonth::Tishrei;
        while m < month {
            days += days_in_month(m, year) as i32;
            m = month_after(m, leap);
        }
    }
    days + elapsed_days(year) + HEBREW_EPOCH_OFFSET
}

fn validate(year: i32, month: HebrewMonth, day: u8) -> Result<(), CalendarError> {
    if month > last_month_of_year(year) {
        return Err(CalendarError::InvalidMonth {
            year,
            month: month.into(),
        });
    }
    if day < 1 || day > days_in_month(month, year) {
        return Err(CalendarError::InvalidDay {
            year,
            month: month.into(),
            day,
        });
    }
    // Dates before 18 Teves 3761 precede 1 Jan 1 CE. Tishrei through Kislev
    // of 3761 fall in 2 BCE; Shevat and Adar of 3761 are already in 1 CE.
    let before_epoch = year < 3761
        || (year == 3761
            && ((month >= HebrewMonth::Tishrei && month < HebrewMonth::Teves)
                || (month == HebrewMonth::Teves && day < 18)));
    if before_epoch {
        return Err(CalendarError::BeforeEpoch {
            year,
            month: month.into(),
            day,
        });
    }
    Ok(())
}

/// The time of a molad within its day: hours, minutes and chalakim, where a
/// chelek is 1/18 of a minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Molad {
    hours: u8,
    minutes: u8,
    chalakim: u8,
}

impl Molad {
    pub fn new(hours: i64, minutes: i64, chalakim: i64) -> Result<Self, CalendarError> {
        if !(0..24).contains(&hours) || !(0..60).contains(&minutes) || !(0..18).contains(&chalakim)
        {
            return Err(CalendarError::InvalidMolad {
                hours,
                minutes,
                chalakim,
            });
        }
        Ok(Molad {
            hours: hours as u8,
            minutes: minutes as u8,
            chalakim: chalakim as u8,
        })
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn chalakim(&self) -> u8 {
        self.chalakim
    }
}

/// A date in the Hebrew calendar, paired with its absolute day number
/// (day 1 = 1 January 1 CE). The pairing is re-established by every
/// constructor and mutator; the two representations never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HebrewDate {
    year: i32,
    month: HebrewMonth,
    day: u8,
    ordinal: i32,
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.ordinal.cmp(&other.ordinal)
    }
}

impl HebrewDate {
    /// Creates a date from a Hebrew (year, month, day) triple.
    pub fn from_hebrew(year: i32, month: HebrewMonth, day: u8) -> Result<Self, CalendarError> {
        validate(year, month, day)?;
        Ok(HebrewDate {
            year,
            month,
            day,
            ordinal: hebrew_to_absolute(year, month, day),
        })
    }

    /// Creates a date from a proleptic Gregorian (year, month, day) triple.
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let civil = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::InvalidCivil { year, month, day })?;
        Self::from_civil(civil)
    }

    /// Creates a date from a chrono civil date.
    pub fn from_civil(civil: NaiveDate) -> Result<Self, CalendarError> {
        Self::from_ordinal(civil.num_days_from_ce())
    }

    /// Creates a date from an absolute day number.
    pub fn from_ordinal(ordinal: i32) -> Result<Self, CalendarError> {
        if ordinal < 1 {
            return Err(CalendarError::InvalidOrdinal(ordinal));
        }
        let civil = NaiveDate::from_num_days_from_ce_opt(ordinal)
            .ok_or(CalendarError::InvalidOrdinal(ordinal))?;

        // Approximate the Hebrew year from the civil year, then search
        // forward. The approximation is off by at most one.
        let mut year = civil.year() + 3760;
        loop {
            let next_rosh_hashana = hebrew_to_absolute(year + 1, HebrewMonth::Tishrei, 1);
            if ordinal < next_rosh_hashana {
                break;
            }
            year += 1;
            if ordinal - next_rosh_hashana < 353 {
                break;
            }
        }

        let leap = is_leap_year(year);
        let mut month = HebrewMonth::Tishrei;
        let mut remaining = ordinal - hebrew_to_absolute(year, HebrewMonth::Tishrei, 1);
        // Walk month by month; Cheshvan and Kislev vary, so each step asks
        // for the month length rather than assuming an alternation.
        loop {
            let len = days_in_month(month, year) as i32;
            if remaining < len {
                break;
            }
            remaining -= len;
            month = month_after(month, leap);
        }

        Ok(HebrewDate {
            year,
            month,
            day: (remaining + 1) as u8,
            ordinal,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> HebrewMonth {
        self.month
    }

    pub fn day_of_month(&self) -> u8 {
        self.day
    }

    /// The absolute day number. Day 1 is 1 January 1 CE.
    pub fn ordinal(&self) -> i32 {
        self.ordinal
    }

    /// The civil (proleptic Gregorian) date.
    pub fn civil_date(&self) -> NaiveDate {
        // The ordinal was validated at construction and is always within
        // chrono's range
        #[allow(clippy::unwrap_used)]
        let civil = NaiveDate::from_num_days_from_ce_opt(self.ordinal).unwrap();
        civil
    }

    pub fn day_of_week(&self) -> Weekday {
        match self.civil_date().weekday() {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Shabbos,
        }
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub fn days_in_year(&self) -> i32 {
        days_in_year(self.year)
    }

    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.month, self.year)
    }

    pub fn is_cheshvan_long(&self) -> bool {
        is_cheshvan_long(self.year)
    }

    pub fn is_kislev_short(&self) -> bool {
        is_kislev_short(self.year)
    }

    pub fn kviah(&self) -> Kviah {
        kviah(self.year)
    }

    /// Days since Rosh Hashana of the current year, counting Rosh Hashana
    /// itself as day 1.
    pub fn days_since_start_of_year(&self) -> i32 {
        self.ordinal - hebrew_to_absolute(self.year, HebrewMonth::Tishrei, 1) + 1
    }

    pub fn chalakim_since_molad_tohu(&self) -> i64 {
        chalakim_since_molad_tohu(self.year, self.month)
    }

    /// The molad of the current month, as the date it falls on together with
    /// its time of day.
    ///
    /// The raw molad hour count starts at 6 p.m. of the prior evening. The
    /// value reported here is rolled onto the following civil day when the
    /// raw hours reach 6 and shifted by 18 hours, so that hours count from
    /// midnight of the civil day of the molad. The molad of Adar II 5771,
    /// conventionally given as 7 chalakim after midnight on 29 Adar I
    /// (5 March 2011), therefore reports as 0h 0m 7ch on that date.
    pub fn molad(&self) -> Result<(HebrewDate, Molad), CalendarError> {
        let chalakim = self.chalakim_since_molad_tohu();
        let molad_day = chalakim / CHALAKIM_PER_DAY;
        let parts = chalakim - molad_day * CHALAKIM_PER_DAY;

        let mut hours = parts / CHALAKIM_PER_HOUR;
        let parts = parts - hours * CHALAKIM_PER_HOUR;
        let minutes = parts / CHALAKIM_PER_MINUTE;
        let chalakim = parts - minutes * CHALAKIM_PER_MINUTE;

        let mut ordinal = molad_day as i32 + HEBREW_EPOCH_OFFSET;
        if hours >= 6 {
            ordinal += 1;
        }
        hours = (hours + 18) % 24;

        Ok((
            HebrewDate::from_ordinal(ordinal)?,
            Molad::new(hours, minutes, chalakim)?,
        ))
    }

    /// Rolls the date forward one day.
    pub fn forward(&mut self) {
        if self.day < days_in_month(self.month, self.year) {
            self.day += 1;
        } else {
            self.day = 1;
            let next = month_after(self.month, is_leap_year(self.year));
            if self.month == HebrewMonth::Elul {
                self.year += 1;
            }
            self.month = next;
        }
        self.ordinal += 1;
    }

    /// Rolls the date back one day. Fails when stepping before 18 Teves 3761.
    pub fn back(&mut self) -> Result<(), CalendarError> {
        if self.ordinal <= 1 {
            return Err(CalendarError::InvalidOrdinal(self.ordinal - 1));
        }
        if self.day > 1 {
            self.day -= 1;
        } else {
            if self.month == HebrewMonth::Tishrei {
                self.year -= 1;
            }
            self.month = month_before(self.month, is_leap_year(self.year));
            self.day = days_in_month(self.month, self.year);
        }
        self.ordinal -= 1;
        Ok(())
    }
}
