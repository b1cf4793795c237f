use chrono::{Datelike, NaiveDate};

use crate::constants::HebrewMonth as M;
use crate::constants::Weekday as W;
use crate::constants::*;
use crate::daf::Daf;
use crate::error::CalendarError;
use crate::hebrew_date::{self, HebrewDate};
use crate::parshas;

/// Holidays keyed by (month, day).
type HolidayEntry = (M, u8, Holiday);
/// Weekday-sensitive observances keyed by (month, day, weekday).
type ObservedEntry = (M, u8, W, Holiday);

static HOLIDAYS_DIASPORA: &[HolidayEntry] = &[
    (M::Nissan, 14, Holiday::ErevPesach),
    (M::Nissan, 15, Holiday::Pesach),
    (M::Nissan, 16, Holiday::Pesach),
    (M::Nissan, 17, Holiday::CholHamoedPesach),
    (M::Nissan, 18, Holiday::CholHamoedPesach),
    (M::Nissan, 19, Holiday::CholHamoedPesach),
    (M::Nissan, 20, Holiday::CholHamoedPesach),
    (M::Nissan, 21, Holiday::Pesach),
    (M::Nissan, 22, Holiday::Pesach),
    (M::Iyar, 14, Holiday::PesachSheni),
    (M::Iyar, 18, Holiday::LagBaomer),
    (M::Sivan, 5, Holiday::ErevShavuos),
    (M::Sivan, 6, Holiday::Shavuos),
    (M::Sivan, 7, Holiday::Shavuos),
    (M::Av, 15, Holiday::TuBeav),
    (M::Elul, 29, Holiday::ErevRoshHashana),
    (M::Tishrei, 1, Holiday::RoshHashana),
    (M::Tishrei, 2, Holiday::RoshHashana),
    (M::Tishrei, 9, Holiday::ErevYomKippur),
    (M::Tishrei, 10, Holiday::YomKippur),
    (M::Tishrei, 14, Holiday::ErevSuccos),
    (M::Tishrei, 15, Holiday::Succos),
    (M::Tishrei, 16, Holiday::Succos),
    (M::Tishrei, 17, Holiday::CholHamoedSuccos),
    (M::Tishrei, 18, Holiday::CholHamoedSuccos),
    (M::Tishrei, 19, Holiday::CholHamoedSuccos),
    (M::Tishrei, 20, Holiday::CholHamoedSuccos),
    (M::Tishrei, 21, Holiday::HoshanaRabba),
    (M::Tishrei, 22, Holiday::SheminiAtzeres),
    (M::Tishrei, 23, Holiday::SimchasTorah),
    (M::Kislev, 25, Holiday::Chanukah),
    (M::Kislev, 26, Holiday::Chanukah),
    (M::Kislev, 27, Holiday::Chanukah),
    (M::Kislev, 28, Holiday::Chanukah),
    (M::Kislev, 29, Holiday::Chanukah),
    // 30 Kislev only exists when Kislev is full, but when it exists it is
    // always Chanukah.
    (M::Kislev, 30, Holiday::Chanukah),
    (M::Teves, 1, Holiday::Chanukah),
    (M::Teves, 2, Holiday::Chanukah),
    (M::Teves, 10, Holiday::TenthOfTeves),
    (M::Shevat, 15, Holiday::TuBeshvat),
    (M::AdarII, 14, Holiday::Purim),
    (M::AdarII, 15, Holiday::ShushanPurim),
];

static HOLIDAYS_ISRAEL: &[HolidayEntry] = &[
    (M::Nissan, 14, Holiday::ErevPesach),
    (M::Nissan, 15, Holiday::Pesach),
    (M::Nissan, 16, Holiday::CholHamoedPesach),
    (M::Nissan, 17, Holiday::CholHamoedPesach),
    (M::Nissan, 18, Holiday::CholHamoedPesach),
    (M::Nissan, 19, Holiday::CholHamoedPesach),
    (M::Nissan, 20, Holiday::CholHamoedPesach),
    (M::Nissan, 21, Holiday::Pesach),
    (M::Iyar, 14, Holiday::PesachSheni),
    (M::Iyar, 18, Holiday::LagBaomer),
    (M::Sivan, 5, Holiday::ErevShavuos),
    (M::Sivan, 6, Holiday::Shavuos),
    (M::Av, 15, Holiday::TuBeav),
    (M::Elul, 29, Holiday::ErevRoshHashana),
    (M::Tishrei, 1, Holiday::RoshHashana),
    (M::Tishrei, 2, Holiday::RoshHashana),
    (M::Tishrei, 9, Holiday::ErevYomKippur),
    (M::Tishrei, 10, Holiday::YomKippur),
    (M::Tishrei, 14, Holiday::ErevSuccos),
    (M::Tishrei, 15, Holiday::Succos),
    (M::Tishrei, 16, Holiday::CholHamoedSuccos),
    (M::Tishrei, 17, Holiday::CholHamoedSuccos),
    (M::Tishrei, 18, Holiday::CholHamoedSuccos),
    (M::Tishrei, 19, Holiday::CholHamoedSuccos),
    (M::Tishrei, 20, Holiday::CholHamoedSuccos),
    (M::Tishrei, 21, Holiday::HoshanaRabba),
    (M::Tishrei, 22, Holiday::SheminiAtzeres),
    (M::Kislev, 25, Holiday::Chanukah),
    (M::Kislev, 26, Holiday::Chanukah),
    (M::Kislev, 27, Holiday::Chanukah),
    (M::Kislev, 28, Holiday::Chanukah),
    (M::Kislev, 29, Holiday::Chanukah),
    (M::Kislev, 30, Holiday::Chanukah),
    (M::Teves, 1, Holiday::Chanukah),
    (M::Teves, 2, Holiday::Chanukah),
    (M::Teves, 10, Holiday::TenthOfTeves),
    (M::Shevat, 15, Holiday::TuBeshvat),
    (M::AdarII, 14, Holiday::Purim),
    (M::AdarII, 15, Holiday::ShushanPurim),
];

/// Observed dates of fasts displaced off Shabbos: the Sunday deferrals, and
/// the Fast of Esther advanced to the preceding Thursday.
static FAST_DAYS_NIDCHE: &[ObservedEntry] = &[
    (M::Tammuz, 18, W::Sunday, Holiday::SeventeenOfTammuz),
    (M::Av, 10, W::Sunday, Holiday::TishaBeav),
    (M::Tishrei, 4, W::Sunday, Holiday::FastOfGedalyah),
    (M::AdarII, 11, W::Thursday, Holiday::FastOfEsther),
    (M::AdarII, 12, W::Thursday, Holiday::FastOfEsther),
];

static FAST_DAYS_NORMAL: &[HolidayEntry] = &[
    (M::Tammuz, 17, Holiday::SeventeenOfTammuz),
    (M::Av, 9, Holiday::TishaBeav),
    (M::Tishrei, 3, Holiday::FastOfGedalyah),
    (M::AdarII, 13, Holiday::FastOfEsther),
];

fn lookup(table: &[HolidayEntry], month: M, day: u8) -> Option<Holiday> {
    table
        .iter()
        .find(|(m, d, _)| *m == month && *d == day)
        .map(|(_, _, holiday)| *holiday)
}

/// The modern Israeli holidays with their weekday-sensitive observance
/// shifts: Yom HaShoah moves off Friday and Sunday, Yom Hazikaron and Yom
/// Ha'atzmaut are shifted so that neither falls adjacent to Shabbos, and
/// Yom Yerushalayim is fixed on 28 Iyar.
fn modern_holiday(month: M, day: u8, weekday: W) -> Option<Holiday> {
    match month {
        M::Nissan => {
            if (day == 26 && weekday == W::Thursday)
                || (day == 28 && weekday == W::Monday)
                || (day == 27 && weekday != W::Sunday && weekday != W::Friday)
            {
                return Some(Holiday::YomHashoah);
            }
            None
        }
        M::Iyar => {
            if (day == 4 && weekday == W::Tuesday)
                || ((day == 2 || day == 3) && weekday == W::Wednesday)
                || (day == 5 && weekday == W::Monday)
            {
                return Some(Holiday::YomHazikaron);
            }
            if (day == 5 && weekday == W::Wednesday)
                || ((day == 3 || day == 4) && weekday == W::Thursday)
                || (day == 6 && weekday == W::Tuesday)
            {
                return Some(Holiday::YomHaatzmaut);
            }
            if day == 28 {
                return Some(Holiday::YomYerushalayim);
            }
            None
        }
        _ => None,
    }
}

/// A Hebrew date together with the locale settings that fix which holiday
/// and parsha scheme applies. All classifications are computed on demand
/// from the immutable (date, locale) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HebrewCalendar {
    date: HebrewDate,
    in_israel: bool,
    use_modern_holidays: bool,
}

impl HebrewCalendar {
    pub fn new(date: HebrewDate, in_israel: bool, use_modern_holidays: bool) -> Self {
        HebrewCalendar {
            date,
            in_israel,
            use_modern_holidays,
        }
    }

    pub fn from_hebrew(
        year: i32,
        month: M,
        day: u8,
        in_israel: bool,
        use_modern_holidays: bool,
    ) -> Result<Self, CalendarError> {
        Ok(Self::new(
            HebrewDate::from_hebrew(year, month, day)?,
            in_israel,
            use_modern_holidays,
        ))
    }

    pub fn from_gregorian(
        year: i32,
        month: u32,
        day: u32,
        in_israel: bool,
        use_modern_holidays: bool,
    ) -> Result<Self, CalendarError> {
        Ok(Self::new(
            HebrewDate::from_gregorian(year, month, day)?,
            in_israel,
            use_modern_holidays,
        ))
    }

    pub fn date(&self) -> &HebrewDate {
        &self.date
    }

    pub fn in_israel(&self) -> bool {
        self.in_israel
    }

    pub fn use_modern_holidays(&self) -> bool {
        self.use_modern_holidays
    }

    pub fn forward(&mut self) {
        self.date.forward();
    }

    pub fn back(&mut self) -> Result<(), CalendarError> {
        self.date.back()
    }

    /// Classifies the day as a holiday, fast or commemoration, or `None` for
    /// an ordinary day.
    ///
    /// The lookup consults, in order: the base holiday table of the locale,
    /// the displaced-fast table, the regular fast days (skipped on Shabbos,
    /// when every fast but Yom Kippur is displaced), the modern holidays
    /// when enabled, and the special cases of Chanukah running into Teves
    /// and of Purim in Adar and Adar I.
    pub fn yom_tov_index(&self) -> Option<Holiday> {
        let month = self.date.month();
        let day = self.date.day_of_month();
        let weekday = self.date.day_of_week();

        let table = if self.in_israel {
            HOLIDAYS_ISRAEL
        } else {
            HOLIDAYS_DIASPORA
        };
        let mut index = lookup(table, month, day);

        if let Some((_, _, _, holiday)) = FAST_DAYS_NIDCHE
            .iter()
            .find(|(m, d, w, _)| *m == month && *d == day && *w == weekday)
        {
            index = Some(*holiday);
        }
        if index.is_none() && weekday != W::Shabbos {
            index = lookup(FAST_DAYS_NORMAL, month, day);
        }
        if self.use_modern_holidays {
            if let Some(holiday) = modern_holiday(month, day, weekday) {
                index = Some(holiday);
            }
        }
        if index.is_none() {
            index = match month {
                // The last days of Chanukah fall in Teves; when Kislev is
                // short the eighth day is 3 Teves.
                M::Teves if day == 3 && self.date.is_kislev_short() => Some(Holiday::Chanukah),
                M::Adar if !self.date.is_leap_year() => {
                    if ((day == 11 || day == 12) && weekday == W::Thursday)
                        || (day == 13 && weekday != W::Friday && weekday != W::Shabbos)
                    {
                        Some(Holiday::FastOfEsther)
                    } else if day == 14 {
                        Some(Holiday::Purim)
                    } else if day == 15 {
                        Some(Holiday::ShushanPurim)
                    } else {
                        None
                    }
                }
                M::Adar if day == 14 => Some(Holiday::PurimKatan),
                _ => None,
            };
        }
        index
    }

    /// True for Yom Tov proper: erev days, Chanukah and the fasts other
    /// than Yom Kippur do not count.
    pub fn is_yom_tov(&self) -> bool {
        let Some(holiday) = self.yom_tov_index() else {
            return false;
        };
        if self.is_erev_yom_tov() || holiday == Holiday::Chanukah {
            return false;
        }
        !(self.is_taanis() && holiday != Holiday::YomKippur)
    }

    pub fn is_chol_hamoed(&self) -> bool {
        matches!(
            self.yom_tov_index(),
            Some(Holiday::CholHamoedPesach) | Some(Holiday::CholHamoedSuccos)
        )
    }

    pub fn is_erev_yom_tov(&self) -> bool {
        matches!(
            self.yom_tov_index(),
            Some(Holiday::ErevPesach)
                | Some(Holiday::ErevShavuos)
                | Some(Holiday::ErevRoshHashana)
                | Some(Holiday::ErevYomKippur)
                | Some(Holiday::ErevSuccos)
        )
    }

    pub fn is_taanis(&self) -> bool {
        matches!(
            self.yom_tov_index(),
            Some(Holiday::SeventeenOfTammuz)
                | Some(Holiday::TishaBeav)
                | Some(Holiday::YomKippur)
                | Some(Holiday::FastOfGedalyah)
                | Some(Holiday::TenthOfTeves)
                | Some(Holiday::FastOfEsther)
        )
    }

    /// Rosh Hashana itself is not Rosh Chodesh, and a 30th of a month is
    /// always the first day of a two-day Rosh Chodesh.
    pub fn is_rosh_chodesh(&self) -> bool {
        let day = self.date.day_of_month();
        (day == 1 && self.date.month() != M::Tishrei) || day == 30
    }

    /// Erev Rosh Hashana is not Erev Rosh Chodesh.
    pub fn is_erev_rosh_chodesh(&self) -> bool {
        self.date.day_of_month() == 29 && self.date.month() != M::Elul
    }

    pub fn is_chanukah(&self) -> bool {
        self.yom_tov_index() == Some(Holiday::Chanukah)
    }

    /// The day of Chanukah, 1..=8, or `None` outside of Chanukah.
    pub fn day_of_chanukah(&self) -> Option<u8> {
        if !self.is_chanukah() {
            return None;
        }
        let day = self.date.day_of_month();
        if self.date.month() == M::Kislev {
            Some(day - 24)
        } else if self.date.is_kislev_short() {
            Some(day + 5)
        } else {
            Some(day + 6)
        }
    }

    /// The day of the Omer count, 1..=49, or `None` outside the count.
    pub fn day_of_omer(&self) -> Option<u8> {
        let day = self.date.day_of_month();
        match self.date.month() {
            M::Nissan if day >= 16 => Some(day - 15),
            M::Iyar => Some(day + 15),
            M::Sivan if day < 6 => Some(day + 44),
            _ => None,
        }
    }

    /// The weekly reading of this Shabbos, or `None` on a weekday or on a
    /// Shabbos whose reading is displaced by a Yom Tov.
    pub fn parsha(&self) -> Result<Option<Parsha>, CalendarError> {
        if self.date.day_of_week() != W::Shabbos {
            return Ok(None);
        }
        let year = self.date.year();
        let rosh_hashana = HebrewDate::from_hebrew(year, M::Tishrei, 1)?;
        let rh_weekday = rosh_hashana.day_of_week();
        let week =
            ((self.date.ordinal() - rosh_hashana.ordinal()) - (7 - u8::from(rh_weekday) as i32))
                / 7;
        let schedule = parshas::schedule_for_year_type(
            rh_weekday,
            hebrew_date::kviah(year),
            hebrew_date::is_leap_year(year),
            self.in_israel,
        )?;
        Ok(schedule.get(week as usize).copied().flatten())
    }

    /// The Daf Yomi Bavli page for the day, or `None` before the first
    /// cycle began on 11 September 1923.
    ///
    /// The Shekalim tractate was lengthened from 13 to 22 blatt when the
    /// eighth cycle began on 24 June 1975, switching from an older Vilna
    /// pagination to the Jerusalem Talmud pagination. Cycles run 2702 days
    /// before the change and 2711 days from it.
    pub fn daf_yomi_bavli(&self) -> Option<Daf> {
        static BLATT_PER_TRACTATE: [i32; 40] = [
            64, 157, 105, 121, 22, 88, 56, 40, 35, 31, 32, 29, 27, 122, 112, 91, 66, 49, 90, 82,
            119, 119, 176, 113, 24, 49, 76, 14, 120, 110, 142, 61, 34, 34, 28, 22, 4, 10, 4, 73,
        ];

        let ordinal = self.date.ordinal();
        let cycle_start = NaiveDate::from_ymd_opt(1923, 9, 11)?.num_days_from_ce();
        let shekalim_change = NaiveDate::from_ymd_opt(1975, 6, 24)?.num_days_from_ce();
        if ordinal < cycle_start {
            return None;
        }

        let (cycle, day_in_cycle) = if ordinal >= shekalim_change {
            (
                8 + (ordinal - shekalim_change) / 2711,
                (ordinal - shekalim_change) % 2711,
            )
        } else {
            (
                1 + (ordinal - cycle_start) / 2702,
                (ordinal - cycle_start) % 2702,
            )
        };

        // The shared table carries the modern Shekalim length; take a copy
        // for the older cycles rather than touching the static.
        let mut blatt_per_tractate = BLATT_PER_TRACTATE;
        if cycle <= 7 {
            blatt_per_tractate[4] = 13;
        }

        let mut total = 0;
        for (index, length) in blatt_per_tractate.iter().enumerate() {
            total += length - 1;
            if day_in_cycle < total {
                let mut page = 1 + length - (total - day_in_cycle);
                // Kinnim, Tamid and Midos traditionally begin past daf 2.
                page += match index {
                    36 => 21,
                    37 => 24,
                    38 => 33,
                    _ => 0,
                };
                let tractate = BavliTractate::try_from(index as u8).ok()?;
                return Some(Daf {
                    tractate,
                    page: page as u16,
                });
            }
        }
        None
    }
}
