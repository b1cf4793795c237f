use crate::constants::*;
use crate::daf::Daf;
use crate::error::CalendarError;
use crate::hebrew_calendar::HebrewCalendar;
use crate::hebrew_date::{self, HebrewDate, Molad};

/// Punctuation mark signalling a single-letter numeral.
pub const GERESH: char = '\u{05F3}';
/// Punctuation mark inserted before the last letter of a numeral.
pub const GERSHAYIM: char = '\u{05F4}';

const HUNDREDS: [&str; 10] = ["", "ק", "ר", "ש", "ת", "תק", "תר", "תש", "תת", "תתק"];
const TENS: [&str; 10] = ["", "י", "כ", "ל", "מ", "נ", "ס", "ע", "פ", "צ"];
// Sofit forms, so a year like 5750 ends with a final nun.
const TENS_FINAL: [&str; 10] = ["", "י", "ך", "ל", "ם", "ן", "ס", "ע", "ף", "ץ"];
const ONES: [&str; 10] = ["", "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט"];
const ALAFIM: &str = "אלפים";
const EFES: &str = "אפס";

/// Formats dates, holidays and numerals in Hebrew script or transliterated
/// Latin characters.
#[derive(Debug, Clone)]
pub struct HebrewDateFormatter {
    /// Hebrew script instead of transliteration.
    pub hebrew: bool,
    /// Decorate numerals with geresh and gershayim.
    pub use_gersh_gershayim: bool,
    /// Prefix Hebrew years with their thousands digit.
    pub use_long_hebrew_years: bool,
}

impl Default for HebrewDateFormatter {
    fn default() -> Self {
        HebrewDateFormatter {
            hebrew: false,
            use_gersh_gershayim: true,
            use_long_hebrew_years: false,
        }
    }
}

impl HebrewDateFormatter {
    /// Renders a number 0..=9999 in Hebrew letters.
    ///
    /// 15 and 16 are written טו and טז to avoid the divine-name digraphs.
    /// Numbers up to 10, round tens below 100 and round hundreds up to 400
    /// take a geresh after their single trailing letter; all other numbers
    /// take a gershayim before the last letter.
    pub fn format_hebrew_number(&self, number: i32) -> Result<String, CalendarError> {
        if !(0..=9999).contains(&number) {
            return Err(CalendarError::NumeralOutOfRange(number));
        }
        if number == 0 {
            return Ok(EFES.to_string());
        }

        let thousands = (number / 1000) as usize;
        let remainder = number % 1000;

        let mut out = String::new();
        if remainder == 0 {
            // Clean thousands such as 5000.
            out.push_str(ONES[thousands]);
            if self.use_gersh_gershayim {
                out.push(GERESH);
            }
            out.push(' ');
            out.push_str(ALAFIM);
            return Ok(out);
        }
        if self.use_long_hebrew_years && thousands > 0 {
            out.push_str(ONES[thousands]);
            if self.use_gersh_gershayim {
                out.push(GERESH);
            }
            out.push(' ');
        }

        let single_digit_number = remainder < 11
            || (remainder < 100 && remainder % 10 == 0)
            || (remainder <= 400 && remainder % 100 == 0);

        let mut tail = String::new();
        tail.push_str(HUNDREDS[(remainder / 100) as usize]);
        let below_hundred = remainder % 100;
        if below_hundred == 15 {
            tail.push_str("טו");
        } else if below_hundred == 16 {
            tail.push_str("טז");
        } else {
            let tens = (below_hundred / 10) as usize;
            let ones = (below_hundred % 10) as usize;
            if ones == 0 {
                if single_digit_number {
                    tail.push_str(TENS[tens]);
                } else {
                    tail.push_str(TENS_FINAL[tens]);
                }
            } else {
                tail.push_str(TENS[tens]);
                tail.push_str(ONES[ones]);
            }
        }

        if self.use_gersh_gershayim {
            if single_digit_number {
                tail.push(GERESH);
            } else if let Some((last, _)) = tail.char_indices().last() {
                tail.insert(last, GERSHAYIM);
            }
        }
        out.push_str(&tail);
        Ok(out)
    }

    /// Formats a date as "21 Shevat, 5729" or "כ״א שבט תשכ״ט".
    pub fn format_date(&self, date: &HebrewDate) -> Result<String, CalendarError> {
        if self.hebrew {
            Ok(format!(
                "{} {} {}",
                self.format_hebrew_number(date.day_of_month() as i32)?,
                self.format_month(date),
                self.format_hebrew_number(date.year())?
            ))
        } else {
            Ok(format!(
                "{} {}, {}",
                date.day_of_month(),
                self.format_month(date),
                date.year()
            ))
        }
    }

    /// The month name, with Adar I / Adar II distinguished in leap years.
    pub fn format_month(&self, date: &HebrewDate) -> String {
        self.month_name(date.month(), date.is_leap_year())
    }

    fn month_name(&self, month: HebrewMonth, leap: bool) -> String {
        if self.hebrew {
            let mut name = month.he_string(leap).to_string();
            if self.use_gersh_gershayim
                && leap
                && (month == HebrewMonth::Adar || month == HebrewMonth::AdarII)
            {
                name.push(GERESH);
            }
            name
        } else {
            month.en_string(leap).to_string()
        }
    }

    pub fn format_day_of_week(&self, date: &HebrewDate) -> String {
        if self.hebrew {
            date.day_of_week().he_string().to_string()
        } else {
            date.day_of_week().en_string().to_string()
        }
    }

    /// The holiday of the day, with Chanukah carrying its day count.
    /// Returns an empty string on an ordinary day.
    pub fn format_yom_tov(&self, calendar: &HebrewCalendar) -> Result<String, CalendarError> {
        let Some(holiday) = calendar.yom_tov_index() else {
            return Ok(String::new());
        };
        if let Some(day) = calendar.day_of_chanukah() {
            return if self.hebrew {
                Ok(format!(
                    "{} {}",
                    self.format_hebrew_number(day as i32)?,
                    holiday.he_string()
                ))
            } else {
                Ok(format!("{} {}", holiday.en_string(), day))
            };
        }
        Ok(if self.hebrew {
            holiday.he_string().to_string()
        } else {
            holiday.en_string().to_string()
        })
    }

    /// "Rosh Chodesh Teves" for the month the day 30 or day 1 belongs to.
    /// Returns an empty string when the day is not Rosh Chodesh.
    pub fn format_rosh_chodesh(&self, calendar: &HebrewCalendar) -> String {
        if !calendar.is_rosh_chodesh() {
            return String::new();
        }
        let date = calendar.date();
        let mut month = date.month();
        if date.day_of_month() == 30 {
            // The 30th belongs to the incoming month.
            month = hebrew_date::month_after(month, date.is_leap_year());
        }
        let label = if self.hebrew {
            Holiday::RoshChodesh.he_string()
        } else {
            Holiday::RoshChodesh.en_string()
        };
        format!("{} {}", label, self.month_name(month, date.is_leap_year()))
    }

    /// The Omer count of the day, or an empty string outside the count.
    pub fn format_omer(&self, calendar: &HebrewCalendar) -> Result<String, CalendarError> {
        let Some(omer) = calendar.day_of_omer() else {
            return Ok(String::new());
        };
        if self.hebrew {
            Ok(format!("{} בעומר", self.format_hebrew_number(omer as i32)?))
        } else if omer == 33 {
            Ok("Lag BaOmer".to_string())
        } else {
            Ok(format!("Omer {omer}"))
        }
    }

    /// The weekly reading, or an empty string when there is none.
    pub fn format_parsha(&self, calendar: &HebrewCalendar) -> Result<String, CalendarError> {
        Ok(match calendar.parsha()? {
            Some(parsha) if self.hebrew => parsha.he_string().to_string(),
            Some(parsha) => parsha.en_string().to_string(),
            None => String::new(),
        })
    }

    /// The traditional three-letter kviah of a year: the weekday of Rosh
    /// Hashana, the Cheshvan/Kislev letter and the weekday of Pesach, e.g.
    /// בשה for 5729. The kviah form never carries a geresh.
    pub fn format_kviah(&self, year: i32) -> Result<String, CalendarError> {
        let rosh_hashana = HebrewDate::from_hebrew(year, HebrewMonth::Tishrei, 1)?;
        let pesach = HebrewDate::from_hebrew(year, HebrewMonth::Nissan, 15)?;
        let mut out = String::new();
        out.push_str(ONES[u8::from(rosh_hashana.day_of_week()) as usize]);
        out.push_str(match hebrew_date::kviah(year) {
            Kviah::Chaseirim => "ח",
            Kviah::Kesidran => "כ",
            Kviah::Shleimim => "ש",
        });
        out.push_str(ONES[u8::from(pesach.day_of_week()) as usize]);
        Ok(out)
    }

    pub fn format_daf_yomi(&self, daf: &Daf) -> Result<String, CalendarError> {
        if self.hebrew {
            Ok(format!(
                "{} {}",
                daf.tractate.he_string(),
                self.format_hebrew_number(daf.page as i32)?
            ))
        } else {
            Ok(format!("{} {}", daf.tractate.en_string(), daf.page))
        }
    }

    pub fn format_molad(&self, molad: &Molad) -> String {
        format!(
            "{} hours, {} minutes and {} chalakim",
            molad.hours(),
            molad.minutes(),
            molad.chalakim()
        )
    }
}
