use lazy_static::lazy_static;

use crate::constants::{BavliTractate, HebrewMonth};
use crate::daf::Daf;
use crate::error::CalendarError;
use crate::formatter::HebrewDateFormatter;
use crate::hebrew_calendar::HebrewCalendar;
use crate::hebrew_date::HebrewDate;

lazy_static! {
    static ref ASHKENAZ: HebrewDateFormatter = HebrewDateFormatter::default();
    static ref HEBREW: HebrewDateFormatter = HebrewDateFormatter {
        hebrew: true,
        ..HebrewDateFormatter::default()
    };
}

#[test]
fn numbers_with_gershayim() {
    assert_eq!(ASHKENAZ.format_hebrew_number(0).unwrap(), "אפס");
    assert_eq!(ASHKENAZ.format_hebrew_number(3).unwrap(), "ג׳");
    assert_eq!(ASHKENAZ.format_hebrew_number(10).unwrap(), "י׳");
    assert_eq!(ASHKENAZ.format_hebrew_number(15).unwrap(), "ט״ו");
    assert_eq!(ASHKENAZ.format_hebrew_number(16).unwrap(), "ט״ז");
    assert_eq!(ASHKENAZ.format_hebrew_number(20).unwrap(), "כ׳");
    assert_eq!(ASHKENAZ.format_hebrew_number(33).unwrap(), "ל״ג");
    assert_eq!(ASHKENAZ.format_hebrew_number(100).unwrap(), "ק׳");
    assert_eq!(ASHKENAZ.format_hebrew_number(400).unwrap(), "ת׳");
    assert_eq!(ASHKENAZ.format_hebrew_number(500).unwrap(), "ת״ק");
    assert_eq!(ASHKENAZ.format_hebrew_number(5777).unwrap(), "תשע״ז");
    assert_eq!(ASHKENAZ.format_hebrew_number(5000).unwrap(), "ה׳ אלפים");
    assert_eq!(ASHKENAZ.format_hebrew_number(1000).unwrap(), "א׳ אלפים");
}

#[test]
fn numbers_without_gershayim() {
    let plain = HebrewDateFormatter {
        use_gersh_gershayim: false,
        ..HebrewDateFormatter::default()
    };
    assert_eq!(plain.format_hebrew_number(5777).unwrap(), "תשעז");
    assert_eq!(plain.format_hebrew_number(15).unwrap(), "טו");
    assert_eq!(plain.format_hebrew_number(5000).unwrap(), "ה אלפים");
}

#[test]
fn long_years_carry_the_thousands() {
    let long = HebrewDateFormatter {
        use_long_hebrew_years: true,
        ..HebrewDateFormatter::default()
    };
    assert_eq!(long.format_hebrew_number(5777).unwrap(), "ה׳ תשע״ז");
    // A round year ends with a sofit letter.
    assert_eq!(long.format_hebrew_number(5750).unwrap(), "ה׳ תש״ן");
}

#[test]
fn out_of_range_numbers_are_rejected() {
    assert!(matches!(
        ASHKENAZ.format_hebrew_number(-1),
        Err(CalendarError::NumeralOutOfRange(-1))
    ));
    assert!(matches!(
        ASHKENAZ.format_hebrew_number(10000),
        Err(CalendarError::NumeralOutOfRange(10000))
    ));
}

fn letter_value(letter: char) -> Option<i32> {
    Some(match letter {
        'א' => 1,
        'ב' => 2,
        'ג' => 3,
        'ד' => 4,
        'ה' => 5,
        'ו' => 6,
        'ז' => 7,
        'ח' => 8,
        'ט' => 9,
        'י' => 10,
        'כ' | 'ך' => 20,
        'ל' => 30,
        'מ' | 'ם' => 40,
        'נ' | 'ן' => 50,
        'ס' => 60,
        'ע' => 70,
        'פ' | 'ף' => 80,
        'צ' | 'ץ' => 90,
        'ק' => 100,
        'ר' => 200,
        'ש' => 300,
        'ת' => 400,
        _ => return None,
    })
}

/// Inverse of the formatter for long-year gershayim output: an optional
/// thousands token, then either the word אלפים or the letter sum.
fn parse_hebrew_number(formatted: &str) -> i32 {
    if formatted == "אפס" {
        return 0;
    }
    if let Some((head, tail)) = formatted.split_once(' ') {
        let thousands: i32 = head.chars().filter_map(letter_value).sum();
        if tail == "אלפים" {
            return thousands * 1000;
        }
        return thousands * 1000 + tail.chars().filter_map(letter_value).sum::<i32>();
    }
    formatted.chars().filter_map(letter_value).sum()
}

#[test]
fn every_number_round_trips_through_its_numeral() {
    let long = HebrewDateFormatter {
        use_long_hebrew_years: true,
        ..HebrewDateFormatter::default()
    };
    assert_eq!(long.format_hebrew_number(0).unwrap(), "אפס");
    for number in 1..=9999 {
        let formatted = long.format_hebrew_number(number).unwrap();
        assert_eq!(
            parse_hebrew_number(&formatted),
            number,
            "{number} formatted as {formatted}"
        );
    }
}

#[test]
fn dates() {
    let date = HebrewDate::from_gregorian(2017, 6, 18).unwrap();
    assert_eq!(ASHKENAZ.format_date(&date).unwrap(), "24 Sivan, 5777");
    assert_eq!(HEBREW.format_date(&date).unwrap(), "כ״ד סיון תשע״ז");
    assert_eq!(ASHKENAZ.format_day_of_week(&date), "Sunday");
    assert_eq!(HEBREW.format_day_of_week(&date), "ראשון");
}

#[test]
fn leap_year_months_are_distinguished() {
    let adar_i = HebrewDate::from_hebrew(5784, HebrewMonth::Adar, 1).unwrap();
    assert_eq!(ASHKENAZ.format_month(&adar_i), "Adar I");
    assert_eq!(HEBREW.format_month(&adar_i), "אדר א׳");
    let adar_ii = HebrewDate::from_hebrew(5784, HebrewMonth::AdarII, 1).unwrap();
    assert_eq!(ASHKENAZ.format_month(&adar_ii), "Adar II");
    assert_eq!(HEBREW.format_month(&adar_ii), "אדר ב׳");
    let adar = HebrewDate::from_hebrew(5783, HebrewMonth::Adar, 1).unwrap();
    assert_eq!(ASHKENAZ.format_month(&adar), "Adar");
    assert_eq!(HEBREW.format_month(&adar), "אדר");
}

#[test]
fn yom_tov_names() {
    let pesach = HebrewCalendar::from_hebrew(5784, HebrewMonth::Nissan, 15, false, false).unwrap();
    assert_eq!(ASHKENAZ.format_yom_tov(&pesach).unwrap(), "Pesach");
    assert_eq!(HEBREW.format_yom_tov(&pesach).unwrap(), "פסח");

    let chanukah =
        HebrewCalendar::from_hebrew(5766, HebrewMonth::Kislev, 25, false, false).unwrap();
    assert_eq!(ASHKENAZ.format_yom_tov(&chanukah).unwrap(), "Chanukah 1");
    assert_eq!(HEBREW.format_yom_tov(&chanukah).unwrap(), "א׳ חנוכה");

    let plain = HebrewCalendar::from_hebrew(5777, HebrewMonth::Sivan, 24, false, false).unwrap();
    assert_eq!(ASHKENAZ.format_yom_tov(&plain).unwrap(), "");
}

#[test]
fn rosh_chodesh_names_the_incoming_month() {
    let thirtieth =
        HebrewCalendar::from_hebrew(5785, HebrewMonth::Cheshvan, 30, false, false).unwrap();
    assert_eq!(
        ASHKENAZ.format_rosh_chodesh(&thirtieth),
        "Rosh Chodesh Kislev"
    );
    assert_eq!(HEBREW.format_rosh_chodesh(&thirtieth), "ראש חודש כסלו");
    let ordinary =
        HebrewCalendar::from_hebrew(5785, HebrewMonth::Cheshvan, 12, false, false).unwrap();
    assert_eq!(ASHKENAZ.format_rosh_chodesh(&ordinary), "");
}

#[test]
fn omer_strings() {
    let lag = HebrewCalendar::from_hebrew(5777, HebrewMonth::Iyar, 18, false, false).unwrap();
    assert_eq!(ASHKENAZ.format_omer(&lag).unwrap(), "Lag BaOmer");
    assert_eq!(HEBREW.format_omer(&lag).unwrap(), "ל״ג בעומר");
    let first = HebrewCalendar::from_hebrew(5777, HebrewMonth::Nissan, 16, false, false).unwrap();
    assert_eq!(ASHKENAZ.format_omer(&first).unwrap(), "Omer 1");
    let outside = HebrewCalendar::from_hebrew(5777, HebrewMonth::Sivan, 24, false, false).unwrap();
    assert_eq!(ASHKENAZ.format_omer(&outside).unwrap(), "");
}

#[test]
fn kviah_letters() {
    // 5729: Rosh Hashana on Monday, a full year, Pesach on Thursday.
    assert_eq!(ASHKENAZ.format_kviah(5729).unwrap(), "בשה");
    // 5784: Shabbos, Chaseirim, Pesach on Tuesday.
    assert_eq!(ASHKENAZ.format_kviah(5784).unwrap(), "זחג");
}

#[test]
fn daf_strings() {
    let daf = Daf {
        tractate: BavliTractate::Berachos,
        page: 2,
    };
    assert_eq!(ASHKENAZ.format_daf_yomi(&daf).unwrap(), "Berachos 2");
    assert_eq!(HEBREW.format_daf_yomi(&daf).unwrap(), "ברכות ב׳");
}

#[test]
fn molad_string() {
    let date = HebrewDate::from_hebrew(5771, HebrewMonth::AdarII, 1).unwrap();
    let (_, molad) = date.molad().unwrap();
    assert_eq!(
        ASHKENAZ.format_molad(&molad),
        "0 hours, 0 minutes and 7 chalakim"
    );
}
