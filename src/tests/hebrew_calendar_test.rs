use crate::constants::{HebrewMonth, Holiday, Weekday};
use crate::hebrew_calendar::HebrewCalendar;
use crate::hebrew_date::days_in_year;

fn diaspora(year: i32, month: HebrewMonth, day: u8) -> HebrewCalendar {
    HebrewCalendar::from_hebrew(year, month, day, false, false).unwrap()
}

fn israel(year: i32, month: HebrewMonth, day: u8) -> HebrewCalendar {
    HebrewCalendar::from_hebrew(year, month, day, true, false).unwrap()
}

#[test]
fn erev_pesach_is_reported() {
    // The first holiday discriminant is zero; it must classify like any
    // other holiday.
    assert_eq!(
        diaspora(5777, HebrewMonth::Nissan, 14).yom_tov_index(),
        Some(Holiday::ErevPesach)
    );
    assert_eq!(
        israel(5777, HebrewMonth::Nissan, 14).yom_tov_index(),
        Some(Holiday::ErevPesach)
    );
    assert!(u8::from(Holiday::ErevPesach) == 0);
}

#[test]
fn pesach_differs_between_locales() {
    assert_eq!(
        diaspora(5784, HebrewMonth::Nissan, 16).yom_tov_index(),
        Some(Holiday::Pesach)
    );
    assert_eq!(
        israel(5784, HebrewMonth::Nissan, 16).yom_tov_index(),
        Some(Holiday::CholHamoedPesach)
    );
    assert_eq!(
        diaspora(5784, HebrewMonth::Nissan, 22).yom_tov_index(),
        Some(Holiday::Pesach)
    );
    assert_eq!(israel(5784, HebrewMonth::Nissan, 22).yom_tov_index(), None);
}

#[test]
fn succos_differs_between_locales() {
    assert_eq!(
        diaspora(5784, HebrewMonth::Tishrei, 16).yom_tov_index(),
        Some(Holiday::Succos)
    );
    assert_eq!(
        israel(5784, HebrewMonth::Tishrei, 16).yom_tov_index(),
        Some(Holiday::CholHamoedSuccos)
    );
    assert_eq!(
        diaspora(5784, HebrewMonth::Tishrei, 23).yom_tov_index(),
        Some(Holiday::SimchasTorah)
    );
    assert_eq!(israel(5784, HebrewMonth::Tishrei, 23).yom_tov_index(), None);
    // In Israel Shemini Atzeres carries the Simchas Torah celebration.
    assert_eq!(
        israel(5784, HebrewMonth::Tishrei, 22).yom_tov_index(),
        Some(Holiday::SheminiAtzeres)
    );
}

#[test]
fn shavuos_second_day_is_diaspora_only() {
    assert_eq!(
        diaspora(5784, HebrewMonth::Sivan, 7).yom_tov_index(),
        Some(Holiday::Shavuos)
    );
    assert_eq!(israel(5784, HebrewMonth::Sivan, 7).yom_tov_index(), None);
}

#[test]
fn regular_fast_days() {
    // 17 Tammuz and 9 Av 5784 fell on Tuesdays.
    let fast = diaspora(5784, HebrewMonth::Tammuz, 17);
    assert_eq!(fast.date().day_of_week(), Weekday::Tuesday);
    assert_eq!(fast.yom_tov_index(), Some(Holiday::SeventeenOfTammuz));
    assert!(fast.is_taanis());
    assert!(!fast.is_yom_tov());
    assert_eq!(
        diaspora(5784, HebrewMonth::Av, 9).yom_tov_index(),
        Some(Holiday::TishaBeav)
    );
}

#[test]
fn fasts_on_shabbos_are_deferred_to_sunday() {
    // In 5782 both 17 Tammuz and 9 Av fell on Shabbos.
    let shabbos = diaspora(5782, HebrewMonth::Tammuz, 17);
    assert_eq!(shabbos.date().day_of_week(), Weekday::Shabbos);
    assert_eq!(shabbos.yom_tov_index(), None);
    assert_eq!(
        diaspora(5782, HebrewMonth::Tammuz, 18).yom_tov_index(),
        Some(Holiday::SeventeenOfTammuz)
    );
    assert_eq!(diaspora(5782, HebrewMonth::Av, 9).yom_tov_index(), None);
    assert_eq!(
        diaspora(5782, HebrewMonth::Av, 10).yom_tov_index(),
        Some(Holiday::TishaBeav)
    );
    // Fast of Gedalyah, 5785: 3 Tishrei was Shabbos.
    assert_eq!(diaspora(5785, HebrewMonth::Tishrei, 3).yom_tov_index(), None);
    assert_eq!(
        diaspora(5785, HebrewMonth::Tishrei, 4).yom_tov_index(),
        Some(Holiday::FastOfGedalyah)
    );
}

#[test]
fn fast_of_esther_is_advanced_to_thursday() {
    // 13 Adar II 5784 was a Shabbos, so the fast moved to Thursday the 11th.
    assert_eq!(
        diaspora(5784, HebrewMonth::AdarII, 11).yom_tov_index(),
        Some(Holiday::FastOfEsther)
    );
    assert_eq!(diaspora(5784, HebrewMonth::AdarII, 13).yom_tov_index(), None);
    assert_eq!(
        diaspora(5784, HebrewMonth::AdarII, 14).yom_tov_index(),
        Some(Holiday::Purim)
    );
    assert_eq!(
        diaspora(5784, HebrewMonth::AdarII, 15).yom_tov_index(),
        Some(Holiday::ShushanPurim)
    );
}

#[test]
fn purim_in_a_non_leap_year_is_in_adar() {
    // 5783 is not a leap year; 13 Adar was a Monday.
    assert_eq!(
        diaspora(5783, HebrewMonth::Adar, 13).yom_tov_index(),
        Some(Holiday::FastOfEsther)
    );
    assert_eq!(
        diaspora(5783, HebrewMonth::Adar, 14).yom_tov_index(),
        Some(Holiday::Purim)
    );
    assert_eq!(
        diaspora(5783, HebrewMonth::Adar, 15).yom_tov_index(),
        Some(Holiday::ShushanPurim)
    );
}

#[test]
fn purim_katan_in_adar_i() {
    assert_eq!(
        diaspora(5784, HebrewMonth::Adar, 14).yom_tov_index(),
        Some(Holiday::PurimKatan)
    );
    assert_eq!(diaspora(5784, HebrewMonth::Adar, 15).yom_tov_index(), None);
}

#[test]
fn chanukah_with_a_short_kislev_runs_to_3_teves() {
    // Kislev 5765 has 29 days.
    let first = diaspora(5765, HebrewMonth::Kislev, 25);
    assert_eq!(first.yom_tov_index(), Some(Holiday::Chanukah));
    assert_eq!(first.day_of_chanukah(), Some(1));
    assert_eq!(
        diaspora(5765, HebrewMonth::Kislev, 29).day_of_chanukah(),
        Some(5)
    );
    assert_eq!(
        diaspora(5765, HebrewMonth::Teves, 1).day_of_chanukah(),
        Some(6)
    );
    assert_eq!(
        diaspora(5765, HebrewMonth::Teves, 3).day_of_chanukah(),
        Some(8)
    );
    assert_eq!(diaspora(5765, HebrewMonth::Teves, 4).day_of_chanukah(), None);
}

#[test]
fn chanukah_with_a_full_kislev_ends_on_2_teves() {
    // Kislev 5766 has 30 days.
    assert_eq!(
        diaspora(5766, HebrewMonth::Kislev, 30).day_of_chanukah(),
        Some(6)
    );
    assert_eq!(
        diaspora(5766, HebrewMonth::Teves, 2).day_of_chanukah(),
        Some(8)
    );
    assert_eq!(diaspora(5766, HebrewMonth::Teves, 3).yom_tov_index(), None);
}

#[test]
fn chanukah_is_always_eight_days() {
    for year in [5765, 5766, 5782, 5784] {
        let mut calendar = HebrewCalendar::from_hebrew(year, HebrewMonth::Tishrei, 1, false, false)
            .unwrap();
        let mut days = Vec::new();
        for _ in 0..days_in_year(year) {
            if let Some(day) = calendar.day_of_chanukah() {
                days.push((
                    calendar.date().month(),
                    calendar.date().day_of_month(),
                    day,
                ));
            }
            calendar.forward();
        }
        let counts: Vec<u8> = days.iter().map(|(_, _, n)| *n).collect();
        assert_eq!(
            counts,
            vec![1, 2, 3, 4, 5, 6, 7, 8],
            "Chanukah {year} was {days:?}"
        );
        assert_eq!(days[0].0, HebrewMonth::Kislev);
        assert_eq!(days[0].1, 25);
    }
}

#[test]
fn omer_count() {
    assert_eq!(diaspora(5777, HebrewMonth::Nissan, 15).day_of_omer(), None);
    assert_eq!(
        diaspora(5777, HebrewMonth::Nissan, 16).day_of_omer(),
        Some(1)
    );
    assert_eq!(
        diaspora(5777, HebrewMonth::Nissan, 30).day_of_omer(),
        Some(15)
    );
    assert_eq!(diaspora(5777, HebrewMonth::Iyar, 1).day_of_omer(), Some(16));
    assert_eq!(
        diaspora(5777, HebrewMonth::Iyar, 18).day_of_omer(),
        Some(33)
    );
    assert_eq!(
        diaspora(5777, HebrewMonth::Iyar, 29).day_of_omer(),
        Some(44)
    );
    assert_eq!(diaspora(5777, HebrewMonth::Sivan, 1).day_of_omer(), Some(45));
    assert_eq!(diaspora(5777, HebrewMonth::Sivan, 5).day_of_omer(), Some(49));
    assert_eq!(diaspora(5777, HebrewMonth::Sivan, 6).day_of_omer(), None);
    assert_eq!(diaspora(5777, HebrewMonth::Sivan, 24).day_of_omer(), None);
}

#[test]
fn omer_increases_one_per_day() {
    let mut calendar = diaspora(5784, HebrewMonth::Nissan, 16);
    for expected in 1..=49u8 {
        assert_eq!(calendar.day_of_omer(), Some(expected));
        calendar.forward();
    }
    assert_eq!(calendar.day_of_omer(), None);
}

#[test]
fn rosh_chodesh() {
    assert!(diaspora(5785, HebrewMonth::Cheshvan, 30).is_rosh_chodesh());
    assert!(diaspora(5785, HebrewMonth::Kislev, 1).is_rosh_chodesh());
    assert!(diaspora(5777, HebrewMonth::Nissan, 1).is_rosh_chodesh());
    assert!(!diaspora(5777, HebrewMonth::Nissan, 2).is_rosh_chodesh());
    // Rosh Hashana is not Rosh Chodesh.
    assert!(!diaspora(5777, HebrewMonth::Tishrei, 1).is_rosh_chodesh());

    assert!(diaspora(5777, HebrewMonth::Teves, 29).is_erev_rosh_chodesh());
    assert!(!diaspora(5777, HebrewMonth::Elul, 29).is_erev_rosh_chodesh());
}

#[test]
fn modern_holidays_require_the_flag() {
    let without = israel(5778, HebrewMonth::Iyar, 28);
    assert_eq!(without.yom_tov_index(), None);
    let with = HebrewCalendar::from_hebrew(5778, HebrewMonth::Iyar, 28, true, true).unwrap();
    assert_eq!(with.yom_tov_index(), Some(Holiday::YomYerushalayim));
}

#[test]
fn modern_holidays_shift_around_shabbos() {
    // In 5778, 5 Iyar fell on Friday, so Yom Ha'atzmaut was observed on
    // Thursday 4 Iyar; 27 Nissan fell on Thursday and was kept.
    let atzmaut = HebrewCalendar::from_hebrew(5778, HebrewMonth::Iyar, 4, true, true).unwrap();
    assert_eq!(atzmaut.date().day_of_week(), Weekday::Thursday);
    assert_eq!(atzmaut.yom_tov_index(), Some(Holiday::YomHaatzmaut));
    let fifth = HebrewCalendar::from_hebrew(5778, HebrewMonth::Iyar, 5, true, true).unwrap();
    assert_eq!(fifth.yom_tov_index(), None);

    let shoah = HebrewCalendar::from_hebrew(5778, HebrewMonth::Nissan, 27, true, true).unwrap();
    assert_eq!(shoah.yom_tov_index(), Some(Holiday::YomHashoah));

    let zikaron = HebrewCalendar::from_hebrew(5778, HebrewMonth::Iyar, 3, true, true).unwrap();
    assert_eq!(zikaron.date().day_of_week(), Weekday::Wednesday);
    assert_eq!(zikaron.yom_tov_index(), Some(Holiday::YomHazikaron));
}

#[test]
fn independence_declaration_date() {
    // 5 Iyar 5708 was a Friday; under the shifted observance rules the
    // holiday falls on Thursday 4 Iyar.
    let declaration = HebrewCalendar::from_hebrew(5708, HebrewMonth::Iyar, 5, true, true).unwrap();
    assert_eq!(declaration.date().day_of_week(), Weekday::Friday);
    assert_eq!(declaration.yom_tov_index(), None);
    let observed = HebrewCalendar::from_hebrew(5708, HebrewMonth::Iyar, 4, true, true).unwrap();
    assert_eq!(observed.yom_tov_index(), Some(Holiday::YomHaatzmaut));
}

#[test]
fn yom_tov_predicate() {
    assert!(diaspora(5784, HebrewMonth::Nissan, 15).is_yom_tov());
    assert!(diaspora(5784, HebrewMonth::Tishrei, 10).is_yom_tov());
    assert!(diaspora(5784, HebrewMonth::Nissan, 17).is_yom_tov()); // Chol Hamoed
    assert!(!diaspora(5784, HebrewMonth::Nissan, 14).is_yom_tov()); // Erev Pesach
    assert!(!diaspora(5784, HebrewMonth::Kislev, 25).is_yom_tov()); // Chanukah
    assert!(!diaspora(5784, HebrewMonth::Tammuz, 17).is_yom_tov()); // fast
    assert!(!diaspora(5777, HebrewMonth::Sivan, 24).is_yom_tov());

    assert!(diaspora(5784, HebrewMonth::Nissan, 17).is_chol_hamoed());
    assert!(diaspora(5784, HebrewMonth::Nissan, 14).is_erev_yom_tov());
    assert!(diaspora(5784, HebrewMonth::Tishrei, 10).is_taanis());
}
