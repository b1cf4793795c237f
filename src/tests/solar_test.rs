use chrono::NaiveDate;

use crate::solar::SolarCalculator;

struct FixedSun;

impl SolarCalculator for FixedSun {
    fn utc_sunrise(
        &self,
        _date: NaiveDate,
        _latitude: f64,
        _longitude: f64,
        _elevation: f64,
        _zenith: f64,
        _adjust_for_elevation: bool,
    ) -> Option<f64> {
        Some(5.75)
    }

    fn utc_sunset(
        &self,
        _date: NaiveDate,
        _latitude: f64,
        _longitude: f64,
        _elevation: f64,
        _zenith: f64,
        _adjust_for_elevation: bool,
    ) -> Option<f64> {
        None
    }
}

#[test]
fn the_capability_is_object_safe() {
    let calculator: &dyn SolarCalculator = &FixedSun;
    let date = NaiveDate::from_ymd_opt(2017, 6, 18).unwrap();
    assert_eq!(
        calculator.utc_sunrise(date, 51.4772, 0.0, 0.0, 90.0, false),
        Some(5.75)
    );
    assert_eq!(
        calculator.utc_sunset(date, 89.9, 0.0, 0.0, 90.0, false),
        None
    );
}
