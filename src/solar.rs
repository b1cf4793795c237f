use chrono::NaiveDate;

/// A capability for computing sunrise and sunset, consumed by callers that
/// layer halakhic times on top of the calendar. Implementations (NOAA,
/// Naval Almanac and the like) live outside this crate.
///
/// Times are UTC expressed as fractional hours, e.g. 5:45 a.m. is 5.75.
/// `None` signals that the computation has no solution, the expected
/// behavior for polar locations during parts of the year.
pub trait SolarCalculator {
    fn utc_sunrise(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        zenith: f64,
        adjust_for_elevation: bool,
    ) -> Option<f64>;

    fn utc_sunset(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        zenith: f64,
        adjust_for_elevation: bool,
    ) -> Option<f64>;
}
