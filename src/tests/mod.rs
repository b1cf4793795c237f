mod formatter_test;
mod hebrew_calendar_test;
mod parsha_test;
mod solar_test;
