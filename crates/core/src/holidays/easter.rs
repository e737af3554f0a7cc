//! Gregorian Easter computation
//!
//! Anonymous Gregorian algorithm (Meeus/Jones/Butcher). Valid for any year
//! in the Gregorian calendar; the result always lands between March 22 and
//! April 25.

use chrono::NaiveDate;

/// Easter Sunday of the given year
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = ((h + l - 7 * m + 114) / 31) as u32;
    let day = ((h + l - 7 * m + 114) % 31 + 1) as u32;

    NaiveDate::from_ymd_opt(year, month, day)
        .expect("computus always yields a valid March or April date")
}
