//! Common data types used throughout the application

pub mod clock;
pub mod holiday;
pub mod hours;
pub mod recurrence;
pub mod results;

pub use clock::{ClockTime, TimeParseError};
pub use holiday::{HolidaySet, HolidaySources};
pub use hours::{BusinessHoursSpec, HoursWindow};
pub use recurrence::RecurrenceSpec;
pub use results::{BusinessDayCount, BusinessMinutes, DayResult};
