//! Reference constants for the 1847 journey.
//!
//! These values reproduce the classic trip from Independence, Missouri. They
//! seed the defaults of [`crate::config::JourneyConfig`]; a JSON config file
//! can override any of them at startup.

// Calendar -----------------------------------------------------------------
pub(crate) const DEFAULT_START_DATE: &str = "1847-04-12 12:00:00";
/// Central time, the offset used for Independence, Missouri.
pub(crate) const DEFAULT_UTC_OFFSET_HOURS: i32 = -6;
pub(crate) const DEFAULT_DAYS_IN_TURN: i64 = 14;
pub(crate) const DEFAULT_TURN_AMOUNT: i64 = 16;
/// Upper bound on `turn_amount`; every turn keeps a label in memory.
pub(crate) const MAX_TURN_AMOUNT: u32 = 10_000;
pub(crate) const MAX_UTC_OFFSET_HOURS: i32 = 23;

pub(crate) const START_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub(crate) const START_DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const LABEL_FORMAT_WITH_YEAR: &str = "%B %-d %Y";
pub(crate) const LABEL_FORMAT: &str = "%B %-d";

// Budget -------------------------------------------------------------------
pub(crate) const SAVED_FUNDS: i64 = 900;
pub(crate) const WAGON_COST: i64 = 200;
pub(crate) const OXEN_MIN_SPEND: i64 = 200;
pub(crate) const OXEN_MAX_SPEND: i64 = 300;

// Runner -------------------------------------------------------------------
pub(crate) const STRICT_SHOPPING_ATTEMPTS: u32 = 3;
