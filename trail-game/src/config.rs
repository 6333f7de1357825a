//! Journey configuration and its validation rules.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::turn_datetime;
use crate::constants::{
    DEFAULT_DAYS_IN_TURN, DEFAULT_START_DATE, DEFAULT_TURN_AMOUNT, DEFAULT_UTC_OFFSET_HOURS,
    MAX_TURN_AMOUNT, MAX_UTC_OFFSET_HOURS, OXEN_MAX_SPEND, OXEN_MIN_SPEND, SAVED_FUNDS,
    START_DATE_FORMAT, START_DATETIME_FORMAT, WAGON_COST,
};

/// Errors raised when journey constants cannot produce a valid journey.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("turn_amount must be at least 0 (got {value})")]
    NegativeTurnAmount { value: i64 },
    #[error("days_in_turn must be greater than 0 (got {value})")]
    NonPositiveDaysInTurn { value: i64 },
    #[error("{field} must be at most {max} (got {value})")]
    TooLarge {
        field: &'static str,
        max: i64,
        value: i64,
    },
    #[error("start date {value:?} is not YYYY-MM-DD or YYYY-MM-DD HH:MM:SS")]
    InvalidStartDate { value: String },
    #[error("utc offset must be between -{max} and {max} hours (got {hours})")]
    UtcOffsetOutOfRange { hours: i32, max: i32 },
    #[error("turn {turn} falls outside the supported calendar range")]
    DateOutOfRange { turn: u32 },
    #[error("budget {rule} (got {value})")]
    InvalidBudget { rule: &'static str, value: i64 },
}

/// Money rules quoted by the instructions screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPolicy {
    #[serde(default = "BudgetPolicy::default_saved_funds")]
    pub saved_funds: i64,
    #[serde(default = "BudgetPolicy::default_wagon_cost")]
    pub wagon_cost: i64,
    #[serde(default = "BudgetPolicy::default_oxen_min")]
    pub oxen_min: i64,
    #[serde(default = "BudgetPolicy::default_oxen_max")]
    pub oxen_max: i64,
}

impl BudgetPolicy {
    const fn default_saved_funds() -> i64 {
        SAVED_FUNDS
    }

    const fn default_wagon_cost() -> i64 {
        WAGON_COST
    }

    const fn default_oxen_min() -> i64 {
        OXEN_MIN_SPEND
    }

    const fn default_oxen_max() -> i64 {
        OXEN_MAX_SPEND
    }

    /// Money left for supplies once the wagon is paid for.
    #[must_use]
    pub const fn available(&self) -> i64 {
        self.saved_funds.saturating_sub(self.wagon_cost)
    }

    /// Amounts must be non-negative, the wagon affordable and the oxen band ordered.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidBudget`] naming the first broken rule.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let fields = [
            ("saved_funds must be at least 0", self.saved_funds),
            ("wagon_cost must be at least 0", self.wagon_cost),
            ("oxen_min must be at least 0", self.oxen_min),
            ("oxen_max must be at least 0", self.oxen_max),
        ];
        if let Some((rule, value)) = fields.into_iter().find(|(_, value)| *value < 0) {
            return Err(ConfigurationError::InvalidBudget { rule, value });
        }
        if self.wagon_cost > self.saved_funds {
            return Err(ConfigurationError::InvalidBudget {
                rule: "wagon_cost must not exceed saved_funds",
                value: self.wagon_cost,
            });
        }
        if self.oxen_min > self.oxen_max {
            return Err(ConfigurationError::InvalidBudget {
                rule: "oxen_min must not exceed oxen_max",
                value: self.oxen_min,
            });
        }
        Ok(())
    }
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            saved_funds: Self::default_saved_funds(),
            wagon_cost: Self::default_wagon_cost(),
            oxen_min: Self::default_oxen_min(),
            oxen_max: Self::default_oxen_max(),
        }
    }
}

/// Startup configuration for a journey. Every field falls back to the 1847
/// reference values when omitted from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyConfig {
    #[serde(default = "JourneyConfig::default_start_date")]
    pub start_date: String,
    #[serde(default = "JourneyConfig::default_utc_offset_hours")]
    pub utc_offset_hours: i32,
    #[serde(default = "JourneyConfig::default_days_in_turn")]
    pub days_in_turn: i64,
    #[serde(default = "JourneyConfig::default_turn_amount")]
    pub turn_amount: i64,
    #[serde(default)]
    pub budget: BudgetPolicy,
}

impl JourneyConfig {
    fn default_start_date() -> String {
        DEFAULT_START_DATE.to_string()
    }

    const fn default_utc_offset_hours() -> i32 {
        DEFAULT_UTC_OFFSET_HOURS
    }

    const fn default_days_in_turn() -> i64 {
        DEFAULT_DAYS_IN_TURN
    }

    const fn default_turn_amount() -> i64 {
        DEFAULT_TURN_AMOUNT
    }

    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check every field, including the final turn date, without building the
    /// calendar. Accepts exactly the configs [`crate::JourneyState::from_config`]
    /// accepts.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let (days_in_turn, turn_amount) = validate_counts(self.days_in_turn, self.turn_amount)?;
        let start = self.start_datetime()?;
        turn_datetime(start, days_in_turn, turn_amount)?;
        self.budget.validate()
    }

    /// Resolve `start_date` in the configured fixed offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the offset is out of range or the date does not parse.
    pub fn start_datetime(&self) -> Result<DateTime<FixedOffset>, ConfigurationError> {
        parse_start(&self.start_date, self.utc_offset_hours)
    }
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            start_date: Self::default_start_date(),
            utc_offset_hours: Self::default_utc_offset_hours(),
            days_in_turn: Self::default_days_in_turn(),
            turn_amount: Self::default_turn_amount(),
            budget: BudgetPolicy::default(),
        }
    }
}

/// Validate the turn constants and narrow them to the counter width used by
/// the journey state. Returns `(days_in_turn, turn_amount)`.
pub(crate) fn validate_counts(
    days_in_turn: i64,
    turn_amount: i64,
) -> Result<(u32, u32), ConfigurationError> {
    if turn_amount < 0 {
        return Err(ConfigurationError::NegativeTurnAmount { value: turn_amount });
    }
    if days_in_turn <= 0 {
        return Err(ConfigurationError::NonPositiveDaysInTurn {
            value: days_in_turn,
        });
    }
    let turns = u32::try_from(turn_amount)
        .ok()
        .filter(|turns| *turns <= MAX_TURN_AMOUNT)
        .ok_or(ConfigurationError::TooLarge {
            field: "turn_amount",
            max: i64::from(MAX_TURN_AMOUNT),
            value: turn_amount,
        })?;
    let days = u32::try_from(days_in_turn).map_err(|_| ConfigurationError::TooLarge {
        field: "days_in_turn",
        max: i64::from(u32::MAX),
        value: days_in_turn,
    })?;
    Ok((days, turns))
}

/// Parse a start date in either full or date-only form. A bare date starts at noon.
///
/// # Errors
///
/// Returns an error if the offset is out of range or the text does not parse.
pub fn parse_start(
    raw: &str,
    utc_offset_hours: i32,
) -> Result<DateTime<FixedOffset>, ConfigurationError> {
    if utc_offset_hours.unsigned_abs() > MAX_UTC_OFFSET_HOURS.unsigned_abs() {
        return Err(ConfigurationError::UtcOffsetOutOfRange {
            hours: utc_offset_hours,
            max: MAX_UTC_OFFSET_HOURS,
        });
    }
    let offset = FixedOffset::east_opt(utc_offset_hours * 3600).ok_or(
        ConfigurationError::UtcOffsetOutOfRange {
            hours: utc_offset_hours,
            max: MAX_UTC_OFFSET_HOURS,
        },
    )?;
    let trimmed = raw.trim();
    let naive = NaiveDateTime::parse_from_str(trimmed, START_DATETIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, START_DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(12, 0, 0))
        })
        .ok_or_else(|| ConfigurationError::InvalidStartDate {
            value: raw.to_string(),
        })?;
    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| ConfigurationError::InvalidStartDate {
            value: raw.to_string(),
        })
}
