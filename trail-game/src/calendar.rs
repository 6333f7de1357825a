//! Precomputed turn calendar.
//!
//! The table holds one entry for the departure date followed by one entry per
//! turn. It is built once when the journey starts and never changes.

use chrono::{DateTime, Days, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::ConfigurationError;
use crate::constants::{LABEL_FORMAT, LABEL_FORMAT_WITH_YEAR};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCalendar {
    start: DateTime<FixedOffset>,
    days_in_turn: u32,
    dates: Vec<NaiveDate>,
    labels: Vec<String>,
}

impl TurnCalendar {
    /// Build the table for `turn_amount` turns of `days_in_turn` days each.
    ///
    /// Entry 0 carries the year (`April 12 1847`); later entries omit it
    /// (`April 26`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DateOutOfRange`] if a turn date cannot be
    /// represented.
    pub fn build(
        start: DateTime<FixedOffset>,
        days_in_turn: u32,
        turn_amount: u32,
    ) -> Result<Self, ConfigurationError> {
        // Fail before allocating when the last turn is already unrepresentable.
        turn_datetime(start, days_in_turn, turn_amount)?;

        let mut dates = vec![start.date_naive()];
        let mut labels = vec![start.format(LABEL_FORMAT_WITH_YEAR).to_string()];
        for turn in 1..=turn_amount {
            let at = turn_datetime(start, days_in_turn, turn)?;
            dates.push(at.date_naive());
            labels.push(at.format(LABEL_FORMAT).to_string());
        }

        Ok(Self {
            start,
            days_in_turn,
            dates,
            labels,
        })
    }

    #[must_use]
    pub const fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    #[must_use]
    pub const fn days_in_turn(&self) -> u32 {
        self.days_in_turn
    }

    /// Number of entries, always `turn_amount + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn label_for_turn(&self, turn: u32) -> Option<&str> {
        let idx = usize::try_from(turn).ok()?;
        self.labels.get(idx).map(String::as_str)
    }

    #[must_use]
    pub fn date_for_turn(&self, turn: u32) -> Option<NaiveDate> {
        let idx = usize::try_from(turn).ok()?;
        self.dates.get(idx).copied()
    }

    /// Label of the final turn.
    #[must_use]
    pub fn last_label(&self) -> &str {
        self.labels.last().map_or("", String::as_str)
    }
}

/// Date of `turn`, or [`ConfigurationError::DateOutOfRange`] if it cannot be represented.
pub(crate) fn turn_datetime(
    start: DateTime<FixedOffset>,
    days_in_turn: u32,
    turn: u32,
) -> Result<DateTime<FixedOffset>, ConfigurationError> {
    let offset = u64::from(turn) * u64::from(days_in_turn);
    start
        .checked_add_days(Days::new(offset))
        .ok_or(ConfigurationError::DateOutOfRange { turn })
}
