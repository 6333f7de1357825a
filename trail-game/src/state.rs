//! Journey state: turn counter, date table and the shopping snapshot.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::calendar::TurnCalendar;
use crate::config::{ConfigurationError, JourneyConfig, validate_counts};
use crate::shopping::ShoppingAllocation;

/// Coarse lifecycle of a journey. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyPhase {
    InProgress,
    Over,
}

/// Everything the game remembers between turns.
///
/// Owned by the driving loop and passed around explicitly; there is no global
/// instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyState {
    turn_current: u32,
    turn_amount: u32,
    calendar: TurnCalendar,
    game_over: bool,
    has_shopped: bool,
    shopping: ShoppingAllocation,
}

impl JourneyState {
    /// Start a journey on turn 1 and precompute its calendar.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if `turn_amount < 0`,
    /// `days_in_turn <= 0`, or the calendar overflows.
    pub fn initialize(
        start: DateTime<FixedOffset>,
        days_in_turn: i64,
        turn_amount: i64,
    ) -> Result<Self, ConfigurationError> {
        let (days_in_turn, turn_amount) = validate_counts(days_in_turn, turn_amount)?;
        let calendar = TurnCalendar::build(start, days_in_turn, turn_amount)?;
        let turn_current = 1;
        Ok(Self {
            turn_current,
            turn_amount,
            calendar,
            game_over: turn_current > turn_amount,
            has_shopped: false,
            shopping: ShoppingAllocation::default(),
        })
    }

    /// Start a journey from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns the same [`ConfigurationError`] as [`JourneyConfig::validate`].
    pub fn from_config(config: &JourneyConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let start = config.start_datetime()?;
        Self::initialize(start, config.days_in_turn, config.turn_amount)
    }

    /// Date label for the current turn.
    ///
    /// Once the journey is over the counter points one past the table, so the
    /// final turn's label is returned instead.
    #[must_use]
    pub fn current_date_label(&self) -> &str {
        self.calendar
            .label_for_turn(self.turn_current)
            .unwrap_or_else(|| self.calendar.last_label())
    }

    /// Store the five spend amounts as given. Later calls overwrite earlier ones.
    pub fn record_shopping(&mut self, allocation: ShoppingAllocation) {
        self.shopping = allocation;
        self.has_shopped = true;
    }

    /// Move to the next turn and return the resulting phase.
    pub fn advance_turn(&mut self) -> JourneyPhase {
        self.turn_current = self.turn_current.saturating_add(1);
        if self.turn_current > self.turn_amount {
            self.game_over = true;
        }
        log::debug!(
            "advanced to turn {}/{} (over: {})",
            self.turn_current,
            self.turn_amount,
            self.game_over
        );
        self.phase()
    }

    #[must_use]
    pub const fn phase(&self) -> JourneyPhase {
        if self.game_over {
            JourneyPhase::Over
        } else {
            JourneyPhase::InProgress
        }
    }

    /// True until the first allocation has been recorded.
    #[must_use]
    pub const fn needs_shopping(&self) -> bool {
        !self.has_shopped
    }

    #[must_use]
    pub const fn has_shopped(&self) -> bool {
        self.has_shopped
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub const fn turn_current(&self) -> u32 {
        self.turn_current
    }

    #[must_use]
    pub const fn turn_amount(&self) -> u32 {
        self.turn_amount
    }

    #[must_use]
    pub const fn days_in_turn(&self) -> u32 {
        self.calendar.days_in_turn()
    }

    #[must_use]
    pub const fn start_date(&self) -> DateTime<FixedOffset> {
        self.calendar.start()
    }

    #[must_use]
    pub fn dates(&self) -> &[String] {
        self.calendar.labels()
    }

    #[must_use]
    pub const fn calendar(&self) -> &TurnCalendar {
        &self.calendar
    }

    #[must_use]
    pub const fn shopping(&self) -> &ShoppingAllocation {
        &self.shopping
    }

    /// Amounts read back as `"0"` until the store has been visited.
    #[must_use]
    pub fn spent_animals(&self) -> &str {
        &self.shopping.animals
    }

    #[must_use]
    pub fn spent_food(&self) -> &str {
        &self.shopping.food
    }

    #[must_use]
    pub fn spent_ammunition(&self) -> &str {
        &self.shopping.ammunition
    }

    #[must_use]
    pub fn spent_clothing(&self) -> &str {
        &self.shopping.clothing
    }

    #[must_use]
    pub fn spent_misc(&self) -> &str {
        &self.shopping.misc
    }
}
