//! Oregon Trail journey engine
//!
//! Platform-agnostic core for the 1847 console journey: the turn counter, the
//! precomputed calendar of turn dates, the one-time shopping allocation and the
//! loop that plays them out. Terminal access lives behind the [`Console`] trait
//! so front ends supply their own I/O.

pub mod calendar;
pub mod config;
pub mod constants;
pub mod input;
pub mod narration;
pub mod runner;
pub mod shopping;
pub mod state;

use std::io;

// Re-export commonly used types
pub use calendar::TurnCalendar;
pub use config::{BudgetPolicy, ConfigurationError, JourneyConfig, parse_start};
pub use input::{InputFilter, interpret_confirmation};
pub use runner::{JourneyRunner, JourneySummary, RunError, RunOptions};
pub use shopping::{ShoppingAllocation, ShoppingCategory, ShoppingError, SpendAmounts};
pub use state::{JourneyPhase, JourneyState};

/// Console capabilities the journey loop consumes.
/// Platform-specific front ends provide the implementation.
pub trait Console {
    /// Best-effort terminal clear.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written to.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Emit `text`, followed by a newline when `newline` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written to.
    fn write_line(&mut self, text: &str, newline: bool) -> io::Result<()>;

    /// Show `prompt` on its own line, read one answer, trim it and apply `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    fn read_line(&mut self, prompt: &str, filter: InputFilter) -> io::Result<String>;

    /// Ask a yes/no question. Empty or unrecognised answers yield `default`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        let answer = self.read_line(prompt, InputFilter::PlainText)?;
        Ok(interpret_confirmation(&answer, default))
    }
}
