//! Turn loop that drives a journey through a [`Console`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Console;
use crate::config::{ConfigurationError, JourneyConfig};
use crate::constants::STRICT_SHOPPING_ATTEMPTS;
use crate::input::InputFilter;
use crate::narration::{INSTRUCTIONS, INSTRUCTIONS_QUESTION, shopping_prompt};
use crate::shopping::{ShoppingAllocation, ShoppingCategory, ShoppingError};
use crate::state::JourneyState;

/// Failures that stop a run early.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid journey configuration")]
    Configuration(#[from] ConfigurationError),
    #[error("console unavailable")]
    Console(#[from] std::io::Error),
    #[error("shopping rejected after {attempts} attempts")]
    Shopping {
        attempts: u32,
        #[source]
        source: ShoppingError,
    },
}

/// Switches that change how the loop treats player input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Parse shopping amounts and enforce the budget rules, re-asking on failure.
    pub strict_amounts: bool,
}

/// Outcome of a finished journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneySummary {
    pub departure: String,
    pub final_date: String,
    pub turns: u32,
    pub final_turn_counter: u32,
    pub shopping: ShoppingAllocation,
}

impl JourneySummary {
    #[must_use]
    pub fn from_state(state: &JourneyState) -> Self {
        Self {
            departure: state.dates().first().cloned().unwrap_or_default(),
            final_date: state.calendar().last_label().to_string(),
            turns: state.turn_amount(),
            final_turn_counter: state.turn_current(),
            shopping: state.shopping().clone(),
        }
    }
}

/// Binds a console to a journey configuration for one play-through.
pub struct JourneyRunner<'a, C: Console + ?Sized> {
    console: &'a mut C,
    config: JourneyConfig,
    options: RunOptions,
}

impl<'a, C: Console + ?Sized> JourneyRunner<'a, C> {
    pub const fn new(console: &'a mut C, config: JourneyConfig, options: RunOptions) -> Self {
        Self {
            console,
            config,
            options,
        }
    }

    /// Play the journey to its final turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the console fails,
    /// or strict shopping exhausts its attempts.
    pub fn run(&mut self) -> Result<JourneyState, RunError> {
        let mut state = JourneyState::from_config(&self.config)?;
        log::info!(
            "journey starts {} with {} turns of {} days",
            state.dates().first().map_or("", String::as_str),
            state.turn_amount(),
            state.days_in_turn()
        );

        self.console.clear_screen()?;
        if self.console.confirm(INSTRUCTIONS_QUESTION, true)? {
            self.show_instructions()?;
        }

        while !state.is_game_over() {
            self.console.write_line(state.current_date_label(), true)?;

            if state.needs_shopping() {
                let allocation = self.go_shopping()?;
                state.record_shopping(allocation);
            }

            self.console
                .write_line(&state.turn_current().to_string(), true)?;
            state.advance_turn();
        }

        log::info!(
            "journey finished after turn {}",
            state.turn_current().saturating_sub(1)
        );
        Ok(state)
    }

    fn show_instructions(&mut self) -> Result<(), RunError> {
        self.console.clear_screen()?;
        for line in INSTRUCTIONS {
            self.console.write_line(line, true)?;
        }
        Ok(())
    }

    fn go_shopping(&mut self) -> Result<ShoppingAllocation, RunError> {
        let mut attempt = 1;
        loop {
            let allocation = self.read_allocation()?;
            if !self.options.strict_amounts {
                return Ok(allocation);
            }
            let verdict = allocation
                .parse_amounts()
                .and_then(|amounts| amounts.check(&self.config.budget));
            match verdict {
                Ok(()) => return Ok(allocation),
                Err(source) if attempt >= STRICT_SHOPPING_ATTEMPTS => {
                    return Err(RunError::Shopping {
                        attempts: attempt,
                        source,
                    });
                }
                Err(err) => {
                    log::warn!("shopping attempt {attempt} rejected: {err}");
                    self.console.write_line(&err.to_string(), true)?;
                    attempt += 1;
                }
            }
        }
    }

    fn read_allocation(&mut self) -> Result<ShoppingAllocation, RunError> {
        let mut allocation = ShoppingAllocation::default();
        for category in ShoppingCategory::ALL {
            *allocation.amount_mut(category) = self
                .console
                .read_line(shopping_prompt(category), InputFilter::IntegerDigitsOnly)?;
        }
        Ok(allocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io;

    #[derive(Default)]
    struct ScriptedConsole {
        answers: VecDeque<String>,
        output: Vec<String>,
        prompts: Vec<String>,
        clears: usize,
    }

    impl ScriptedConsole {
        fn with_answers(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(ToString::to_string).collect(),
                ..Self::default()
            }
        }
    }

    impl Console for ScriptedConsole {
        fn clear_screen(&mut self) -> io::Result<()> {
            self.clears += 1;
            Ok(())
        }

        fn write_line(&mut self, text: &str, _newline: bool) -> io::Result<()> {
            self.output.push(text.to_string());
            Ok(())
        }

        fn read_line(&mut self, prompt: &str, filter: InputFilter) -> io::Result<String> {
            self.prompts.push(prompt.to_string());
            let raw = self.answers.pop_front().unwrap_or_default();
            Ok(filter.apply(raw.trim()))
        }
    }

    fn run_reference(console: &mut ScriptedConsole) -> Result<JourneyState, RunError> {
        JourneyRunner::new(console, JourneyConfig::default(), RunOptions::default()).run()
    }

    #[test]
    fn plays_reference_journey_without_instructions() {
        let mut console = ScriptedConsole::with_answers(&["n", "200", "150", "50", "100", "50"]);
        let state = run_reference(&mut console).unwrap();

        assert!(state.is_game_over());
        assert_eq!(state.turn_current(), 17);
        assert_eq!(state.shopping(), &ShoppingAllocation::new(200, 150, 50, 100, 50));
        assert_eq!(console.clears, 1);
        assert_eq!(console.prompts.len(), 6);
        assert_eq!(console.prompts[0], INSTRUCTIONS_QUESTION);
        // Date label then turn number for each of the 16 turns.
        assert_eq!(console.output.len(), 32);
        assert_eq!(console.output[0], "April 26");
        assert_eq!(console.output[1], "1");
        assert_eq!(console.output[30], "November 22");
        assert_eq!(console.output[31], "16");
    }

    #[test]
    fn instructions_are_shown_by_default() {
        let mut console = ScriptedConsole::with_answers(&[""]);
        run_reference(&mut console).unwrap();
        assert_eq!(console.clears, 2);
        assert_eq!(console.output[..INSTRUCTIONS.len()], *INSTRUCTIONS);
        assert_eq!(console.output[INSTRUCTIONS.len()], "April 26");
    }

    #[test]
    fn lenient_mode_keeps_garbage_amounts() {
        let mut console =
            ScriptedConsole::with_answers(&["no", "lots", "-5", "$1,000", "", "7 dollars"]);
        let state = run_reference(&mut console).unwrap();
        assert_eq!(
            state.shopping(),
            &ShoppingAllocation::new("", "-5", "1000", "", "7")
        );
    }

    #[test]
    fn strict_mode_reprompts_until_valid() {
        let mut console = ScriptedConsole::with_answers(&[
            "n", "100", "150", "50", "100", "50", // oxen too cheap
            "250", "200", "50", "100", "100",
        ]);
        let options = RunOptions {
            strict_amounts: true,
        };
        let state = JourneyRunner::new(&mut console, JourneyConfig::default(), options)
            .run()
            .unwrap();
        assert_eq!(state.spent_animals(), "250");
        assert_eq!(console.prompts.len(), 11);
        assert!(console.output.iter().any(|line| line.contains("oxen team")));
    }

    #[test]
    fn strict_mode_gives_up_after_three_attempts() {
        let mut answers = vec!["n"];
        for _ in 0..3 {
            answers.extend(["300", "300", "300", "300", "300"]);
        }
        let mut console = ScriptedConsole::with_answers(&answers);
        let options = RunOptions {
            strict_amounts: true,
        };
        let err = JourneyRunner::new(&mut console, JourneyConfig::default(), options)
            .run()
            .unwrap_err();
        assert!(matches!(
            err,
            RunError::Shopping {
                attempts: 3,
                source: ShoppingError::BudgetExceeded {
                    spent: 1500,
                    available: 700
                }
            }
        ));
    }

    #[test]
    fn invalid_config_fails_before_prompting() {
        let mut console = ScriptedConsole::default();
        let config = JourneyConfig {
            days_in_turn: 0,
            ..JourneyConfig::default()
        };
        let err = JourneyRunner::new(&mut console, config, RunOptions::default())
            .run()
            .unwrap_err();
        assert!(matches!(
            err,
            RunError::Configuration(ConfigurationError::NonPositiveDaysInTurn { value: 0 })
        ));
        assert!(console.prompts.is_empty());
    }

    #[test]
    fn zero_turn_journey_skips_the_store() {
        let mut console = ScriptedConsole::with_answers(&["n"]);
        let config = JourneyConfig {
            turn_amount: 0,
            ..JourneyConfig::default()
        };
        let state = JourneyRunner::new(&mut console, config, RunOptions::default())
            .run()
            .unwrap();
        assert!(state.needs_shopping());
        assert!(console.output.is_empty());
    }

    #[test]
    fn summary_reports_final_counters() {
        let mut console = ScriptedConsole::with_answers(&["n", "200", "150", "50", "100", "50"]);
        let state = run_reference(&mut console).unwrap();
        let summary = JourneySummary::from_state(&state);
        assert_eq!(summary.departure, "April 12 1847");
        assert_eq!(summary.final_date, "November 22");
        assert_eq!(summary.turns, 16);
        assert_eq!(summary.final_turn_counter, 17);
        assert_eq!(summary.shopping.food, "150");
    }
}
