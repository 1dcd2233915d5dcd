//! User input and interaction handling.
//! The [`Prompter`] trait is the seam between answer resolution and the
//! terminal; [`DialoguerPrompter`] is the interactive implementation.

use crate::config::{Question, QuestionKind};
use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, Select};

pub trait Prompter {
    /// Asks a single question and returns the raw answer.
    fn answer(&self, question: &Question) -> Result<String>;

    /// Asks a yes/no question. `skip` answers yes without asking.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;
}

#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn cancelled(err: dialoguer::Error) -> Error {
    Error::Cancelled(err.to_string())
}

/// Index of the default choice, falling back to the first one.
pub fn get_single_choice_default(choices: &[String], default: Option<&str>) -> usize {
    default.and_then(|d| choices.iter().position(|choice| choice == d)).unwrap_or(0)
}

impl Prompter for DialoguerPrompter {
    fn answer(&self, question: &Question) -> Result<String> {
        match &question.kind {
            QuestionKind::Text => {
                let mut input = Input::<String>::new().with_prompt(&question.help);
                if let Some(default) = &question.default {
                    input = input.default(default.clone());
                }
                input.interact_text().map_err(cancelled)
            }
            QuestionKind::Select { choices } => {
                let selection = Select::new()
                    .with_prompt(&question.help)
                    .default(get_single_choice_default(choices, question.default.as_deref()))
                    .items(choices)
                    .interact()
                    .map_err(cancelled)?;
                Ok(choices[selection].clone())
            }
        }
    }

    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new().with_prompt(prompt).default(true).interact().map_err(cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_choice_default() {
        let choices = vec!["react".to_string(), "vue".to_string()];
        assert_eq!(get_single_choice_default(&choices, Some("vue")), 1);
        assert_eq!(get_single_choice_default(&choices, Some("svelte")), 0);
        assert_eq!(get_single_choice_default(&choices, None), 0);
    }

    #[test]
    fn test_confirm_skip() {
        assert!(DialoguerPrompter::new().confirm(true, "Looks good?".to_string()).unwrap());
    }
}
