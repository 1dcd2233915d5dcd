//! Answer resolution.
//! Walks the schema top to bottom once per attempt, filling each answer from
//! a derivation, an override or a prompt, then asks the user to confirm the
//! whole set. Declining starts the pass over.

use crate::config::{QuestionKind, Schema, Source};
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::transform::canonicalize_yes_no;
use indexmap::IndexMap;
use log::debug;
use std::path::Path;

/// Values supplied before prompting, keyed by question name. An empty value
/// counts as not supplied.
pub type Overrides = IndexMap<String, String>;

/// Resolved answers in schema order. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers(IndexMap<String, String>);

impl Answers {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Like [`Answers::get`], but a missing answer is a configuration error.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| Error::ConfigError(format!("missing answer '{}'", name)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_context(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Prints the summary and asks whether it is right.
fn confirm_summary(prompt: &dyn Prompter, answers: &Answers) -> Result<bool> {
    println!();
    println!("Summary:");
    for (key, value) in answers.iter() {
        println!("- {}: {}", key, value);
    }
    let confirmed = prompt.confirm(false, "Looks good?".to_string())?;
    println!();
    Ok(confirmed)
}

fn resolve_once(
    schema: &Schema,
    overrides: &Overrides,
    prompt: &dyn Prompter,
) -> Result<Answers> {
    let mut answers: IndexMap<String, String> = IndexMap::new();

    for question in schema.questions() {
        let value = match &question.source {
            Source::Skipped => {
                debug!("Skipping question '{}'", question.name);
                continue;
            }
            Source::Derived { from, transform } => {
                let source = answers.get(from).ok_or_else(|| {
                    Error::ConfigError(format!(
                        "question '{}' is derived from unknown answer '{}'",
                        question.name, from
                    ))
                })?;
                transform(source.as_str())
            }
            Source::Prompt => match overrides.get(&question.name).filter(|v| !v.is_empty()) {
                Some(predefined) => {
                    let value = if question.yes_no {
                        canonicalize_yes_no(predefined).to_string()
                    } else {
                        predefined.clone()
                    };
                    if let QuestionKind::Select { choices } = &question.kind {
                        if !choices.contains(&value) {
                            return Err(Error::ValidationError(format!(
                                "'{}' is not a valid {} (expected one of: {})",
                                value,
                                question.name,
                                choices.join(", ")
                            )));
                        }
                    }
                    debug!("Using predefined answer for '{}'", question.name);
                    value
                }
                None => prompt.answer(question)?,
            },
        };
        answers.insert(question.name.clone(), value);
    }

    Ok(Answers(answers))
}

/// Resolves every non-skipped question of `schema`.
///
/// # Arguments
/// * `schema` - Validated questions, in resolution order
/// * `overrides` - Predefined answers that short-circuit prompting
/// * `prompt` - Prompt provider for everything else
/// * `auto_confirm` - Accept the first pass without showing the summary
///
/// # Errors
/// * `Error::Cancelled` if a prompt is interrupted
/// * `Error::ValidationError` if a select override is not one of its choices
pub fn get_answers(
    schema: &Schema,
    overrides: &Overrides,
    prompt: &dyn Prompter,
    auto_confirm: bool,
) -> Result<Answers> {
    loop {
        let answers = resolve_once(schema, overrides, prompt)?;
        if auto_confirm || confirm_summary(prompt, &answers)? {
            return Ok(answers);
        }
        debug!("Summary declined, starting over");
    }
}

fn value_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Parses an answers document: a JSON object, or a YAML mapping.
///
/// Scalars are stringified and nulls are dropped.
pub fn parse_answers(content: &str) -> Result<Overrides> {
    let raw: IndexMap<String, serde_json::Value> = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::AnswersError(format!("Invalid answers format: {}", e)))?,
    };

    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| value_to_string(value).map(|v| (key, v)))
        .collect())
}

/// Reads overrides from `path` when given, otherwise returns none.
pub fn get_answers_from<P: AsRef<Path>>(path: Option<P>) -> Result<Overrides> {
    match path {
        Some(path) => {
            let path = path.as_ref();
            debug!("Loading answers from {}", path.display());
            parse_answers(&std::fs::read_to_string(path)?)
        }
        None => Ok(Overrides::new()),
    }
}
