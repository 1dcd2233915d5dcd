//! Question schema for the plugin scaffold.
//! Each question is a tagged [`Source`] rather than a bag of optional
//! fields, and [`Schema::new`] rejects broken schemas before anything runs.

use crate::error::{Error, Result};
use crate::transform::{self, Transform};
use std::collections::HashSet;

/// How a question is presented when it has to be prompted.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    Text,
    Select { choices: Vec<String> },
}

/// Where a question's answer comes from.
#[derive(Debug, Clone)]
pub enum Source {
    /// Prompted, unless an override is supplied
    Prompt,
    /// Computed from an earlier answer and never prompted
    Derived { from: String, transform: Transform },
    /// Left out of the answers entirely
    Skipped,
}

#[derive(Debug, Clone)]
pub struct Question {
    pub name: String,
    pub kind: QuestionKind,
    pub help: String,
    pub default: Option<String>,
    pub source: Source,
    /// Canonicalize overrides to "yes"/"no"
    pub yes_no: bool,
}

impl Question {
    pub fn text<S: Into<String>>(name: S, help: S) -> Self {
        Self {
            name: name.into(),
            kind: QuestionKind::Text,
            help: help.into(),
            default: None,
            source: Source::Prompt,
            yes_no: false,
        }
    }

    pub fn select<S: Into<String>>(name: S, help: S, choices: &[&str]) -> Self {
        Self {
            kind: QuestionKind::Select {
                choices: choices.iter().map(|c| c.to_string()).collect(),
            },
            ..Self::text(name, help)
        }
    }

    pub fn derived<S: Into<String>>(name: S, help: S, from: S, transform: Transform) -> Self {
        Self {
            source: Source::Derived { from: from.into(), transform },
            ..Self::text(name, help)
        }
    }

    pub fn with_default<S: Into<String>>(mut self, default: S) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn skipped(mut self) -> Self {
        self.source = Source::Skipped;
        self
    }

    pub fn yes_no(mut self) -> Self {
        self.yes_no = true;
        self
    }
}

/// An ordered, validated list of questions.
#[derive(Debug, Clone)]
pub struct Schema {
    questions: Vec<Question>,
}

impl Schema {
    /// Validates the question list.
    ///
    /// # Errors
    /// * `Error::ConfigError` if a name repeats, a derivation reads a question
    ///   that is skipped or not declared before it, or a select question has
    ///   no choices or a default outside its choices.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut resolvable: HashSet<&str> = HashSet::new();

        for question in &questions {
            let name = question.name.as_str();
            if !seen.insert(name) {
                return Err(Error::ConfigError(format!("duplicate question '{}'", name)));
            }

            if let Source::Derived { from, .. } = &question.source {
                if !resolvable.contains(from.as_str()) {
                    return Err(Error::ConfigError(format!(
                        "question '{}' is derived from '{}', which is not answered before it",
                        name, from
                    )));
                }
            }

            if let QuestionKind::Select { choices } = &question.kind {
                if choices.is_empty() {
                    return Err(Error::ConfigError(format!(
                        "question '{}' has no choices",
                        name
                    )));
                }
                if let Some(default) = &question.default {
                    if !choices.contains(default) {
                        return Err(Error::ConfigError(format!(
                            "default '{}' of question '{}' is not one of its choices",
                            default, name
                        )));
                    }
                }
            }

            if !matches!(question.source, Source::Skipped) {
                resolvable.insert(name);
            }
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, name: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.name == name)
    }
}

/// The questions asked when scaffolding a plugin.
pub fn plugin_schema() -> Result<Schema> {
    Schema::new(vec![
        Question::text("projectName", "Please enter your project name (e.g. The Plugin Name)"),
        Question::text("description", "The plugin description"),
        Question::text("pluginVersion", "The plugin version").with_default("1.0.0"),
        Question::text("license", "The plugin license").with_default("MIT"),
        Question::text("author", "The plugin author's name").with_default("Code Rex"),
        Question::text("authorEmail", "The plugin author's e-mail address")
            .with_default("engineering@coderex.co"),
        Question::text("url", "The author url without https:// (e.g. coderex.co)")
            .with_default("coderex.co"),
        Question::select("framework", "Front-end framework", &["react", "vue"])
            .with_default("react"),
        Question::derived(
            "vendor",
            "Composer.json vendor name",
            "author",
            transform::package_name,
        ),
        Question::derived(
            "package",
            "Package name: name of the folder, text domain name (e.g. plugin-name)",
            "projectName",
            transform::package_name,
        ),
        Question::derived(
            "namespace",
            "Namespace for your project / files (e.g. PackageName)",
            "projectName",
            transform::namespace,
        ),
        Question::derived(
            "prefix",
            "Project prefix for any globals with uppercase letters (e.g. PLUGIN_NAME)",
            "projectName",
            transform::constant_prefix,
        ),
        Question::derived(
            "lowerCasePrefix",
            "Project prefix for any lowercase occurrences incl. actions, filters (e.g. plugin_name)",
            "prefix",
            transform::lower_case,
        ),
    ])
}
