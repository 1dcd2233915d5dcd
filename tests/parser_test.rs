use std::cell::RefCell;
use std::collections::VecDeque;

use strapper::config::{plugin_schema, Question, Schema};
use strapper::error::{Error, Result};
use strapper::parser::{get_answers, parse_answers, Overrides};
use strapper::prompt::Prompter;
use strapper::transform::{constant_prefix, lower_case, namespace, package_name};

/// Replays canned answers and records what was asked.
struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    confirmations: RefCell<VecDeque<bool>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn new(answers: &[&str], confirmations: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            confirmations: RefCell::new(confirmations.iter().copied().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn answer(&self, question: &Question) -> Result<String> {
        self.asked.borrow_mut().push(question.name.clone());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::Cancelled("no scripted answer left".to_string()))
    }

    fn confirm(&self, skip: bool, _prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        self.confirmations
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::Cancelled("no scripted confirmation left".to_string()))
    }
}

fn overrides(pairs: &[(&str, &str)]) -> Overrides {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn small_schema() -> Schema {
    Schema::new(vec![
        Question::text("projectName", "Name"),
        Question::text("license", "License").with_default("MIT"),
        Question::text("newsletter", "Subscribe?").yes_no(),
        Question::text("internal", "Never asked").skipped(),
        Question::derived("package", "Package", "projectName", package_name),
        Question::derived("namespace", "Namespace", "projectName", namespace),
        Question::derived("prefix", "Prefix", "projectName", constant_prefix),
        Question::derived("lowerCasePrefix", "Lower prefix", "prefix", lower_case),
    ])
    .unwrap()
}

#[test]
fn test_every_question_answered_once_in_schema_order() {
    let prompter = ScriptedPrompter::new(&["My Cool Plugin!", "GPL-2.0", "no"], &[]);
    let answers = get_answers(&small_schema(), &Overrides::new(), &prompter, true).unwrap();

    let keys: Vec<&str> = answers.iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec![
            "projectName",
            "license",
            "newsletter",
            "package",
            "namespace",
            "prefix",
            "lowerCasePrefix"
        ]
    );
    assert!(answers.get("internal").is_none());
    assert_eq!(answers.get("package"), Some("my-cool-plugin"));
    assert_eq!(answers.get("namespace"), Some("MyCoolPlugin"));
    assert_eq!(answers.get("prefix"), Some("MY_COOL_PLUGIN"));
    assert_eq!(answers.get("lowerCasePrefix"), Some("my_cool_plugin"));
    assert_eq!(prompter.asked(), vec!["projectName", "license", "newsletter"]);
}

#[test]
fn test_overrides_short_circuit_prompts() {
    let prompter = ScriptedPrompter::new(&["Apache-2.0"], &[]);
    let given = overrides(&[("projectName", "Acme Tools"), ("newsletter", "I Am")]);
    let answers = get_answers(&small_schema(), &given, &prompter, true).unwrap();

    assert_eq!(prompter.asked(), vec!["license"]);
    assert_eq!(answers.get("projectName"), Some("Acme Tools"));
    assert_eq!(answers.get("newsletter"), Some("yes"));
    assert_eq!(answers.get("package"), Some("acme-tools"));
}

#[test]
fn test_yes_no_only_canonicalizes_overrides() {
    let prompter = ScriptedPrompter::new(&["Acme", "MIT", "Y"], &[]);
    let answers = get_answers(&small_schema(), &Overrides::new(), &prompter, true).unwrap();
    assert_eq!(answers.get("newsletter"), Some("Y"));

    let prompter = ScriptedPrompter::new(&["Acme", "MIT"], &[]);
    let given = overrides(&[("newsletter", "maybe")]);
    let answers = get_answers(&small_schema(), &given, &prompter, true).unwrap();
    assert_eq!(answers.get("newsletter"), Some("no"));
}

#[test]
fn test_derived_questions_ignore_overrides() {
    let prompter = ScriptedPrompter::new(&["MIT", "no"], &[]);
    let given = overrides(&[("projectName", "Acme Tools"), ("package", "custom")]);
    let answers = get_answers(&small_schema(), &given, &prompter, true).unwrap();
    assert_eq!(answers.get("package"), Some("acme-tools"));
}

#[test]
fn test_declined_summary_starts_over() {
    let prompter = ScriptedPrompter::new(&["MIT", "no", "GPL-3.0", "yes"], &[false, true]);
    let given = overrides(&[("projectName", "Acme Tools")]);
    let answers = get_answers(&small_schema(), &given, &prompter, false).unwrap();

    assert_eq!(
        prompter.asked(),
        vec!["license", "newsletter", "license", "newsletter"]
    );
    assert_eq!(answers.get("license"), Some("GPL-3.0"));
    assert_eq!(answers.get("newsletter"), Some("yes"));
    assert_eq!(answers.get("projectName"), Some("Acme Tools"));
    assert_eq!(answers.get("namespace"), Some("AcmeTools"));
}

#[test]
fn test_select_override_must_be_a_choice() {
    let schema = plugin_schema().unwrap();
    let prompter = ScriptedPrompter::new(&[], &[]);
    let given = overrides(&[
        ("projectName", "Acme"),
        ("description", "d"),
        ("pluginVersion", "1.0.0"),
        ("license", "MIT"),
        ("author", "Acme"),
        ("authorEmail", "dev@acme.dev"),
        ("url", "acme.dev"),
        ("framework", "svelte"),
    ]);
    let result = get_answers(&schema, &given, &prompter, true);
    assert!(matches!(result, Err(Error::ValidationError(_))));
}

#[test]
fn test_cancelled_prompt_aborts() {
    let prompter = ScriptedPrompter::new(&[], &[]);
    let result = get_answers(&small_schema(), &Overrides::new(), &prompter, true);
    assert!(matches!(result, Err(Error::Cancelled(_))));
}

#[test]
fn test_parse_answers_json() {
    let parsed =
        parse_answers(r#"{"projectName": "Acme", "pluginVersion": 2, "url": null}"#).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed["projectName"], "Acme");
    assert_eq!(parsed["pluginVersion"], "2");
}

#[test]
fn test_parse_answers_yaml() {
    let parsed = parse_answers("projectName: Acme Tools\nframework: vue\n").unwrap();
    let keys: Vec<&String> = parsed.keys().collect();
    assert_eq!(keys, vec!["projectName", "framework"]);
    assert_eq!(parsed["framework"], "vue");
}

#[test]
fn test_parse_answers_invalid() {
    let result = parse_answers("- just\n- a list\n");
    assert!(matches!(result, Err(Error::AnswersError(_))));
}

#[test]
fn test_empty_override_still_prompts() {
    let prompter = ScriptedPrompter::new(&["Acme Tools", "no"], &[]);
    let given = overrides(&[("projectName", ""), ("license", "GPL-2.0")]);
    let answers = get_answers(&small_schema(), &given, &prompter, true).unwrap();

    assert_eq!(prompter.asked(), vec!["projectName", "newsletter"]);
    assert_eq!(answers.get("projectName"), Some("Acme Tools"));
    assert_eq!(answers.get("package"), Some("acme-tools"));
}
