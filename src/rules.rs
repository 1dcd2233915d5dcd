//! The ordered substitution table applied to a freshly cloned boilerplate.
//!
//! Order is significant. Generic content rules run first, then the
//! meta-header rules, then identifier renames; several later rules only see
//! text that earlier rules already rewrote, and some become no-ops because
//! of it (`namespace ThePluginName` never matches once `ThePluginName` has
//! been replaced).

use crate::error::Result;
use regex::Regex;
use Pattern::{Literal, Regex as Re};

/// What a rule looks for.
#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    /// Matched verbatim
    Literal(&'static str),
    /// A regular expression
    Regex(&'static str),
}

impl Pattern {
    pub fn compile(&self) -> Result<Regex> {
        Ok(match self {
            Pattern::Literal(text) => Regex::new(&regex::escape(text))?,
            Pattern::Regex(expr) => Regex::new(expr)?,
        })
    }
}

/// How many matches per file a rule replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    All,
    First,
}

/// One substitution: files, pattern and a replacement template rendered
/// against the answers.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub files: &'static [&'static str],
    pub pattern: Pattern,
    pub replacement: &'static str,
    pub limit: Limit,
}

impl Rule {
    pub const fn all(
        files: &'static [&'static str],
        pattern: Pattern,
        replacement: &'static str,
    ) -> Self {
        Self { files, pattern, replacement, limit: Limit::All }
    }

    pub const fn first(
        files: &'static [&'static str],
        pattern: Pattern,
        replacement: &'static str,
    ) -> Self {
        Self { files, pattern, replacement, limit: Limit::First }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pattern = match self.pattern {
            Pattern::Literal(text) | Pattern::Regex(text) => text,
        };
        write!(f, "'{}' in {}", pattern, self.files.join(", "))
    }
}

pub const PHP_FILES: &[&str] = &[
    "the-plugin-name.php",
    "includes/Abstracts/**/*.php",
    "includes/Admin/**/*.php",
    "includes/Assets/**/*.php",
    "includes/Common/**/*.php",
    "includes/Databases/**/*.php",
    "includes/Hooks/**/*.php",
    "includes/Rest/**/*.php",
    "includes/Setup/**/*.php",
];

pub const COMPOSER_FILE: &[&str] = &["composer.json"];
pub const CODESNIFFER_FILE: &[&str] = &["phpcs.xml"];
pub const TRANSLATION_FILE: &[&str] = &["languages/the-plugin-name-text-domain.pot"];
pub const GRUNT_FILE: &[&str] = &["Gruntfile.js"];
pub const PHPUNIT_BOOTSTRAP_FILE: &[&str] = &["tests/phpunit/bootstrap.php"];

pub const RULES: &[Rule] = &[
    // Plugin meta, doc blocks and translation calls
    Rule::all(PHP_FILES, Literal("{{The Plugin Name}}"), "{{ projectName }}"),
    Rule::all(PHP_FILES, Literal("{{plugin_description}}"), "{{ description }}"),
    Rule::all(PHP_FILES, Literal("{{plugin_url}}"), "https://{{ url }}"),
    Rule::all(PHP_FILES, Literal("{{the-plugin-name}}"), "{{ package }}"),
    Rule::all(PHP_FILES, Literal("{{the-project-name}}"), "{{ package }}"),
    Rule::all(PHP_FILES, Literal("{{author_name}}"), "{{ author }}"),
    Rule::all(PHP_FILES, Literal("{{version}}"), "{{ pluginVersion }}"),
    Rule::all(PHP_FILES, Literal("{{author_email}}"), "{{ authorEmail }}"),
    Rule::all(PHP_FILES, Literal("{{author_url}}"), "https://{{ url }}"),
    Rule::all(PHP_FILES, Literal("{{author_copyright}}"), "{{ year }} {{ projectName }}"),
    Rule::all(PHP_FILES, Literal("{{author_license}}"), "{{ license }}"),
    // Main class name and namespaces
    Rule::all(PHP_FILES, Literal("ThePluginName"), "{{ namespace }}"),
    Rule::all(PHP_FILES, Literal("namespace ThePluginName"), "namespace {{ namespace }}"),
    Rule::all(PHP_FILES, Literal("ThePluginName\\"), "{{ namespace }}\\"),
    // Plugin file headers
    Rule::first(PHP_FILES, Re(r"(?m)^ \* Text Domain:.*$"), " * Text Domain:     {{ package }}"),
    Rule::first(PHP_FILES, Re(r"(?m)^ \* Namespace:.*$"), " * Namespace:       {{ namespace }}"),
    // Text domain, constants, globals and functions
    Rule::all(PHP_FILES, Literal("the-plugin-name-text-domain"), "{{ package }}"),
    Rule::all(
        PHP_FILES,
        Literal("plugin_name_rest_api_class_map"),
        "{{ prefix }}_rest_api_class_map",
    ),
    Rule::all(PHP_FILES, Literal("_PLUGIN_NAME_"), "{{ prefix }}_"),
    Rule::all(PHP_FILES, Literal("$plugin_name_"), "${{ lowerCasePrefix }}_"),
    Rule::all(PHP_FILES, Literal("plugin_name_"), "{{ lowerCasePrefix }}_"),
    Rule::all(PHP_FILES, Literal("the_plugin_name_main_function"), "{{ lowerCasePrefix }}"),
    Rule::all(PHP_FILES, Literal("plugin_name-slug"), "{{ lowerCasePrefix }}"),
    // composer.json autoload namespace
    Rule::all(COMPOSER_FILE, Literal("ThePluginName\\"), "{{ namespace }}\\"),
    // PHP_CodeSniffer ruleset
    Rule::all(
        CODESNIFFER_FILE,
        Literal(r#"<ruleset name="The Plugin Name ruleset">"#),
        r#"<ruleset name="{{ projectName }} ruleset">"#,
    ),
    Rule::all(
        CODESNIFFER_FILE,
        Literal("<description>Generally-applicable sniffs for The Plugin Name.</description>"),
        "<description>Generally-applicable sniffs for {{ projectName }}.</description>",
    ),
    Rule::all(
        CODESNIFFER_FILE,
        Literal(r#"<element value="ThePluginName"/>"#),
        r#"<element value="{{ namespace }}"/>"#,
    ),
    Rule::all(
        CODESNIFFER_FILE,
        Literal(r#"<element value="_THE_PLUGIN_NAME"/>"#),
        r#"<element value="{{ prefix }}"/>"#,
    ),
    Rule::all(
        CODESNIFFER_FILE,
        Literal(r#"<element value="the_plugin_name"/>"#),
        r#"<element value="{{ lowerCasePrefix }}"/>"#,
    ),
    Rule::all(
        CODESNIFFER_FILE,
        Literal(r#"<element value="the-plugin-name-text-domain"/>"#),
        r#"<element value="{{ package }}"/>"#,
    ),
    // Translation catalog, before it is renamed
    Rule::all(TRANSLATION_FILE, Literal("the-plugin-name.php"), "{{ package }}.php"),
    // Grunt build
    Rule::all(GRUNT_FILE, Literal("the-plugin-name-text-domain"), "{{ package }}"),
    Rule::all(GRUNT_FILE, Literal("the-plugin-name-text-domain.pot"), "{{ package }}.pot"),
    Rule::all(GRUNT_FILE, Literal("{{the-plugin-name}}"), "{{ package }}"),
    Rule::all(GRUNT_FILE, Literal("{{plugin_url}}"), "https://{{ url }}"),
    Rule::all(GRUNT_FILE, Literal("{{author_email}}"), "{{ authorEmail }}"),
    // PHPUnit bootstrap
    Rule::all(PHPUNIT_BOOTSTRAP_FILE, Literal("rex_plugin_boilerplate"), "{{ package }}"),
];
