//! Command-line interface implementation for strapper.
//! Provides argument parsing using clap.

use crate::constants::DEFAULT_REPOSITORY;
use crate::parser::Overrides;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for strapper.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Create a new WordPress plugin. Run it inside your plugins folder (wp-content/plugins).",
    long_about = None
)]
pub struct Args {
    /// Directory the plugin folder is created in
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Boilerplate git repository URL or local path
    #[arg(long, value_name = "REPO", default_value = DEFAULT_REPOSITORY)]
    pub repo: String,

    /// Boilerplate branch to clone
    #[arg(long)]
    pub branch: Option<String>,

    /// Accept the answers without showing the summary
    #[arg(short, long)]
    pub yes: bool,

    /// Overwrite an existing plugin folder
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// JSON or YAML file with predefined answers
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Dependencies to install once the plugin is generated (composer, yarn)
    #[arg(long = "install", value_name = "KIND", default_value = "composer")]
    pub installers: Vec<String>,

    /// Do not install any dependencies
    #[arg(long)]
    pub skip_install: bool,

    /// Project name, e.g. "The Plugin Name"
    #[arg(long)]
    pub project_name: Option<String>,

    /// Plugin description
    #[arg(long)]
    pub description: Option<String>,

    /// Plugin version
    #[arg(long)]
    pub plugin_version: Option<String>,

    /// Plugin license
    #[arg(long)]
    pub license: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Author e-mail address
    #[arg(long)]
    pub author_email: Option<String>,

    /// Author url without https://
    #[arg(long)]
    pub url: Option<String>,

    /// Front-end framework (react or vue)
    #[arg(long)]
    pub framework: Option<String>,
}

impl Args {
    /// Answers given as flags, keyed by question name.
    pub fn overrides(&self) -> Overrides {
        [
            ("projectName", &self.project_name),
            ("description", &self.description),
            ("pluginVersion", &self.plugin_version),
            ("license", &self.license),
            ("author", &self.author),
            ("authorEmail", &self.author_email),
            ("url", &self.url),
            ("framework", &self.framework),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| (name.to_string(), v.clone())))
        .collect()
    }
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
