//! Dependency installation in the generated project.
use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installer {
    Composer,
    Yarn,
}

impl Installer {
    pub fn program(&self) -> &'static str {
        match self {
            Installer::Composer => "composer",
            Installer::Yarn => "yarn",
        }
    }

    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Installer::Composer => &["install", "--ignore-platform-reqs"],
            Installer::Yarn => &["install"],
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Installer::Composer => "Composer dependencies",
            Installer::Yarn => "front-end dependencies",
        }
    }

    /// Runs the install in `project_dir`.
    pub fn install(&self, runner: &dyn CommandRunner, project_dir: &Path) -> Result<()> {
        runner.run(self.program(), self.args(), project_dir)
    }
}

impl FromStr for Installer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "composer" => Ok(Installer::Composer),
            "yarn" | "webpack" => Ok(Installer::Yarn),
            other => Err(Error::ConfigError(format!("do not know how to install '{}'", other))),
        }
    }
}

/// Runs external programs to completion.
pub trait CommandRunner {
    /// # Errors
    /// * `Error::ProcessError` if the program exits unsuccessfully
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()>;
}

/// Runs programs with [`std::process::Command`], capturing their output.
#[derive(Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        let command = format!("{} {}", program, args.join(" "));
        debug!("Running '{}' in '{}'", command, cwd.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(Error::IoError)?;

        if !output.status.success() {
            let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
            captured.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(Error::ProcessError {
                command,
                code: output.status.code(),
                output: captured.trim().to_string(),
            });
        }

        Ok(())
    }
}
