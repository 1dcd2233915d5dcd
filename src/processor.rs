//! Rewrites a cloned boilerplate in place.
//!
//! The pass runs in a fixed order: substitution rules, manifest re-encode,
//! framework variant resolution, then the conditional renames. Any failure
//! stops the pass and leaves the tree as it is; nothing is rolled back.

use crate::constants::{ENTRY_FILE, GIT_DIR, MANIFEST_FILE, MANIFEST_INDENT, TRANSLATION_FILE};
use crate::error::{Error, Result};
use crate::ignore::{build_glob_set, excluded_glob_set, relative_key};
use crate::parser::Answers;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use crate::rules::{Limit, Rule, RULES};
use crate::variant::{resolve_variant, Framework};
use chrono::Datelike;
use log::{debug, error};
use regex::NoExpand;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(Error::IoError)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(Error::IoError)
}

/// Deletes a file or a directory tree. A missing path is not an error.
pub fn remove_path(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path)?,
        Ok(_) => fs::remove_file(path)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::IoError(e)),
    }
    debug!("Removed '{}'", path.display());
    Ok(())
}

/// A file eligible for rewriting, with its glob key.
struct Candidate {
    key: String,
    path: PathBuf,
}

pub struct Processor<'a> {
    answers: &'a Answers,
    root: &'a Path,
    rules: &'a [Rule],
    engine: Box<dyn TemplateRenderer>,
    year: i32,
}

impl<'a> Processor<'a> {
    pub fn new(answers: &'a Answers, root: &'a Path) -> Self {
        Self::with_rules(answers, root, RULES)
    }

    pub fn with_rules(answers: &'a Answers, root: &'a Path, rules: &'a [Rule]) -> Self {
        Self {
            answers,
            root,
            rules,
            engine: Box::new(MiniJinjaRenderer::new()),
            year: chrono::Local::now().year(),
        }
    }

    /// Pins the year used for `{{ year }}`.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    fn context(&self) -> serde_json::Value {
        let mut context = self.answers.to_context();
        if let serde_json::Value::Object(map) = &mut context {
            map.insert("year".to_string(), self.year.into());
        }
        context
    }

    /// Every file under the root outside the excluded subtrees. Excluded
    /// directories and `.git` are pruned, not walked.
    fn candidates(&self) -> Result<Vec<Candidate>> {
        let excluded = excluded_glob_set()?;
        let root = self.root;
        let walker = WalkDir::new(root).sort_by_file_name().into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            if entry.file_name() == GIT_DIR {
                return false;
            }
            match relative_key(root, entry.path()) {
                Some(key) => !excluded.is_match(format!("{}/", key)),
                None => true,
            }
        });

        let mut candidates = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(key) = relative_key(root, entry.path()) else {
                debug!("Skipping non UTF-8 path {}", entry.path().display());
                continue;
            };
            if excluded.is_match(&key) {
                continue;
            }
            candidates.push(Candidate { key, path: entry.into_path() });
        }
        Ok(candidates)
    }

    fn apply_rule(
        &self,
        rule: &Rule,
        candidates: &[Candidate],
        context: &serde_json::Value,
    ) -> Result<()> {
        let selector = build_glob_set(rule.files)?;
        let regex = rule.pattern.compile()?;
        let replacement = self.engine.render(rule.replacement, context)?;

        let mut selected = 0;
        for candidate in candidates.iter().filter(|c| selector.is_match(&c.key)) {
            selected += 1;
            let content = read_file(&candidate.path)?;
            let replaced = match rule.limit {
                Limit::All => regex.replace_all(&content, NoExpand(&replacement)),
                Limit::First => regex.replacen(&content, 1, NoExpand(&replacement)),
            };
            if replaced != content {
                debug!("Rewriting {} in '{}'", rule, candidate.key);
                write_file(&candidate.path, &replaced)?;
            }
        }
        if selected == 0 {
            return Err(Error::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} matched no files", rule),
            )));
        }
        Ok(())
    }

    /// Applies every rule once, in order.
    pub fn apply_rules(&self) -> Result<()> {
        let candidates = self.candidates()?;
        let context = self.context();
        for (index, rule) in self.rules.iter().enumerate() {
            if let Err(e) = self.apply_rule(rule, &candidates, &context) {
                error!("Rule #{} ({}) failed: {}", index + 1, rule, e);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Parses and rewrites the manifest with 4-space indentation, whether or
    /// not anything in it changed.
    pub fn reencode_manifest(&self) -> Result<()> {
        let path = self.root.join(MANIFEST_FILE);
        let content = read_file(&path)?;
        let manifest: serde_json::Value =
            serde_json::from_str(&content).map_err(Error::ManifestError)?;

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(MANIFEST_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        manifest.serialize(&mut serializer).map_err(Error::ManifestError)?;
        fs::write(&path, buffer)?;
        debug!("Re-encoded '{}'", MANIFEST_FILE);
        Ok(())
    }

    /// Renames `from` to `to` if `from` exists.
    fn rename_if_exists(&self, from: &str, to: &str) -> Result<()> {
        let source = self.root.join(from);
        if !source.exists() {
            debug!("'{}' does not exist, not renaming", from);
            return Ok(());
        }
        let target = self.root.join(to);
        debug!("Renaming '{}' to '{}'", from, to);
        fs::rename(source, target)?;
        Ok(())
    }

    /// Renames the entry file and translation catalog after the package.
    pub fn rename_package_files(&self) -> Result<()> {
        let package = self.answers.require("package")?;
        self.rename_if_exists(ENTRY_FILE, &format!("{}.php", package))?;
        self.rename_if_exists(TRANSLATION_FILE, &format!("languages/{}.pot", package))
    }

    /// Runs the whole rewrite pass.
    ///
    /// # Errors
    /// * `Error::IoError` if a rule selects no files, a selected file cannot
    ///   be read or written, or a variant file is missing
    /// * `Error::ManifestError` if composer.json is not valid JSON
    /// * `Error::MinijinjaError` if a replacement names a missing answer
    /// * `Error::ValidationError` if the framework answer is unknown
    pub fn rewrite(&self) -> Result<()> {
        let framework = self.answers.get("framework").map(str::parse::<Framework>).transpose()?;

        self.apply_rules()?;
        self.reencode_manifest()?;
        resolve_variant(self.root, framework)?;
        self.rename_package_files()
    }
}
