//! Glob handling for the rewrite pass.
//! Rule selectors and the fixed exclusion list are compiled into
//! [`GlobSet`]s matched against `/`-separated paths relative to the
//! project root.

use crate::constants::EXCLUDED_GLOBS;
use crate::error::Result;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Compiles `patterns` so that `*` never crosses a `/`.
pub fn build_glob_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(GlobBuilder::new(pattern.as_ref()).literal_separator(true).build()?);
    }
    Ok(builder.build()?)
}

/// Dependency and vendor subtrees that are never rewritten.
pub fn excluded_glob_set() -> Result<GlobSet> {
    build_glob_set(&EXCLUDED_GLOBS)
}

/// Converts a path below `root` into the form globs are matched against.
pub fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<&str> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}
