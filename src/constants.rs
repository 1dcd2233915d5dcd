//! Common constants used throughout the strapper application.

use std::time::Duration;

/// Boilerplate cloned when `--repo` is not given
pub const DEFAULT_REPOSITORY: &str = "https://github.com/CODEREXLTD/rex-plugin-boilerplate";

/// Upper bound for the clone step
pub const CLONE_TIMEOUT: Duration = Duration::from_secs(45);

/// Subtrees no substitution rule may touch
pub const EXCLUDED_GLOBS: [&str; 3] = ["node_modules/**", "vendor/**", "packages/**"];

/// Structured manifest re-encoded after the substitution pass
pub const MANIFEST_FILE: &str = "composer.json";

/// Indentation used when re-encoding the manifest
pub const MANIFEST_INDENT: &[u8] = b"    ";

/// Plugin entry file renamed to `<package>.php`
pub const ENTRY_FILE: &str = "the-plugin-name.php";

/// Translation catalog renamed to `languages/<package>.pot`
pub const TRANSLATION_FILE: &str = "languages/the-plugin-name-text-domain.pot";

/// Version control metadata removed at the end of a run
pub const GIT_DIR: &str = ".git";
