//! Front-end framework variants shipped side by side in the boilerplate.
//!
//! The selected variant's files are promoted to their canonical names, the
//! other variant's files are deleted, and the selector scaffolding
//! (`package.json.react`, `Menu.vue.php`, ...) is removed whichever variant
//! was picked.

use crate::error::{Error, Result};
use crate::processor::remove_path;
use log::debug;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    React,
    Vue,
}

/// How a variant file reaches its canonical location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    Copy { from: &'static str, to: &'static str },
    Move { from: &'static str, to: &'static str },
}

/// Removed after every variant resolution.
pub const SCAFFOLDING: &[&str] = &[
    "package.json.vue",
    "package.json.react",
    "includes/Assets/LoadAssets-react.php",
    "includes/Assets/LoadAssets-vue.php",
    "includes/Admin/Menu.vue.php",
    "includes/Admin/Menu.react.php",
];

impl Framework {
    pub const ALL: [Framework; 2] = [Framework::React, Framework::Vue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
        }
    }

    /// Files copied or moved into place.
    pub fn promotions(&self) -> &'static [Promotion] {
        match self {
            Framework::React => &[
                Promotion::Copy { from: "package.json.react", to: "package.json" },
                Promotion::Move { from: "src-react", to: "src" },
                Promotion::Copy {
                    from: "includes/Admin/Menu.react.php",
                    to: "includes/Admin/Menu.php",
                },
                Promotion::Copy {
                    from: "includes/Assets/LoadAssets-react.php",
                    to: "includes/Assets/LoadAssets.php",
                },
            ],
            Framework::Vue => &[
                Promotion::Copy { from: "package.json.vue", to: "package.json" },
                Promotion::Move { from: "src-vue", to: "src" },
                Promotion::Copy {
                    from: "includes/Admin/Menu.vue.php",
                    to: "includes/Admin/Menu.php",
                },
                Promotion::Copy {
                    from: "includes/Assets/LoadAssets-vue.php",
                    to: "includes/Assets/LoadAssets.php",
                },
            ],
        }
    }

    /// Files that only the other variant needs.
    pub fn discards(&self) -> &'static [&'static str] {
        match self {
            Framework::React => &["vite.config.js", "includes/Assets/Vite.php", "src-vue"],
            Framework::Vue => &["webpack.config.js", "src-react"],
        }
    }
}

impl FromStr for Framework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Framework::ALL.into_iter().find(|f| f.as_str() == s).ok_or_else(|| {
            Error::ValidationError(format!("unknown framework '{}' (expected react or vue)", s))
        })
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn promote(root: &Path, promotion: &Promotion) -> Result<()> {
    match *promotion {
        Promotion::Copy { from, to } => {
            debug!("Copying '{}' to '{}'", from, to);
            fs::copy(root.join(from), root.join(to))?;
        }
        Promotion::Move { from, to } => {
            debug!("Moving '{}' to '{}'", from, to);
            let source = root.join(from);
            if !source.exists() {
                return Err(Error::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("'{}' does not exist", source.display()),
                )));
            }
            let target = root.join(to);
            remove_path(&target)?;
            fs::rename(source, target)?;
        }
    }
    Ok(())
}

/// Resolves the variant chosen by `framework`, or only removes the
/// scaffolding when no framework was chosen.
///
/// # Errors
/// * `Error::IoError` if a file of the selected variant is missing or a
///   copy, move or delete fails
pub fn resolve_variant(root: &Path, framework: Option<Framework>) -> Result<()> {
    if let Some(framework) = framework {
        debug!("Resolving the {} variant", framework);
        for discard in framework.discards() {
            remove_path(&root.join(discard))?;
        }
        for promotion in framework.promotions() {
            promote(root, promotion)?;
        }
    }

    for scaffold in SCAFFOLDING {
        remove_path(&root.join(scaffold))?;
    }
    Ok(())
}
