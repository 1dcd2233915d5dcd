//! strapper scaffolds WordPress plugins from a boilerplate repository.
//! It resolves project answers from flags, an answers file and prompts,
//! clones the boilerplate and rewrites its placeholder tokens in place.

/// Command-line interface module for the strapper application
pub mod cli;

/// Question schema and the built-in plugin questions
pub mod config;

pub mod constants;

/// Error types and handling for the strapper application
pub mod error;

/// Glob sets used to select and exclude files
pub mod ignore;

/// Dependency installers and the process runner seam
pub mod installer;

/// Boilerplate cloning and git metadata cleanup
pub mod loader;

pub mod logger;

/// Answer resolution and confirmation
pub mod parser;

/// In-place rewrite of a cloned boilerplate
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Replacement template rendering
pub mod renderer;

/// The ordered substitution table
pub mod rules;

/// Derivations and yes/no canonicalization
pub mod transform;

/// Front-end framework variant resolution
pub mod variant;
