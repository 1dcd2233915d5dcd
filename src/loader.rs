//! Boilerplate retrieval and git metadata cleanup.
//! Remote repositories are cloned shallow; local paths are cloned in full.
use crate::constants::GIT_DIR;
use crate::error::{Error, Result};
use crate::processor::remove_path;
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use url::Url;

/// Represents the source location of a boilerplate.
#[derive(Debug, PartialEq)]
pub enum TemplateSource {
    /// Local filesystem repository path
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS or SSH)
    Git(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

impl TemplateSource {
    /// Classifies a path or URL.
    pub fn from_string(s: &str) -> Self {
        if let Ok(url) = Url::parse(s) {
            if matches!(url.scheme(), "https" | "http" | "git" | "ssh") {
                return Self::Git(s.to_string());
            }
        }

        if s.starts_with("git@") {
            return Self::Git(s.to_string());
        }

        Self::FileSystem(PathBuf::from(s))
    }

    fn location(&self) -> String {
        match self {
            TemplateSource::FileSystem(path) => path.display().to_string(),
            TemplateSource::Git(repo) => repo.clone(),
        }
    }
}

fn clone_blocking(
    location: &str,
    branch: Option<&str>,
    destination: &Path,
    shallow: bool,
    cancelled: &AtomicBool,
) -> std::result::Result<(), git2::Error> {
    let mut callbacks = git2::RemoteCallbacks::new();
    callbacks.credentials(|_url, username_from_url, _allowed_types| {
        git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
    });
    callbacks.transfer_progress(|_progress| !cancelled.load(Ordering::Relaxed));

    let mut fetch_opts = git2::FetchOptions::new();
    fetch_opts.remote_callbacks(callbacks);
    if shallow {
        fetch_opts.depth(1);
    }

    let mut builder = git2::build::RepoBuilder::new();
    builder.fetch_options(fetch_opts);
    if let Some(branch) = branch {
        builder.branch(branch);
    }
    builder.clone(location, destination)?;
    Ok(())
}

/// Clones `source` into `destination`, giving up once `timeout` has passed.
///
/// The clone runs on a worker thread so that connecting, negotiation and
/// checkout all count against `timeout`. After a timeout the worker is told
/// to abort at its next transfer callback and `destination` may be left
/// partially written.
///
/// # Errors
/// * `Error::TimeoutError` if the clone outlives `timeout`
/// * `Error::Git2Error` for any other clone failure
pub fn clone_repository(
    source: &TemplateSource,
    branch: Option<&str>,
    destination: &Path,
    timeout: Duration,
) -> Result<()> {
    debug!("Cloning {} to '{}'.", source, destination.display());

    let location = source.location();
    let shallow = matches!(source, TemplateSource::Git(_));
    let branch = branch.map(str::to_string);
    let target = destination.to_path_buf();
    let cancelled = Arc::new(AtomicBool::new(false));
    let worker_cancelled = Arc::clone(&cancelled);

    let (done_tx, done_rx) = mpsc::channel();
    thread::Builder::new().name("git-clone".to_string()).spawn(move || {
        let result =
            clone_blocking(&location, branch.as_deref(), &target, shallow, &worker_cancelled);
        let _ = done_tx.send(result);
    })?;

    match done_rx.recv_timeout(timeout) {
        Ok(result) => result.map_err(Error::Git2Error),
        Err(RecvTimeoutError::Timeout) => {
            cancelled.store(true, Ordering::Relaxed);
            Err(Error::TimeoutError(format!(
                "cloning {} took longer than {}s",
                source,
                timeout.as_secs()
            )))
        }
        Err(RecvTimeoutError::Disconnected) => Err(Error::Git2Error(git2::Error::from_str(
            "clone worker exited without a result",
        ))),
    }
}

/// Deletes the cloned repository's history.
pub fn remove_git_metadata(root: &Path) -> Result<()> {
    remove_path(&root.join(GIT_DIR))
}
