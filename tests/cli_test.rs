use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use strapper::cli::Args;
use strapper::constants::DEFAULT_REPOSITORY;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("strapper")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert_eq!(parsed.repo, DEFAULT_REPOSITORY);
    assert_eq!(parsed.installers, vec!["composer".to_string()]);
    assert!(parsed.branch.is_none());
    assert!(!parsed.yes);
    assert!(!parsed.force);
    assert!(!parsed.verbose);
    assert!(!parsed.skip_install);
    assert!(parsed.overrides().is_empty());
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-y", "-f", "-v", "-o", "plugins"])).unwrap();

    assert!(parsed.yes);
    assert!(parsed.force);
    assert!(parsed.verbose);
    assert_eq!(parsed.output_dir, PathBuf::from("plugins"));
}

#[test]
fn test_overrides_keyed_by_question() {
    let parsed = Args::try_parse_from(make_args(&[
        "--project-name",
        "Acme Tools",
        "--author-email",
        "dev@acme.dev",
        "--framework",
        "vue",
    ]))
    .unwrap();

    let overrides = parsed.overrides();
    assert_eq!(overrides.len(), 3);
    assert_eq!(overrides["projectName"], "Acme Tools");
    assert_eq!(overrides["authorEmail"], "dev@acme.dev");
    assert_eq!(overrides["framework"], "vue");
}

#[test]
fn test_repeated_installers() {
    let parsed =
        Args::try_parse_from(make_args(&["--install", "composer", "--install", "yarn"])).unwrap();
    assert_eq!(parsed.installers, vec!["composer".to_string(), "yarn".to_string()]);
}

#[test]
fn test_unexpected_positional() {
    assert!(Args::try_parse_from(make_args(&["extra"])).is_err());
}
