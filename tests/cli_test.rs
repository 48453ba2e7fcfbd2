use clap::Parser;
use sprout::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("sprout")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("output"));
    assert_eq!(parsed.templates, PathBuf::from("templates"));
    assert!(parsed.config.is_none());
    assert!(parsed.app_prefix.is_none());
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--config",
        "tree.yaml",
        "--templates",
        "./tpl",
        "--app-prefix",
        "acme",
        "--verbose",
        "./generated",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("./generated"));
    assert_eq!(parsed.config, Some(PathBuf::from("tree.yaml")));
    assert_eq!(parsed.templates, PathBuf::from("./tpl"));
    assert_eq!(parsed.app_prefix.as_deref(), Some("acme"));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-c", "tree.json", "-t", "tpl", "-p", "xy", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.config, Some(PathBuf::from("tree.json")));
    assert_eq!(parsed.templates, PathBuf::from("tpl"));
    assert_eq!(parsed.app_prefix.as_deref(), Some("xy"));
    assert!(parsed.verbose);
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./output", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
