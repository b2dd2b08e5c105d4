//! Tests for the manual argv parser.

use crate::cli::{InputArgs, parse_manual};
use crate::error::CliError;

#[test]
fn no_arguments_yields_defaults() {
    let args = parse_manual(Vec::<String>::new()).unwrap();
    assert_eq!(args, InputArgs::default());
    assert!(args.positional().is_empty());
}

#[test]
fn flags_and_positional_mix() {
    let args = parse_manual(["-v", "tasks/sprint.md", "--stdin", "extra.md"]).unwrap();

    assert!(args.stdin);
    assert!(args.verbose);
    assert_eq!(args.positional(), &["tasks/sprint.md", "extra.md"]);
}

#[test]
fn config_value_in_both_spellings() {
    let split = parse_manual(["--config", "team.yaml"]).unwrap();
    let joined = parse_manual(["--config=team.yaml"]).unwrap();

    assert_eq!(split.config.as_deref(), Some("team.yaml"));
    assert_eq!(split, joined);
}

#[test]
fn config_without_value_is_rejected() {
    assert_eq!(
        parse_manual(["--config"]),
        Err(CliError::MissingValue("--config".into()))
    );
    assert_eq!(
        parse_manual(["--config="]),
        Err(CliError::MissingValue("--config".into()))
    );
}

#[test]
fn unknown_flag_is_rejected() {
    assert_eq!(
        parse_manual(["--format", "json"]),
        Err(CliError::UnknownFlag("--format".into()))
    );
}

#[test]
fn double_dash_ends_flag_parsing() {
    let args = parse_manual(["--", "--stdin", "-v"]).unwrap();

    assert!(!args.stdin);
    assert!(!args.verbose);
    assert_eq!(args.positional(), &["--stdin", "-v"]);
}

#[test]
fn lone_dash_is_positional() {
    let args = parse_manual(["-"]).unwrap();
    assert_eq!(args.positional(), &["-"]);
}

#[test]
fn builder_helpers_match_parsed_args() {
    let built = InputArgs::new()
        .with_verbose()
        .with_config("c.yaml")
        .with_file("a.md");
    let parsed = parse_manual(["-v", "--config", "c.yaml", "a.md"]).unwrap();

    assert_eq!(built, parsed);
    assert!(built.options().verbose);
    assert!(!built.options().use_stdin);
}
