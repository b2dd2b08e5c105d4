use crate::cli::InputArgs;

fn argv(tokens: &[&str]) -> Vec<String> {
    std::iter::once("taskmd")
        .chain(tokens.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
fn sarge_parses_flags_and_remainder() {
    let args = InputArgs::from_sarge(&argv(&["notes.md", "--stdin", "-v"])).expect("parse");

    assert!(args.stdin);
    assert!(args.verbose);
    assert_eq!(args.config, None);
    assert_eq!(args.positional(), &["notes.md".to_string()]);
}

#[test]
fn sarge_reads_config_path() {
    let args = InputArgs::from_sarge(&argv(&["--config=team.yaml"])).expect("parse");

    assert!(!args.stdin);
    assert_eq!(args.config.as_deref(), Some("team.yaml"));
    assert!(args.positional().is_empty());
}

#[test]
fn sarge_without_arguments_keeps_program_name_out() {
    let args = InputArgs::from_sarge(&argv(&[])).expect("parse");

    assert_eq!(args, InputArgs::default());
    assert!(args.positional().is_empty());
}
