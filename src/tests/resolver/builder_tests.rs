use std::fs;
use std::sync::Arc;

use crate::cli::InputArgs;
use crate::config::{ResolverOptions, Settings};
use crate::io::{InMemorySink, InMemorySource};
use crate::{InputResolver, InputResolverBuilder, resolver_from_args_with};

#[test]
fn defaults_read_files_quietly() {
    let resolver = InputResolverBuilder::default().build();
    assert_eq!(resolver.options(), ResolverOptions::default());
    assert_eq!(InputResolver::new(true, false).options(), ResolverOptions::new(true, false));
}

#[test]
fn input_args_set_both_flags() {
    let args = InputArgs::new().with_stdin().with_verbose();
    let resolver = InputResolver::builder().with_input_args(&args).build();

    assert_eq!(resolver.options(), ResolverOptions::new(true, true));
}

#[test]
fn settings_drive_stdin_mode() {
    let settings = Settings {
        stdin: true,
        verbose: false,
    };
    let resolver = InputResolver::builder()
        .with_settings(&settings)
        .with_stdin(Arc::new(InMemorySource::from_string("-", "piped")))
        .build();

    assert_eq!(resolver.read_all(&["ignored.md"]).unwrap(), b"piped");
}

#[test]
fn custom_default_file_replaces_tasks_md() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("TODO.md"), "todo").unwrap();

    let resolver = InputResolver::builder()
        .with_base_dir(dir.path())
        .with_default_file("TODO.md")
        .build();

    assert_eq!(resolver.read_all::<&str>(&[]).unwrap(), b"todo");
}

#[test]
fn malformed_config_file_does_not_fail_the_command() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("broken.yaml");
    fs::write(&config, "stdin: [oops\n").unwrap();
    let sink = Arc::new(InMemorySink::new("diag"));

    let args = InputArgs::new()
        .with_verbose()
        .with_config(config.to_string_lossy());
    let resolver = resolver_from_args_with(&args, sink.clone());

    assert!(!resolver.options().use_stdin);
    assert!(resolver.options().verbose);
    let trace = sink.contents_string();
    assert!(trace.starts_with("Ignoring config file: "), "trace: {trace}");
    assert!(trace.contains("broken.yaml"));
}

#[test]
fn used_config_file_is_traced_through_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("team.yaml");
    fs::write(&config, "stdin: true\n").unwrap();
    let sink = Arc::new(InMemorySink::new("diag"));

    let args = InputArgs::new()
        .with_verbose()
        .with_config(config.to_string_lossy());
    let resolver = resolver_from_args_with(&args, sink.clone());

    assert!(resolver.options().use_stdin);
    assert_eq!(
        sink.contents_string(),
        format!("Using config file: {}\n", config.display())
    );
}

#[test]
fn quiet_invocation_writes_no_config_trace() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("team.yaml");
    fs::write(&config, "verbose: false\n").unwrap();
    let sink = Arc::new(InMemorySink::new("diag"));

    let args = InputArgs::new().with_config(config.to_string_lossy());
    resolver_from_args_with(&args, sink.clone());

    assert!(sink.contents().is_empty());
}
