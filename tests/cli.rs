use std::process::{Command, Output};

fn run_leecode(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_leecode"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run leecode {:?}: {}", args, e))
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf-8 stderr")
}

#[test]
fn encode_trims_input_by_default() {
    let output = run_leecode(&["encode", "  Hi  "]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "0734\n");
}

#[test]
fn encode_keeps_whitespace_when_asked() {
    let output = run_leecode(&["encode", "--keep-whitespace", "  Hi  "]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "94073494\n");
}

#[test]
fn decode_ignores_noise() {
    let output = run_leecode(&["decode", "07 34"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Hi\n");
}

#[test]
fn empty_input_warns_and_prints_empty_result() {
    for command in ["encode", "decode"] {
        let output = run_leecode(&[command, "   "]);
        assert!(output.status.success(), "{} failed: {}", command, stderr(&output));
        assert_eq!(stdout(&output), "\n", "{} should print an empty result", command);
        assert!(
            stderr(&output).contains(&format!("Nothing to {}", command)),
            "missing warning for {}: {:?}",
            command,
            stderr(&output)
        );
    }
}

#[test]
fn codec_errors_exit_with_status_one() {
    let cases: &[(&[&str], &str)] = &[
        (&["encode", "price: 5€"], "'€'"),
        (&["decode", "123"], "must be even"),
        (&["decode", "0799"], "'99'"),
    ];
    for (args, needle) in cases {
        let output = run_leecode(args);
        assert_eq!(output.status.code(), Some(1), "exit code for {:?}", args);
        assert!(stdout(&output).is_empty(), "no result expected for {:?}", args);
        let err = stderr(&output);
        assert!(err.contains("ERROR:"), "missing ERROR prefix for {:?}: {:?}", args, err);
        assert!(err.contains(needle), "missing {:?} for {:?}: {:?}", needle, args, err);
    }
}

#[test]
fn reference_lists_every_code() {
    let output = run_leecode(&["reference"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let listing = stdout(&output);
    let rows: Vec<&str> = listing
        .lines()
        .filter(|line| line.starts_with(|c: char| c.is_ascii_digit()))
        .collect();
    assert_eq!(rows.len(), leecode::CODE_COUNT);
    assert_eq!(rows[0], "00 → A");
    assert_eq!(rows[7], "07 → H");
    assert_eq!(rows[94], "94 → SPACE");
}
