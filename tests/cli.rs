use std::{
    path::PathBuf,
    process::{Command, Output},
};

fn fixture(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", name].iter().collect()
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_agarc"))
        .args(args)
        .output()
        .expect("failed to launch agarc")
}

fn run_fixture(name: &str) -> (Option<i32>, String) {
    let path = fixture(name);
    let output = run(&[path.to_str().expect("fixture path is UTF-8")]);
    (output.status.code(), String::from_utf8_lossy(&output.stdout).into_owned())
}

#[test]
fn valid_program_is_accepted() {
    let (code, stdout) = run_fixture("valid.agar");
    assert_eq!(Some(0), code);
    assert_eq!("Parsing completed successfully! No Syntax Error\n", stdout);
}

#[test]
fn lexical_error_reports_character_and_line() {
    let (code, stdout) = run_fixture("lexical_error.agar");
    assert_eq!(Some(1), code);
    assert_eq!("[line 3, column 7] Error: Unexpected character '#'.\n", stdout);
}

#[test]
fn syntax_error_reports_expected_and_found() {
    let (code, stdout) = run_fixture("syntax_error.agar");
    assert_eq!(Some(1), code);
    assert_eq!(
        "[line 5, column 1] Error at '}': Expected ';' but found '}'.\n",
        stdout
    );
}

#[test]
fn reserved_keywords_are_rejected() {
    let (code, stdout) = run_fixture("reserved_keyword.agar");
    assert_eq!(Some(1), code);
    assert_eq!(
        "[line 2, column 1] Error at 'while': Reserved keyword 'while' cannot start a statement.\n",
        stdout
    );
}

#[test]
fn stray_byte_is_reported_by_value() {
    let (code, stdout) = run_fixture("stray_byte.agar");
    assert_eq!(Some(1), code);
    assert_eq!(
        "[line 2, column 5] Error: Unexpected character '\u{ff}' (0xff).\n",
        stdout
    );
}

#[test]
fn deeply_nested_program_is_rejected_cleanly() {
    let path = std::env::temp_dir().join(format!("agarc-deep-{}.agar", std::process::id()));
    let depth = 100_000;
    let source = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
    std::fs::write(&path, source).expect("failed to write source");

    let output = run(&[path.to_str().expect("temp path is UTF-8")]);
    let _ = std::fs::remove_file(&path);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(Some(1), output.status.code());
    assert!(stdout.ends_with("Error at '(': Too deeply nested.\n"), "unexpected output: {}", stdout);
}

#[test]
fn missing_argument_prints_usage() {
    let output = run(&[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(Some(1), output.status.code());
    assert_eq!("Usage: agarc <filename>\n", stdout);
}

#[test]
fn unreadable_file_is_reported() {
    let path = fixture("does_not_exist.agar");
    let path = path.to_str().expect("fixture path is UTF-8");
    let output = run(&[path]);
    assert_eq!(Some(1), output.status.code());
    assert_eq!(
        format!("Error opening file: {}\n", path),
        String::from_utf8_lossy(&output.stdout)
    );
}
