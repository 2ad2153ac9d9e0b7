use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Runs the binary with the given arguments, feeding `input` on stdin.
fn run_eca(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_eca"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start eca");
    child
        .stdin
        .take()
        .expect("no stdin")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for eca")
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let output = run_eca(&["-vvv"], "R 90 9 5 init_start 5 init_end\n");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        vec![
            "    *    ",
            "   * *   ",
            "  *   *  ",
            " * * * * ",
            "*       *",
        ],
        stdout.lines().collect::<Vec<_>>(),
    );
    // Trace output goes somewhere, just not to stdout.
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_error_goes_to_stderr() {
    let output = run_eca(&[], "R 30 5 3 init_start 9 init_end");
    assert_eq!(Some(1), output.status.code());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error at line 1; column 21 (offset 20)\n"), "{}", stderr);
}

#[test]
fn test_custom_cell_chars() {
    let output = run_eca(&["--live", "#", "--dead", "."], "A 5 2 init_start 3 init_end");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!("..#..\n.#.#.\n", stdout);
}
