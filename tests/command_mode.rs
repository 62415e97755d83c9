use std::io::Write;
use std::process::{Command, Stdio};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tablecalc"))
}

#[test]
fn command_mode_prints_evaluated_value() {
    let output = bin().args(["-c", "1+2*3"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "7");
}

#[test]
fn command_mode_exits_nonzero_on_value_error() {
    let output = bin().args(["-c", "1/0"]).output().unwrap();
    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "#DIV/0!");
}

#[test]
fn command_mode_exits_nonzero_on_syntax_error() {
    let output = bin().args(["-c", "1++1"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn repl_dumps_sheet_after_each_assignment() {
    let mut child = bin()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"A1=1\nB2==A1+1\n")
        .unwrap();
    drop(child.stdin.take());

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert_eq!(text, "1\n1\t\n\t2\n");
}
