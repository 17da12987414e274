//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibseq() -> Command {
    let mut cmd = Command::cargo_bin("fibseq").expect("binary not found");
    cmd.env_remove("FIBSEQ_COUNT").env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    fibseq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibseq()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibseq"));
}

#[test]
fn missing_count() {
    fibseq().assert().failure();
}

#[test]
fn quiet_sequence() {
    fibseq()
        .args(["-n", "10", "-q"])
        .assert()
        .success()
        .stdout("0,1,1,2,3,5,8,13,21,34\n");
}

#[test]
fn normal_output_shows_sum() {
    fibseq()
        .args(["-n", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum: 88"))
        .stdout(predicate::str::contains("0,1,1,2,3,5,8,13,21,34"));
}

#[test]
fn details_show_parity() {
    fibseq()
        .args(["-n", "10", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Even: 4"))
        .stdout(predicate::str::contains("Odd: 6"));
}

#[test]
fn json_report() {
    let output = fibseq().args(["-n", "10", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 10);
    assert_eq!(value["sum"], 88);
    assert_eq!(
        value["fibonaciiJson"],
        serde_json::json!([0, 1, 1, 2, 3, 5, 8, 13, 21, 34])
    );
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("report.json");
    fibseq()
        .args(["-n", "12", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["count"], 12);
    assert_eq!(value["sum"], 232);
}

#[test]
fn env_var_count() {
    fibseq()
        .env("FIBSEQ_COUNT", "5")
        .arg("-q")
        .assert()
        .success()
        .stdout("0,1,1,2,3\n");
}

#[test]
fn invalid_counts() {
    for count in ["0", "-1", "abc", "2147483648"] {
        fibseq()
            .args(["-n", count])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("1 to 2147483647"));
    }
}

#[test]
fn overflow() {
    fibseq()
        .args(["-n", "92"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("overflow"));
}

#[test]
fn largest_count_before_overflow() {
    fibseq()
        .args(["-n", "91", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7540113804746346428"));
}

#[test]
fn ordinal_lookup() {
    fibseq()
        .args(["-n", "10", "--ordinal", "7", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\n8\n"));
}

#[test]
fn ordinal_out_of_range() {
    fibseq()
        .args(["-n", "10", "--ordinal", "11"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("from 1 to 10"));
}

#[test]
fn subrange_right() {
    fibseq()
        .args(["-n", "10", "-a", "3", "--offset", "3", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\n3,5,8\n"));
}

#[test]
fn subrange_left() {
    fibseq()
        .args(["-n", "10", "-a", "3", "--offset", "-3", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\n1,2,3\n"));
}

#[test]
fn subrange_out_of_bounds() {
    fibseq()
        .args(["-n", "10", "-a", "3", "--offset", "7"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("to the right"));
}

#[test]
fn zero_offset_rejected() {
    fibseq()
        .args(["-n", "10", "-a", "3", "--offset", "0"])
        .assert()
        .code(2);
}

#[test]
fn anchor_not_in_sequence() {
    fibseq()
        .args(["-n", "10", "-a", "4"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("fibonacci sequence"));
}

#[test]
fn ambiguous_anchor_without_pick() {
    fibseq()
        .args(["-n", "10", "-a", "1", "--offset", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("occurs twice"));
}

#[test]
fn ambiguous_anchor_with_pick() {
    fibseq()
        .args(["-n", "10", "-a", "1", "--pick", "second", "--offset", "2", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\n1,2\n"));
    fibseq()
        .args(["-n", "10", "-a", "1", "--pick", "first", "--offset", "-2", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\n0,1\n"));
}

#[test]
fn interactive_script() {
    fibseq()
        .args(["-i", "-q"])
        .write_stdin("gen 10\nanchor 1\npick second\nmove 3\nat 10\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0,1,1,2,3,5,8,13,21,34"))
        .stdout(predicate::str::contains("occurs twice"))
        .stdout(predicate::str::contains("1,2,3"))
        .stdout(predicate::str::ends_with("34\n"));
}

#[test]
fn interactive_reports_errors_and_continues() {
    fibseq()
        .args(["-i", "-q"])
        .write_stdin("gen 0\nanchor 3\ngen 5\njson\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("1 to 2147483647"))
        .stderr(predicate::str::contains("no sequence generated yet"))
        .stdout(predicate::str::contains("\"fibonaciiJson\""));
}

#[test]
fn shell_completion_bash() {
    fibseq()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibseq"));
}

#[test]
fn shell_completion_zsh() {
    fibseq()
        .args(["--completion", "zsh"])
        .assert()
        .success();
}
