//! End-to-end tests for the fortnight binary.

use assert_cmd::Command;
use predicates::prelude::*;

const PINNED: &str = "2024-03-01T09:05:07-08:00";

fn fortnight() -> Command {
    let mut cmd = Command::cargo_bin("fortnight").unwrap();
    cmd.env_remove("LC_ALL")
        .env_remove("LC_TIME")
        .env("LANG", "en_US.UTF-8")
        .env("FORTNIGHT_TEST_TIME", PINNED);
    cmd
}

#[test]
fn cal_for_given_date() {
    fortnight()
        .args(["cal", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("February 2024"))
        .stdout(predicate::str::contains("March 2024"))
        .stdout(predicate::str::contains("25 26 27 28 29\n\n"))
        .stdout(predicate::str::contains("<strong>").not());
}

#[test]
fn cal_uses_pinned_clock() {
    fortnight()
        .arg("cal")
        .assert()
        .success()
        .stdout(predicate::str::contains("February 2024"));
}

#[test]
fn cal_html_marks_today() {
    fortnight()
        .args(["--html", "cal", "-d", "2024-03-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "10 11 12 13 14 15 <strong>16</strong><br>\n",
        ))
        .stdout(predicate::str::contains("Su Mo Tu We Th Fr Sa<br>\n"));
}

#[test]
fn cal_rejects_bad_date() {
    fortnight()
        .args(["cal", "-d", "2024-13-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fortnight: invalid date: 2024-13-01"));
}

#[test]
fn date_prints_offset_stamp() {
    fortnight()
        .arg("date")
        .assert()
        .success()
        .stdout("+ date -Iseconds\n2024-03-01T09:05:07-08:00\n+\n");
}

#[test]
fn default_prints_date_then_transcript() {
    fortnight()
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "+ date -Iseconds\n2024-03-01T09:05:07-08:00\n+\n\n+ cal -h -m 2 2024\n",
        ))
        .stdout(predicate::str::contains("+ cal -H 2024-03-01 -m 3 2024\n"))
        .stdout(predicate::str::ends_with("\n\n+\n"));
}

#[test]
fn weekends_single_year() {
    fortnight()
        .args(["weekends", "--from", "2028", "--to", "2028"])
        .assert()
        .success()
        .stdout("| 2028 | Sa | 260 | 106 |\n");
}

#[test]
fn weekends_html_emphasis() {
    fortnight()
        .args(["--html", "weekends", "--from", "2027", "--to", "2028"])
        .assert()
        .success()
        .stdout(
            "| 2028 | <strong>Sa</strong> | <strong>260</strong> | <strong>106</strong> |<br>\n\
             | 2027 | Fr | 261 | 104 |<br>\n",
        );
}

#[test]
fn weekends_empty_range_fails() {
    fortnight()
        .args(["weekends", "--from", "2030", "--to", "2020"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty year range"));
}

#[test]
fn shifts_builtin_sample() {
    fortnight()
        .args(["shifts", "--sample", "a"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\n8h14m total\n"));
}

#[test]
fn shifts_from_stdin() {
    fortnight()
        .arg("shifts")
        .write_stdin("8.00..9.00\n10.15..11.24\n")
        .assert()
        .success()
        .stdout("8:00 9:00 -> 1h0m\n10:15 11:24 -> 1h9m\n\n2h9m total\n");
}

#[test]
fn shifts_odd_stamps_fail() {
    fortnight()
        .arg("shifts")
        .write_stdin("7.21..8.36 9.03")
        .assert()
        .failure()
        .stderr(predicate::str::contains("found 3"));
}

#[test]
fn shifts_missing_file_fails() {
    fortnight()
        .args(["shifts", "no/such/sheet.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("fortnight: "));
}
