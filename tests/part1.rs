use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert().success().stdout(str::contains("159"));
}

#[test]
fn part1_fail_on_wires_sharing_only_origin() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("no_crossing_inputs.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("don't cross anywhere except the origin"));
}
