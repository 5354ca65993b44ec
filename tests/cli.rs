use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn prints_four_calculations() {
    let output = Command::cargo_bin("layered-math")
        .unwrap()
        .env("RUST_LOG", "off")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "Addition (2 + 3): 5",
            "Subtraction (5 - 3): 2",
            "Multiplication (2 * 3): 6",
            "Division (6 / 2): 3",
        ]
    );
}

#[test]
fn banner_is_logged_to_stderr() {
    Command::cargo_bin("layered-math")
        .unwrap()
        .env("RUST_LOG", "layered_math=info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Performing calculations").not())
        .stderr(predicate::str::contains(
            "This is a demo project! Performing calculations...",
        ));
}
