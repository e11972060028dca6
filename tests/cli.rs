use assert_cmd::Command;

#[test]
fn usage_error_exits_with_64() {
    Command::cargo_bin("flint").unwrap()
        .args(["first.flint", "second.flint"])
        .assert()
        .stdout("Usage: flint [script]\n")
        .code(64);
}

#[test]
fn unreadable_file_exits_with_66() {
    Command::cargo_bin("flint").unwrap()
        .arg("tests/target/does_not_exist.flint")
        .assert()
        .code(66);
}

#[test]
fn static_error_exits_with_65() {
    Command::cargo_bin("flint").unwrap()
        .arg("tests/target/misc/unexpected_character.flint")
        .assert()
        .code(65);
}

#[test]
fn runtime_error_exits_with_70() {
    Command::cargo_bin("flint").unwrap()
        .arg("tests/target/variable/undefined_global.flint")
        .assert()
        .code(70);
}

#[test]
fn success_exits_with_0() {
    Command::cargo_bin("flint").unwrap()
        .arg("tests/target/misc/precedence.flint")
        .assert()
        .stdout("14\n8\n4\ntrue\ntrue\n-4\ntrue\n")
        .success();
}
