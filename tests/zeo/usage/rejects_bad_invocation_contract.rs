use crate::harness::TestContext;
use assert_fs::prelude::*;
use predicates::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn no_arguments_prints_usage() {
    let ctx = TestContext::new();

    ctx.cli()
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Usage: mkzeoinstance home [[host:]port]"));
}

#[test]
#[serial]
fn three_arguments_prints_usage() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["inst", "8100", "extra"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Usage: mkzeoinstance home [[host:]port]"));

    ctx.child("inst").assert(predicate::path::missing());
}

#[test]
#[serial]
fn unknown_option_is_an_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--frobnicate", "inst"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("--frobnicate"));

    ctx.child("inst").assert(predicate::path::missing());
}

#[test]
#[serial]
fn non_numeric_port_is_an_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["inst", "localhost:zeo"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid address 'localhost:zeo'"));

    ctx.child("inst").assert(predicate::path::missing());
}

#[test]
#[serial]
fn non_utf8_home_is_an_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let ctx = TestContext::new();

    ctx.cli()
        .arg(OsStr::from_bytes(b"a\xff"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("instance home is not valid UTF-8"));

    let created: Vec<_> = std::fs::read_dir(ctx.root())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .filter(|name| name != "site-packages")
        .collect();
    assert!(created.is_empty(), "unexpected entries: {:?}", created);
}

#[test]
#[serial]
fn home_under_regular_file_names_the_path() {
    let ctx = TestContext::new();
    ctx.child("occupied").write_str("not a directory\n").unwrap();
    let occupied = ctx.root().join("occupied");

    ctx.cli()
        .arg(occupied.join("inst"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!("Error: {}: ", occupied.display())));
}
