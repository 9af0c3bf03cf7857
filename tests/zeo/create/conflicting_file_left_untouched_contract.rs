use crate::harness::TestContext;
use assert_fs::prelude::*;
use predicates::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn differing_config_is_reported_and_kept() {
    let ctx = TestContext::new();
    ctx.child("inst/etc").create_dir_all().unwrap();
    ctx.child("inst/etc/zeo.conf").write_str("<zeo>\n  address 1234\n</zeo>\n").unwrap();

    let conf_path = ctx.instance_home().join("etc/zeo.conf");
    ctx.cli()
        .arg(ctx.instance_home())
        .arg("8100")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Warning: not overwriting existing file '{}'\n",
            conf_path.display()
        )))
        .stdout(predicate::str::contains("All done.\n"));

    ctx.child("inst/etc/zeo.conf").assert("<zeo>\n  address 1234\n</zeo>\n");
}

#[test]
#[serial]
fn changed_address_on_rerun_only_warns() {
    let ctx = TestContext::new();
    ctx.create("8100");

    ctx.cli()
        .arg(ctx.instance_home())
        .arg("8200")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: not overwriting existing file"))
        .stdout(predicate::str::contains("Wrote file").not());

    assert!(ctx.read("inst/etc/zeo.conf").contains("  address 8100\n"));
}

#[test]
#[serial]
fn empty_existing_config_is_written() {
    let ctx = TestContext::new();
    ctx.child("inst/etc").create_dir_all().unwrap();
    ctx.child("inst/etc/zeo.conf").write_str("\n").unwrap();

    ctx.cli()
        .arg(ctx.instance_home())
        .arg("8100")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote file").and(predicate::str::contains("zeo.conf")));

    assert!(ctx.read("inst/etc/zeo.conf").contains("  address 8100\n"));
}
