use crate::harness::{PYTHON, TestContext, expected_script_mode};
use assert_fs::prelude::*;
use predicates::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn creates_directories_and_files_in_order() {
    let ctx = TestContext::new();
    let home = ctx.instance_home();
    let home = home.display();
    let mode = expected_script_mode();
    let written = mode & 0o666;

    let mut expected = format!(
        "Created directory {home}\n\
         Created directory {home}/etc\n\
         Created directory {home}/var\n\
         Created directory {home}/log\n\
         Created directory {home}/bin\n\
         Wrote file {home}/etc/zeo.conf\n\
         Wrote file {home}/bin/zeoctl\n"
    );
    if mode != written {
        expected.push_str(&format!("Changed mode for {home}/bin/zeoctl to {mode:o}\n"));
    }
    expected.push_str(&format!("Wrote file {home}/bin/runzeo\n"));
    if mode != written {
        expected.push_str(&format!("Changed mode for {home}/bin/runzeo to {mode:o}\n"));
    }
    expected.push_str("All done.\n");

    ctx.cli()
        .arg(ctx.instance_home())
        .arg("127.0.0.1:8100")
        .assert()
        .success()
        .stdout(expected);

    for dir in ["inst/etc", "inst/var", "inst/log", "inst/bin"] {
        ctx.child(dir).assert(predicate::path::is_dir());
    }
    ctx.child("inst/etc/zeo.conf").assert(predicate::str::contains("  address 127.0.0.1:8100\n"));
    ctx.child("inst/bin/zeoctl").assert(predicate::path::is_file());
    ctx.child("inst/bin/runzeo").assert(predicate::path::is_file());
    assert_eq!(ctx.mode("inst/bin/zeoctl"), mode);
    assert_eq!(ctx.mode("inst/bin/runzeo"), mode);
}

#[test]
#[serial]
fn config_references_resolved_locations() {
    let ctx = TestContext::new();
    ctx.create("example.com:9999");

    let conf = ctx.read("inst/etc/zeo.conf");
    let site = ctx.site_packages();
    assert!(conf.starts_with("# ZEO configuration file\n\n"));
    assert!(conf.contains(&format!("%define INSTANCE {}\n", ctx.instance_home().display())));
    assert!(conf.contains("  address example.com:9999\n"));
    assert!(conf.contains(&format!("  python {}\n", PYTHON)));
    assert!(conf.contains(&format!("  zdrun {}/zdaemon/zdrun.py\n", site.display())));

    let runzeo = ctx.read("inst/bin/runzeo");
    assert!(runzeo.contains(&format!("ZODB3_HOME=\"{}\"\n", site.display())));
    assert!(runzeo.contains(&format!(
        "CONFIG_FILE=\"{}/etc/zeo.conf\"\n",
        ctx.instance_home().display()
    )));
}

#[test]
#[serial]
fn relative_home_is_resolved_against_working_directory() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("relative/inst")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Created directory {}\n",
            ctx.root().join("relative").display()
        )));

    let conf = ctx.read("relative/inst/etc/zeo.conf");
    assert!(conf.contains(&format!(
        "%define INSTANCE {}\n",
        ctx.root().join("relative/inst").display()
    )));
}
