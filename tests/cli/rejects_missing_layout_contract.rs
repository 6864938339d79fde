use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn rejects_missing_source_dir_before_copying() {
    let ctx = TestContext::new();
    ctx.write("spm_sources/Existing.h", "keep");

    ctx.cli()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Couldn't find dir:"))
        .stderr(predicate::str::contains("JDStatusBarNotification"))
        .stdout(predicate::str::contains("Copying sources").not());

    let entries: Vec<_> = std::fs::read_dir(ctx.mirror_path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(ctx.read("spm_sources/Existing.h"), "keep");
}

#[test]
fn rejects_missing_anchor_file() {
    let ctx = TestContext::new();
    ctx.mkdir("JDStatusBarNotification/Public");
    ctx.mkdir("spm_sources");

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Couldn't find file:"))
        .stderr(predicate::str::contains("NotificationPresenter.swift"));
}

#[test]
fn rejects_missing_mirror_dir() {
    let ctx = TestContext::new();
    ctx.write("JDStatusBarNotification/Public/NotificationPresenter.swift", "");

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Couldn't find dir:"))
        .stderr(predicate::str::contains("spm_sources"));

    assert!(!ctx.mirror_path().exists());
}

#[test]
fn unset_project_dir_fails_existence_checks() {
    let ctx = TestContext::new();

    ctx.cli_without_env()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("PROJECT_DIR: "))
        .stderr(predicate::str::contains("Couldn't find dir:"));
}

#[test]
fn rejects_mirror_dir_that_is_the_source_dir() {
    let ctx = TestContext::with_project();
    ctx.write("JDStatusBarNotification/Private/Keep.m", "keep me\n");

    ctx.cli()
        .args(["--mirror-dir", "JDStatusBarNotification"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("overlaps source dir"))
        .stdout(predicate::str::contains("Copying sources").not());

    assert_eq!(
        ctx.read("JDStatusBarNotification/Public/NotificationPresenter.swift"),
        "public class NotificationPresenter {}\n"
    );
    assert_eq!(ctx.read("JDStatusBarNotification/Private/Keep.m"), "keep me\n");
}
