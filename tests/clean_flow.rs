mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn clean_sequence_precedes_the_run_command() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["ios", "-d", "--clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Cleaner]: Start Cleaning"));

    let log = ctx.invocation_log();
    let shutdown = log.find("xcrun simctl shutdown all").expect("simulators were not shut down");
    let clean = log.find("ns clean").expect("project was not cleaned");
    let run = log.find("ns run ios").expect("run command was not issued");
    assert!(shutdown < clean && clean < run);
}

#[test]
fn failed_clean_step_aborts_with_its_exit_code() {
    let ctx = TestContext::new();
    ctx.fail_subcommand("clean", 5);

    ctx.cli().args(["ios", "-d", "--clean"]).assert().failure().code(5);

    assert!(!ctx.invocation_log().contains("ns run"));
}

#[test]
fn run_exit_status_becomes_the_process_exit_status() {
    let ctx = TestContext::new();
    ctx.fail_subcommand("run", 7);

    ctx.cli().args(["ios", "-d"]).assert().failure().code(7);
}
