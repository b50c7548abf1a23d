mod harness;

use harness::TestContext;
use harness::github_fixtures::mock_repositories;
use predicates::prelude::*;

#[test]
fn sync_writes_public_repositories_newest_first() {
    let mut server = mockito::Server::new();
    let repos = mock_repositories(&mut server, "octo");
    let ctx = TestContext::new();
    ctx.write_folio_config(&server.url(), "octo");

    ctx.cli()
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Updated"))
        .stdout(predicate::str::contains("Total public repositories: 3"))
        .stdout(predicate::str::contains("Training: 2"))
        .stdout(predicate::str::contains("Projects: 1"))
        .stderr(predicate::str::contains("Sync complete"))
        .stderr(predicate::str::contains("total=3 training=2 projects=1 preserved=0"));

    repos.assert();
    let written = ctx.read_projects_config();
    assert!(written.starts_with("# Projects Configuration\n"));
    assert!(written.contains("# Last updated: "));
    assert!(!written.contains("secret"));

    let records = folio::parse_projects(&written);
    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["folio", "react-demo", "upstream-copy"]);
    assert_eq!(records[0].icon.as_deref(), Some(folio::icon_for("folio")));
    assert_eq!(records[2].language.as_deref(), Some("Unknown"));
}

#[test]
fn sync_keeps_manual_classification() {
    let mut server = mockito::Server::new();
    let _repos = mock_repositories(&mut server, "octo");
    let ctx = TestContext::new();
    ctx.write_folio_config(&server.url(), "octo");
    ctx.write_projects_config(
        "projects:\n  - name: react-demo\n    classification: project\n    icon: 🦄\n",
    );

    ctx.cli()
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept 1 manual classification(s)"))
        .stderr(predicate::str::contains("preserved=1"));

    let records = folio::parse_projects(&ctx.read_projects_config());
    let demo = records.iter().find(|r| r.name == "react-demo").unwrap();
    assert_eq!(demo.classification, Some(folio::Classification::Project));
    assert_eq!(demo.icon.as_deref(), Some(folio::icon_for("react-demo")));
}

#[test]
fn sync_uses_account_from_environment() {
    let mut server = mockito::Server::new();
    let repos = mock_repositories(&mut server, "someone-else");
    let ctx = TestContext::new();
    ctx.write_folio_config(&server.url(), "octo");

    ctx.cli().arg("sync").env("GITHUB_USERNAME", "someone-else").assert().success();

    repos.assert();
}

#[test]
fn sync_fetch_failure_exits_nonzero_and_writes_nothing() {
    let mut server = mockito::Server::new();
    let _repos = server
        .mock("GET", "/users/octo/repos")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .create();
    let ctx = TestContext::new();
    ctx.write_folio_config(&server.url(), "octo");

    ctx.cli()
        .arg("sync")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));

    assert!(!ctx.projects_config_path().exists());
}

#[test]
fn sync_rejects_invalid_folio_config() {
    let ctx = TestContext::new();
    std::fs::write(ctx.work_dir().join("folio.toml"), "[github]\nunknown_key = 1\n").unwrap();

    ctx.cli().arg("s").assert().failure().stderr(predicate::str::contains("Error:"));
}
