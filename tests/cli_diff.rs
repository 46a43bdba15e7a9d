//! CLI tests for `structuresmith diff`

mod common;

use common::*;

fn basic_env() -> TestEnv {
    TestEnv::builder()
        .with_config(BASIC_CONFIG)
        .with_template("service/Makefile.tpl", MAKEFILE_TEMPLATE)
        .with_template("ci/workflows/ci.yml", WORKFLOW)
        .build()
}

#[test]
fn diff_lists_new_files_sorted() {
    let env = basic_env();

    let result = env.run(&["diff", "billing"]);

    assert!(result.success, "diff failed:\n{}", result.combined_output());
    assert!(
        result.stdout.contains(
            "new:  .github/workflows/ci.yml\nnew:  Makefile\nnew:  README.md\n"
        ),
        "stdout:\n{}",
        result.stdout
    );
    assert!(result
        .stdout
        .contains("billing: 3 new, 0 deleted, 0 overwritten, 0 skipped (dry run)"));
}

#[test]
fn diff_never_writes() {
    let env = basic_env();

    let result = env.run(&["diff"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!env.path("out").exists());
}

#[test]
fn diff_after_render_shows_overwrites_and_deletions() {
    let env = basic_env();
    assert!(env.run(&["render", "billing"]).success);

    env.write_config(
        "projects:\n  - name: billing\n    files:\n      - destination: README.md\n        content: changed\n",
    );
    let result = env.run(&["diff", "billing"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("delete:     .github/workflows/ci.yml"));
    assert!(result.stdout.contains("delete:     Makefile"));
    assert!(result.stdout.contains("overwrite:  README.md"));
    // still the old content on disk
    assert_eq!(env.read_output("billing", "README.md"), "# Billing");
}

#[test]
fn diff_marks_existing_no_overwrite_files_as_skipped() {
    let env = TestEnv::builder()
        .with_config(
            "projects:\n  - name: app\n    files:\n      - destination: settings.json\n        content: '{}'\n        overwrite: false\n",
        )
        .build();
    env.write_file("out/app/settings.json", "{\"mine\": true}");

    let result = env.run(&["diff", "app"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("skip:  settings.json"));
}

#[test]
fn diff_unknown_project_fails() {
    let env = basic_env();

    let result = env.run(&["diff", "ghost"]);

    assert!(!result.success);
    assert!(result.stderr.contains("project ghost not found"));
}

#[test]
fn diff_json_is_one_line_per_project() {
    let env = TestEnv::builder().with_config(TWO_PROJECTS).build();

    let result = env.run(&["diff", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["project"], "alpha");
    assert_eq!(events[1]["project"], "beta");
    assert_eq!(events[0]["dry_run"], true);
    assert_eq!(events[0]["files"][0]["path"], "a.txt");
    assert_eq!(events[0]["files"][0]["status"], "new");
}
