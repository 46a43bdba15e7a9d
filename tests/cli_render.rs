//! CLI tests for `structuresmith render`

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
fn render_writes_templated_files_and_manifest() {
    let env = basic_env();

    let result = env.run(&["render", "billing"]);

    assert!(result.success, "render failed:\n{}", result.combined_output());
    assert_eq!(env.read_output("billing", "README.md"), "# Billing");
    assert_eq!(
        env.read_output("billing", "Makefile"),
        "build:\n\tgo build -o billing\n"
    );
    assert_eq!(env.read_output("billing", ".github/workflows/ci.yml"), WORKFLOW);

    let manifest = env.read_manifest("billing");
    assert!(manifest["generated_at"].is_string());
    assert_eq!(manifest["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(
        env.manifest_paths("billing"),
        vec![".github/workflows/ci.yml", "Makefile", "README.md"]
    );
    assert!(manifest["files"][0]["checksum"]
        .as_str()
        .unwrap()
        .starts_with("sha256:"));
}

#[test]
fn render_removes_undeclared_files_and_empty_dirs() {
    let env = basic_env();
    assert!(env.run(&["render", "billing"]).success);

    env.write_config(
        "projects:\n  - name: billing\n    files:\n      - destination: README.md\n        content: only me\n",
    );
    let result = env.run(&["render", "billing"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!env.output_path("billing", "Makefile").exists());
    assert!(!env.output_path("billing", ".github").exists());
    assert!(env.output_path("billing", "").exists());
    assert_eq!(env.read_output("billing", "README.md"), "only me");
    assert_eq!(env.manifest_paths("billing"), vec!["README.md"]);
}

#[test]
fn render_is_idempotent() {
    let env = basic_env();
    assert!(env.run(&["render", "billing"]).success);
    let first = env.manifest_paths("billing");

    let result = env.run(&["render", "billing"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("billing: 0 new, 0 deleted, 3 overwritten, 0 skipped"));
    assert_eq!(env.manifest_paths("billing"), first);
}

#[test]
fn render_keeps_hand_edited_file_when_overwrite_is_off() {
    let env = TestEnv::builder()
        .with_config(
            "projects:\n  - name: app\n    files:\n      - destination: .env\n        content: PORT=8080\n        overwrite: false\n",
        )
        .build();

    assert!(env.run(&["render", "app"]).success);
    assert_eq!(env.read_output("app", ".env"), "PORT=8080");

    env.write_file("out/app/.env", "PORT=9999");
    let result = env.run(&["render", "app"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read_output("app", ".env"), "PORT=9999");
    assert!(result.stderr.contains("file exists and overwrite is disabled"));
    assert_eq!(env.manifest_paths("app"), vec![".env"]);
}

#[test]
fn render_copies_invalid_template_verbatim() {
    let env = TestEnv::builder()
        .with_config(
            "projects:\n  - name: app\n    files:\n      - destination: raw.txt\n        content: 'Hello {{ .name'\n",
        )
        .build();

    let result = env.run(&["render", "app"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read_output("app", "raw.txt"), "Hello {{ .name");
}

#[cfg(unix)]
#[test]
fn render_applies_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::builder()
        .with_config(
            "projects:\n  - name: app\n    files:\n      - destination: run.sh\n        content: '#!/bin/sh'\n        permissions: \"0755\"\n",
        )
        .build();

    let result = env.run(&["render", "app"]);

    assert!(result.success, "{}", result.combined_output());
    let mode = std::fs::metadata(env.output_path("app", "run.sh"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn render_all_projects() {
    let env = TestEnv::builder().with_config(TWO_PROJECTS).build();

    let result = env.run(&["render", "--max-parallel", "2"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read_output("alpha", "a.txt"), "alpha");
    assert_eq!(env.read_output("beta", "b.txt"), "beta");
}

#[test]
fn failing_project_does_not_stop_siblings() {
    let env = TestEnv::builder()
        .with_config(
            r#"
projects:
  - name: broken
    files:
      - destination: remote.txt
        sourceUrl: http://127.0.0.1:9/unreachable
  - name: fine
    files:
      - destination: ok.txt
        content: ok
"#,
        )
        .build();

    let result = env.run(&["render"]);

    assert!(!result.success);
    assert_eq!(env.read_output("fine", "ok.txt"), "ok");
    assert!(!env.output_path("broken", ".anvil.lock").exists());
    assert!(result.stdout.contains("1 of 2 projects failed:"));
    assert!(result.stdout.contains("broken: resolving source for 'remote.txt'"));
    assert!(result.stderr.contains("1 of 2 projects failed"));
}

#[test]
fn output_flag_changes_destination_root() {
    let env = TestEnv::builder().with_config(TWO_PROJECTS).build();

    let result = env.run(&["render", "alpha", "--output", "build"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.path("build/alpha/a.txt").exists());
    assert!(!env.path("out").exists());
}
