//! Test fixtures - reusable declaration files.

/// One project with inline content, a template file and a directory source
pub const BASIC_CONFIG: &str = r##"
templateGroups:
  service:
    - destination: Makefile
      source: service/Makefile.tpl
      values:
        binary: app
    - destination: .github
      source: ci
projects:
  - name: billing
    files:
      - destination: README.md
        content: "# {{ .title }}"
        values:
          title: Billing
    groups:
      - groupName: service
        values:
          binary: billing
"##;

pub const MAKEFILE_TEMPLATE: &str = "build:\n\tgo build -o {{ .binary }}\n";

pub const WORKFLOW: &str = "name: ci\non: [push]\n";

/// Two independent projects
pub const TWO_PROJECTS: &str = r#"
projects:
  - name: alpha
    files:
      - destination: a.txt
        content: alpha
  - name: beta
    files:
      - destination: b.txt
        content: beta
"#;
