//! Runs the `web-helpers` binary end to end.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const CONFIG: &str = r#"
[paths]
app_root = "/wiki/"
physical_root = "/srv/wiki/"

[app_settings]
SiteName = "  Team Wiki  "

[client_ip]
forwarded_headers = ["CF-Connecting-IP"]
"#;

fn config_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("web-helpers-cli-{}-{}", std::process::id(), name));
    std::fs::write(&path, CONFIG).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_web-helpers"))
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "failed: {}", String::from_utf8_lossy(&output.stderr));
    output
}

fn stdout(args: &[&str]) -> String {
    String::from_utf8(run(args).stdout).unwrap()
}

#[test]
fn client_ip_takes_last_forwarded_hop() {
    let out = stdout(&[
        "client-ip",
        "-H",
        "X-Forwarded-For: 1.1.1.1,2.2.2.2",
        "--remote-addr",
        "9.9.9.9",
    ]);
    assert_eq!(out, "2.2.2.2\n");
}

#[test]
fn client_ip_falls_back_to_remote_addr_as_json() {
    let out = stdout(&["client-ip", "--remote-addr", "9.9.9.9", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json, serde_json::json!({ "address": "9.9.9.9" }));
}

#[test]
fn client_ip_without_anything_prints_empty_line() {
    assert_eq!(stdout(&["client-ip"]), "\n");
}

#[test]
fn client_ip_uses_configured_headers() {
    let path = config_file("client-ip.toml");
    let config = path.to_str().unwrap();

    let out = stdout(&[
        "--config",
        config,
        "client-ip",
        "-H",
        "X-Forwarded-For: 1.1.1.1",
        "-H",
        "CF-Connecting-IP: 203.0.113.7",
    ]);
    assert_eq!(out, "203.0.113.7\n");
    let _ = std::fs::remove_file(path);
}

#[test]
fn param_reads_configured_settings() {
    let path = config_file("param.toml");
    let config = path.to_str().unwrap();

    assert_eq!(stdout(&["--config", config, "param", "SiteName"]), "Team Wiki\n");
    assert_eq!(
        stdout(&["--config", config, "param", "Missing", "--default", "none"]),
        "none\n"
    );
    assert_eq!(stdout(&["param", "SiteName"]), "\n");
    let _ = std::fs::remove_file(path);
}

#[test]
fn rewrite_from_argument_and_stdin() {
    let path = config_file("rewrite.toml");
    let config = path.to_str().unwrap();

    assert_eq!(
        stdout(&["--config", config, "rewrite", "[home](~/index)"]),
        "[home](/wiki/index)"
    );

    let mut child = Command::new(env!("CARGO_BIN_EXE_web-helpers"))
        .args(["--config", config, "rewrite"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"<img src=\"%7E/logo.png\">\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "<img src=\"/wiki/logo.png\">\n");
    let _ = std::fs::remove_file(path);
}

#[test]
fn absolute_path_root_override() {
    let path = config_file("absolute.toml");
    let config = path.to_str().unwrap();

    assert_eq!(
        stdout(&["--config", config, "absolute-path", "/srv/wiki/docs/a.md"]),
        "/docs/a.md\n"
    );
    assert_eq!(
        stdout(&["--config", config, "absolute-path", r"C:\site\docs\a.md", "--root", r"C:\site\"]),
        "/docs/a.md\n"
    );
    let _ = std::fs::remove_file(path);
}

#[test]
fn containing_dir_prints_directory() {
    assert_eq!(stdout(&["containing-dir", "/docs/guide/intro.md"]), "/docs/guide/\n");
    assert_eq!(stdout(&["containing-dir", "intro.md"]), "/\n");
}

#[test]
fn invalid_config_fails() {
    let path = std::env::temp_dir().join(format!("web-helpers-cli-{}-bad.toml", std::process::id()));
    std::fs::write(&path, "[paths]\napp_root = \"relative\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_web-helpers"))
        .args(["--config", path.to_str().unwrap(), "containing-dir", "a/b"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("relative"));
    let _ = std::fs::remove_file(path);
}
