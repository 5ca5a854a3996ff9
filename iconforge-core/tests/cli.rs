use std::fs;
use std::process::Command;

use serde_json::Value;
use tempfile::tempdir;

const DESCRIPTOR: &str = r#"{"fontName":"apricons","glyphsData":{"0":{"name":"icons$home","codepointHexa":"e901"},"1":{"name":"icons$spinner","codepointHexa":"e902"}}}"#;

#[test]
fn render_writes_stylesheet_and_demo() {
    let tmp = tempdir().expect("tempdir");
    let descriptor = tmp.path().join("result.json");
    fs::write(&descriptor, DESCRIPTOR).expect("write descriptor");
    let dist = tmp.path().join("dist");

    let output = Command::new(env!("CARGO_BIN_EXE_iconforge-cli"))
        .arg("render")
        .arg(&descriptor)
        .arg("--dist-dir")
        .arg(&dist)
        .output()
        .expect("run iconforge-cli");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report: Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["font_name"], "apricons");
    assert_eq!(report["glyph_count"], 2);

    let css = fs::read_to_string(dist.join("apricons.css")).expect("css");
    assert!(css.contains(".apr-spinner:before"));
    let html = fs::read_to_string(dist.join("apricons.html")).expect("html");
    assert!(html.contains("apr apr-spinner spin"));
}

#[test]
fn render_rejects_bad_descriptor() {
    let tmp = tempdir().expect("tempdir");
    let descriptor = tmp.path().join("result.json");
    fs::write(&descriptor, "{").expect("write descriptor");

    let output = Command::new(env!("CARGO_BIN_EXE_iconforge-cli"))
        .arg("render")
        .arg(&descriptor)
        .arg("--dist-dir")
        .arg(tmp.path().join("dist"))
        .output()
        .expect("run iconforge-cli");

    assert_eq!(output.status.code(), Some(1));
    let report: Value = serde_json::from_slice(&output.stdout).expect("json error");
    assert_eq!(report["success"], false);
    assert!(!tmp.path().join("dist").exists());
}

#[cfg(unix)]
#[test]
fn generate_runs_external_synthesizer() {
    let tmp = tempdir().expect("tempdir");
    let dist = tmp.path().join("dist");
    let script = format!("printf '%s' '{DESCRIPTOR}'");

    let output = Command::new(env!("CARGO_BIN_EXE_iconforge-cli"))
        .arg("generate")
        .args(["--font-name", "apricons", "--pattern", "icons/*.svg"])
        .arg("--output-dir")
        .arg(&dist)
        .arg("--dist-dir")
        .arg(&dist)
        .args(["--synthesizer", "sh"])
        .arg("--synthesizer-arg=-c")
        .arg(format!("--synthesizer-arg={script}"))
        .arg("--synthesizer-arg=sh")
        .output()
        .expect("run iconforge-cli");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let report: Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert!(report["job_hash"].is_string());
    assert!(dist.join("apricons.css").is_file());
    assert!(dist.join("apricons.html").is_file());
}

#[test]
fn generate_fails_when_synthesizer_missing() {
    let tmp = tempdir().expect("tempdir");
    let dist = tmp.path().join("dist");

    let output = Command::new(env!("CARGO_BIN_EXE_iconforge-cli"))
        .arg("generate")
        .args(["--synthesizer", "/nonexistent/webfonts-generator"])
        .arg("--dist-dir")
        .arg(&dist)
        .output()
        .expect("run iconforge-cli");

    assert_eq!(output.status.code(), Some(1));
    let report: Value = serde_json::from_slice(&output.stdout).expect("json error");
    assert_eq!(report["success"], false);
    assert!(report["error"]
        .as_str()
        .unwrap_or_default()
        .contains("Error generating fonts"));
    assert!(!dist.exists());
}

#[test]
fn render_reports_write_failure() {
    let tmp = tempdir().expect("tempdir");
    let descriptor = tmp.path().join("result.json");
    fs::write(&descriptor, DESCRIPTOR).expect("write descriptor");
    let dist = tmp.path().join("dist");
    // A directory where the stylesheet should go.
    fs::create_dir_all(dist.join("apricons.css")).expect("mkdir blocker");

    let output = Command::new(env!("CARGO_BIN_EXE_iconforge-cli"))
        .arg("render")
        .arg(&descriptor)
        .arg("--dist-dir")
        .arg(&dist)
        .output()
        .expect("run iconforge-cli");

    assert_eq!(output.status.code(), Some(2));
    let report: Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["files"][0]["label"], "CSS");
    assert_eq!(report["files"][0]["written"], false);
    assert!(report["files"][0]["error"].is_string());
    assert_eq!(report["files"][1]["written"], true);
    assert!(dist.join("apricons.html").is_file());
}

#[cfg(unix)]
#[test]
fn generate_request_file_overrides_flags() {
    let tmp = tempdir().expect("tempdir");
    let flag_dist = tmp.path().join("flag-dist");
    let request_dist = tmp.path().join("request-dist");
    let request = tmp.path().join("request.json");
    let body = serde_json::json!({
        "fontName": "apricons",
        "sourcePattern": "icons/*.svg",
        "outputDir": request_dist,
        "distDir": request_dist,
        "options": {"types": ["woff2"]},
    });
    fs::write(&request, body.to_string()).expect("write request");
    let script = format!("printf '%s' '{DESCRIPTOR}'");

    let output = Command::new(env!("CARGO_BIN_EXE_iconforge-cli"))
        .arg("generate")
        .args(["--font-name", "ignored"])
        .arg("--dist-dir")
        .arg(&flag_dist)
        .arg("--request")
        .arg(&request)
        .args(["--synthesizer", "sh"])
        .arg("--synthesizer-arg=-c")
        .arg(format!("--synthesizer-arg={script}"))
        .arg("--synthesizer-arg=sh")
        .output()
        .expect("run iconforge-cli");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(request_dist.join("apricons.css").is_file());
    assert!(request_dist.join("apricons.html").is_file());
    assert!(!flag_dist.exists());
}

#[test]
fn generate_rejects_malformed_options() {
    let tmp = tempdir().expect("tempdir");
    let dist = tmp.path().join("dist");

    let output = Command::new(env!("CARGO_BIN_EXE_iconforge-cli"))
        .arg("generate")
        .args(["--synthesizer", "sh", "--options", "{not json"])
        .arg("--dist-dir")
        .arg(&dist)
        .output()
        .expect("run iconforge-cli");

    assert_eq!(output.status.code(), Some(1));
    let report: Value = serde_json::from_slice(&output.stdout).expect("json error");
    assert_eq!(report["success"], false);
    assert!(report["error"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Invalid options"));
    assert!(!dist.exists());
}

#[test]
fn generate_requires_synthesizer_program() {
    let tmp = tempdir().expect("tempdir");

    let output = Command::new(env!("CARGO_BIN_EXE_iconforge-cli"))
        .arg("generate")
        .arg("--dist-dir")
        .arg(tmp.path().join("dist"))
        .output()
        .expect("run iconforge-cli");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--synthesizer"));
    assert!(!tmp.path().join("dist").exists());
}
