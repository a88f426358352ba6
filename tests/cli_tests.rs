//! CLI integration tests

mod common;

use assert_cmd::Command as AssertCommand;
use predicates::prelude::*;

use common::{drawn_strings, page_count, rx_scribe_bin};

#[test]
fn help_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = rx_scribe_bin(dir.path())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("prescription"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--language"));
    assert!(stdout.contains("--model"));
    assert!(stdout.contains("--title"));
    assert!(stdout.contains("--no-pdf"));
    assert!(stdout.contains("GOOGLE_API_KEY"));
}

#[test]
fn version_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = rx_scribe_bin(dir.path())
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("rx-scribe"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let dir = tempfile::tempdir().unwrap();
    let output = rx_scribe_bin(dir.path())
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("rx-scribe"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let dir = tempfile::tempdir().unwrap();
    let output = rx_scribe_bin(dir.path())
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for action in ["init", "set", "get", "list", "path"] {
        assert!(stdout.contains(action), "missing {action} in config help");
    }
}

#[test]
fn config_init_set_get() {
    let dir = tempfile::tempdir().unwrap();

    let output = rx_scribe_bin(dir.path())
        .args(["config", "init"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(dir.path().join("rx-scribe").join("config.toml").exists());

    let output = rx_scribe_bin(dir.path())
        .args(["config", "set", "language", "english"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = rx_scribe_bin(dir.path())
        .args(["config", "get", "language"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "en");
}

#[test]
fn config_init_twice_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(rx_scribe_bin(dir.path())
        .args(["config", "init"])
        .status()
        .unwrap()
        .success());

    let output = rx_scribe_bin(dir.path())
        .args(["config", "init"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
}

#[test]
fn config_list_masks_api_key() {
    let dir = tempfile::tempdir().unwrap();
    assert!(rx_scribe_bin(dir.path())
        .args(["config", "set", "api_key", "AIzaSyExampleKey1234"])
        .status()
        .unwrap()
        .success());

    let output = rx_scribe_bin(dir.path())
        .args(["config", "list"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("AIza...1234"));
    assert!(!stdout.contains("AIzaSyExampleKey1234"));
}

#[test]
fn export_renders_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receta.txt");
    let output_pdf = dir.path().join("receta.pdf");
    std::fs::write(&input, "Amoxicilina 500mg\nTomar cada 8 horas\n").unwrap();

    let output = rx_scribe_bin(dir.path())
        .arg("export")
        .arg(&input)
        .arg("-o")
        .arg(&output_pdf)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let bytes = std::fs::read(&output_pdf).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(
        drawn_strings(&bytes),
        vec![
            "TRADUCCION RECETA MEDICA (IA)",
            "Amoxicilina 500mg",
            "Tomar cada 8 horas"
        ]
    );
}

#[test]
fn export_uses_language_title() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rx.txt");
    let output_pdf = dir.path().join("rx.pdf");
    std::fs::write(&input, "Ibuprofen 400mg").unwrap();

    let status = rx_scribe_bin(dir.path())
        .arg("export")
        .arg(&input)
        .args(["-l", "en", "-o"])
        .arg(&output_pdf)
        .status()
        .unwrap();

    assert!(status.success());
    let strings = drawn_strings(&std::fs::read(&output_pdf).unwrap());
    assert_eq!(strings[0], "PRESCRIPTION TRANSLATION (AI)");
}

#[test]
fn export_reads_stdin_and_reports_substitutions() {
    let dir = tempfile::tempdir().unwrap();
    let output_pdf = dir.path().join("stdin.pdf");

    AssertCommand::cargo_bin("rx-scribe")
        .unwrap()
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .args(["export", "-", "-t", "RECETA", "-o"])
        .arg(&output_pdf)
        .write_stdin("Dosis: 1 cápsula 💊\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("1 character could not be printed"));

    let strings = drawn_strings(&std::fs::read(&output_pdf).unwrap());
    assert_eq!(strings, vec!["RECETA", "Dosis: 1 cápsula ?"]);
}

#[test]
fn export_long_text_paginates() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("long.txt");
    let output_pdf = dir.path().join("long.pdf");
    let text: Vec<String> = (1..=120).map(|i| format!("Linea {i}")).collect();
    std::fs::write(&input, text.join("\n")).unwrap();

    AssertCommand::cargo_bin("rx-scribe")
        .unwrap()
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .arg("export")
        .arg(&input)
        .arg("-o")
        .arg(&output_pdf)
        .assert()
        .success()
        .stderr(predicate::str::contains("pages"));

    assert!(page_count(&std::fs::read(&output_pdf).unwrap()) >= 2);
}

#[test]
fn export_writes_default_output_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rx.txt");
    std::fs::write(&input, "texto").unwrap();

    let status = rx_scribe_bin(dir.path())
        .current_dir(dir.path())
        .arg("export")
        .arg(&input)
        .status()
        .unwrap();

    assert!(status.success());
    assert!(dir.path().join("Receta_Traducida.pdf").exists());
}

#[test]
fn export_uses_configured_output_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rx.txt");
    std::fs::write(&input, "texto").unwrap();

    assert!(rx_scribe_bin(dir.path())
        .args(["config", "set", "output", "mi_receta.pdf"])
        .status()
        .unwrap()
        .success());

    let status = rx_scribe_bin(dir.path())
        .current_dir(dir.path())
        .arg("export")
        .arg(&input)
        .status()
        .unwrap();

    assert!(status.success());
    assert!(dir.path().join("mi_receta.pdf").exists());
    assert!(!dir.path().join("Receta_Traducida.pdf").exists());
}
