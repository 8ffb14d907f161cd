//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn flwr_k8s() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("flwr-k8s"))
}

fn init_project(project: &TempDir) {
    flwr_k8s()
        .args([
            "init",
            "--project-dir",
            project.path().to_str().expect("utf8 path"),
            "--server-address",
            "10.0.0.7:9092",
            "--replicas",
            "3",
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_version() {
    let mut cmd = flwr_k8s();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("flwr-k8s"));
}

#[test]
fn test_cli_help() {
    let mut cmd = flwr_k8s();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Flower Kubernetes deployment tool"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_init_writes_config() {
    let project = TempDir::new().expect("project dir");
    fs::write(project.path().join("pyproject.toml"), "[project]\nname = \"fl-demo\"\n")
        .expect("write pyproject");

    init_project(&project);

    let content =
        fs::read_to_string(project.path().join("flwr-k8s-config.yaml")).expect("config written");
    let parsed: serde_yaml::Value = serde_yaml::from_str(&content).expect("yaml");
    assert_eq!(parsed["project"]["name"], serde_yaml::Value::from("fl-demo"));
    assert_eq!(parsed["kubernetes"]["server_address"], serde_yaml::Value::from("10.0.0.7:9092"));
    assert_eq!(parsed["kubernetes"]["replicas"], serde_yaml::Value::from(3));
    assert_eq!(parsed["flower"]["min_available_clients"], serde_yaml::Value::from(3));
    assert_eq!(parsed["docker"]["username"], serde_yaml::Value::from("cjhisey"));
}

#[test]
fn test_generate_requires_config() {
    let project = TempDir::new().expect("project dir");
    let mut cmd = flwr_k8s();
    cmd.args(["generate", "--project-dir", project.path().to_str().expect("utf8 path")]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found. Run 'flwr-k8s init' first."));
}

#[test]
fn test_generate_writes_deployment_files() {
    let project = TempDir::new().expect("project dir");
    let out = TempDir::new().expect("out dir");
    init_project(&project);

    let elsewhere = TempDir::new().expect("unrelated working dir");
    let mut cmd = flwr_k8s();
    cmd.current_dir(elsewhere.path()).env_remove("FLWR_K8S_TEMPLATE_DIR").args([
        "generate",
        "--project-dir",
        project.path().to_str().expect("utf8 path"),
        "--output-dir",
        out.path().to_str().expect("utf8 path"),
    ]);
    cmd.assert().success().stdout(predicate::str::contains("Generated files:"));

    for relative in
        ["Dockerfile", ".dockerignore", "k8s/deployment.yaml", "k8s/configmap.yaml", "build.sh", "deploy.sh"]
    {
        assert!(out.path().join(relative).is_file(), "missing {relative}");
    }
    let configmap = fs::read_to_string(out.path().join("k8s/configmap.yaml")).expect("configmap");
    assert!(configmap.contains("SERVER_ADDRESS: \"10.0.0.7:9092\""));
    assert!(configmap.contains("MIN_FIT_CLIENTS: \"3\""));
}

#[test]
fn test_generate_reports_missing_template_dir() {
    let project = TempDir::new().expect("project dir");
    let out = TempDir::new().expect("out dir");
    let templates = TempDir::new().expect("empty template dir");
    init_project(&project);

    let mut cmd = flwr_k8s();
    cmd.args([
        "generate",
        "--project-dir",
        project.path().to_str().expect("utf8 path"),
        "--output-dir",
        out.path().to_str().expect("utf8 path"),
        "--template-dir",
        templates.path().to_str().expect("utf8 path"),
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error generating files"))
        .stderr(predicate::str::contains("Dockerfile.tmpl"));
}

#[test]
fn test_config_set_get_show() {
    let project = TempDir::new().expect("project dir");
    let dir = project.path().to_str().expect("utf8 path");
    init_project(&project);

    flwr_k8s().args(["config", "set", "docker.tag", "v1.2", "--project-dir", dir]).assert().success();
    flwr_k8s().args(["config", "set", "kubernetes.replicas", "5", "--project-dir", dir]).assert().success();

    flwr_k8s()
        .args(["config", "get", "docker.tag", "--project-dir", dir])
        .assert()
        .success()
        .stdout("v1.2\n");

    let content = fs::read_to_string(project.path().join("flwr-k8s-config.yaml")).expect("config");
    let parsed: serde_yaml::Value = serde_yaml::from_str(&content).expect("yaml");
    assert_eq!(parsed["kubernetes"]["replicas"], serde_yaml::Value::from(5));

    flwr_k8s()
        .args(["config", "show", "--project-dir", dir])
        .assert()
        .success()
        .stdout(predicate::str::contains("resources.limits.memory"))
        .stdout(predicate::str::contains("v1.2"));
}

#[test]
fn test_config_get_unknown_key_fails() {
    let project = TempDir::new().expect("project dir");
    init_project(&project);

    flwr_k8s()
        .args([
            "config",
            "get",
            "kubernetes.nothing",
            "--project-dir",
            project.path().to_str().expect("utf8 path"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Key not found: kubernetes.nothing"));
}

#[test]
fn test_config_show_json() {
    let project = TempDir::new().expect("project dir");
    init_project(&project);

    let output = flwr_k8s()
        .args(["config", "show", "--json", "--project-dir", project.path().to_str().expect("utf8")])
        .output()
        .expect("run");
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(parsed["kubernetes"]["replicas"], serde_json::json!(3));
}

#[test]
fn test_config_set_keeps_version_like_text() {
    let project = TempDir::new().expect("project dir");
    let dir = project.path().to_str().expect("utf8 path");
    init_project(&project);

    flwr_k8s()
        .args(["config", "set", "docker.tag", "1.10", "--project-dir", dir])
        .assert()
        .success()
        .stdout(predicate::str::contains("docker.tag = 1.10"));
    flwr_k8s()
        .args(["config", "get", "docker.tag", "--project-dir", dir])
        .assert()
        .success()
        .stdout("1.10\n");
}
