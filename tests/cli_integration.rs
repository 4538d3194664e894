use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use treeprint::Tree;

fn treeprint() -> Command {
    Command::cargo_bin("treeprint").unwrap()
}

const SAMPLE_OUTPUT: &str = concat!(
    "                05                \n",
    "  ______________|______________   \n",
    " |              |              |  \n",
    " 02             04             06 \n",
    " |    __________|_________        \n",
    " 01  |      |     |   |   |       \n",
    "     01     02    09  08  02      \n",
    "           _|_                    \n",
    "          |   |                   \n",
    "          03  06                  \n",
);

#[test]
fn shows_help() {
    treeprint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ASCII diagrams"));
}

#[test]
fn shows_version() {
    treeprint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    treeprint()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn render_subcommand_help() {
    treeprint()
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("outline document"));
}

#[test]
fn demo_prints_sample_tree() {
    treeprint().arg("demo").assert().success().stdout(SAMPLE_OUTPUT);
}

#[test]
fn verbose_flag_keeps_stdout_clean() {
    treeprint()
        .args(["-vvv", "demo"])
        .assert()
        .success()
        .stdout(SAMPLE_OUTPUT);
}

#[test]
fn render_json_from_stdin() {
    treeprint()
        .arg("render")
        .write_stdin(r#"{"label": "A", "children": [{"label": "B"}]}"#)
        .assert()
        .success()
        .stdout("A \n| \nB \n");
}

#[test]
fn render_outline_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"root\n  a\n  b\n  c\n").unwrap();

    treeprint()
        .arg("render")
        .arg(file.path())
        .assert()
        .success()
        .stdout("  root  \n __|__  \n|  |  | \na  b  c \n");
}

#[test]
fn render_parallel_matches_sequential() {
    let outline = "05\n  02\n    01\n  04\n    01\n    02\n      03\n      06\n    09\n    08\n    02\n  06\n";

    treeprint()
        .args(["render", "--parallel", "--format", "outline", "-"])
        .write_stdin(outline)
        .assert()
        .success()
        .stdout(SAMPLE_OUTPUT);
}

#[test]
fn render_rejects_empty_label() {
    treeprint()
        .args(["render", "--format", "json"])
        .write_stdin(r#"{"label": "a", "children": [{"label": ""}]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty label"));
}

#[test]
fn render_rejects_bad_outline() {
    treeprint()
        .args(["render", "--format", "outline"])
        .write_stdin("a\nb\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn render_respects_depth_limit() {
    treeprint()
        .args(["render", "--max-depth", "1"])
        .write_stdin("a\n  b\n    c\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("deeper than the limit of 1"));
}

#[test]
fn render_missing_file_fails() {
    treeprint()
        .args(["render", "/nonexistent/tree.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/tree.json"));
}

#[test]
fn invalid_config_path_fails() {
    treeprint()
        .args(["--config", "/nonexistent/path.toml", "demo"])
        .assert()
        .failure();
}

#[test]
fn dir_renders_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    File::create(dir.path().join("src/lib.rs")).unwrap();
    File::create(dir.path().join("README")).unwrap();

    treeprint()
        .arg("dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("README"))
        .stdout(predicate::str::contains("src/"))
        .stdout(predicate::str::contains("lib.rs"));
}

#[test]
fn dir_respects_depth() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("outer/inner")).unwrap();

    treeprint()
        .args(["dir", "-d", "1"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("outer/"))
        .stdout(predicate::str::contains("inner").not());
}

#[test]
fn dir_zero_depth_in_config_is_unlimited() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("a/b/c/d")).unwrap();
    File::create(dir.path().join("a/b/c/d/deep.txt")).unwrap();

    let mut config = NamedTempFile::new().unwrap();
    config.write_all(b"[dir]\nmax_depth = 0\n").unwrap();

    treeprint()
        .arg("--config")
        .arg(config.path())
        .arg("dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("deep.txt"));
}

#[test]
fn dir_json_output_loads_back() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    File::create(dir.path().join("src/lib.rs")).unwrap();

    let output = treeprint()
        .args(["dir", "--json"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let tree = Tree::from_json(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].label, "src/");
    assert_eq!(tree.children[0].children[0].label, "lib.rs");
}

#[test]
fn completions_for_bash() {
    treeprint()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("treeprint"));
}
