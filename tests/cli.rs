use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn photomark_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("photomark").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

fn write_photo(dir: &Path, name: &str) -> PathBuf {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 200, 100).unwrap();
    {
        let ctx = cairo::Context::new(&surface).unwrap();
        ctx.set_source_rgb(0.2, 0.4, 0.8);
        ctx.paint().unwrap();
    }
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    surface.write_to_png(&mut file).unwrap();
    path
}

const SCRIPT: &str = r#"
[[events]]
type = "double-click"
x = 0
y = 0

[[events]]
type = "press"
x = 10
y = 10

[[events]]
type = "type"
text = "hi"

[[events]]
type = "press"
x = 50
y = 50

[[events]]
type = "type"
text = "yo"

[[events]]
type = "commit"
"#;

#[test]
fn photomark_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    photomark_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Annotate the back of your photos"));
}

#[test]
fn unreadable_photo_fails() {
    let temp = TempDir::new().unwrap();
    let bogus = temp.path().join("bogus.png");
    std::fs::write(&bogus, "not an image").unwrap();

    photomark_cmd(temp.path())
        .arg("--photo")
        .arg(&bogus)
        .assert()
        .failure()
        .stderr(predicate::str::contains("The image could not be read"));
}

#[test]
fn scripted_text_is_laid_out() {
    let temp = TempDir::new().unwrap();
    let photo = write_photo(temp.path(), "photo.png");
    let script = temp.path().join("events.toml");
    std::fs::write(&script, SCRIPT).unwrap();

    photomark_cmd(temp.path())
        .arg("--photo")
        .arg(&photo)
        .arg("--script")
        .arg(&script)
        .args(["--print-layout", "--char-width", "10", "--line-height", "20"])
        .assert()
        .success()
        .stdout("10 30 hi\n50 70 yo\n");
}

#[test]
fn renders_back_side_to_png() {
    let temp = TempDir::new().unwrap();
    let photo = write_photo(temp.path(), "photo.png");
    let script = temp.path().join("events.toml");
    std::fs::write(&script, SCRIPT).unwrap();
    let output = temp.path().join("back.png");

    photomark_cmd(temp.path())
        .arg("--photo")
        .arg(&photo)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .args(["--char-width", "10"])
        .assert()
        .success();

    let mut file = File::open(&output).unwrap();
    let rendered = cairo::ImageSurface::create_from_png(&mut file).unwrap();
    assert_eq!((rendered.width(), rendered.height()), (200, 100));
}

#[test]
fn config_file_commit_key_is_used() {
    let temp = TempDir::new().unwrap();
    let photo = write_photo(temp.path(), "photo.png");
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[input]\ncommit_key = \"tab\"\n").unwrap();
    let script = temp.path().join("events.toml");
    std::fs::write(
        &script,
        r#"
[[events]]
type = "double-click"
x = 0
y = 0

[[events]]
type = "press"
x = 10
y = 10

[[events]]
type = "type"
text = "ab"

[[events]]
type = "key"
key = "tab"

[[events]]
type = "type"
text = "cd"
"#,
    )
    .unwrap();

    photomark_cmd(temp.path())
        .arg("--photo")
        .arg(&photo)
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .args(["--print-layout", "--char-width", "10"])
        .assert()
        .success()
        .stdout("10 30 ab\n");
}
