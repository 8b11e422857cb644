#![cfg(feature = "cli")]

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use indoc::indoc;
use predicates::prelude::*;
use std::process::Command;

fn value_file(json: &str) -> Result<assert_fs::NamedTempFile, Box<dyn std::error::Error>> {
  let file = assert_fs::NamedTempFile::new("value.json")?;
  file.write_str(json)?;
  Ok(file)
}

#[test]
fn valid_input_file() -> Result<(), Box<dyn std::error::Error>> {
  let file = value_file(indoc! {r#"
    {
      "type": "tuple",
      "value": [
        {"type": "unit", "value": 10, "unit": "px"},
        {"type": "keyword", "value": "auto"}
      ]
    }
  "#})?;

  let mut cmd = Command::cargo_bin("stylevalue")?;
  cmd.arg(file.path());
  cmd.assert().success().stdout(predicate::str::diff("10px auto\n"));

  Ok(())
}

#[test]
fn stdin_input() -> Result<(), Box<dyn std::error::Error>> {
  let mut cmd = assert_cmd::Command::cargo_bin("stylevalue")?;
  cmd.arg("-");
  cmd.write_stdin(r#"{"type": "fontFamily", "value": ["Courier New"]}"#);
  cmd
    .assert()
    .success()
    .stdout(predicate::str::diff("\"Courier New\", monospace\n"));

  Ok(())
}

#[test]
fn no_input_file() -> Result<(), Box<dyn std::error::Error>> {
  let mut cmd = Command::cargo_bin("stylevalue")?;
  cmd.arg("does-not-exist.json");
  cmd.assert().failure();

  Ok(())
}

#[test]
fn invalid_input_file() -> Result<(), Box<dyn std::error::Error>> {
  let file = value_file(r#"{"type": "nope"}"#)?;

  let mut cmd = Command::cargo_bin("stylevalue")?;
  cmd.arg(file.path());
  cmd
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("Invalid style value"));

  Ok(())
}

#[test]
fn minify_option() -> Result<(), Box<dyn std::error::Error>> {
  let file = value_file(indoc! {r#"
    {
      "type": "layers",
      "value": [
        {"type": "keyword", "value": "auto"},
        {"type": "unit", "value": 0.5, "unit": "em"}
      ]
    }
  "#})?;

  let mut cmd = Command::cargo_bin("stylevalue")?;
  cmd.arg(file.path()).arg("--minify");
  cmd.assert().success().stdout(predicate::str::diff("auto,.5em\n"));

  Ok(())
}

#[test]
fn output_file_option() -> Result<(), Box<dyn std::error::Error>> {
  let file = value_file(indoc! {r#"
    {
      "type": "var",
      "value": "gap",
      "fallback": {"type": "unit", "value": 4, "unit": "px"}
    }
  "#})?;
  let outfile = assert_fs::NamedTempFile::new("out.css")?;

  let mut cmd = Command::cargo_bin("stylevalue")?;
  cmd.arg(file.path()).arg("--output-file").arg(outfile.path());
  cmd.assert().success();
  outfile.assert(predicate::str::diff("var(--gap, 4px)"));

  Ok(())
}

#[test]
fn assets_option() -> Result<(), Box<dyn std::error::Error>> {
  let file = value_file(indoc! {r#"
    {
      "type": "layers",
      "value": [
        {"type": "image", "value": {"type": "asset", "value": "1234567890"}},
        {"type": "image", "value": {"type": "asset", "value": "missing"}}
      ]
    }
  "#})?;
  let assets = assert_fs::NamedTempFile::new("assets.json")?;
  assets.write_str(r#"{"1234567890": {"path": "foo.png"}}"#)?;

  let mut cmd = Command::cargo_bin("stylevalue")?;
  cmd
    .arg(file.path())
    .arg("--assets")
    .arg(assets.path())
    .arg("--asset-base-url")
    .arg("/cdn/");
  cmd
    .assert()
    .success()
    .stdout(predicate::str::diff("url(\"/cdn/foo.png\"), none\n"));

  Ok(())
}

#[test]
fn invalid_assets() -> Result<(), Box<dyn std::error::Error>> {
  let file = value_file(r#"{"type": "keyword", "value": "red"}"#)?;
  let assets = assert_fs::NamedTempFile::new("assets.json")?;
  assets.write_str("[]")?;

  let mut cmd = Command::cargo_bin("stylevalue")?;
  cmd.arg(file.path()).arg("--assets").arg(assets.path());
  cmd
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("Invalid asset map"));

  Ok(())
}

#[test]
fn unit_options() -> Result<(), Box<dyn std::error::Error>> {
  let file = value_file(r#"{"type": "unit", "value": 0, "unit": "deg"}"#)?;

  let mut cmd = Command::cargo_bin("stylevalue")?;
  cmd
    .arg(file.path())
    .arg("--unit-options")
    .arg("rotate")
    .arg("--unitless-label")
    .arg("none");
  cmd.assert().success().stdout(predicate::str::diff(
    r#"[{"type":"unit","id":"deg","label":"deg"},{"type":"unit","id":"grad","label":"grad"},{"type":"unit","id":"rad","label":"rad"},{"type":"unit","id":"turn","label":"turn"},{"type":"unit","id":"number","label":"none"}]"#
      .to_owned()
      + "\n",
  ));

  Ok(())
}
