use assert_cmd::Command;
use predicates::prelude::*; // Used for writing assertions

// Each command runs in an empty directory with RUST_LOG cleared, so only the
// variables set by the test feed the settings.
fn fix_command(temp: &assert_fs::TempDir) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("fix-columns")?;
    cmd.arg("fix").current_dir(temp.path()).env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn pretty_output_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;

    let mut cmd = fix_command(&temp)?;
    cmd.env("FIX_COLUMNS_OUTPUT__PRETTY", "true")
        .write_stdin(r#"{"_id":1}"#);
    cmd.assert().success().stdout("{\n  \"_id_\": 1\n}\n");

    Ok(())
}

#[test]
fn debug_level_from_environment_logs_renames() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;

    let mut cmd = fix_command(&temp)?;
    cmd.env("FIX_COLUMNS_LOGGER__LEVEL", "debug")
        .write_stdin(r#"{"_id":1}"#);
    cmd.assert()
        .success()
        .stdout("{\"_id_\":1}\n")
        .stderr(predicate::str::contains("Renamed reserved columns"));

    Ok(())
}

#[test]
fn rust_log_overrides_configured_level() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;

    let mut cmd = fix_command(&temp)?;
    cmd.env("FIX_COLUMNS_LOGGER__LEVEL", "debug")
        .env("RUST_LOG", "error")
        .write_stdin(r#"{"_id":1}"#);
    cmd.assert()
        .success()
        .stdout("{\"_id_\":1}\n")
        .stderr(predicate::str::contains("Renamed reserved columns").not());

    Ok(())
}

#[test]
fn no_ansi_flag_prints_plain_messages() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;

    let mut cmd = fix_command(&temp)?;
    cmd.arg("--no-ansi").write_stdin(r#"{"_id":1}"#);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "{:>15} 1 of 1 records had reserved columns renamed",
            "Fix"
        )))
        .stderr(predicate::str::contains("\u{1b}[").not());

    Ok(())
}

#[test]
fn no_ansi_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;

    let mut cmd = fix_command(&temp)?;
    cmd.env("FIX_COLUMNS_DISPLAY__NO_ANSI", "true")
        .write_stdin(r#"{"a":1}"#);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "{:>15} 0 of 1 records had reserved columns renamed",
            "Fix"
        )))
        .stderr(predicate::str::contains("\u{1b}[").not());

    Ok(())
}

#[test]
fn messages_are_coloured_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;

    let mut cmd = fix_command(&temp)?;
    cmd.write_stdin(r#"{"_id":1}"#);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("\u{1b}[38;5;10m"));

    Ok(())
}
