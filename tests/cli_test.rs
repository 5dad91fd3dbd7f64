use anyhow::Result;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn restcrud() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_restcrud"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_prints_progress_lines_in_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = restcrud().arg("--dir").arg(temp_dir.path()).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let expected = "\
Created folder: controllers
Created folder: models
Created folder: routes
Created folder: middleware
Created folder: config
Created file: app.js
Created file: package.json
Created file: .env
Added content to app.js
Added content to .env
Added content to package.json
Added content to user model
Added content to user controller
Added content to user routes

Project structure with full CRUD API created successfully.
";
    assert_eq!(stdout, expected);
    Ok(())
}

#[test]
fn test_runs_in_current_directory_by_default() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = restcrud().current_dir(temp_dir.path()).output()?;

    assert!(output.status.success());
    assert!(temp_dir.path().join("routes/userRoutes.js").is_file());
    Ok(())
}

#[test]
fn test_dry_run_leaves_directory_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = restcrud()
        .arg("--dry-run")
        .arg("--dir")
        .arg(temp_dir.path())
        .output()?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("Added content to user routes"));
    assert_eq!(fs::read_dir(temp_dir.path())?.count(), 0);
    Ok(())
}

#[test]
fn test_config_file_supplies_root() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let target = temp_dir.path().join("api");
    fs::create_dir(&target)?;
    let config_path = temp_dir.path().join("restcrud.toml");
    fs::write(
        &config_path,
        format!(
            "[scaffold]\nroot = \"{}\"\n",
            target.to_string_lossy().replace('\\', "/")
        ),
    )?;

    let output = restcrud().arg("--config").arg(&config_path).output()?;

    assert!(output.status.success());
    assert!(target.join("models/user.js").is_file());
    Ok(())
}

#[test]
fn test_missing_directory_exits_with_validation_code() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nope");
    let output = restcrud().arg("--dir").arg(&missing).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)?.contains("Directory does not exist"));
    assert!(!missing.exists());
    Ok(())
}

#[test]
fn test_json_logs_honour_verbose() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = restcrud()
        .args(["--json-logs", "--verbose", "--dir"])
        .arg(temp_dir.path())
        .output()?;

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    let levels: Vec<String> = stderr
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .filter_map(|record| record["level"].as_str().map(str::to_string))
        .collect();
    assert!(levels.iter().any(|level| level == "DEBUG"), "stderr: {}", stderr);
    assert!(stderr.contains(r#""level":"DEBUG""#));
    Ok(())
}

#[test]
fn test_logging_filter_follows_verbose_flag() -> Result<()> {
    for json in [false, true] {
        let temp_dir = TempDir::new()?;
        let mut quiet = restcrud();
        quiet.arg("--dir").arg(temp_dir.path());
        if json {
            quiet.arg("--json-logs");
        }
        let output = quiet.output()?;
        assert!(output.status.success());
        let stderr = String::from_utf8(output.stderr)?;
        assert!(stderr.contains("INFO"), "stderr: {}", stderr);
        assert!(!stderr.contains("DEBUG"), "stderr: {}", stderr);

        let mut verbose = restcrud();
        verbose.arg("--verbose").arg("--dir").arg(temp_dir.path());
        if json {
            verbose.arg("--json-logs");
        }
        let output = verbose.output()?;
        assert!(output.status.success());
        assert!(String::from_utf8(output.stderr)?.contains("DEBUG"));
    }
    Ok(())
}
