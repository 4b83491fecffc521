use std::{fs, path::PathBuf};

use tempfile::tempdir;

use arbor_cli::{Args, CliError};

/// Collects all .toml scripts from a directory
fn collect_scripts(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(script: &str, output: &str) -> Args {
    Args {
        script: script.to_string(),
        output: Some(output.to_string()),
        config: None,
        viewport_width: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demo_scripts() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let scripts = collect_scripts(PathBuf::from("demos"));
    assert!(!scripts.is_empty(), "No demo scripts found in demos/");

    let mut failed = Vec::new();

    for script_path in &scripts {
        let output_path = temp_dir.path().join(format!(
            "{}.txt",
            script_path.file_stem().unwrap().to_string_lossy()
        ));

        let args = args_for(
            &script_path.to_string_lossy(),
            &output_path.to_string_lossy(),
        );

        match arbor_cli::run(&args) {
            Ok(()) => {
                let report = fs::read_to_string(&output_path).expect("report written");
                if !report.starts_with("id\tlabel\t") {
                    failed.push((script_path.clone(), "missing report header".to_string()));
                }
            }
            Err(err) => failed.push((script_path.clone(), err.to_string())),
        }
    }

    if !failed.is_empty() {
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo script(s) failed", failed.len());
    }
}

#[test]
fn e2e_org_chart_report() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("org_chart.txt");

    let args = args_for("demos/org_chart.toml", &output.to_string_lossy());
    arbor_cli::run(&args).expect("org chart replays");

    let report = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    // Header plus root, engineering, design, product, storage.
    assert_eq!(lines.len(), 6);
    assert!(!report.contains("platform"));
    let engineering = lines
        .iter()
        .find(|line| line.starts_with("2\tengineering\t"))
        .expect("engineering listed");
    assert!(engineering.ends_with("\t5,6"));
}

#[test]
fn e2e_failing_step_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let script = temp_dir.path().join("bad.toml");
    fs::write(&script, "[[step]]\nop = \"delete_soft\"\nid = 1\n").unwrap();
    let output = temp_dir.path().join("bad.txt");

    let args = args_for(&script.to_string_lossy(), &output.to_string_lossy());
    let err = arbor_cli::run(&args).unwrap_err();

    assert!(matches!(err, CliError::Step { step: 1, .. }));
    assert!(!output.exists());
}

#[test]
fn e2e_missing_script() {
    let args = args_for("demos/does_not_exist.toml", "unused.txt");
    assert!(matches!(arbor_cli::run(&args), Err(CliError::Io(_))));
}
