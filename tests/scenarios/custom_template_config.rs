//! Scenario: Team keeps its own exercise in a directory and a config file
//!
//! Steps:
//! 1. Write templates under `exercise/` and an `exercise-pack.toml` pointing at them
//! 2. Build with no arguments; the config decides output, compression and source
//! 3. A second build with `overwrite = false` refuses to replace the archive
//! 4. `--force` on the command line wins over the config

use crate::common::*;

const CONFIG: &str = r#"
[output]
path = "team-exercise.zip"
overwrite = false
compression = "stored"

[templates]
dir = "exercise"
"#;

#[test]
fn scenario_config_drives_build() {
    let env = TestEnv::new();
    env.write_project_file("exercise/README.md", "# Team exercise\n");
    env.write_project_file("exercise/data/items.json", "[{\"id\": \"1\"}]\n");
    env.write_project_file("exercise-pack.toml", CONFIG);

    // Step 2
    let result = env.run(&[]);
    assert!(result.is_success(), "build failed:\n{}", result.combined_output());
    assert_eq!(
        env.archive_names("team-exercise.zip"),
        vec!["README.md", "data/items.json"]
    );
    let entries = exercise_pack::list_entries(&env.project_path("team-exercise.zip")).unwrap();
    assert!(entries.iter().all(|e| e.compression == "stored"));

    // Step 3
    let result = env.run(&[]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("archive already exists"));

    // Step 4
    let result = env.run(&["build", "--force"]);
    assert!(result.is_success(), "forced build failed:\n{}", result.combined_output());

    let result = env.run(&["verify"]);
    assert!(result.is_success(), "verify failed:\n{}", result.combined_output());
}

#[test]
fn scenario_unknown_config_key_warns_but_builds() {
    let env = TestEnv::new();
    env.write_project_file("exercise-pack.toml", "[output]\ncompresion = \"stored\"\n");

    let result = env.run(&[]);

    assert!(result.is_success(), "build failed:\n{}", result.combined_output());
    assert!(result.stderr.contains("Unknown config key 'compresion'"));
    assert!(result.stderr.contains("Did you mean 'compression'?"));
}

#[test]
fn scenario_explicit_broken_config_is_fatal() {
    let env = TestEnv::new();
    env.write_project_file("broken.toml", "[output\n");

    let result = env.run(&["--config", "broken.toml"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid config in broken.toml"));
    assert!(!env.project_path("technical-interview-exercise.zip").exists());
}
