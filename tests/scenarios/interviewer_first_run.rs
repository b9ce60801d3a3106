//! Scenario: Interviewer prepares an exercise bundle
//!
//! Steps:
//! 1. Run the tool with no arguments in an empty directory
//! 2. List the archive to check what candidates will receive
//! 3. Verify the archive against the bundled templates
//! 4. Re-run; the archive is replaced with identical content

use crate::common::*;

#[test]
fn scenario_interviewer_builds_lists_and_verifies() {
    let env = TestEnv::new();

    // Step 1: default build
    let result = env.run(&[]);
    assert!(result.is_success(), "build failed:\n{}", result.combined_output());
    assert!(result.stdout.contains("technical-interview-exercise.zip"));

    // Step 2: listing shows every bundled path
    let result = env.run(&["list"]);
    assert!(result.is_success(), "list failed:\n{}", result.combined_output());
    for path in bundled_paths() {
        assert!(result.stdout.contains(&path), "missing {} in listing", path);
    }

    // Step 3: verification passes
    let result = env.run(&["verify"]);
    assert!(result.is_success(), "verify failed:\n{}", result.combined_output());

    // Step 4: rerun replaces the archive with identical bytes
    let before = std::fs::read(env.project_path("technical-interview-exercise.zip")).unwrap();
    assert!(env.run(&[]).is_success());
    let after = std::fs::read(env.project_path("technical-interview-exercise.zip")).unwrap();
    assert_eq!(before, after);

    // No staging files are left behind
    let leftovers: Vec<_> = std::fs::read_dir(env.project_root.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "leftover temp files: {:?}", leftovers);
}
