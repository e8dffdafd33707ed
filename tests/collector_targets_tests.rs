use codecat::collector::CollectorConfig;
use codecat::collect_files;
use codecat::targets::{TargetSet, DEFAULT_TARGET_FILENAMES};
use tempfile::tempdir;
use tokio::fs;

#[test]
fn test_default_set_matches_every_default_filename() {
    let targets = TargetSet::default();
    for name in DEFAULT_TARGET_FILENAMES {
        assert!(targets.matches(name), "Default suffix not matched: {}", name);
    }
}

#[test]
fn test_suffix_match_is_a_true_suffix_test() {
    let targets = TargetSet::default();
    // endswith semantics, not exact filename equality
    assert!(targets.matches("myUser.ts"));
    assert!(targets.matches("adminAuthController.ts"));
    assert!(!targets.matches("User.ts.bak"));
}

#[test]
fn test_suffix_match_is_case_sensitive() {
    let targets = TargetSet::default();
    assert!(!targets.matches("user.ts"));
    assert!(!targets.matches("AUTHSERVICE.TS"));
}

#[test]
fn test_non_target_names_do_not_match() {
    let targets = TargetSet::default();
    assert!(!targets.matches("notes.txt"));
    assert!(!targets.matches("index.ts"));
    assert!(!targets.matches("authController.js"));
}

#[tokio::test]
async fn test_custom_target_set_substitution() {
    let root_dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let output_path = out_dir.path().join("out.txt");

    fs::write(root_dir.path().join("README.md"), "docs").await.unwrap();
    fs::write(root_dir.path().join("User.ts"), "user").await.unwrap();

    let config = CollectorConfig {
        root_dir: root_dir.path().to_path_buf(),
        output_file: output_path.clone(),
        targets: TargetSet::new(Some(vec![".md".to_string()])),
        ..Default::default()
    };

    let count = collect_files(config).await.unwrap();
    assert_eq!(count, 1);

    let output = fs::read_to_string(&output_path).await.unwrap();
    assert!(output.contains("README.md = 'docs'"));
    assert!(!output.contains("User.ts"));
}

#[tokio::test]
async fn test_matching_consults_file_name_not_directories() {
    let root_dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let output_path = out_dir.path().join("out.txt");

    // A directory whose name matches a target suffix is not collected,
    // and does not make its children match.
    fs::create_dir_all(root_dir.path().join("User.ts"))
        .await
        .unwrap();
    fs::write(root_dir.path().join("User.ts/index.txt"), "inside")
        .await
        .unwrap();
    fs::write(root_dir.path().join("authController.ts"), "real")
        .await
        .unwrap();

    let config = CollectorConfig {
        root_dir: root_dir.path().to_path_buf(),
        output_file: output_path.clone(),
        ..Default::default()
    };

    let count = collect_files(config).await.unwrap();
    assert_eq!(count, 1);

    let output = fs::read_to_string(&output_path).await.unwrap();
    assert!(output.contains("authController.ts = 'real'"));
    assert!(!output.contains("inside"));
}

#[tokio::test]
async fn test_duplicate_basenames_in_different_directories() {
    let root_dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let output_path = out_dir.path().join("out.txt");

    fs::create_dir_all(root_dir.path().join("api")).await.unwrap();
    fs::create_dir_all(root_dir.path().join("models")).await.unwrap();
    fs::write(root_dir.path().join("api/User.ts"), "api user")
        .await
        .unwrap();
    fs::write(root_dir.path().join("models/User.ts"), "model user")
        .await
        .unwrap();

    let config = CollectorConfig {
        root_dir: root_dir.path().to_path_buf(),
        output_file: output_path.clone(),
        ..Default::default()
    };

    let count = collect_files(config).await.unwrap();
    assert_eq!(count, 2, "Both same-named files should be collected");

    let output = fs::read_to_string(&output_path).await.unwrap();
    assert!(output.contains("api/User.ts = 'api user'"));
    assert!(output.contains("models/User.ts = 'model user'"));
}
