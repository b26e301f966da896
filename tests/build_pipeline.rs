//! Build stage tests against a scripted packager.

#![cfg(unix)]

mod common;

use common::{EMPTY_BUILD, FLAT_BUILD, NESTED_BUILD, TestProject};
use pyship::bundler::{Bundler, Error, LocateStrategy};

#[tokio::test]
async fn nested_build_gets_data_files_and_cleans_up() {
    let project = TestProject::new(NESTED_BUILD);

    let output = Bundler::new(project.settings()).build().await.unwrap();

    assert_eq!(output.dir, project.path("output/app"));
    assert_eq!(output.strategy, LocateStrategy::NestedBundle);
    assert_eq!(output.executable, Some(project.path("output/app/app.exe")));
    assert!(project.path("output/app/auxiliary/a.csv").is_file());
    assert!(project.path("output/app/auxiliary/b.csv").is_file());
    assert!(output.warnings.is_empty(), "{:?}", output.warnings);

    assert!(!project.path("app.spec").exists());
    assert!(!project.path("build").exists());
}

#[tokio::test]
async fn flat_build_is_found_at_output_root() {
    let project = TestProject::new(FLAT_BUILD);

    let output = Bundler::new(project.settings()).build().await.unwrap();

    assert_eq!(output.dir, project.path("output"));
    assert_eq!(output.strategy, LocateStrategy::FlatExecutable);
    assert!(project.path("output/auxiliary/a.csv").is_file());
}

#[tokio::test]
async fn prefixed_directory_is_used_when_conventional_paths_are_empty() {
    let project = TestProject::new("mkdir -p \"$DIST/app_1.0\"\n");

    let output = Bundler::new(project.settings()).build().await.unwrap();

    assert_eq!(output.dir, project.path("output/app_1.0"));
    assert_eq!(output.strategy, LocateStrategy::PrefixScan);
    assert_eq!(output.executable, None);
    assert!(project.path("output/app_1.0/auxiliary/b.csv").is_file());
    assert!(output.warnings.iter().any(|w| w.contains("app.exe")));
}

#[tokio::test]
async fn empty_output_is_reported_and_intermediates_removed() {
    let project = TestProject::new(EMPTY_BUILD);

    let err = Bundler::new(project.settings()).build().await.unwrap_err();

    assert!(matches!(err, Error::NoBuildOutput { .. }));
    assert!(err.to_string().contains("no build output found"));
    assert!(!project.path("app.spec").exists());
}

#[tokio::test]
async fn missing_entry_point_never_runs_packager() {
    let project = TestProject::new("touch invoked\n");
    std::fs::remove_file(project.path("app.py")).unwrap();

    let err = Bundler::new(project.settings()).build().await.unwrap_err();

    assert!(matches!(err, Error::EntryPointMissing(_)));
    assert!(!project.path("invoked").exists());
    assert!(!project.path("app.spec").exists());
}

#[tokio::test]
async fn stale_executables_are_removed_before_packaging() {
    let project = TestProject::new(&format!(
        "if [ -e \"$DIST/app.exe\" ] || [ -e \"$DIST/app/app.exe\" ]; then\n  \
         echo stale >&2\n  exit 3\nfi\n{NESTED_BUILD}"
    ));
    project.write_file("output/app.exe", "old");
    project.write_file("output/app/app.exe", "old");

    let output = Bundler::new(project.settings()).build().await.unwrap();

    assert_eq!(output.strategy, LocateStrategy::NestedBundle);
    assert!(!project.path("output/app.exe").exists());
    assert_eq!(
        std::fs::read_to_string(project.path("output/app/app.exe")).unwrap(),
        "binary"
    );
}

#[tokio::test]
async fn lock_signature_maps_to_locked_executable() {
    let project = TestProject::new(
        "echo \"PermissionError: [WinError 32] The process cannot access the file\" >&2\nexit 1\n",
    );

    let err = Bundler::new(project.settings()).build().await.unwrap_err();

    assert!(matches!(err, Error::ExecutableLocked { .. }));
    assert!(err.to_string().contains("the process may be running"));
}

#[tokio::test]
async fn lock_error_names_the_nested_executable() {
    let project = TestProject::new(&format!(
        "{NESTED_BUILD}echo \"PermissionError: [WinError 5] Access is denied\" >&2\nexit 1\n"
    ));

    let err = Bundler::new(project.settings()).build().await.unwrap_err();

    match err {
        Error::ExecutableLocked { path, .. } => {
            assert_eq!(path, project.path("output/app/app.exe"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn undecodable_output_keeps_lock_detection() {
    let project = TestProject::new(
        "printf '\\377\\n' >&2\n\
         echo \"PermissionError: [WinError 32] The process cannot access the file\" >&2\n\
         exit 1\n",
    );

    let err = Bundler::new(project.settings()).build().await.unwrap_err();

    assert!(
        matches!(err, Error::ExecutableLocked { .. }),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn suffixless_nested_build_can_rerun() {
    let project = TestProject::new(
        "mkdir -p \"$DIST/app\"\nprintf 'binary' > \"$DIST/app/app\"\n",
    );
    project.edit_manifest("executable_suffix = \".exe\"", "executable_suffix = \"\"");

    let first = Bundler::new(project.settings()).build().await.unwrap();
    let second = Bundler::new(project.settings()).build().await.unwrap();

    assert_eq!(first.strategy, LocateStrategy::NestedBundle);
    assert_eq!(second.dir, project.path("output/app"));
    assert_eq!(second.executable, Some(project.path("output/app/app")));
    assert!(project.path("output/app/auxiliary/a.csv").is_file());
}

#[tokio::test]
async fn packager_failure_carries_its_output() {
    let project = TestProject::new("echo collecting\necho 'hook crashed' >&2\nexit 2\n");

    let err = Bundler::new(project.settings()).build().await.unwrap_err();

    match err {
        Error::PackagerFailed {
            code,
            stdout,
            stderr,
        } => {
            assert_eq!(code, Some(2));
            assert_eq!(stdout, "collecting");
            assert_eq!(stderr, "hook crashed");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!project.path("app.spec").exists());
    assert!(!project.path("build").exists());
}

#[tokio::test]
async fn intermediates_survive_when_requested() {
    let project = TestProject::new(&format!("mkdir -p \"$WORK/app\"\n{NESTED_BUILD}"));

    Bundler::new(project.settings_with(true))
        .build()
        .await
        .unwrap();

    let spec = std::fs::read_to_string(project.path("app.spec")).unwrap();
    assert!(spec.contains("'scipy.fft'"));
    assert_eq!(spec.matches("'numpy'").count(), 1);
    assert!(project.path("build/app").is_dir());
}

#[tokio::test]
async fn unresolved_hidden_imports_become_warnings() {
    let project = TestProject::new(&format!(
        "mkdir -p \"$WORK/app\"\n\
         echo \"missing module named scipy.fft - imported by app (top-level)\" > \"$WORK/app/warn-app.txt\"\n\
         {NESTED_BUILD}"
    ));

    let output = Bundler::new(project.settings()).build().await.unwrap();

    assert_eq!(output.warnings.len(), 1);
    assert!(output.warnings[0].contains("scipy.fft"));
}

#[tokio::test]
async fn missing_data_file_is_skipped_and_flagged() {
    let project = TestProject::new(NESTED_BUILD);
    std::fs::remove_file(project.path("auxiliary/b.csv")).unwrap();

    let output = Bundler::new(project.settings()).build().await.unwrap();

    assert_eq!(output.data.copied.len(), 1);
    assert_eq!(output.data.missing, vec![project.path("auxiliary/b.csv")]);
    assert!(output.warnings.iter().any(|w| w.contains("b.csv")));
}
