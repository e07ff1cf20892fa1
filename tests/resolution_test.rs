//! End-to-end resolution scenarios against the library API.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use resdir::env::FixedEnv;
use resdir::{ProbeStep, ResourceDir};
use tempfile::TempDir;

/// A resolver whose base and working directories live in an isolated temp
/// tree, so no real filesystem convention can leak into a scenario.
fn resolver(env: FixedEnv, temp: &TempDir) -> ResourceDir {
    let base = temp.path().join("bin");
    let work = temp.path().join("work");
    fs::create_dir_all(&base).unwrap();
    fs::create_dir_all(&work).unwrap();
    ResourceDir::with_env(Arc::new(env))
        .with_base_dir(base)
        .with_working_dir(work)
}

#[tokio::test]
async fn override_beats_every_other_convention() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("custom");
    fs::create_dir(&custom).unwrap();

    let env = FixedEnv::new().with("RESOURCES_DIR", custom.to_str().unwrap());
    let dir = resolver(env, &temp);
    // The build-output convention is also satisfiable.
    fs::create_dir(temp.path().join("bin/Resources")).unwrap();

    assert_eq!(dir.get().await, custom);
    assert_eq!(dir.cached().unwrap().step, ProbeStep::ExplicitOverride);
}

#[tokio::test]
async fn invalid_override_falls_back_to_build_output() {
    let temp = TempDir::new().unwrap();
    let env = FixedEnv::new().with("RESOURCES_DIR", "/resdir-e2e-no-such-dir");
    let dir = resolver(env, &temp);
    let resources = temp.path().join("bin/Resources");
    fs::create_dir(&resources).unwrap();

    assert_eq!(dir.get().await, resources);
    assert_eq!(dir.cached().unwrap().step, ProbeStep::BuildOutput);
}

#[tokio::test]
async fn repo_layout_resolves_through_ancestor_search() {
    // Working directory {repo}/src/app, {repo}/Resources exists, no
    // overrides and no CI or container signals.
    let temp = TempDir::new().unwrap();
    let repo = temp.path().join("repo");
    let resources = repo.join("Resources");
    let app = repo.join("src/app");
    fs::create_dir_all(&resources).unwrap();
    fs::create_dir_all(&app).unwrap();

    let base = temp.path().join("bin");
    fs::create_dir_all(&base).unwrap();
    let dir = ResourceDir::with_env(Arc::new(FixedEnv::new()))
        .with_base_dir(base)
        .with_working_dir(app);

    assert_eq!(dir.get().await, resources);
    assert_eq!(dir.cached().unwrap().step, ProbeStep::AncestorSearch);
}

#[tokio::test]
async fn ci_workspace_bounds_the_search() {
    let temp = TempDir::new().unwrap();
    // Resources exists above the workspace root only.
    fs::create_dir(temp.path().join("Resources")).unwrap();
    let workspace = temp.path().join("workspace");
    let work = workspace.join("src");
    fs::create_dir_all(&work).unwrap();
    let base = temp.path().join("bin");
    fs::create_dir_all(&base).unwrap();

    let env = FixedEnv::new()
        .with("GITHUB_ACTIONS", "true")
        .with("GITHUB_WORKSPACE", workspace.to_str().unwrap());
    let dir = ResourceDir::with_env(Arc::new(env))
        .with_base_dir(base)
        .with_working_dir(work);

    // The CI probe must not cross the bound; the unbounded generic search
    // still finds the directory afterwards.
    let run = dir.explain().await;
    let ci = run
        .trace
        .iter()
        .find(|r| r.step == ProbeStep::CiWorkspace)
        .unwrap();
    assert!(matches!(
        ci.outcome,
        resdir::resolver::ProbeOutcome::Missed { .. }
    ));
    assert_eq!(run.resolution.step, ProbeStep::AncestorSearch);
}

#[tokio::test]
async fn managed_host_resolves_home_convention() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let wwwroot = home.join("site/wwwroot/Resources");
    fs::create_dir_all(&wwwroot).unwrap();

    let env = FixedEnv::new()
        .with("FUNCTIONS_WORKER_RUNTIME", "dotnet")
        .with("HOME", home.to_str().unwrap());
    let dir = resolver(env, &temp);

    assert_eq!(dir.get().await, wwwroot);
    assert_eq!(dir.cached().unwrap().step, ProbeStep::ManagedHostHome);
}

#[tokio::test]
async fn degraded_fallback_returns_nonexistent_path() {
    let temp = TempDir::new().unwrap();
    let dir = resolver(FixedEnv::new(), &temp);

    let resolution = dir.resolution().await;
    assert_eq!(resolution.path, temp.path().join("bin/Resources"));
    assert_eq!(resolution.step, ProbeStep::TerminalFallback);
    assert!(!resolution.exists);
    assert!(!resolution.path.exists());
}

#[tokio::test]
async fn file_path_joins_with_platform_rules() {
    let temp = TempDir::new().unwrap();
    let dir = resolver(FixedEnv::new(), &temp);

    let resolved = dir.get().await.to_path_buf();
    assert_eq!(dir.file_path("a.json").await, resolved.join("a.json"));
}

#[tokio::test]
async fn concurrent_first_callers_observe_one_resolution() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("bin/Resources")).unwrap();
    let dir = Arc::new(resolver(FixedEnv::new(), &temp));

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let dir = Arc::clone(&dir);
            tokio::spawn(async move { dir.resolution().await.clone() })
        })
        .collect();

    let mut resolutions = Vec::new();
    for task in tasks {
        resolutions.push(task.await.unwrap());
    }
    let first = resolutions[0].clone();
    assert!(resolutions.iter().all(|r| *r == first));
    assert_eq!(first.path, PathBuf::from(temp.path().join("bin/Resources")));
}
