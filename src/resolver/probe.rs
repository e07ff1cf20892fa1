//! The ordered probe chain.
//!
//! Eight prioritized, short-circuiting probes, from explicit override down
//! to a terminal fallback that always yields a well-formed path. Each run
//! records a per-step trace so `explain` can show why a convention won,
//! missed, or was never applicable.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::env::{EnvSource, HostClassifier};
use crate::fs;
use crate::resolver::find_up::{self, find_up};

/// The directory name every probe looks for.
pub const RESOURCES_DIR_NAME: &str = "Resources";

/// Explicit override variable; wins regardless of environment.
pub const OVERRIDE_VAR: &str = "RESOURCES_DIR";

/// CI workspace root variable; bounds the CI ancestor search.
pub const CI_WORKSPACE_VAR: &str = "GITHUB_WORKSPACE";

/// One step in the resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStep {
    /// `RESOURCES_DIR` environment variable.
    ExplicitOverride,
    /// `{base_dir}/Resources`, the compiled-application layout.
    BuildOutput,
    /// `{HOME}/site/wwwroot/Resources` on managed cloud hosts.
    ManagedHostHome,
    /// Bounded ancestor search on CI runners.
    CiWorkspace,
    /// Build-output re-check behind the slower container signal.
    ContainerBuildOutput,
    /// Unbounded ancestor search from the working directory.
    AncestorSearch,
    /// `{HOME}/site/wwwroot/Resources` without a managed-host signal.
    HomeConvention,
    /// `{base_dir}/Resources` returned even though it does not exist.
    TerminalFallback,
}

impl ProbeStep {
    /// All steps in chain order.
    pub const ALL: [ProbeStep; 8] = [
        ProbeStep::ExplicitOverride,
        ProbeStep::BuildOutput,
        ProbeStep::ManagedHostHome,
        ProbeStep::CiWorkspace,
        ProbeStep::ContainerBuildOutput,
        ProbeStep::AncestorSearch,
        ProbeStep::HomeConvention,
        ProbeStep::TerminalFallback,
    ];

    /// Stable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ExplicitOverride => "explicit override",
            Self::BuildOutput => "build output",
            Self::ManagedHostHome => "managed host home",
            Self::CiWorkspace => "ci workspace",
            Self::ContainerBuildOutput => "container build output",
            Self::AncestorSearch => "ancestor search",
            Self::HomeConvention => "home convention",
            Self::TerminalFallback => "terminal fallback",
        }
    }
}

impl std::fmt::Display for ProbeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The value published to the cache: where the Resources directory is, which
/// probe found it, and whether it existed at resolution time (`false` only
/// for the terminal fallback).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub path: PathBuf,
    pub step: ProbeStep,
    pub exists: bool,
}

/// How one evaluated step ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The step's gate did not apply on this host.
    Skipped { reason: String },
    /// The step probed and found nothing.
    Missed { detail: String },
    /// The step found an existing directory.
    Matched { path: PathBuf },
    /// The terminal step returned a path without it existing.
    Fallback { path: PathBuf },
}

/// Trace entry for one evaluated step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeReport {
    pub step: ProbeStep,
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
}

/// Result of one full chain evaluation: the resolution plus the trace of
/// every step up to and including the one that returned.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeRun {
    pub resolution: Resolution,
    pub trace: Vec<ProbeReport>,
}

fn skip(trace: &mut Vec<ProbeReport>, step: ProbeStep, reason: &str) {
    tracing::trace!(step = %step, reason, "probe skipped");
    trace.push(ProbeReport {
        step,
        outcome: ProbeOutcome::Skipped {
            reason: reason.to_string(),
        },
    });
}

fn miss(trace: &mut Vec<ProbeReport>, step: ProbeStep, detail: &str) {
    tracing::trace!(step = %step, detail, "probe missed");
    trace.push(ProbeReport {
        step,
        outcome: ProbeOutcome::Missed {
            detail: detail.to_string(),
        },
    });
}

fn win(mut trace: Vec<ProbeReport>, step: ProbeStep, path: PathBuf) -> ProbeRun {
    tracing::debug!(step = %step, path = %path.display(), "resources directory resolved");
    trace.push(ProbeReport {
        step,
        outcome: ProbeOutcome::Matched { path: path.clone() },
    });
    ProbeRun {
        resolution: Resolution {
            path,
            step,
            exists: true,
        },
        trace,
    }
}

/// The managed-hosting candidate: `{HOME}/site/wwwroot/Resources`.
fn home_candidate(home: &str) -> Option<PathBuf> {
    let root = find_up::normalize(Path::new(home))?;
    Some(root.join("site").join("wwwroot").join(RESOURCES_DIR_NAME))
}

/// Evaluate the probe chain once.
///
/// Never fails: the terminal fallback guarantees a well-formed path even
/// when nothing on disk matched. Callers own caching; this function is
/// stateless apart from filesystem reads.
pub(crate) async fn run_probes(
    env: &dyn EnvSource,
    classifier: &HostClassifier,
    base_dir: &Path,
    working_dir: &Path,
) -> ProbeRun {
    let mut trace = Vec::new();
    let build_candidate = base_dir.join(RESOURCES_DIR_NAME);

    // 1. Explicit override: always wins when it points at a real directory.
    if let Some(value) = env.var_non_empty(OVERRIDE_VAR) {
        if let Some(dir) = find_up::normalize(Path::new(&value)) {
            if fs::dir_exists(&dir).await {
                return win(trace, ProbeStep::ExplicitOverride, dir);
            }
        }
        miss(
            &mut trace,
            ProbeStep::ExplicitOverride,
            &format!("{OVERRIDE_VAR} is set but the directory does not exist"),
        );
    } else {
        skip(
            &mut trace,
            ProbeStep::ExplicitOverride,
            &format!("{OVERRIDE_VAR} not set"),
        );
    }

    // 2. Build output: the common case, checked before any host signals.
    if fs::dir_exists(&build_candidate).await {
        return win(trace, ProbeStep::BuildOutput, build_candidate);
    }
    miss(
        &mut trace,
        ProbeStep::BuildOutput,
        &format!("{} does not exist", build_candidate.display()),
    );

    // 3. Managed cloud hosting convention.
    if let Some(marker) = classifier.managed_host_marker() {
        match env.var_non_empty("HOME").as_deref().and_then(home_candidate) {
            Some(candidate) => {
                if fs::dir_exists(&candidate).await {
                    return win(trace, ProbeStep::ManagedHostHome, candidate);
                }
                miss(
                    &mut trace,
                    ProbeStep::ManagedHostHome,
                    &format!("{marker} set but {} does not exist", candidate.display()),
                );
            }
            None => miss(
                &mut trace,
                ProbeStep::ManagedHostHome,
                &format!("{marker} set but HOME is not"),
            ),
        }
    } else {
        skip(&mut trace, ProbeStep::ManagedHostHome, "no managed-host marker");
    }

    // 4. CI convention: ancestor search bounded by the workspace root.
    match classifier.ci_marker() {
        Some(marker) => {
            let mut bound = None;
            if let Some(value) = env.var_non_empty(CI_WORKSPACE_VAR) {
                if let Some(root) = find_up::normalize(Path::new(&value)) {
                    if fs::dir_exists(&root).await {
                        bound = Some(root);
                    }
                }
            }

            if let Some(found) = find_up(working_dir, RESOURCES_DIR_NAME, bound.as_deref()).await {
                return win(trace, ProbeStep::CiWorkspace, found);
            }
            // The workspace root itself may hold Resources even when the
            // working directory is outside it.
            if let Some(root) = &bound {
                let candidate = root.join(RESOURCES_DIR_NAME);
                if fs::dir_exists(&candidate).await {
                    return win(trace, ProbeStep::CiWorkspace, candidate);
                }
            }
            miss(
                &mut trace,
                ProbeStep::CiWorkspace,
                &format!("{marker} set but no workspace ancestor matched"),
            );
        }
        None => skip(&mut trace, ProbeStep::CiWorkspace, "no CI marker"),
    }

    // 5. Container: re-check the build candidate behind the slower signal,
    //    so the common case in step 2 never waits on the container probe.
    match classifier.container_marker().await {
        Some(marker) => {
            if fs::dir_exists(&build_candidate).await {
                return win(trace, ProbeStep::ContainerBuildOutput, build_candidate);
            }
            miss(
                &mut trace,
                ProbeStep::ContainerBuildOutput,
                &format!("container ({marker}) but {} does not exist", build_candidate.display()),
            );
        }
        None => skip(&mut trace, ProbeStep::ContainerBuildOutput, "no container marker"),
    }

    // 6. Generic ancestor search, unbounded.
    if let Some(found) = find_up(working_dir, RESOURCES_DIR_NAME, None).await {
        return win(trace, ProbeStep::AncestorSearch, found);
    }
    miss(
        &mut trace,
        ProbeStep::AncestorSearch,
        "no ancestor of the working directory matched",
    );

    // 7. Home convention without a managed-host signal.
    match env.var_non_empty("HOME").as_deref().and_then(home_candidate) {
        Some(candidate) => {
            if fs::dir_exists(&candidate).await {
                return win(trace, ProbeStep::HomeConvention, candidate);
            }
            miss(
                &mut trace,
                ProbeStep::HomeConvention,
                &format!("{} does not exist", candidate.display()),
            );
        }
        None => skip(&mut trace, ProbeStep::HomeConvention, "HOME not set"),
    }

    // 8. Terminal fallback: step 2's candidate, known not to exist.
    tracing::debug!(
        path = %build_candidate.display(),
        "no convention matched; falling back to the build-output candidate"
    );
    trace.push(ProbeReport {
        step: ProbeStep::TerminalFallback,
        outcome: ProbeOutcome::Fallback {
            path: build_candidate.clone(),
        },
    });
    ProbeRun {
        resolution: Resolution {
            path: build_candidate,
            step: ProbeStep::TerminalFallback,
            exists: false,
        },
        trace,
    }
}
