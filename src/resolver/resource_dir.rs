//! The resolver instance owning the probe chain and its cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::env::{EnvSource, HostClassifier, SystemEnv};
use crate::resolver::cache::OnceSlot;
use crate::resolver::find_up;
use crate::resolver::probe::{run_probes, ProbeRun, Resolution};

/// Resolves the application's Resources directory once and memoizes it.
///
/// Hold one instance (typically in an `Arc`) for the process lifetime; the
/// environment is assumed static, so a published resolution is never
/// recomputed or invalidated. Concurrent callers before first resolution
/// each run the probe chain independently (probes are read-only and
/// idempotent) and all converge on the single published winner.
///
/// # Example
///
/// ```no_run
/// # async fn demo() {
/// use resdir::ResourceDir;
///
/// let dir = ResourceDir::new();
/// let templates = dir.file_path("templates/report.json").await;
/// # }
/// ```
pub struct ResourceDir {
    env: Arc<dyn EnvSource>,
    classifier: HostClassifier,
    base_dir: PathBuf,
    working_dir: PathBuf,
    slot: OnceSlot<Resolution>,
}

/// Default base directory: the running executable's parent, falling back to
/// the working directory.
fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default()
}

impl ResourceDir {
    /// Create a resolver over the real process environment.
    pub fn new() -> Self {
        Self::with_env(Arc::new(SystemEnv))
    }

    /// Create a resolver over the given environment source.
    pub fn with_env(env: Arc<dyn EnvSource>) -> Self {
        let classifier = HostClassifier::new(env.clone());
        Self {
            env,
            classifier,
            base_dir: default_base_dir(),
            working_dir: std::env::current_dir().unwrap_or_default(),
            slot: OnceSlot::new(),
        }
    }

    /// Override the base directory probed for the build-output convention.
    pub fn with_base_dir(mut self, base_dir: PathBuf) -> Self {
        self.base_dir = find_up::normalize(&base_dir).unwrap_or(base_dir);
        self
    }

    /// Override the directory ancestor searches start from.
    pub fn with_working_dir(mut self, working_dir: PathBuf) -> Self {
        self.working_dir = working_dir;
        self
    }

    /// The base directory probed for `{base_dir}/Resources`.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The resolved Resources directory path.
    ///
    /// Never fails; in the degraded case the returned path does not exist
    /// on disk (see [`Resolution::exists`]). Repeated calls return the same
    /// borrowed path.
    pub async fn get(&self) -> &Path {
        &self.resolution().await.path
    }

    /// The full cached resolution: path, winning step, existence.
    pub async fn resolution(&self) -> &Resolution {
        if let Some(resolution) = self.slot.get() {
            return resolution;
        }
        let run = run_probes(
            self.env.as_ref(),
            &self.classifier,
            &self.base_dir,
            &self.working_dir,
        )
        .await;
        // Losers of a concurrent race receive the winner's value here.
        self.slot.get_or_publish(run.resolution)
    }

    /// Non-blocking peek at the cache; `None` before first resolution.
    pub fn cached(&self) -> Option<&Resolution> {
        self.slot.get()
    }

    /// The resolved directory joined with `name` using platform path-join
    /// rules. `name` itself is not normalized or validated.
    pub async fn file_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.get().await.join(name)
    }

    /// Run the probe chain fresh and return the full step-by-step trace.
    ///
    /// Diagnostics only: never reads or populates the cache, so repeated
    /// calls observe current filesystem state.
    pub async fn explain(&self) -> ProbeRun {
        run_probes(
            self.env.as_ref(),
            &self.classifier,
            &self.base_dir,
            &self.working_dir,
        )
        .await
    }
}

impl Default for ResourceDir {
    fn default() -> Self {
        Self::new()
    }
}
