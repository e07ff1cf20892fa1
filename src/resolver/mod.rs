//! Resources-directory resolution.
//!
//! The probe chain, in priority order:
//!
//! 1. `RESOURCES_DIR` explicit override
//! 2. `{base_dir}/Resources` build-output convention
//! 3. `{HOME}/site/wwwroot/Resources` on managed cloud hosts
//! 4. Bounded ancestor search on CI runners (`GITHUB_WORKSPACE`)
//! 5. Build-output re-check behind the container signal
//! 6. Unbounded ancestor search from the working directory
//! 7. `{HOME}/site/wwwroot/Resources` without a managed-host signal
//! 8. Terminal fallback to the build-output candidate
//!
//! The first match wins and is published once per [`ResourceDir`] instance.

pub mod cache;
pub mod find_up;
pub mod probe;
pub mod resource_dir;

pub use cache::OnceSlot;
pub use find_up::{find_up, normalize};
pub use probe::{
    ProbeOutcome, ProbeReport, ProbeRun, ProbeStep, Resolution, CI_WORKSPACE_VAR, OVERRIDE_VAR,
    RESOURCES_DIR_NAME,
};
pub use resource_dir::ResourceDir;
