//! resdir - Resources directory resolution across environments.
//!
//! resdir locates the directory named `Resources` that holds an
//! application's bundled non-code assets (templates, data files,
//! certificates), probing the conventions of local development, CI runners,
//! containers, and managed hosting platforms in priority order and
//! memoizing the first answer.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface for the `resdir` diagnostics binary
//! - [`env`] - Environment variable access and host classification
//! - [`error`] - Error types and result aliases
//! - [`fs`] - Async filesystem existence probes
//! - [`resolver`] - The probe chain, ancestor search, and resolution cache
//!
//! # Example
//!
//! ```no_run
//! # async fn demo() {
//! use resdir::ResourceDir;
//!
//! let dir = ResourceDir::new();
//! // Resolution never fails; the degraded fallback path may not exist.
//! let cert = dir.file_path("certs/server.pem").await;
//! # }
//! ```

pub mod cli;
pub mod env;
pub mod error;
pub mod fs;
pub mod resolver;

pub use error::{ResdirError, Result};
pub use resolver::{find_up, ProbeRun, ProbeStep, Resolution, ResourceDir};
