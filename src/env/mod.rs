//! Process environment access and host classification.
//!
//! [`EnvSource`] is the seam over process environment variables; production
//! code uses [`SystemEnv`], tests inject [`FixedEnv`]. [`HostClassifier`]
//! answers "what kind of host is this?" (managed cloud host, CI runner,
//! container) from well-known markers, reporting which marker fired.

pub mod classifier;
pub mod source;

pub use classifier::{ContainerMarker, HostClassifier};
pub use source::{EnvSource, FixedEnv, SystemEnv};
