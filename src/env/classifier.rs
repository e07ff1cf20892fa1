//! Host environment classification.
//!
//! Classifies the running host from well-known markers: managed cloud hosts
//! (function workers, app-hosting services), CI runners, and containers.
//! Each signal has a `*_marker` variant that reports which marker fired,
//! used by probe tracing to explain why a probe group ran or was skipped.

use std::path::Path;
use std::sync::Arc;

use crate::env::EnvSource;
use crate::fs;

/// Variables set by managed function-worker hosts.
const FUNCTION_HOST_VARS: [&str; 3] = [
    "FUNCTIONS_WORKER_RUNTIME",
    "AZURE_FUNCTIONS_ENVIRONMENT",
    "FUNCTIONS_EXTENSION_VERSION",
];

/// Variables set by managed app-hosting services.
const APP_SERVICE_VARS: [&str; 2] = ["WEBSITE_SITE_NAME", "WEBSITE_INSTANCE_ID"];

/// Variables set by CI runners (any non-empty value).
const CI_VARS: [&str; 7] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "JENKINS_URL",
    "BUILDKITE",
    "TRAVIS",
];

/// Variables set inside containers.
const CONTAINER_VARS: [&str; 3] = ["KUBERNETES_SERVICE_HOST", "DOCKER_CONTAINER", "container"];

/// Runtime names that show up in /proc/1/cgroup inside containers.
const CGROUP_MARKERS: [&str; 4] = ["docker", "containerd", "kubepods", "lxc"];

/// What identified the host as containerized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerMarker {
    /// An environment variable was set.
    EnvVar(&'static str),
    /// `/.dockerenv` exists.
    DockerEnv,
    /// `/run/.containerenv` exists (podman).
    ContainerEnv,
    /// A runtime name appeared in `/proc/1/cgroup`.
    Cgroup(String),
}

impl std::fmt::Display for ContainerMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "{}", var),
            Self::DockerEnv => write!(f, "/.dockerenv"),
            Self::ContainerEnv => write!(f, "/run/.containerenv"),
            Self::Cgroup(name) => write!(f, "/proc/1/cgroup ({})", name),
        }
    }
}

/// Classifies the running host from environment and filesystem markers.
///
/// Environment variables are read through the injected [`EnvSource`]; the
/// container check additionally probes filesystem artifacts, which makes it
/// the one asynchronous signal.
pub struct HostClassifier {
    env: Arc<dyn EnvSource>,
}

impl HostClassifier {
    /// Create a classifier over the given environment source.
    pub fn new(env: Arc<dyn EnvSource>) -> Self {
        Self { env }
    }

    /// The variable identifying a managed function-worker host, if any.
    pub fn function_host_marker(&self) -> Option<&'static str> {
        FUNCTION_HOST_VARS
            .into_iter()
            .find(|var| self.env.var_non_empty(var).is_some())
    }

    /// The variable identifying a managed app-hosting service, if any.
    pub fn app_service_marker(&self) -> Option<&'static str> {
        APP_SERVICE_VARS
            .into_iter()
            .find(|var| self.env.var_non_empty(var).is_some())
    }

    /// The variable identifying a managed cloud host (function worker
    /// checked first), if any.
    pub fn managed_host_marker(&self) -> Option<&'static str> {
        self.function_host_marker()
            .or_else(|| self.app_service_marker())
    }

    /// Whether this host is a managed cloud host.
    pub fn is_managed_host(&self) -> bool {
        self.managed_host_marker().is_some()
    }

    /// The variable identifying a CI runner, if any.
    pub fn ci_marker(&self) -> Option<&'static str> {
        if let Some(var) = CI_VARS
            .into_iter()
            .find(|var| self.env.var_non_empty(var).is_some())
        {
            return Some(var);
        }

        // TF_BUILD must equal "True" (Azure DevOps)
        if self.env.var("TF_BUILD").as_deref() == Some("True") {
            return Some("TF_BUILD");
        }

        None
    }

    /// Whether this host is a CI runner.
    pub fn is_ci(&self) -> bool {
        self.ci_marker().is_some()
    }

    /// What identified this host as a container, if anything.
    ///
    /// Environment variables are checked first; the filesystem artifacts
    /// (`/.dockerenv`, `/run/.containerenv`, `/proc/1/cgroup`) only when no
    /// variable is set.
    pub async fn container_marker(&self) -> Option<ContainerMarker> {
        if let Some(var) = CONTAINER_VARS
            .into_iter()
            .find(|var| self.env.var_non_empty(var).is_some())
        {
            tracing::trace!(marker = var, "container marker detected");
            return Some(ContainerMarker::EnvVar(var));
        }

        if fs::path_exists(Path::new("/.dockerenv")).await {
            return Some(ContainerMarker::DockerEnv);
        }
        if fs::path_exists(Path::new("/run/.containerenv")).await {
            return Some(ContainerMarker::ContainerEnv);
        }

        // Read errors mean "can't tell", which classifies as not-a-container.
        if let Ok(cgroup) = tokio::fs::read_to_string("/proc/1/cgroup").await {
            for marker in CGROUP_MARKERS {
                if cgroup.lines().any(|line| line.contains(marker)) {
                    return Some(ContainerMarker::Cgroup(marker.to_string()));
                }
            }
        }

        None
    }

    /// Whether this host is containerized.
    pub async fn is_container(&self) -> bool {
        self.container_marker().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::FixedEnv;

    fn classifier(vars: &[(&str, &str)]) -> HostClassifier {
        let mut env = FixedEnv::new();
        for (k, v) in vars {
            env = env.with(k, v);
        }
        HostClassifier::new(Arc::new(env))
    }

    #[test]
    fn clean_env_is_nothing() {
        let c = classifier(&[]);
        assert!(c.managed_host_marker().is_none());
        assert!(!c.is_managed_host());
        assert!(c.ci_marker().is_none());
        assert!(!c.is_ci());
    }

    #[test]
    fn function_host_from_worker_runtime() {
        let c = classifier(&[("FUNCTIONS_WORKER_RUNTIME", "dotnet")]);
        assert_eq!(c.function_host_marker(), Some("FUNCTIONS_WORKER_RUNTIME"));
        assert!(c.is_managed_host());
    }

    #[test]
    fn function_host_from_extension_version() {
        let c = classifier(&[("FUNCTIONS_EXTENSION_VERSION", "~4")]);
        assert_eq!(c.function_host_marker(), Some("FUNCTIONS_EXTENSION_VERSION"));
    }

    #[test]
    fn app_service_from_site_name() {
        let c = classifier(&[("WEBSITE_SITE_NAME", "my-app")]);
        assert_eq!(c.app_service_marker(), Some("WEBSITE_SITE_NAME"));
        assert_eq!(c.managed_host_marker(), Some("WEBSITE_SITE_NAME"));
    }

    #[test]
    fn function_host_checked_before_app_service() {
        let c = classifier(&[
            ("WEBSITE_SITE_NAME", "my-app"),
            ("FUNCTIONS_WORKER_RUNTIME", "node"),
        ]);
        assert_eq!(c.managed_host_marker(), Some("FUNCTIONS_WORKER_RUNTIME"));
    }

    #[test]
    fn empty_managed_host_var_ignored() {
        let c = classifier(&[("WEBSITE_SITE_NAME", "")]);
        assert!(c.managed_host_marker().is_none());
    }

    #[test]
    fn ci_from_each_var() {
        for var in CI_VARS {
            let c = classifier(&[(var, "1")]);
            assert_eq!(c.ci_marker(), Some(var), "var: {var}");
        }
    }

    #[test]
    fn ci_from_tf_build_true() {
        let c = classifier(&[("TF_BUILD", "True")]);
        assert_eq!(c.ci_marker(), Some("TF_BUILD"));
    }

    #[test]
    fn ci_tf_build_wrong_value() {
        // TF_BUILD must be "True", not just present
        let c = classifier(&[("TF_BUILD", "false")]);
        assert!(c.ci_marker().is_none());
    }

    #[test]
    fn ci_empty_var_treated_as_unset() {
        let c = classifier(&[("CI", ""), ("GITHUB_ACTIONS", "")]);
        assert!(c.ci_marker().is_none());
        assert!(!c.is_ci());
    }

    #[tokio::test]
    async fn container_from_env_vars() {
        for var in CONTAINER_VARS {
            let c = classifier(&[(var, "1")]);
            assert_eq!(
                c.container_marker().await,
                Some(ContainerMarker::EnvVar(var)),
                "var: {var}"
            );
            assert!(c.is_container().await);
        }
    }

    #[test]
    fn container_marker_display() {
        assert_eq!(
            ContainerMarker::EnvVar("DOCKER_CONTAINER").to_string(),
            "DOCKER_CONTAINER"
        );
        assert_eq!(ContainerMarker::DockerEnv.to_string(), "/.dockerenv");
        assert_eq!(
            ContainerMarker::Cgroup("docker".into()).to_string(),
            "/proc/1/cgroup (docker)"
        );
    }
}
