//! Registry version lookups.
//!
//! Default dependency versions come from the dist-tags of the UI kit and
//! runtime CLI packages on the registry mirror. Lookups are idempotent and
//! wrapped in an explicit retry policy; any exhausted lookup degrades to a
//! hardcoded fallback version.

use std::time::Duration;

use crate::constants::{
    CLI_FALLBACK_VERSION, CLI_REGISTRY, UI_KIT_FALLBACK_VERSION, UI_KIT_REGISTRY,
};
use crate::error::Result;
use crate::project::RuntimeVersion;

/// Explicit retry policy: a bounded number of attempts with a fixed delay.
///
/// Only suitable for idempotent, side-effect-free operations.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3, delay: Duration::from_secs(1) }
    }
}

/// Resolves one dist-tag of a registry package.
///
/// Transient failures are retried per `policy`; a well-formed response
/// without the requested tag is not retried. Returns `None` once exhausted.
pub fn lookup_dist_tag(
    client: &reqwest::blocking::Client,
    registry_url: &str,
    tag: &str,
    policy: &RetryPolicy,
) -> Option<String> {
    for attempt in 1..=policy.max_attempts {
        match request_dist_tag(client, registry_url, tag) {
            Ok(Some(version)) => return Some(version),
            Ok(None) => {
                log::warn!("response from '{registry_url}' has no '{tag}' dist-tag");
                return None;
            }
            Err(err) => log::warn!(
                "registry lookup '{registry_url}' failed (attempt {attempt}/{}): {err}",
                policy.max_attempts
            ),
        }
        if attempt < policy.max_attempts {
            std::thread::sleep(policy.delay);
        }
    }
    None
}

fn request_dist_tag(
    client: &reqwest::blocking::Client,
    registry_url: &str,
    tag: &str,
) -> Result<Option<String>> {
    let response = client.get(registry_url).send()?.error_for_status()?;
    let body: serde_json::Value = response.json()?;
    Ok(extract_dist_tag(&body, tag))
}

/// Pulls a single tag out of a registry package document.
pub fn extract_dist_tag(body: &serde_json::Value, tag: &str) -> Option<String> {
    body.get("dist-tags")?.get(tag)?.as_str().map(str::to_owned)
}

/// Default UI kit version for the chosen runtime.
pub fn ui_kit_version(
    client: &reqwest::blocking::Client,
    runtime: RuntimeVersion,
    policy: &RetryPolicy,
) -> String {
    lookup_dist_tag(client, UI_KIT_REGISTRY, runtime.ui_kit_dist_tag(), policy)
        .unwrap_or_else(|| UI_KIT_FALLBACK_VERSION.to_string())
}

/// Default runtime CLI version for the chosen runtime.
pub fn cli_version(
    client: &reqwest::blocking::Client,
    runtime: RuntimeVersion,
    policy: &RetryPolicy,
) -> String {
    lookup_dist_tag(client, CLI_REGISTRY, runtime.cli_dist_tag(), policy)
        .unwrap_or_else(|| CLI_FALLBACK_VERSION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_known_dist_tags() {
        let body = json!({
            "name": "@lumen/ui",
            "dist-tags": {"latest": "2.3.1", "beta": "3.0.0-beta.4"}
        });
        assert_eq!(extract_dist_tag(&body, "latest").as_deref(), Some("2.3.1"));
        assert_eq!(extract_dist_tag(&body, "beta").as_deref(), Some("3.0.0-beta.4"));
    }

    #[test]
    fn missing_tags_and_malformed_documents_yield_none() {
        let body = json!({"dist-tags": {"latest": "2.3.1"}});
        assert_eq!(extract_dist_tag(&body, "next"), None);
        assert_eq!(extract_dist_tag(&json!({}), "latest"), None);
        assert_eq!(extract_dist_tag(&json!({"dist-tags": {"latest": 2}}), "latest"), None);
    }

    #[test]
    fn default_policy_is_bounded() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.delay, Duration::from_secs(1));
    }

    #[test]
    fn exhausted_lookup_falls_back_to_pinned_versions() {
        // An unroutable registry URL exhausts the policy quickly.
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let policy = RetryPolicy { max_attempts: 1, delay: Duration::from_millis(1) };
        let version = lookup_dist_tag(
            &client,
            "http://127.0.0.1:9/@lumen/ui",
            "latest",
            &policy,
        );
        assert_eq!(version, None);
    }
}
