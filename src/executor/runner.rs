//! Check execution runner
//!
//! Owns the result log and the resource cache, and runs checks strictly
//! in declared order: later checks depend on listings cached by earlier
//! ones, so there is no parallel execution.

#![allow(dead_code)]

use anyhow::Result;
use std::time::Instant;
use tracing::info;

use crate::config::AppConfig;
use crate::http::ApiClient;
use crate::models::{Check, CheckResult, ResourceCache, ResourceKind, RunSummary};
use crate::output::{OutputFormat, ReportFormatter};
use crate::suites;

/// Outcome of the connectivity preflight
///
/// Any HTTP response counts as reachable, error statuses included; only a
/// transport failure blocks the run.
#[derive(Clone, Debug)]
pub struct PreflightResult {
    pub passed: bool,
    pub status: u16,
    pub detail: String,
}

impl PreflightResult {
    fn reachable(status: u16) -> Self {
        Self {
            passed: true,
            status,
            detail: format!("Server is reachable - Status: {status}"),
        }
    }

    fn unreachable(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            status: 0,
            detail: format!("Server is not reachable: {}", message.into()),
        }
    }

    pub fn format_line(&self) -> String {
        let glyph = if self.passed { "✓" } else { "✗" };
        format!("{} {}", glyph, self.detail)
    }
}

/// Sequential conformance check runner
pub struct CheckRunner {
    config: AppConfig,
    client: ApiClient,
    formatter: ReportFormatter,
    log: Vec<CheckResult>,
    cache: ResourceCache,
}

impl CheckRunner {
    /// Create a runner for the configured server
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = ApiClient::new(&config.base_url, config.timeout_secs)?;
        let format = OutputFormat::from_str(&config.format).unwrap_or(OutputFormat::Table);
        Ok(Self {
            config,
            client,
            formatter: ReportFormatter::new(format),
            log: Vec::new(),
            cache: ResourceCache::new(),
        })
    }

    /// Probe the server once before running any suite
    ///
    /// Uses the shorter preflight timeout. On failure the caller must abort
    /// the whole run; no check results are recorded for skipped suites.
    pub async fn preflight(&self) -> PreflightResult {
        let probe = match ApiClient::new(&self.config.base_url, self.config.preflight_timeout_secs)
        {
            Ok(client) => client,
            Err(e) => return PreflightResult::unreachable(e.to_string()),
        };

        let outcome = probe.get(ResourceKind::Rooms.endpoint()).await;
        if outcome.is_unreachable() {
            let message = outcome
                .body
                .field("error")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("no response")
                .to_string();
            PreflightResult::unreachable(message)
        } else {
            PreflightResult::reachable(outcome.status)
        }
    }

    /// Append a result to the log and print it immediately, so partial
    /// progress stays visible on abnormal termination
    fn record(&mut self, result: CheckResult) {
        println!("{}", self.formatter.format_result(&result));
        self.log.push(result);
    }

    /// Run every check in declared order and summarize
    pub async fn run_all(&mut self) -> RunSummary {
        info!(
            "Starting conformance run against {}",
            self.config.base_url
        );

        let start = Instant::now();
        let mut current_suite = "";

        for check in Check::all() {
            if check.suite() != current_suite {
                current_suite = check.suite();
                let header = self.formatter.format_suite_header(current_suite);
                if !header.is_empty() {
                    println!("{header}");
                }
            }

            let result = if self.config.skip_checks.contains(&check.number()) {
                CheckResult::skip(check, "Skipped by configuration")
            } else {
                suites::run_check(check, &self.client, &mut self.cache).await
            };
            self.record(result);
        }

        let results = std::mem::take(&mut self.log);
        let summary = RunSummary::new(&self.config.base_url, results);

        info!(
            "Run completed in {}ms - Pass: {}/{} ({:.1}%)",
            start.elapsed().as_millis(),
            summary.passed,
            summary.total,
            summary.pass_rate()
        );

        summary
    }

    /// Run one check by itself
    ///
    /// Checks that read the room cache get it hydrated first, since the
    /// listing check that would normally populate it has not run.
    pub async fn run_single(&mut self, check: Check) -> CheckResult {
        if check.needs_room_cache() && self.cache.rooms().is_empty() {
            let outcome = self.client.get(ResourceKind::Rooms.endpoint()).await;
            if outcome.success {
                if let Some(items) = outcome.body.as_sequence() {
                    self.cache.store(ResourceKind::Rooms, items.to_vec());
                }
            }
        }

        info!("Running {}", check);
        let result = suites::run_check(check, &self.client, &mut self.cache).await;
        self.record(result.clone());
        result
    }
}
