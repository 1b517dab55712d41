//! Output formatters for check results
//!
//! All console and file rendering goes through the formatter, so the
//! output format can change without touching check logic.

#![allow(dead_code)]

use std::io::Write;

use crate::models::{CheckResult, CheckStatus, RunSummary};

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Csv,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "csv" => Some(OutputFormat::Csv),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Result formatter
pub struct ReportFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format a single check result
    pub fn format_result(&self, result: &CheckResult) -> String {
        match self.format {
            OutputFormat::Table => self.format_result_table(result),
            OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(result).unwrap_or_default(),
            OutputFormat::Csv => format_result_csv(result),
            OutputFormat::Summary => format_result_brief(result),
        }
    }

    fn format_result_table(&self, result: &CheckResult) -> String {
        let status_str = if self.colorize {
            match result.status {
                CheckStatus::Pass => "\x1b[32m✓ PASS\x1b[0m",
                CheckStatus::Fail => "\x1b[31m✗ FAIL\x1b[0m",
                CheckStatus::Skip => "\x1b[33m○ SKIP\x1b[0m",
            }
        } else {
            match result.status {
                CheckStatus::Pass => "✓ PASS",
                CheckStatus::Fail => "✗ FAIL",
                CheckStatus::Skip => "○ SKIP",
            }
        };

        let mut line = format!(
            "{:2}. {:32} {} [{:>5}ms]",
            result.check.number(),
            result.check.name(),
            status_str,
            result.duration_ms
        );
        if let Some(detail) = &result.detail {
            line.push_str(&format!(" - {detail}"));
        }
        line
    }

    /// Suite section header; empty for machine formats
    pub fn format_suite_header(&self, suite: &str) -> String {
        match self.format {
            OutputFormat::Table | OutputFormat::Summary => {
                format!(
                    "\n{suite}\n──────────────────────────────────────────────────────────────"
                )
            }
            _ => String::new(),
        }
    }

    /// Format the run summary
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Table => self.format_summary_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Csv => format_summary_csv(summary),
            OutputFormat::Summary => format_summary_brief(summary),
        }
    }

    fn format_summary_table(&self, summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str("\n══════════════════════════════════════════════════════════════\n");
        output.push_str(&format!(" Conformance run against {}\n", summary.base_url));
        output.push_str("══════════════════════════════════════════════════════════════\n");

        let pass_str = if self.colorize {
            format!("\x1b[32m{}\x1b[0m", summary.passed)
        } else {
            summary.passed.to_string()
        };
        let fail_str = if self.colorize && summary.failed > 0 {
            format!("\x1b[31m{}\x1b[0m", summary.failed)
        } else {
            summary.failed.to_string()
        };

        output.push_str(&format!(
            " Total: {} | Pass: {} | Fail: {} | Skip: {}\n",
            summary.total, pass_str, fail_str, summary.skipped
        ));
        output.push_str(&format!(
            " Pass Rate: {:.1}% | Duration: {}ms\n",
            summary.pass_rate(),
            summary.total_duration_ms
        ));

        let verdict = if summary.all_passed() {
            " All checks passed\n"
        } else {
            " Some checks failed\n"
        };
        output.push_str(verdict);

        output
    }
}

fn format_result_csv(result: &CheckResult) -> String {
    format!(
        "{},{},{},{},\"{}\"",
        result.check.number(),
        result.check.name(),
        result.status,
        result.duration_ms,
        result.detail.as_deref().unwrap_or("").replace('"', "\"\"")
    )
}

fn format_result_brief(result: &CheckResult) -> String {
    let mut line = format!(
        "{} {} ({}ms)",
        result.status.symbol(),
        result.check.name(),
        result.duration_ms
    );
    if let Some(detail) = &result.detail {
        line.push_str(&format!(" - {detail}"));
    }
    line
}

fn format_summary_csv(summary: &RunSummary) -> String {
    let mut output = String::new();
    output.push_str("check_num,check_name,status,duration_ms,detail\n");
    for result in &summary.results {
        output.push_str(&format_result_csv(result));
        output.push('\n');
    }
    output
}

fn format_summary_brief(summary: &RunSummary) -> String {
    format!(
        "{}/{} checks passed ({:.1}%) in {}ms against {}",
        summary.passed,
        summary.total,
        summary.pass_rate(),
        summary.total_duration_ms,
        summary.base_url
    )
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

/// Write a summary to a file, without ANSI color
pub fn write_summary_to_file(
    path: &str,
    summary: &RunSummary,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let formatter = ReportFormatter::new(format).no_color();
    let mut content = String::new();

    // Machine formats already carry the per-check results; the table
    // format needs them prepended.
    if format == OutputFormat::Table {
        for result in &summary.results {
            content.push_str(&formatter.format_result(result));
            content.push('\n');
        }
    }
    content.push_str(&formatter.format_summary(summary));

    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Check;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("TABLE"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("unknown"), None);
    }

    #[test]
    fn test_format_result_includes_detail() {
        let result = CheckResult::pass(Check::ListRooms, 12).with_detail("Retrieved 5 rooms");
        let formatter = ReportFormatter::new(OutputFormat::Table).no_color();
        let line = formatter.format_result(&result);
        assert!(line.contains("GET /api/rooms"));
        assert!(line.contains("✓ PASS"));
        assert!(line.contains("Retrieved 5 rooms"));
    }

    #[test]
    fn test_format_result_csv_escapes_quotes() {
        let result = CheckResult::fail(Check::CreateBooking, 5, r#"bad "payload""#);
        let line = format_result_csv(&result);
        assert!(line.contains(r#""bad ""payload""""#));
    }

    #[test]
    fn test_suite_header_empty_for_machine_formats() {
        let table = ReportFormatter::new(OutputFormat::Table);
        assert!(table.format_suite_header("Rooms API").contains("Rooms API"));

        let json = ReportFormatter::new(OutputFormat::Json);
        assert!(json.format_suite_header("Rooms API").is_empty());
    }

    #[test]
    fn test_summary_brief() {
        let summary = RunSummary::new(
            "http://localhost:3000",
            vec![
                CheckResult::pass(Check::ListRooms, 10),
                CheckResult::fail(Check::UnknownEndpoint, 5, "Status: 200, Expected 404"),
            ],
        );
        let brief = format_summary_brief(&summary);
        assert!(brief.contains("1/2 checks passed"));
    }

    #[test]
    fn test_summary_json_round_trip() {
        let summary = RunSummary::new(
            "http://localhost:3000",
            vec![CheckResult::pass(Check::ListRooms, 10)],
        );
        let formatter = ReportFormatter::new(OutputFormat::Json);
        let json = formatter.format_summary(&summary);
        let parsed: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total, 1);
        assert_eq!(parsed.passed, 1);
    }
}
