use std::fmt::Write;

use crate::error::Result;
use crate::linter::{LintReport, LintResult};
use crate::rules::Severity;

use super::{OutputFormatter, aggregate_summary};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Info => ansi::CYAN,
        }
    }

    const fn report_icon(report: &LintReport) -> &'static str {
        if report.summary.errors > 0 {
            "✗"
        } else if report.summary.warnings > 0 {
            "⚠"
        } else {
            "✓"
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_report(&self, report: &LintReport, output: &mut String) {
        let icon = Self::report_icon(report);
        let header_color = if report.summary.errors > 0 {
            ansi::RED
        } else if report.summary.warnings > 0 {
            ansi::YELLOW
        } else {
            ansi::GREEN
        };
        let file = self.colorize(&report.file, header_color);
        writeln!(output, "{icon} {file} (score: {:.0})", report.score).ok();

        for result in &report.results {
            if result.passed && self.verbose == 0 {
                continue;
            }
            self.format_result(result, output);
        }
    }

    fn format_result(&self, result: &LintResult, output: &mut String) {
        let tag = if result.passed {
            self.colorize("pass", ansi::GREEN)
        } else {
            self.colorize(
                &result.severity.to_string(),
                Self::severity_color(result.severity),
            )
        };
        let location = result
            .line
            .map(|line| format!(" (line {line})"))
            .unwrap_or_default();
        writeln!(
            output,
            "   [{tag}] {}: {}{location}",
            result.name, result.message
        )
        .ok();

        if !result.passed
            && let Some(suggestion) = &result.suggestion
        {
            writeln!(output, "          → {suggestion}").ok();
        }
    }

    fn format_summary(&self, reports: &[LintReport]) -> String {
        let totals = aggregate_summary(reports);
        let errors = self.colorize(&totals.errors.to_string(), ansi::RED);
        let warnings = self.colorize(&totals.warnings.to_string(), ansi::YELLOW);
        let passed = self.colorize(&totals.passed.to_string(), ansi::GREEN);
        format!(
            "Summary: {} files checked, {errors} errors, {warnings} warnings, {passed} passed",
            reports.len()
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[LintReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            let clean = report.results.iter().all(|result| result.passed);
            // Clean files appear only in verbose mode, like passed rules.
            if clean && self.verbose == 0 {
                continue;
            }
            self.format_report(report, &mut output);
            writeln!(output).ok();
        }

        writeln!(output, "{}", self.format_summary(reports)).ok();
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
