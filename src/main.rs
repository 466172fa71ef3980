use std::fs;
use std::path::Path;

use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;

use seo_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, InitArgs, RulesArgs, SeverityFilter};
use seo_guard::config::{self, Config};
use seo_guard::linter::{LintReport, Linter, ReportOptions};
use seo_guard::output::{
    ColorMode, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use seo_guard::rules::{Rule, RuleRegistry, Severity};
use seo_guard::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use seo_guard::{EXIT_CONFIG_ERROR, EXIT_LINT_FAILED, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

const fn severity_filter_to_severity(filter: SeverityFilter) -> Severity {
    match filter {
        SeverityFilter::Error => Severity::Error,
        SeverityFilter::Warning => Severity::Warning,
        SeverityFilter::Info => Severity::Info,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Rules(args) => run_rules(args),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> seo_guard::Result<i32> {
    // 1. Load configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let format = resolve_format(args.format, &config)?;

    // 2. Create GlobFilter
    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.scan.extensions.clone());
    let mut exclude_patterns = config.scan.exclude.clone();
    exclude_patterns.extend(args.exclude.clone());
    let filter = GlobFilter::new(extensions, &exclude_patterns)?;

    // 3. Scan directories
    let scanner = DirectoryScanner::new(filter);
    let mut all_files = Vec::new();
    for path in &args.paths {
        all_files.extend(scanner.scan(path)?);
    }
    all_files.sort();
    all_files.dedup();

    // 4. Lint each file (parallel with rayon); a failed read is reported
    //    per-file instead of aborting the batch
    let linter = Linter::new();
    let outcomes: Vec<_> = all_files
        .par_iter()
        .map(|file_path| process_file(file_path, &linter))
        .collect();

    let mut reports = Vec::new();
    let mut read_failures = 0usize;
    for outcome in outcomes {
        match outcome {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("Error: {e}");
                read_failures += 1;
            }
        }
    }
    if reports.is_empty() && read_failures > 0 {
        return Ok(EXIT_CONFIG_ERROR);
    }

    // 5. Format and write output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(format, &reports, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 6. Exit gate: strict mode only, and only on error-severity failures
    let strict = args.strict || config.strict;
    if strict && reports.iter().any(LintReport::has_failing_errors) {
        Ok(EXIT_LINT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> seo_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    config_path.map_or_else(config::load_default, config::load_from_path)
}

fn resolve_format(
    cli_format: Option<OutputFormat>,
    config: &Config,
) -> seo_guard::Result<OutputFormat> {
    if let Some(format) = cli_format {
        return Ok(format);
    }
    match &config.format {
        Some(name) => name
            .parse()
            .map_err(seo_guard::SeoGuardError::Config),
        None => Ok(OutputFormat::default()),
    }
}

fn process_file(file_path: &Path, linter: &Linter) -> seo_guard::Result<LintReport> {
    let content =
        fs::read_to_string(file_path).map_err(|e| seo_guard::SeoGuardError::FileRead {
            path: file_path.to_path_buf(),
            source: e,
        })?;

    let display_path = file_path.display().to_string();
    let filename = file_path.file_name().and_then(|name| name.to_str());
    Ok(linter.report(
        &content,
        ReportOptions {
            frontmatter: None,
            file_path: Some(&display_path),
            filename,
        },
    ))
}

fn format_output(
    format: OutputFormat,
    reports: &[LintReport],
    color_mode: ColorMode,
    verbose: u8,
) -> seo_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(reports),
        OutputFormat::Json => JsonFormatter::new().format(reports),
        OutputFormat::Markdown => MarkdownFormatter::new().format(reports),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> seo_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[derive(Serialize)]
struct RuleInfo<'a> {
    id: &'a str,
    name: &'a str,
    severity: Severity,
    description: &'a str,
}

impl<'a> From<&'a Rule> for RuleInfo<'a> {
    fn from(rule: &'a Rule) -> Self {
        Self {
            id: rule.id,
            name: rule.name,
            severity: rule.severity,
            description: rule.description,
        }
    }
}

fn run_rules(args: &RulesArgs) -> i32 {
    match run_rules_impl(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_rules_impl(args: &RulesArgs) -> seo_guard::Result<i32> {
    let registry = RuleRegistry::default();
    let rules: Vec<&Rule> = args.severity.map_or_else(
        || registry.all().iter().collect(),
        |filter| registry.by_severity(severity_filter_to_severity(filter)),
    );

    let output = match args.format.unwrap_or_default() {
        OutputFormat::Text => {
            use std::fmt::Write;
            let mut out = String::new();
            for rule in &rules {
                writeln!(out, "{:<8} {:<8} {}", rule.id, rule.severity, rule.name).ok();
                writeln!(out, "         {}", rule.description).ok();
            }
            out
        }
        OutputFormat::Json => {
            let infos: Vec<RuleInfo<'_>> = rules.iter().map(|rule| RuleInfo::from(*rule)).collect();
            serde_json::to_string_pretty(&infos)?
        }
        OutputFormat::Markdown => {
            return Err(seo_guard::SeoGuardError::Config(
                "Markdown output is not supported for the rules listing".to_string(),
            ));
        }
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(EXIT_SUCCESS)
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> seo_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(seo_guard::SeoGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config::default_toml())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}
