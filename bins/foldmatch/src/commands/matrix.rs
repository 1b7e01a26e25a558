//! Matrix command - run the comparison harness

use super::{build_strategies, OutputFormat};
use anyhow::{bail, Result};
use foldmatch_cli::output::{format_count, format_duration, render_matrix, Status};
use foldmatch_cli::progress;
use foldmatch_search::{default_corpus, ComparisonHarness, MatcherConfig};
use foldmatch_telemetry::Timer;

/// Run matrix command
///
/// Fails when any observed result differs from the expected one.
pub fn run(config: &MatcherConfig, format: OutputFormat) -> Result<()> {
    let harness = ComparisonHarness::with_strategies(default_corpus(), build_strategies(config, None)?);

    let timer = Timer::start("matrix");
    let report = if format == OutputFormat::Json {
        harness.run()
    } else {
        let pb = progress::spinner(&format!(
            "Running {}...",
            format_count(harness.corpus().len(), "case", "cases")
        ));
        let report = harness.run();
        pb.finish_and_clear();
        report
    };
    let elapsed = timer.stop();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        Status::header("Match matrix");
        print!("{}", render_matrix(&report));
        println!();

        if report.is_success() {
            Status::success(&format!(
                "{} as expected ({})",
                format_count(report.passed(), "result", "results"),
                format_duration(elapsed)
            ));
        }
    }

    if !report.is_success() {
        bail!("{} differ from expectations", format_count(report.failed(), "result", "results"));
    }

    Ok(())
}
