//! `confgen scan`: count markers without writing a header.

use confgen_adapters::LocalTemplateSource;
use confgen_core::application::{MaterializeService, ScanReport};

use crate::{
    cli::{OutputFormat, ScanArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: ScanArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let substitution = config.substitution(&args.substitution)?;
    let service =
        MaterializeService::new(Box::new(LocalTemplateSource::new())).with_substitution(substitution);

    let report = service
        .scan(&args.template)
        .with_cli_context(|| "scanning template")?;

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }

    output.header(&format!("{}", report.template.display()))?;
    output.print(&summary(&report))?;
    Ok(())
}

fn summary(report: &ScanReport) -> String {
    let noun = if report.occurrences == 1 { "marker" } else { "markers" };
    if report.lines.is_empty() {
        return format!(
            "  {} '{}' {} in {} lines",
            report.occurrences, report.marker, noun, report.total_lines
        );
    }

    let lines = report
        .lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "  {} '{}' {} in {} lines (lines {})",
        report.occurrences, report.marker, noun, report.total_lines, lines
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report(occurrences: usize, lines: Vec<usize>) -> ScanReport {
        ScanReport {
            template: PathBuf::from("config.h.in"),
            marker: "#cmakedefine".into(),
            occurrences,
            lines,
            total_lines: 10,
        }
    }

    #[test]
    fn summary_lists_lines() {
        assert_eq!(
            summary(&report(2, vec![3, 7])),
            "  2 '#cmakedefine' markers in 10 lines (lines 3, 7)"
        );
    }

    #[test]
    fn summary_singular() {
        assert_eq!(
            summary(&report(1, vec![4])),
            "  1 '#cmakedefine' marker in 10 lines (lines 4)"
        );
    }

    #[test]
    fn summary_without_markers() {
        assert_eq!(
            summary(&report(0, vec![])),
            "  0 '#cmakedefine' markers in 10 lines"
        );
    }
}
