//! `confgen materialize`: write a header from a template.

use std::path::Path;

use tracing::{info, warn};

use confgen_adapters::{FileSink, LocalTemplateSource, StdoutSink};
use confgen_core::application::{MaterializeReport, MaterializeService};

use crate::{
    cli::{MaterializeArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: MaterializeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let substitution = config.substitution(&args.substitution)?;
    let service =
        MaterializeService::new(Box::new(LocalTemplateSource::new())).with_substitution(substitution);

    let (report, output) = match &args.output {
        Some(path) => {
            reject_in_place(&args.template, path)?;
            (to_file(&service, &args.template, path)?, output)
        }
        // stdout carries the header; status lines move to stderr.
        None => (
            service
                .materialize(StdoutSink::new(), &args.template)
                .with_cli_context(|| "materializing to stdout")?,
            output.on_stderr(),
        ),
    };

    info!(
        template = %report.template.display(),
        replacements = report.replacements,
        "Materialize finished"
    );
    render_report(&report, args.output.as_deref(), &output)
}

/// Writing the template onto itself would truncate it before it is read.
fn reject_in_place(template: &Path, out: &Path) -> CliResult<()> {
    let same = match (template.canonicalize(), out.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => template == out,
    };
    if same {
        return Err(CliError::InvalidInput {
            message: format!(
                "output '{}' is the template itself; it would be truncated before being read",
                out.display()
            ),
            source: None,
        });
    }
    Ok(())
}

fn to_file(
    service: &MaterializeService,
    template: &Path,
    out: &Path,
) -> CliResult<MaterializeReport> {
    let sink = FileSink::create(out).map_err(|source| CliError::OutputUnavailable {
        path: out.to_path_buf(),
        source,
    })?;

    service.materialize(sink, template).map_err(|err| {
        // A partial or empty header must not be picked up by the build.
        if let Err(e) = std::fs::remove_file(out) {
            warn!(path = %out.display(), error = %e, "Failed to remove incomplete output");
        }
        CliError::Core(err)
    })
}

fn render_report(
    report: &MaterializeReport,
    destination: Option<&Path>,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(report)?;
        return Ok(());
    }

    let target = destination
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".into());

    if report.replacements == 0 {
        output.warning(&format!(
            "No '{}' markers in {}; copied unchanged",
            report.marker,
            report.template.display()
        ))?;
    }

    output.success(&format!(
        "{} -> {} ({} replaced, {} bytes)",
        report.template.display(),
        target,
        report.replacements,
        report.bytes_written
    ))?;

    Ok(())
}
