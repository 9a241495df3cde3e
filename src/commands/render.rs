use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::chart::Chart;
use crate::cli::{Cli, is_std_stream};
use crate::config::{ChartSettings, Config, ConfigLoader, FileConfigLoader};
use crate::output::{ColorMode, ErrorOutput};
use crate::{EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR, EXIT_SUCCESS, Result, SvgChartError};

#[must_use]
pub fn run_render(cli: &Cli) -> i32 {
    match run_render_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(ColorMode::from(cli.color)).report(&e);
            exit_code_for(&e)
        }
    }
}

/// Exit status for a failed run.
#[must_use]
pub const fn exit_code_for(error: &SvgChartError) -> i32 {
    if error.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_INPUT_ERROR
    }
}

/// Reads the input, lays out the chart and writes it in the requested format.
///
/// Nothing is written to the output until the chart has been laid out.
///
/// # Errors
/// Returns an error if configuration, input, layout or output fails.
pub fn run_render_impl(cli: &Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config.chart, cli);

    let kind = config.chart.chart_kind()?.ok_or_else(|| {
        SvgChartError::Config("chart type is required (use --type or [chart] type)".to_string())
    })?;

    let mut chart = Chart::new(kind, config.chart.geometry(), config.chart.stylesheet)?;

    let reader = open_input(&cli.input_file)?;
    chart.parse_input(reader)?;
    let document = chart.create_chart()?;

    let rendered = cli.format.formatter(!cli.compact).format(document)?;
    write_output(&cli.output_file, &rendered)
}

pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let result = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    info!(source = %result.source, "loaded configuration");
    Ok(result.config)
}

pub(crate) fn apply_cli_overrides(settings: &mut ChartSettings, cli: &Cli) {
    if let Some(chart_type) = &cli.chart_type {
        settings.chart_type = Some(chart_type.clone());
    }

    if let Some(width) = cli.width {
        settings.width = width;
    }

    if let Some(height) = cli.height {
        settings.height = height;
    }

    if let Some(top) = cli.margin_top {
        settings.margins.top = top;
    }

    if let Some(bottom) = cli.margin_bottom {
        settings.margins.bottom = bottom;
    }

    if let Some(left) = cli.margin_left {
        settings.margins.left = left;
    }

    if let Some(right) = cli.margin_right {
        settings.margins.right = right;
    }

    if let Some(stylesheet) = &cli.stylesheet {
        settings.stylesheet.clone_from(stylesheet);
    }
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if is_std_stream(path) {
        debug!("reading from stdin");
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).map_err(|source| SvgChartError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading input file");
    Ok(Box::new(BufReader::new(file)))
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if is_std_stream(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    fs::write(path, content).map_err(|source| SvgChartError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "wrote chart");
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
