use clap::Parser;

use svgchart::cli::Cli;
use svgchart::commands::run_render;
use svgchart::telemetry;

fn main() {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose, cli.quiet);

    let exit_code = run_render(&cli);

    std::process::exit(exit_code);
}
