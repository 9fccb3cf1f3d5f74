use clap::Parser;
use std::process::ExitCode;
use verify_output::args::Args;
use verify_output::config::Config;
use verify_output::telemetry;

fn main() -> ExitCode {
    let config = Config::from(Args::parse());

    if let Err(e) = telemetry::init_tracing(config.log_level) {
        eprintln!("[warn] {e}");
    }

    let stdout = std::io::stdout();
    match verify_output::run(&config, &mut stdout.lock()) {
        Ok(report) => ExitCode::from(report.exit_code()),
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
