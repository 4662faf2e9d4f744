use std::process::ExitCode;

fn main() -> ExitCode {
    // Logging goes to stderr and must never take the tool down.
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.start())
        .ok();

    if let Err(err) = jotter::run() {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
