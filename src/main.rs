use std::process::ExitCode;
use weather_station::{config, demo, logging};

fn run() -> anyhow::Result<()> {
    let config = config::load(std::env::args())?;
    logging::registry_logs(config.log.level)?;
    tracing::debug!("Loaded configuration: {:?}", config);
    demo::run(&config);
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            err.chain()
                .skip(1)
                .for_each(|cause| eprintln!("Because: {cause}"));
            ExitCode::FAILURE
        }
    }
}
