use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, trace};

use rover_app::app::{AppExt, UnsafeRun};
use rover_app::config::{init_logging, Cli};
use rover_app::fs::Fs;
use rover_app::program::rover_main;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    debug!("rover started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let paths = cli.config_paths();
    let app = rover_main(paths, cli.commands.clone()).provide(Fs::live());

    match app.unsafe_run().await {
        Ok(state) if cli.json => match serde_json::to_string(&state) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("failed to encode final state: {e}");
                ExitCode::FAILURE
            }
        },
        Ok(state) => {
            println!("{state}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("rover failed: {e}");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
