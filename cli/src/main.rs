mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Invocation, scan};
use portscan_common::config::Config;
use portscan_common::network::request::ScanRequest;
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    logging::init_logging()?;
    print::initialize();

    let request: ScanRequest = match CommandLine::interpret(std::env::args_os()) {
        Invocation::Scan(request) => request,
        Invocation::Rejected(e) => {
            print::args_error(e);
            return Ok(ExitCode::FAILURE);
        }
        Invocation::Clap(e) => e.exit(),
    };

    let cfg: Config = Config {
        quiet: print::quiet_level(),
        ..Config::default()
    };

    print::header("starting scanner", cfg.quiet);
    scan::scan(&request, &cfg).await;
    Ok(ExitCode::SUCCESS)
}
