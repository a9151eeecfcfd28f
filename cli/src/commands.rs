pub mod scan;

use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;
use portscan_common::error::ArgsError;
use portscan_common::network::request::ScanRequest;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "portscan")]
#[command(version)]
#[command(about = "Probe a range of TCP ports on a host and report which accept connections.")]
pub struct CommandLine {
    /// Hostname or IP address to scan
    pub host: Option<String>,
    /// Inclusive range as <START_PORT> <END_PORT> (default: 1 1000)
    #[arg(value_name = "PORT", allow_hyphen_values = true)]
    pub ports: Vec<String>,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Invocation {
    Scan(ScanRequest),
    Rejected(ArgsError),
    /// `--help` or `--version`, rendered and exited by clap.
    Clap(clap::Error),
}

impl CommandLine {
    /// Interprets `args`, program name included.
    ///
    /// Port tokens always reach [`ScanRequest::from_args`]. A host that clap
    /// reads as an unknown flag (e.g. `-x`) is handed over as a raw token too.
    pub fn interpret<I, T>(args: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        match Self::try_parse_from(args.iter().cloned()) {
            Ok(commands) => Invocation::from(ScanRequest::from_args(&commands.positionals())),
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Invocation::Clap(e),
                ErrorKind::UnknownArgument => {
                    let tokens: Vec<String> = args
                        .iter()
                        .skip(1)
                        .map(|arg| arg.to_string_lossy().into_owned())
                        .collect();
                    Invocation::from(ScanRequest::from_args(&tokens))
                }
                _ => {
                    debug!(error = %e, "argument parser rejected input");
                    Invocation::Rejected(ArgsError::Usage)
                }
            },
        }
    }

    /// Positional tokens in the order they were given.
    pub fn positionals(&self) -> Vec<&str> {
        self.host
            .iter()
            .chain(self.ports.iter())
            .map(String::as_str)
            .collect()
    }
}

impl From<Result<ScanRequest, ArgsError>> for Invocation {
    fn from(result: Result<ScanRequest, ArgsError>) -> Self {
        match result {
            Ok(request) => Invocation::Scan(request),
            Err(e) => Invocation::Rejected(e),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
