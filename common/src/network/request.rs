//! # Scan Request Model
//!
//! Turns the positional command-line tokens into a validated [`ScanRequest`].
//!
//! Accepted shapes:
//! * `<host>`: scans the default range (1-1000).
//! * `<host> <start_port> <end_port>`: scans the given inclusive range.
//!
//! The host is kept as typed. Resolution happens per probe, so a bad name
//! shows up as closed ports rather than as an argument error.

use std::fmt;
use std::num::IntErrorKind;

use crate::error::ArgsError;
use crate::network::range::PortRange;

/// A host plus the inclusive range of ports to probe on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub host: String,
    pub range: PortRange,
}

impl ScanRequest {
    pub fn new(host: impl Into<String>, range: PortRange) -> Self {
        Self {
            host: host.into(),
            range,
        }
    }

    /// Builds a request from the positional arguments, program name excluded.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ArgsError> {
        match args {
            [host] => Ok(Self::new(parse_host(host.as_ref())?, PortRange::default())),
            [host, start, end] => {
                let host: &str = parse_host(host.as_ref())?;
                let start: i64 = parse_port(start.as_ref())?;
                let end: i64 = parse_port(end.as_ref())?;
                Ok(Self::new(host, PortRange::try_new(start, end)?))
            }
            _ => Err(ArgsError::Usage),
        }
    }
}

impl fmt::Display for ScanRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from port {} to {}",
            self.host,
            self.range.start(),
            self.range.end()
        )
    }
}

fn parse_host(token: &str) -> Result<&str, ArgsError> {
    if token.trim().is_empty() {
        return Err(ArgsError::Usage);
    }
    Ok(token)
}

/// Parses a base-10 port token.
///
/// Integers too large for `i64` are still integers, so they fail the range
/// check instead of the parse check.
fn parse_port(token: &str) -> Result<i64, ArgsError> {
    match token.trim().parse::<i64>() {
        Ok(port) => Ok(port),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(ArgsError::InvalidRange)
            }
            _ => Err(ArgsError::NotAnInteger),
        },
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
