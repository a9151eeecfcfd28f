use thiserror::Error;

/// Everything that can go wrong before a scan starts.
///
/// The `Display` output is exactly what the user sees.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Usage: portscan <host> [<start_port> <end_port>]")]
    Usage,
    #[error("Port numbers must be integers.")]
    NotAnInteger,
    #[error("Invalid port range. Ports must be between 1 and 65535 and start_port <= end_port.")]
    InvalidRange,
}
