use std::time::Duration;

/// First port scanned when only a host is given.
pub const DEFAULT_START_PORT: u16 = 1;
/// Last port scanned when only a host is given.
pub const DEFAULT_END_PORT: u16 = 1000;
/// Upper bound on a single TCP handshake.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Config {
    /// How long a probe waits for the handshake before calling the port closed.
    pub connect_timeout: Duration,
    /// Suppresses the progress display and decorative output.
    ///
    /// Never suppresses the announcement, open ports or the summary.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            quiet: 0,
        }
    }
}
