use std::fmt;

/// Outcome of probing a single port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortResult {
    pub port: u16,
    pub is_open: bool,
}

impl PortResult {
    pub fn new(port: u16, is_open: bool) -> Self {
        Self { port, is_open }
    }
}

/// Ports that accepted a connection, in the order they were found.
///
/// Scans walk their range upwards, so this is ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenPorts(Vec<u16>);

impl OpenPorts {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn record(&mut self, result: PortResult) {
        if result.is_open {
            self.0.push(result.port);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }
}

impl fmt::Display for OpenPorts {
    /// Renders as `[22, 80, 443]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, port) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{port}")?;
        }
        write!(f, "]")
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
