//! # Port Range Model
//!
//! An inclusive, ascending range of TCP ports.
//!
//! A [`PortRange`] can only be built through [`PortRange::try_new`], so holding one
//! means `1 <= start <= end <= 65535` already holds.

use crate::config::{DEFAULT_END_PORT, DEFAULT_START_PORT};
use crate::error::ArgsError;

pub const MIN_PORT: i64 = 1;
pub const MAX_PORT: i64 = u16::MAX as i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    start_port: u16,
    end_port: u16,
}

impl PortRange {
    /// Validates the bounds and builds the range.
    ///
    /// Takes wide integers so that `0`, negatives and values above 65535 are
    /// reported as a range problem rather than a parse problem.
    pub fn try_new(start_port: i64, end_port: i64) -> Result<Self, ArgsError> {
        if start_port < MIN_PORT || end_port > MAX_PORT || start_port > end_port {
            return Err(ArgsError::InvalidRange);
        }
        Ok(Self {
            start_port: start_port as u16,
            end_port: end_port as u16,
        })
    }

    pub fn start(&self) -> u16 {
        self.start_port
    }

    pub fn end(&self) -> u16 {
        self.end_port
    }

    /// Number of ports covered, both ends included.
    pub fn len(&self) -> usize {
        usize::from(self.end_port - self.start_port) + 1
    }

    /// A validated range always holds at least one port.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u16> + Clone {
        self.start_port..=self.end_port
    }
}

impl Default for PortRange {
    fn default() -> Self {
        Self {
            start_port: DEFAULT_START_PORT,
            end_port: DEFAULT_END_PORT,
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
