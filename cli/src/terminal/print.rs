use std::io::{self, IsTerminal};

use colored::*;
use portscan_common::error::ArgsError;
use portscan_common::network::port::OpenPorts;
use portscan_common::network::request::ScanRequest;
use tracing::info;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;

/// Disables colors when stdout is not a terminal, so piped output stays plain.
pub fn initialize() {
    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Decorations and the progress bar are only shown on an interactive terminal.
pub fn quiet_level() -> u8 {
    if io::stdout().is_terminal() && io::stderr().is_terminal() {
        0
    } else {
        1
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    print(&format!("{}", line));
}

pub fn end_of_program(q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}

pub fn args_error(e: ArgsError) {
    print(&e.to_string());
}

pub fn announce(request: &ScanRequest) {
    print(&format!("Scanning {request}..."));
}

pub fn open_port(port: u16) {
    print(&format!("Port {port} is open"));
}

pub fn no_open_ports() {
    print("No open ports found in the specified range.");
}

pub fn summary(open_ports: &OpenPorts) {
    print("");
    print(&format!(
        "Scan complete. Open ports: {}",
        open_ports.to_string().color(colors::ACCENT)
    ));
}
