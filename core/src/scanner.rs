//! The scan driver.
//!
//! Walks a [`ScanRequest`]'s range in ascending order, probing one port at a
//! time. Each probe is awaited to completion before the next begins, so results
//! come out in port order and never more than one connection is in flight.
//!
//! The driver does not print anything. Callers observe progress through the
//! `on_result` callback and get the collected [`OpenPorts`] back at the end.

use std::future::Future;
use std::net::IpAddr;
use std::time::{Duration, Instant};

use portscan_common::config::Config;
use portscan_common::network::port::{OpenPorts, PortResult};
use portscan_common::network::request::ScanRequest;
use tracing::debug;

use crate::network::tcp::{handshake_probe_addrs, resolve_host};

/// What a finished scan hands back.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub open_ports: OpenPorts,
    pub probed: usize,
    pub elapsed: Duration,
}

/// Probes every port of `request` over TCP, using the configured connect timeout.
///
/// The host is looked up once up front. If that fails every port is reported
/// closed, the same as a per-port lookup failure would.
pub async fn perform_scan<R>(request: &ScanRequest, cfg: &Config, on_result: R) -> ScanReport
where
    R: FnMut(PortResult),
{
    let connect_timeout: Duration = cfg.connect_timeout;
    let resolved: Vec<IpAddr> = resolve_host(&request.host, connect_timeout).await;
    let addrs: &[IpAddr] = &resolved;
    scan_range(
        request,
        move |port| handshake_probe_addrs(addrs, port, connect_timeout),
        on_result,
    )
    .await
}

/// Runs `prober` against each port of the request's range, in order.
///
/// `on_result` sees every result, open or not, as soon as its probe finishes.
pub async fn scan_range<F, Fut, R>(
    request: &ScanRequest,
    mut prober: F,
    mut on_result: R,
) -> ScanReport
where
    F: FnMut(u16) -> Fut,
    Fut: Future<Output = bool>,
    R: FnMut(PortResult),
{
    debug!(
        host = %request.host,
        start = request.range.start(),
        end = request.range.end(),
        "scan started"
    );

    let start_time: Instant = Instant::now();
    let mut open_ports: OpenPorts = OpenPorts::new();
    let mut probed: usize = 0;

    for port in request.range.iter() {
        let result: PortResult = PortResult::new(port, prober(port).await);
        probed += 1;
        open_ports.record(result);
        on_result(result);
    }

    let elapsed: Duration = start_time.elapsed();
    debug!(probed, open = open_ports.len(), ?elapsed, "scan finished");

    ScanReport {
        open_ports,
        probed,
        elapsed,
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
