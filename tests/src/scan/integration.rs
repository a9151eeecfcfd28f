#![cfg(test)]
use portscan_common::config::Config;
use portscan_common::network::port::PortResult;
use portscan_common::network::range::PortRange;
use portscan_common::network::request::ScanRequest;
use portscan_core::network::tcp::handshake_probe;
use portscan_core::scanner::{self, ScanReport};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;

use crate::utils::{bind_consecutive, closed_port};

fn loopback(start: u16, end: u16) -> ScanRequest {
    ScanRequest::new(
        "127.0.0.1",
        PortRange::try_new(i64::from(start), i64::from(end)).unwrap(),
    )
}

/// A listener on loopback must be seen as open and nothing else in the range.
#[tokio::test]
async fn scan_single_listener() {
    let (listeners, port) = bind_consecutive(1).await.unwrap();

    let report: ScanReport =
        scanner::perform_scan(&loopback(port, port), &Config::default(), |_| {}).await;

    assert_eq!(report.open_ports.as_slice(), &[port]);
    assert_eq!(report.probed, 1);
    drop(listeners);
}

#[tokio::test]
async fn scan_consecutive_listeners_in_order() {
    let (listeners, base) = bind_consecutive(3).await.unwrap();
    let mut seen: Vec<PortResult> = Vec::new();

    let report: ScanReport = scanner::perform_scan(
        &loopback(base, base + 2),
        &Config::default(),
        |result| seen.push(result),
    )
    .await;

    assert_eq!(report.open_ports.as_slice(), &[base, base + 1, base + 2]);
    assert_eq!(
        seen.iter().map(|r| r.port).collect::<Vec<u16>>(),
        vec![base, base + 1, base + 2]
    );
    assert!(seen.iter().all(|r| r.is_open));
    drop(listeners);
}

#[tokio::test]
async fn scan_skips_closed_gap() {
    let (mut listeners, base) = bind_consecutive(3).await.unwrap();
    // Free the middle port.
    drop(listeners.remove(1));

    let report: ScanReport =
        scanner::perform_scan(&loopback(base, base + 2), &Config::default(), |_| {}).await;

    assert_eq!(report.open_ports.as_slice(), &[base, base + 2]);
    assert_eq!(report.probed, 3);
    drop(listeners);
}

#[tokio::test]
async fn scan_closed_port_finds_nothing() {
    let port: u16 = closed_port().await.unwrap();
    let cfg: Config = Config::default();

    let started: Instant = Instant::now();
    let report: ScanReport = scanner::perform_scan(&loopback(port, port), &cfg, |_| {}).await;

    assert!(report.open_ports.is_empty());
    assert!(started.elapsed() <= cfg.connect_timeout + Duration::from_millis(100));
}

#[tokio::test]
async fn repeated_scans_are_identical() {
    let (listeners, base) = bind_consecutive(2).await.unwrap();
    let request: ScanRequest = loopback(base, base + 1);
    let cfg: Config = Config::default();

    let first: ScanReport = scanner::perform_scan(&request, &cfg, |_| {}).await;
    let second: ScanReport = scanner::perform_scan(&request, &cfg, |_| {}).await;

    assert_eq!(first.open_ports, second.open_ports);
    drop(listeners);
}

#[tokio::test]
async fn probe_is_faster_than_timeout_when_open() {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();
    let cfg: Config = Config::default();

    let started: Instant = Instant::now();
    assert!(handshake_probe("127.0.0.1", port, cfg.connect_timeout).await);
    assert!(started.elapsed() < cfg.connect_timeout);
}

/// An unresolvable name is looked up once, not once per port.
#[tokio::test]
async fn scan_unresolvable_host_is_bounded_by_one_lookup() {
    let request: ScanRequest =
        ScanRequest::new("no-such-host.invalid", PortRange::try_new(1, 50).unwrap());
    let cfg: Config = Config::default();

    let started: Instant = Instant::now();
    let report: ScanReport = scanner::perform_scan(&request, &cfg, |_| {}).await;

    assert!(report.open_ports.is_empty());
    assert_eq!(report.probed, 50);
    assert!(started.elapsed() < cfg.connect_timeout * 3);
}

#[tokio::test]
async fn scan_by_hostname_finds_listener() {
    let (listeners, port) = bind_consecutive(1).await.unwrap();
    let request: ScanRequest = ScanRequest::new(
        "localhost",
        PortRange::try_new(i64::from(port), i64::from(port)).unwrap(),
    );

    let report: ScanReport = scanner::perform_scan(&request, &Config::default(), |_| {}).await;

    assert_eq!(report.open_ports.as_slice(), &[port]);
    drop(listeners);
}
