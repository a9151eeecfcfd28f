use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use tokio::net::{TcpStream, lookup_host};
use tokio::time::error::Elapsed;
use tokio::time::timeout;
use tracing::{debug, trace};

/// Attempts a full TCP handshake with `host:port`.
///
/// Returns `true` only if the connection is established within `probe_timeout`.
/// Refusals, timeouts, unreachable networks and failed name lookups all come
/// back as `false`. The stream is dropped before returning, and an unfinished
/// connect is dropped with the timed-out future.
///
/// The name is looked up on every call. Range scans go through
/// [`resolve_host`] and [`handshake_probe_addrs`] instead.
pub async fn handshake_probe(host: &str, port: u16, probe_timeout: Duration) -> bool {
    classify(port, timeout(probe_timeout, TcpStream::connect((host, port))).await)
}

/// Same as [`handshake_probe`], against addresses that are already resolved.
///
/// Addresses are tried in order, all within the one `probe_timeout`. An empty
/// slice is a closed port.
pub async fn handshake_probe_addrs(addrs: &[IpAddr], port: u16, probe_timeout: Duration) -> bool {
    let targets: Vec<SocketAddr> = addrs.iter().map(|ip| SocketAddr::new(*ip, port)).collect();
    if targets.is_empty() {
        return false;
    }
    classify(port, timeout(probe_timeout, TcpStream::connect(targets.as_slice())).await)
}

/// Looks `host` up once, giving up after `lookup_timeout`.
///
/// A name that does not resolve yields no addresses. The lookup runs on tokio's
/// blocking pool and keeps running past the timeout, so callers should resolve
/// once per scan rather than once per port.
pub async fn resolve_host(host: &str, lookup_timeout: Duration) -> Vec<IpAddr> {
    match timeout(lookup_timeout, lookup_host((host, 0))).await {
        Ok(Ok(addrs)) => addrs.map(|addr| addr.ip()).collect(),
        Ok(Err(e)) => {
            debug!(host, error = %e, "name lookup failed");
            Vec::new()
        }
        Err(_elapsed) => {
            debug!(host, "name lookup timed out");
            Vec::new()
        }
    }
}

fn classify(port: u16, outcome: Result<io::Result<TcpStream>, Elapsed>) -> bool {
    match outcome {
        Ok(Ok(stream)) => {
            drop(stream);
            true
        }
        Ok(Err(e)) => {
            trace!(port, error = %e, "connect failed");
            false
        }
        Err(_elapsed) => {
            trace!(port, "connect timed out");
            false
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
