use tokio::net::TcpListener;

const BIND_ATTEMPTS: usize = 32;

/// Binds `count` listeners on consecutive loopback ports.
///
/// Returns the listeners with the first port. Ephemeral ports are handed out by
/// the OS, so a neighbour may already be taken; in that case start over.
pub async fn bind_consecutive(count: u16) -> anyhow::Result<(Vec<TcpListener>, u16)> {
    'attempt: for _ in 0..BIND_ATTEMPTS {
        let first: TcpListener = TcpListener::bind("127.0.0.1:0").await?;
        let base: u16 = first.local_addr()?.port();
        if base.checked_add(count).is_none() {
            continue;
        }

        let mut listeners: Vec<TcpListener> = vec![first];
        for offset in 1..count {
            match TcpListener::bind(("127.0.0.1", base + offset)).await {
                Ok(listener) => listeners.push(listener),
                Err(_) => continue 'attempt,
            }
        }
        return Ok((listeners, base));
    }
    anyhow::bail!("could not bind {count} consecutive loopback ports")
}

/// A loopback port with nothing listening on it, at least at the time of return.
pub async fn closed_port() -> anyhow::Result<u16> {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await?;
    Ok(listener.local_addr()?.port())
}
