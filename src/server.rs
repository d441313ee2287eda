//! Listener setup and request serving

use std::net::{IpAddr, SocketAddr};

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::ServerConfig;
use crate::error::{Error, Result};

/// Resolve the configured host and port into a socket address
pub fn listen_addr(server: &ServerConfig) -> Result<SocketAddr> {
    let ip: IpAddr = server
        .host
        .parse()
        .map_err(|_| Error::InvalidAddress(server.host.clone()))?;
    Ok(SocketAddr::new(ip, server.port))
}

/// Bind the listener. Fails if the port is already taken.
pub async fn bind(server: &ServerConfig) -> Result<TcpListener> {
    let addr = listen_addr(server)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::bind(addr, e))?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Serve requests until Ctrl+C or SIGTERM
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_address_is_all_interfaces_port_80() {
        let addr = listen_addr(&ServerConfig::default()).unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:80");
    }

    #[test]
    fn hostnames_are_rejected() {
        let server = ServerConfig {
            host: "localhost".into(),
            port: 8080,
        };
        assert!(matches!(listen_addr(&server), Err(Error::InvalidAddress(_))));
    }
}
