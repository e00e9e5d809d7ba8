//! Runtime configuration for the portfolio host.
//!
//! Leptos options come from the workspace `[[workspace.metadata.leptos]]`
//! block (exported as `LEPTOS_*` variables by cargo-leptos). A `PORT`
//! variable, when present and valid, replaces the port of `site_addr`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use leptos::prelude::{LeptosOptions, get_configuration};

use crate::error::ServerError;

pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub leptos_options: LeptosOptions,
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Load Leptos options and apply the `PORT` override.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when the Leptos configuration cannot be
    /// read.
    pub fn load() -> Result<Self, ServerError> {
        let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
        let leptos_options = conf.leptos_options;
        let addr = apply_port_override(leptos_options.site_addr, std::env::var(PORT_ENV).ok().as_deref());
        Ok(Self { leptos_options, addr })
    }
}

/// Parse a `PORT` value. Blank or non-numeric values yield `None`.
#[must_use]
pub fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse().ok().filter(|port| *port != 0)
}

/// Replace the port of `addr` with `port` when it parses; otherwise keep `addr`.
#[must_use]
pub fn apply_port_override(addr: SocketAddr, port: Option<&str>) -> SocketAddr {
    let Some(raw) = port else {
        return addr;
    };
    match parse_port(raw) {
        Some(port) => SocketAddr::new(addr.ip(), port),
        None => {
            tracing::warn!(value = raw, %addr, "ignoring invalid {PORT_ENV}");
            addr
        }
    }
}
