//! Runtime settings read once at startup.

use std::net::{Ipv4Addr, SocketAddr};

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// From `PORT`.
    pub port: u16,
    /// PostgreSQL connection string, from `DB_CONN`.
    pub db_conn: String,
}

impl AppConfig {
    /// Listen on all interfaces.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
