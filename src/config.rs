use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const GRAPHQL_PATH: &str = "/graphql";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:4000";
pub const DEFAULT_LOG_FILTER: &str = "info,socialgraph=debug";

pub const BIND_ENV: &str = "SOCIALGRAPH_BIND";
pub const GRAPHIQL_ENV: &str = "SOCIALGRAPH_GRAPHIQL";
pub const SEED_FILE_ENV: &str = "SOCIALGRAPH_SEED_FILE";

pub fn bind_address() -> anyhow::Result<SocketAddr> {
    let raw = std::env::var(BIND_ENV).unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
    parse_bind_address(&raw)
}

pub fn parse_bind_address(raw: &str) -> anyhow::Result<SocketAddr> {
    raw.trim()
        .parse::<SocketAddr>()
        .with_context(|| format!("{} is not a valid socket address: {}", BIND_ENV, raw))
}

/// The explorer is on unless explicitly switched off.
pub fn graphiql_enabled() -> bool {
    std::env::var(GRAPHIQL_ENV)
        .map(|v| parse_flag(&v))
        .unwrap_or(true)
}

pub fn seed_file() -> Option<PathBuf> {
    std::env::var_os(SEED_FILE_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no")
}
