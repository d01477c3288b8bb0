//! Command-line and environment configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

use crate::logging::{LogFormat, LoggingConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about = "In-memory todo list server")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "TODO_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Minimum log level (ignored when RUST_LOG is set)
    #[arg(long, env = "TODO_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format: text, json or pretty
    #[arg(long, env = "TODO_LOG_FORMAT", default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig::new(self.log_format, self.log_level.clone())
    }
}
