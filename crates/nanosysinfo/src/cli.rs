//! Command line options.

use crate::server::{ServerConfig, DEFAULT_PORT};
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr};

#[derive(Parser, Debug)]
#[command(name = "nanosysinfo")]
#[command(about = "Host status report for the terminal or a browser", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Serve the report over HTTP instead of printing it once
    #[arg(short = 'd', long)]
    pub daemon: bool,

    /// Port to listen on in server mode
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to listen on in server mode
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,
}

impl Cli {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind: self.bind,
            port: self.port,
        }
    }

    /// Log filter when `RUST_LOG` is unset. The one-shot report keeps quiet
    /// unless something is wrong.
    pub fn default_log_filter(&self) -> &'static str {
        if self.daemon {
            "info"
        } else {
            "warn"
        }
    }
}
