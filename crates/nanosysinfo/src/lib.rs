//! nanosysinfo - host status report
//!
//! Gathers uptime, CPU, memory, disk, network, journal and package state and
//! renders it as a coloured terminal report or an HTML page.

pub mod cli;
pub mod command;
pub mod probe;
pub mod report;
pub mod routes;
pub mod server;
pub mod sources;

pub use probe::{LiveProbe, SystemProbe};
pub use report::{
    html_document, render_markup_document, render_terminal, Block, Report, ReportAssembler,
    ReportOptions,
};
pub use server::{AppState, ServerConfig};
