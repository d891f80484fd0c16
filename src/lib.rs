pub mod cli;
pub mod engine;
pub mod entities;

use thiserror::Error;

use crate::engine::extractor::ExtractorError;

pub const LOG_DIR_ENV: &str = "REPFINDER_LOG_DIR";

#[derive(Debug, Error)]
pub enum RepFinderError {
    #[error("File {0} does not exist.")]
    FileNotFound(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Failed to extract {path}: {source}")]
    Extraction {
        path: String,
        #[source]
        source: ExtractorError,
    },

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    // console logger on stderr, stdout carries the report
    let stderr_layer = fmt::layer()
        .with_ansi(true)
        .event_format(format().with_level(true).with_target(true))
        .with_writer(std::io::stderr);

    // file logger (NO ANSI), only when a log directory is configured
    let file_layer = std::env::var_os(LOG_DIR_ENV).map(|dir| {
        let file_appender = RollingFileAppender::new(Rotation::HOURLY, dir, "repfinder");

        fmt::layer()
            .with_ansi(false)
            .event_format(format().with_level(true).with_target(true))
            .with_writer(file_appender)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
}
