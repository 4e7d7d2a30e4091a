//! Logging Infrastructure
//!
//! Console output plus optional daily rotating files:
//! - `app/` - everything except the access log
//! - `access/` - one line per HTTP request (target `http_access`)

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

pub const ACCESS_TARGET: &str = "http_access";

/// Initialize the logging system
///
/// `RUST_LOG` overrides `level` when set. File logging is enabled only when
/// `log_dir` is given and exists.
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// guest_hub::init_logger_with_file("debug", false, None)?;
///
/// // Production setup (console + file)
/// guest_hub::init_logger_with_file("info", true, Some("/var/log/guest-hub"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(level: &str, json_format: bool, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .boxed()
    };

    let file_layers = match log_dir.map(Path::new).filter(|dir| dir.exists()) {
        Some(dir) => {
            let app_dir = dir.join("app");
            let access_dir = dir.join("access");
            fs::create_dir_all(&app_dir)?;
            fs::create_dir_all(&access_dir)?;

            let app_log = RollingFileAppender::new(Rotation::DAILY, app_dir, "guest-hub");
            let app_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(app_log))
                .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                    meta.target() != ACCESS_TARGET
                }));

            let access_log = RollingFileAppender::new(Rotation::DAILY, access_dir, "access");
            let access_layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(std::sync::Mutex::new(access_log))
                .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                    meta.target() == ACCESS_TARGET
                }));

            Some(app_layer.and_then(access_layer))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layers)
        .try_init()?;

    Ok(())
}
