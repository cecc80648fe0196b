use crate::config::LoggingConfig;
use std::{
    io::{IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex},
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    filter::Targets,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer, Registry,
};

use file_rotate::{compression::Compression, suffix::AppendCount, ContentLimit, FileRotate};

// -------- level helpers --------

/// Unknown names fall back to INFO so a typo never silences the server.
fn parse_level_filter(s: &str) -> LevelFilter {
    match s.trim().to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" | "none" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

fn build_targets(default_level: &str, overrides: &[(&str, &str)]) -> Targets {
    overrides.iter().fold(
        Targets::new().with_default(parse_level_filter(default_level)),
        |targets, (target, level)| targets.with_target(target.to_string(), parse_level_filter(level)),
    )
}

fn console_targets(cfg: &LoggingConfig) -> Targets {
    let overrides: Vec<(&str, &str)> = cfg
        .targets
        .iter()
        .map(|(t, l)| (t.as_str(), l.as_str()))
        .collect();
    build_targets(&cfg.console_level, &overrides)
}

fn file_targets(cfg: &LoggingConfig) -> Targets {
    let overrides: Vec<(&str, &str)> = cfg
        .targets
        .iter()
        .map(|(t, l)| (t.as_str(), l.as_str()))
        .collect();
    build_targets(&cfg.file_level, &overrides)
}

// -------- rotating writer for files --------

#[derive(Clone)]
struct RotatingWriter(Arc<Mutex<FileRotate<AppendCount>>>);

impl<'a> fmt::MakeWriter<'a> for RotatingWriter {
    type Writer = RotatingWriterHandle;

    fn make_writer(&'a self) -> Self::Writer {
        RotatingWriterHandle(self.0.clone())
    }
}

struct RotatingWriterHandle(Arc<Mutex<FileRotate<AppendCount>>>);

impl Write for RotatingWriterHandle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| std::io::Error::other("log file lock poisoned"))?
            .write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0
            .lock()
            .map_err(|_| std::io::Error::other("log file lock poisoned"))?
            .flush()
    }
}

/// Create a size-rotated writer, creating the parent directory first.
fn create_rotating_writer(
    log_path: &Path,
    max_bytes: usize,
    max_backups: usize,
) -> std::io::Result<RotatingWriter> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let rot = FileRotate::new(
        log_path,
        AppendCount::new(max_backups),
        ContentLimit::BytesSurpassed(max_bytes),
        Compression::None,
        #[cfg(unix)]
        None,
    );

    Ok(RotatingWriter(Arc::new(Mutex::new(rot))))
}

fn file_writer_for(cfg: &LoggingConfig) -> Option<RotatingWriter> {
    if cfg.file.trim().is_empty() {
        return None;
    }

    let max_bytes = cfg.max_size_mb.unwrap_or(100) * 1024 * 1024;
    let max_backups = cfg.max_backups.unwrap_or(3);
    let path = Path::new(&cfg.file);

    match create_rotating_writer(path, max_bytes as usize, max_backups) {
        Ok(writer) => Some(writer),
        Err(e) => {
            eprintln!("Failed to initialize log file '{}': {}", path.display(), e);
            None
        }
    }
}

// -------- public init --------

/// Install the global subscriber: a human-readable console layer plus an
/// optional JSON file layer. Calling it again after a subscriber is set is a no-op.
pub fn init_logging_from_config(cfg: &LoggingConfig) {
    // Bridge `log` → `tracing` before the subscriber goes in (sqlx logs via `log`)
    let _ = tracing_log::LogTracer::init();

    let ansi = std::io::stdout().is_terminal();

    let console_layer = fmt::layer()
        .with_ansi(ansi)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_filter(console_targets(cfg));

    let file_layer = file_writer_for(cfg).map(|writer| {
        fmt::layer()
            .json()
            .with_ansi(false)
            .with_target(true)
            .with_level(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_writer(writer)
            .with_filter(file_targets(cfg))
    });

    let _ = Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

// =================== tests ===================
