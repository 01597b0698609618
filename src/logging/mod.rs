//! Tracing subscriber initialization.
//!
//! Formatted events are written to the browser console, one console call per
//! event, at the console level matching the event level. On native targets
//! (tests, tooling) the same lines go to stderr.

use crate::model::error::LoggingError;
use std::io;
use tracing::{warn, Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Browser console method used for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    /// `console.debug`
    Debug,
    /// `console.info`
    Info,
    /// `console.warn`
    Warn,
    /// `console.error`
    Error,
}

impl ConsoleLevel {
    /// Console method for a tracing level. Trace shares the debug method.
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleLevel::Error,
            Level::WARN => ConsoleLevel::Warn,
            Level::INFO => ConsoleLevel::Info,
            Level::DEBUG | Level::TRACE => ConsoleLevel::Debug,
        }
    }
}

/// Buffers one formatted event and emits it when dropped.
pub struct ConsoleWriter {
    level: ConsoleLevel,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: ConsoleLevel) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    /// The buffered line without the trailing newline the formatter appends.
    fn line(&self) -> String {
        let text = String::from_utf8_lossy(&self.buffer);
        text.trim_end_matches('\n').to_string()
    }

    fn emit(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = self.line();
        self.buffer.clear();
        emit_line(self.level, &line);
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

#[cfg(target_arch = "wasm32")]
fn emit_line(level: ConsoleLevel, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        ConsoleLevel::Debug => console::debug_1(&value),
        ConsoleLevel::Info => console::info_1(&value),
        ConsoleLevel::Warn => console::warn_1(&value),
        ConsoleLevel::Error => console::error_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit_line(_level: ConsoleLevel, line: &str) {
    eprintln!("{line}");
}

/// `MakeWriter` producing a [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::for_level(meta.level()))
    }
}

/// Build the filter for a directive string such as `"info"` or `"vaum_site=debug"`.
pub fn build_filter(directive: &str) -> Result<tracing_subscriber::EnvFilter, LoggingError> {
    tracing_subscriber::EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidFilter {
        filter: directive.to_string(),
        reason: e.to_string(),
    })
}

/// Fallback filter when the configured one cannot be parsed.
pub const FALLBACK_LOG_FILTER: &str = "info";

/// Initialize the tracing subscriber with console output.
///
/// # Arguments
///
/// * `directive` - Filter directive from the resolved config
///
/// # Returns
/// * `Ok(())` if initialization succeeded
/// * `Err(LoggingError)` if the directive is invalid or a subscriber is already set
pub fn init(directive: &str) -> Result<(), LoggingError> {
    install(build_filter(directive)?)
}

/// Pick the filter for `directive`, falling back to `fallback` if it is invalid.
///
/// The rejection is returned alongside the fallback filter so it can be
/// reported once logging is up. Fails only when `fallback` is invalid too.
pub fn select_filter(
    directive: &str,
    fallback: &str,
) -> Result<(tracing_subscriber::EnvFilter, Option<LoggingError>), LoggingError> {
    match build_filter(directive) {
        Ok(filter) => Ok((filter, None)),
        Err(rejected) => Ok((build_filter(fallback)?, Some(rejected))),
    }
}

/// Like [`init`], but an invalid `directive` installs [`FALLBACK_LOG_FILTER`]
/// instead of failing.
///
/// # Returns
/// * `Ok(None)` if `directive` was installed
/// * `Ok(Some(rejected))` if the fallback was installed; a warning is logged
/// * `Err(LoggingError::SubscriberAlreadySet)` if a subscriber is already set
pub fn init_with_fallback(directive: &str) -> Result<Option<LoggingError>, LoggingError> {
    let (filter, rejected) = select_filter(directive, FALLBACK_LOG_FILTER)?;
    install(filter)?;
    if let Some(rejected) = &rejected {
        warn!(error = %rejected, fallback = FALLBACK_LOG_FILTER, "Ignoring log filter");
    }
    Ok(rejected)
}

fn install(filter: tracing_subscriber::EnvFilter) -> Result<(), LoggingError> {
    // No wall clock on wasm32-unknown-unknown; the console timestamps lines itself.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
