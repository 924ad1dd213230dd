//! `tracing` output for the browser.
//!
//! The fmt layer formats each event as one line; [`ConsoleMakeWriter`] hands
//! that line to the console method matching the event level.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::{self, MakeWriter};

use crate::config::AdminConfig;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

/// Buffers one formatted event and flushes it to the console on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        emit(self.level, line);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use web_sys::console;

    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        Level::DEBUG | Level::TRACE => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, line: &str) {
    if level <= Level::WARN {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

/// Install the global subscriber. Returns the level in effect.
pub fn init(config: &AdminConfig) -> Level {
    let level = config.level();
    let installed = fmt::fmt()
        .with_max_level(level)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_writer(ConsoleMakeWriter)
        .try_init();
    if let Err(err) = installed {
        emit(Level::WARN, &format!("tracing already initialised: {err}"));
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_inherits_event_level() {
        let writer = ConsoleMakeWriter.make_writer();
        assert_eq!(writer.level, Level::INFO);
    }

    #[test]
    fn test_writer_buffers_until_drop() {
        let mut writer = ConsoleWriter::new(Level::DEBUG);
        writer.write_all(b"gate: admin confirmed\n").unwrap();
        assert_eq!(writer.buffer, b"gate: admin confirmed\n");
    }
}
