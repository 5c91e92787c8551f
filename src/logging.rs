// SPDX-License-Identifier: MPL-2.0
//! Tracing setup and the in-memory log buffer behind the F12 log browser.
//!
//! Log lines go two ways: to stderr through the standard `fmt` layer
//! (filterable with `RUST_LOG`), and into a bounded ring buffer the log
//! browser pane reads from. The buffer evicts the oldest entries when full so
//! memory stays constant over long sessions.

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Default number of retained log lines.
const DEFAULT_CAPACITY: usize = 1000;

/// One captured log event.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub timestamp: DateTime<Local>,
    pub level: tracing::Level,
    pub target: String,
    pub message: String,
}

impl LogLine {
    /// Renders the line the way the log browser displays it.
    pub fn display(&self) -> String {
        format!(
            "{} {:>5} {} {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// A bounded ring buffer of log lines, oldest first.
#[derive(Debug, Default)]
pub struct LogRingBuffer {
    data: VecDeque<LogLine>,
    capacity: usize,
}

impl LogRingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a line, evicting the oldest when at capacity.
    pub fn push(&mut self, line: LogLine) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(line);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogLine> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Shared handle to the log buffer, readable from the view.
pub type SharedLogBuffer = Arc<Mutex<LogRingBuffer>>;

/// Creates a new shared log buffer with the default capacity.
pub fn create_log_buffer() -> SharedLogBuffer {
    Arc::new(Mutex::new(LogRingBuffer::new(DEFAULT_CAPACITY)))
}

static GLOBAL_BUFFER: std::sync::OnceLock<SharedLogBuffer> = std::sync::OnceLock::new();

/// The process-wide log buffer. Created on first access; [`init`] wires the
/// same buffer into the tracing subscriber.
pub fn buffer() -> SharedLogBuffer {
    GLOBAL_BUFFER.get_or_init(create_log_buffer).clone()
}

/// Visitor that flattens an event's fields into a single display string.
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            if self.message.is_empty() {
                let _ = write!(self.message, "{:?}", value);
            } else {
                let mut prefixed = format!("{:?} ", value);
                prefixed.push_str(&self.message);
                self.message = prefixed;
            }
        } else {
            let _ = write!(self.message, " {}={:?}", field.name(), value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.insert_str(0, value);
        } else {
            let _ = write!(self.message, " {}={}", field.name(), value);
        }
    }
}

/// Layer that mirrors every event into the shared ring buffer.
struct BufferLayer {
    buffer: SharedLogBuffer,
}

impl<S: tracing::Subscriber> Layer<S> for BufferLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let line = LogLine {
            timestamp: Local::now(),
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: visitor.message,
        };

        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }
}

/// Installs the global tracing subscriber, mirroring events into the shared
/// buffer the log browser reads from.
///
/// Call once from `main`. `RUST_LOG` controls the stderr filter; the ring
/// buffer captures everything the filter lets through, so the log browser is
/// useful even without env configuration.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(BufferLayer { buffer: buffer() })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_line(message: &str) -> LogLine {
        LogLine {
            timestamp: Local::now(),
            level: tracing::Level::INFO,
            target: "syncdeck::test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn buffer_keeps_lines_in_order() {
        let mut buffer = LogRingBuffer::new(10);
        buffer.push(sample_line("first"));
        buffer.push(sample_line("second"));

        let messages: Vec<_> = buffer.iter().map(|l| l.message.clone()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn buffer_evicts_oldest_at_capacity() {
        let mut buffer = LogRingBuffer::new(2);
        buffer.push(sample_line("a"));
        buffer.push(sample_line("b"));
        buffer.push(sample_line("c"));

        assert_eq!(buffer.len(), 2);
        let messages: Vec<_> = buffer.iter().map(|l| l.message.clone()).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut buffer = LogRingBuffer::new(0);
        buffer.push(sample_line("only"));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn display_contains_level_and_message() {
        let line = sample_line("synced");
        let rendered = line.display();
        assert!(rendered.contains("INFO"));
        assert!(rendered.contains("synced"));
    }
}
