//! # StdoutWriter — simple record printer
//!
//! A minimal sink that prints incoming [`LogRecord`]s to stdout.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [context] 2019-07-04T14:30:00.000Z context_startup: ctx-1b9de442
//! [clock] 2019-07-04T14:30:00.012Z event_sent: [time] #0 at ...
//! [timer] 2019-07-04T14:30:00.014Z event_received: [time] #0 at ...
//! ```

use async_trait::async_trait;

use super::record::LogRecord;
use super::sink::LogSink;

/// Record printer sink.
#[derive(Default)]
pub struct StdoutWriter;

impl StdoutWriter {
    /// Constructs a new [`StdoutWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LogSink for StdoutWriter {
    async fn write(&self, record: &LogRecord) {
        println!("{record}");
    }

    fn name(&self) -> &'static str {
        "StdoutWriter"
    }
}
