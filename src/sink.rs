// CLASSIFICATION: COMMUNITY
// Filename: sink.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-02

use std::io::Write;

use log::{info, warn};

/// Destination for rendered table rows, one call per row.
///
/// The renderer never sees where rows end up; the console is just one sink
/// among several.
pub trait RowSink {
    /// Receive one finished row, without a trailing newline.
    fn emit_row(&mut self, row: &str);
}

impl RowSink for String {
    fn emit_row(&mut self, row: &str) {
        self.push_str(row);
        self.push('\n');
    }
}

impl RowSink for Vec<String> {
    fn emit_row(&mut self, row: &str) {
        self.push(row.to_owned());
    }
}

/// Sink that forwards each row through the `log` facade at info level.
pub struct LogSink;

impl RowSink for LogSink {
    fn emit_row(&mut self, row: &str) {
        info!(target: "sformat", "{}", row);
    }
}

/// Sink writing rows to any `io::Write`, e.g. stdout or a file.
///
/// Write failures are logged and the row dropped; table rendering never
/// reports errors to the caller.
pub struct WriteSink<W: Write>(pub W);

impl<W: Write> RowSink for WriteSink<W> {
    fn emit_row(&mut self, row: &str) {
        if let Err(err) = writeln!(self.0, "{}", row) {
            warn!(target: "sformat", "table row dropped: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_sink_appends_newlines() {
        let mut out = String::new();
        out.emit_row("row one");
        out.emit_row("row two");
        assert_eq!(out, "row one\nrow two\n");
    }

    #[test]
    fn vec_sink_collects_rows() {
        let mut rows: Vec<String> = Vec::new();
        rows.emit_row("a");
        rows.emit_row("b");
        assert_eq!(rows, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn write_sink_appends_to_writer() {
        let mut sink = WriteSink(Vec::new());
        sink.emit_row("de ad");
        assert_eq!(sink.0, b"de ad\n");
    }

    #[test]
    fn log_sink_swallows_rows_without_panic() {
        LogSink.emit_row("00 01 02");
    }
}
