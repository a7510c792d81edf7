// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-08-09

//! Tabular rendering of raw memory and mbuf chains.
//!
//! The crate renders byte data 16 bytes per row as hex, decimal or ASCII
//! cells, with an optional running-address prefix and an optional ASCII
//! side-view. Data comes in either as a flat slice ([`table::bytes_tbl_16`])
//! or as a chain of fixed-size pool buffers ([`table::mbuf_tbl_16`]); rows go
//! out through a [`sink::RowSink`] collaborator such as a `String`, the `log`
//! facade or any `io::Write`.

/// Table configuration: display format and column toggles.
pub mod config;

/// Chained fixed-size buffers and the pool they are allocated from.
pub mod mbuf;

/// Row output collaborators (string, log facade, io::Write).
pub mod sink;

/// The 16-bytes-per-row table renderer.
pub mod table;

pub use config::{DisplayFmt, TableCfg};
pub use mbuf::{Mbuf, MbufError, MbufPool};
pub use sink::{LogSink, RowSink, WriteSink};
pub use table::{bytes_tbl_16, bytes_tbl_string, mbuf_tbl_16, ROW_BYTES};
