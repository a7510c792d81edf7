// CLASSIFICATION: COMMUNITY
// Filename: table.rs v0.6
// Author: Lukas Bower
// Date Modified: 2026-08-25

use std::fmt::Write;

use crate::config::{DisplayFmt, TableCfg};
use crate::mbuf::Mbuf;
use crate::sink::RowSink;

/// Fixed number of bytes per table row.
pub const ROW_BYTES: usize = 16;

fn cell_width(fmt: DisplayFmt) -> usize {
    match fmt {
        DisplayFmt::Hex => 2,
        DisplayFmt::Dec => 3,
        DisplayFmt::Ascii => 1,
    }
}

fn printable(b: u8) -> char {
    if b.is_ascii_graphic() || b == b' ' {
        b as char
    } else {
        '.'
    }
}

fn push_cell(line: &mut String, fmt: DisplayFmt, b: u8) {
    match fmt {
        DisplayFmt::Hex => write!(line, "{:02x}", b).unwrap(),
        DisplayFmt::Dec => write!(line, "{:>3}", b).unwrap(),
        DisplayFmt::Ascii => line.push(printable(b)),
    }
}

fn render_row(cfg: &TableCfg, addr: u32, chunk: &[u8]) -> String {
    let width = cell_width(cfg.format);
    let mut line = String::with_capacity(12 + ROW_BYTES * (width + 2) + 4);
    if cfg.show_addr {
        write!(line, "0x{:08x}: ", addr).unwrap();
    }
    for (i, &b) in chunk.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        push_cell(&mut line, cfg.format, b);
    }
    if cfg.show_ascii {
        // pad only the cells missing from a partial row, so the side-view
        // column stays aligned; rendered cells are kept even when they are
        // all spaces
        for _ in chunk.len()..ROW_BYTES {
            line.push(' ');
            line.extend(std::iter::repeat(' ').take(width));
        }
        line.push_str(" |");
        for &b in chunk {
            line.push(printable(b));
        }
        line.push('|');
    }
    line
}

fn render_stream<I, S>(cfg: &TableCfg, bytes: I, sink: &mut S)
where
    I: Iterator<Item = u8>,
    S: RowSink + ?Sized,
{
    let mut addr = cfg.start_addr;
    let mut chunk = [0u8; ROW_BYTES];
    let mut fill = 0;
    for b in bytes {
        chunk[fill] = b;
        fill += 1;
        if fill == ROW_BYTES {
            sink.emit_row(&render_row(cfg, addr, &chunk));
            addr = addr.wrapping_add(ROW_BYTES as u32);
            fill = 0;
        }
    }
    if fill > 0 {
        sink.emit_row(&render_row(cfg, addr, &chunk[..fill]));
    }
}

/// Render a flat byte slice, 16 bytes per row.
///
/// Empty input is a no-op: no rows are emitted and no error is reported.
pub fn bytes_tbl_16<S: RowSink + ?Sized>(cfg: &TableCfg, data: &[u8], sink: &mut S) {
    let mut addr = cfg.start_addr;
    for chunk in data.chunks(ROW_BYTES) {
        sink.emit_row(&render_row(cfg, addr, chunk));
        addr = addr.wrapping_add(ROW_BYTES as u32);
    }
}

/// Render an mbuf chain, 16 bytes per row.
///
/// With `follow_chain` set the whole chain is walked and the output is
/// identical to rendering the concatenated segments as one flat slice;
/// otherwise only the head segment's bytes are rendered. An empty chain is a
/// no-op.
pub fn mbuf_tbl_16<S: RowSink + ?Sized>(
    cfg: &TableCfg,
    chain: &Mbuf,
    follow_chain: bool,
    sink: &mut S,
) {
    if follow_chain {
        render_stream(cfg, chain.iter(), sink);
    } else {
        render_stream(cfg, chain.seg_data().iter().copied(), sink);
    }
}

/// Convenience wrapper rendering a flat slice into a `String`, one row per
/// line.
pub fn bytes_tbl_string(cfg: &TableCfg, data: &[u8]) -> String {
    let mut out = String::new();
    bytes_tbl_16(cfg, data, &mut out);
    out
}
