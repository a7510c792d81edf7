// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-07-21

/// Per-byte display format for table cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayFmt {
    /// Two lowercase hex digits per byte.
    #[default]
    Hex,
    /// Right-aligned decimal, three columns per byte.
    Dec,
    /// One character per byte; non-printables render as `.`.
    Ascii,
}

/// Configuration for one render call.
///
/// Construct with `Default` and assign the fields you need, the same way the
/// caller would zero a config struct and set a couple of flags. The config is
/// taken by reference and never mutated during rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableCfg {
    /// Numeric base used for the byte cells.
    pub format: DisplayFmt,
    /// Append an ASCII side-view (` |...|`) to each row.
    pub show_ascii: bool,
    /// Prefix each row with a running address.
    pub show_addr: bool,
    /// Address shown for the first row; subsequent rows add 16 each.
    ///
    /// This is display-only: it is never derived from, or checked against,
    /// the data actually rendered.
    pub start_addr: u32,
}
