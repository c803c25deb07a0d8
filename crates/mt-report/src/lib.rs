//! `mt-report` — renders a generated ticket board as a fixed-width text
//! table, written to any `io::Write` sink (stdout in the demo binary, an
//! in-memory buffer in tests).

pub mod error;
pub mod table;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ReportError, ReportResult};
pub use table::{format_row, header, render, render_to_string, separator_for};
