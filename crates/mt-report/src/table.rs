//! Pricing-table layout.
//!
//! # Format
//!
//! ```text
//! Spaceline            Days  Trip type            Price
//! =====================================================
//! Virgin Galactic      30    Round-trip           $44M
//! ```
//!
//! Four left-justified columns joined by single spaces; the separator is
//! `=` repeated once per header **character** (`chars().count()`, not
//! `len()` — the count must stay right if a header ever carries non-ASCII
//! text). Rows print in generation order. The price is the fare rounded to
//! the nearest whole million, as `$<n>M` with a trailing space carried over
//! from the board's original layout.

use std::io::Write;

use mt_tickets::Ticket;

use crate::ReportResult;

// ── Column widths ─────────────────────────────────────────────────────────────

const SPACELINE_WIDTH: usize = 20;
const DAYS_WIDTH: usize = 5;
const TRIP_WIDTH: usize = 20;

// ── Line formatting ───────────────────────────────────────────────────────────

/// The four-column header line.
pub fn header() -> String {
    format!(
        "{:<sw$} {:<dw$} {:<tw$} {}",
        "Spaceline",
        "Days",
        "Trip type",
        "Price",
        sw = SPACELINE_WIDTH,
        dw = DAYS_WIDTH,
        tw = TRIP_WIDTH,
    )
}

/// A `=` rule as long as `header` is, counted in characters.
pub fn separator_for(header: &str) -> String {
    "=".repeat(header.chars().count())
}

/// One data row, in the header's column widths.
pub fn format_row(ticket: &Ticket) -> String {
    format!(
        "{:<sw$} {:<dw$} {:<tw$} ${}M ",
        ticket.spaceline.as_str(),
        ticket.days,
        ticket.trip_type.as_str(),
        ticket.cost_millions.round() as i64,
        sw = SPACELINE_WIDTH,
        dw = DAYS_WIDTH,
        tw = TRIP_WIDTH,
    )
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Write the full table — header, separator, one row per ticket — to `out`.
///
/// Write errors propagate as `ReportError::Io`; nothing is buffered here,
/// so a partially written table is possible if the sink fails mid-way.
pub fn render<W: Write>(tickets: &[Ticket], out: &mut W) -> ReportResult<()> {
    let header = header();
    writeln!(out, "{header}")?;
    writeln!(out, "{}", separator_for(&header))?;
    for ticket in tickets {
        writeln!(out, "{}", format_row(ticket))?;
    }
    out.flush()?;
    Ok(())
}

/// Render the table into a `String`. Test and preview helper.
pub fn render_to_string(tickets: &[Ticket]) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    render(tickets, &mut buf).expect("in-memory render");
    String::from_utf8(buf).expect("table output is UTF-8")
}
