//! board — prints a Mars ticket pricing board.
//!
//! Ten randomly priced tickets to Mars, one fixed-width table, nothing
//! else on stdout. Run it again for fresh fares; set `seed` in the config
//! below to pin a board in place.

use anyhow::Result;

use mt_core::{BoardConfig, TicketRng};
use mt_report::render;
use mt_tickets::{Spaceline, generate_tickets};

fn main() -> Result<()> {
    // 1. Configuration — the published board: 10 tickets, entropy-seeded.
    let config = BoardConfig::default();
    config.validate()?;

    // 2. One RNG for the whole run.
    let mut rng = match config.seed {
        Some(seed) => TicketRng::new(seed),
        None => TicketRng::from_entropy(),
    };

    // 3. Generate and print.
    let tickets = generate_tickets(&config, &Spaceline::CATALOG, &mut rng)?;
    let stdout = std::io::stdout();
    render(&tickets, &mut stdout.lock())?;

    Ok(())
}
