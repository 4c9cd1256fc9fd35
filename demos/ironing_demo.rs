//! Ironing Demo
//!
//! Drives a Regular, a Premium and a Linen iron through a fixed script and
//! prints every status line they report.
//!
//! Key concepts:
//! - One state machine shared by all models
//! - Per-model cleaning and water-light policies
//! - Random program temperatures
//!
//! Run with: cargo run --example ironing_demo
//! Set RUST_LOG=ironsim=debug to see state changes as they happen.

use ironsim::{Iron, Report};
use tracing_subscriber::EnvFilter;

fn show(report: Report) {
    println!("{report}");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut regular = Iron::regular();
    let mut premium = Iron::premium();
    let mut linen = Iron::linen();

    println!("\n=== Testing regular ===\n");
    show(regular.turn_on());
    show(regular.iron_at_temperature(170));
    show(regular.use_steam());
    show(regular.use_steam());
    show(regular.iron_by_program("Cotton"));
    show(regular.iron_by_program("Linen"));
    show(regular.descale());

    println!("\n=== Testing premium ===\n");
    show(premium.turn_on());
    show(premium.use_steam());
    show(premium.iron_at_temperature(150));
    show(premium.use_steam());
    show(premium.iron_at_temperature(170));
    show(premium.iron_at_temperature(225));
    show(premium.iron_by_program("Silk"));
    show(premium.use_steam());
    show(premium.iron_by_program("Silk"));
    show(premium.use_steam());
    show(premium.iron_by_program("Synthetics"));
    show(premium.iron_by_program("Synthetics"));
    show(premium.iron_by_program("Linen"));
    show(premium.use_steam());
    show(premium.iron_at_temperature(97));

    println!("\n=== Testing linen ===\n");
    show(linen.turn_on());
    show(linen.iron_at_temperature(210));
    show(linen.iron_by_program("Silk"));
    show(linen.use_steam());
    show(linen.iron_at_temperature(130));
    show(linen.iron_by_program("Linen"));
    show(linen.descale());

    show(linen.turn_off());
    show(premium.turn_off());
    show(regular.turn_off());

    println!("\n=== Final status ===\n");
    for iron in [&regular, &premium, &linen] {
        match serde_json::to_string_pretty(&iron.status()) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("could not render status for {}: {err}", iron.name()),
        }
    }
}
