//! Nightly example: age a shop's stock over several days
//!
//! This example demonstrates:
//! - Constructing items for every category
//! - Routing an extra name through a custom rule registry
//! - Reporting the two fields after each night
//!
//! Run with `cargo run --example nightly -- 5` to simulate five nights.
//! Set `RUST_LOG=gilded_rose=trace` to see every tick.

use gilded_rose::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RuleError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    let nights: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2);

    // The hourglass has no entry in the standard table
    let mut selector = UpdateRuleSelector::new();
    selector.register("Enchanted Hourglass", UpdateRule::FractionalDecay)?;

    let mut stock = vec![
        Item::new("Normal Item", 10.0, 20),
        Item::new("Aged Brie", 2.0, 0),
        Item::new("Aged Wine", 1.0, 10),
        Item::new("Whisky", 1.0, 30),
        Item::new("Elixir of the Mongoose", 5.0, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0.0, LEGENDARY_QUALITY),
        Item::new("Sulfuras, Hand of Ragnaros", -1.0, LEGENDARY_QUALITY),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15.0, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10.0, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5.0, 49),
        Item::new("Conjured Mana Cake", 3.0, 6),
        Item::new("Enchanted Hourglass", 1.0, 12),
    ];

    tracing::info!(items = stock.len(), nights, "simulating shop");

    for night in 0..=nights {
        println!("-------- day {} --------", night);
        println!("name, shelf_life, quality");
        for item in &stock {
            println!("{}", item);
        }
        println!();

        if night < nights {
            for item in &mut stock {
                item.tick_with(&selector);
            }
        }
    }

    Ok(())
}
