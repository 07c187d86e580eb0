//! Basic usage example for wayfare-rs
//!
//! This example demonstrates how to:
//! - Load the bundled travel catalog
//! - Search across destinations, hotels and activities
//! - Narrow results to one tab
//! - Plan a day and track a budget

use rand::rngs::StdRng;
use rand::SeedableRng;
use wayfare_rs::itinerary::QUICK_ADD_LIMIT;
use wayfare_rs::prelude::*;
use wayfare_rs::text::format_usd;

fn main() -> Result<()> {
    println!("=== wayfare-rs Basic Usage Example ===\n");

    let catalog = shared_sample();
    let stats = catalog.stats();
    println!(
        "Catalog: {} destinations, {} hotels, {} activities\n",
        stats.destinations, stats.hotels, stats.activities
    );

    // Example 1: search everything
    println!("--- Example 1: search \"tokyo\" ---");
    for r in search(catalog, "tokyo") {
        println!("[{:<11}] {:<8} {} ({})", r.kind, r.icon.as_str(), r.name, r.location);
    }
    println!();

    // Example 2: hotels only
    println!("--- Example 2: hotels in Shinjuku ---");
    for r in search_filtered(catalog, "shinjuku", &KindFilter::Only(Kind::Hotel)) {
        let rating = r.details.rating.unwrap_or_default();
        let price = r.details.price.unwrap_or_default();
        println!("{} {rating:.1}* {}/night", r.name, format_usd(f64::from(price)));
    }
    println!();

    // Example 3: itinerary with a seeded suggestion
    println!("--- Example 3: itinerary ---");
    let start = chrono::Local::now().date_naive();
    let mut plan = Itinerary::sample(start, 3);
    let mut rng = StdRng::seed_from_u64(2024);
    for day in 0..plan.len() {
        let quick = plan.available(day, catalog, QUICK_ADD_LIMIT)?;
        println!("{}: {} quick-add option(s)", plan.day(day)?.date_label(), quick.len());
    }
    if let Some(item) = plan.add_suggested(0, catalog, &mut rng)? {
        println!("Suggested for day 1: {} at {}", item.activity_id, item.time);
    }
    println!();

    // Example 4: budget
    println!("--- Example 4: budget ---");
    let budget = TripBudget::sample();
    println!(
        "{}: {} of {} spent, {} remaining ({:.0}%)",
        budget.destination,
        format_usd(budget.total_spent()),
        format_usd(budget.limit),
        format_usd(budget.remaining()),
        budget.percent_spent()
    );
    for (category, total) in budget.category_totals() {
        println!("  {category:<14} {}", format_usd(total));
    }

    Ok(())
}
