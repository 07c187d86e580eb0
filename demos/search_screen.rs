//! Drives the search screen the way a UI would: type-ahead queries with
//! simulated latency, a tab switch, and the recent-search list.

use std::sync::Arc;
use std::time::Duration;

use wayfare_rs::prelude::*;

#[tokio::main]
async fn main() {
    let mut screen = SearchScreen::new(Arc::new(sample_catalog()))
        .with_latency(Duration::from_millis(150));

    println!("Popular: {}", screen.popular_searches().join(", "));
    println!("Recent:  {}", screen.recent().to_vec().join(", "));
    let trending: Vec<&str> = screen.trending().iter().map(|d| d.name.as_str()).collect();
    println!("Trending: {}\n", trending.join(", "));

    // Two keystrokes in flight; the slower, older one must lose.
    let older = screen.set_query("tok").map(|r| tokio::spawn(r.run(Duration::from_millis(400))));
    let newer = screen.set_query("tokyo").map(|r| tokio::spawn(r.run(Duration::from_millis(100))));

    for handle in [newer, older].into_iter().flatten() {
        if let Ok(response) = handle.await {
            let seq = response.seq();
            let applied = screen.apply(response);
            println!("response #{seq} applied: {applied}");
        }
    }
    println!("{} results for \"{}\"", screen.results().len(), screen.query());

    if let Some(request) = screen.set_filter(KindFilter::Only(Kind::Activity)) {
        let response = request.run(screen.latency()).await;
        screen.apply(response);
    }
    for r in screen.results() {
        println!("  {} ({})", r.name, r.location);
    }

    screen.search("Rome").await;
    println!("\nRecent now: {}", screen.recent().to_vec().join(", "));
}
