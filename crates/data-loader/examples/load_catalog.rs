use data_loader::Catalog;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/films.csv"));

    println!("Loading catalog from {}...\n", path.display());

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&path, 0).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let report = catalog.report();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Films: {}", report.accepted);
    println!("Malformed lines skipped: {}", report.skipped_malformed);
    println!("Distinct actors: {}", catalog.actor_index().len());
}
