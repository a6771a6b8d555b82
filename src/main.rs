// recycle_pool - demo binary
// Run examples with: cargo run --example basic

use recycle_pool::PoolRegistry;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== recycle_pool ===");
    println!("See demos/ directory for usage examples");
    println!("Run: cargo run --example basic");
    println!();

    // Quick demo
    println!("Quick Demo:");
    let registry = PoolRegistry::new();
    let lists = registry.list_pool::<u32>();

    for frame in 0..3 {
        let mut visible = lists.get_pooled();
        visible.extend(frame..frame + 4);
        println!("  Frame {}: {:?}", frame, *visible);
    }

    let pool = lists.pool();
    println!(
        "  Created: {}, active: {}, inactive: {}",
        pool.total_created(),
        pool.active_count(),
        pool.inactive_count()
    );
}
