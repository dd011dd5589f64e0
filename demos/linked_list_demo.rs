use singly::LinkedList;
use tracing_subscriber::{prelude::*, EnvFilter};

// RUST_LOG=singly=trace cargo run --example linked_list_demo
fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("singly=info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let mut linked_list: LinkedList<f64> = LinkedList::new();

    linked_list.push_back(1.0);
    linked_list.push_back(2.0);
    linked_list.push_back(3.0);
    println!("After appending 1, 2, 3:");
    println!("{}", linked_list.display());

    linked_list.push_front(0.0);
    println!("\nAfter prepending 0:");
    println!("{}", linked_list.display());

    linked_list.insert(1.5, 2);
    println!("\nAfter inserting 1.5 at position 2:");
    println!("{}", linked_list.display());

    linked_list.delete(&1.5);
    println!("\nAfter deleting 1.5:");
    println!("{}", linked_list.display());

    println!("\nSearch for 2: {}", linked_list.search(&2.0));
    println!("Search for 5: {}", linked_list.search(&5.0));

    println!("\nLength of the list: {}", linked_list.size());

    match LinkedList::<f64>::from_string(&linked_list.display()) {
        Ok(parsed) => tracing::info!(equal = (parsed == linked_list), "parsed rendering back"),
        Err(err) => tracing::error!(%err, "could not parse rendering"),
    }
}
