//! Basic usage example for bloomwire
//!
//! Run with: cargo run --example basic_usage

use bloomwire::{Error, Filter, WireHeader};

fn main() -> Result<(), Error> {
    println!("BloomWire Basic Usage Example");
    println!("=============================");

    // Example 1: construct, add, query
    println!("\n1. Membership queries:");
    let mut filter = Filter::new(1000, 0.01)?;
    filter.add(b"alice");
    filter.add(b"bob");

    println!("  bit array: {} bytes", filter.bytes_len());
    println!("  contains(alice) = {}", filter.contains(b"alice"));
    println!("  contains(mallory) = {}", filter.contains(b"mallory"));

    // Example 2: owning-copy export through the wire codec
    println!("\n2. Wire round-trip:");
    let payload = filter.dump();
    let header = WireHeader::decode(&payload)?;
    println!(
        "  encoded {} bytes (checksum=0x{:04X}, code={}, cardinality={})",
        payload.len(),
        header.checksum,
        header.error_rate_code,
        header.cardinality
    );

    let restored = Filter::load(&payload)?;
    println!("  restored contains(alice) = {}", restored.contains(b"alice"));

    // Example 3: zero-copy export and codec-free rehydration
    println!("\n3. Zero-copy view:");
    let view = filter.view();
    println!(
        "  capacity={}, error_rate={}, {} live bytes, no copy",
        view.capacity,
        view.error_rate,
        view.bits.len()
    );

    let seeded = Filter::with_data(view.capacity, view.error_rate, view.bits)?;
    println!("  seeded contains(bob) = {}", seeded.contains(b"bob"));

    Ok(())
}
