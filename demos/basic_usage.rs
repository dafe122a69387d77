//! Basic usage example for codepoint-set.
//!
//! Builds a small XML-style name classifier and walks through the core
//! operations. Run with `RUST_LOG=trace` to see wide-tier growth events.

use codepoint_set::{CodePointLookup, CodePointSet};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), codepoint_set::CodePointSetError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== CodePointSet - Basic Usage Example ===\n");

    // Build a name-start table from char ranges
    let mut name_start = CodePointSet::from_ranges(&[(':', ':'), ('A', 'Z'), ('_', '_'), ('a', 'z')]);
    println!("ASCII name-start characters: {}", name_start.len());
    println!("  capacity: {}", name_start.capacity());

    // Extend into the wide tier
    println!("\nAdding Greek and CJK ranges");
    name_start.insert_range(0x370..=0x37D)?;
    name_start.insert_range(0x4E00..=0x9FFF)?;
    println!("  len: {}", name_start.len());
    println!("  capacity: {}", name_start.capacity());

    // Membership checks
    println!("\nMembership checks:");
    for c in ['x', '-', 'ͳ', '日', '😀'] {
        println!("  matches({:?}): {}", c, name_start.matches(c));
    }

    // Name characters = name-start plus digits and a few marks
    let mut name_char = name_start.clone();
    name_char.insert_range('0' as u32..='9' as u32)?;
    name_char.insert('-' as u32)?;
    name_char.insert('.' as u32)?;

    let input = "xml:lang-2 rest";
    let name_end = input
        .char_indices()
        .take_while(|&(i, c)| if i == 0 { name_start.matches(c) } else { name_char.matches(c) })
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    println!("\nLeading name in {:?}: {:?}", input, &input[..name_end]);

    // Ordered traversal
    println!("\nFirst 5 members: {:?}", name_char.iter().take(5).collect::<Vec<_>>());
    println!("Members in 0x41..=0x46: {:?}", name_char.range(0x41..=0x46).collect::<Vec<_>>());
    println!("first: {:?}, last: {:?}", name_char.first(), name_char.last());

    // Removal policies
    println!("\nRemoval:");
    println!("  remove('-'): {:?}", name_char.remove('-' as u32));
    println!("  remove('-') again: {:?}", name_char.remove('-' as u32));
    println!("  remove_or_else('-', || 0): {}", name_char.remove_or_else('-' as u32, || 0u32));
    println!("  try_remove('-'): {:?}", name_char.try_remove('-' as u32));

    // Out-of-range insertion is the only failure
    println!("\nInsert 0x110000: {:?}", name_char.insert(0x110000));

    // Complement
    let not_name = name_start.complement();
    println!("\nComplement of name-start has {} members", not_name.len());
    println!("  contains('-'): {}", not_name.contains('-' as u32));

    // Clear keeps capacity
    let capacity = name_char.capacity();
    name_char.clear();
    println!("\nAfter clear: len = {}, capacity unchanged = {}", name_char.len(), name_char.capacity() == capacity);

    println!("\n=== Example Complete ===");
    Ok(())
}
