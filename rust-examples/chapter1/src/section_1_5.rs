//! Section 1.5: Maps
//!
//! Three flavours of associative map:
//!
//! - **`HashMap<K, V>`**: hashed, O(1) average lookup, iteration order is unspecified
//! - **`BTreeMap<K, V>`**: ordered by key, so iteration is deterministic
//! - **`im::OrdMap<K, V>`**: persistent; `update` returns a new map and the
//!   old one stays valid, sharing structure with the new one
//!
//! Lookups return `Option<&V>` rather than a zero value plus a "found" flag,
//! so a missing key can never be mistaken for a stored zero.

use std::collections::{BTreeMap, HashMap};
use std::io::Write;

use im::OrdMap;
use tour_common::Result;
use tour_common::console::heading;

/// The ages directory used throughout the section.
///
/// # Examples
/// ```
/// use tour_chapter1::section_1_5::ages;
///
/// let mut ages = ages();
/// assert_eq!(ages.get("Alice"), Some(&25));
/// assert_eq!(ages.get("Bob"), Some(&30));
///
/// ages.remove("Bob");
/// assert_eq!(ages.get("Bob"), None);
/// assert_eq!(ages.get("Alice"), Some(&25));
/// ```
pub fn ages() -> BTreeMap<String, u32> {
    [("Alice", 25), ("Bob", 30), ("Carol", 28)]
        .into_iter()
        .map(|(name, age)| (name.to_string(), age))
        .collect()
}

/// Counts whitespace-separated words using the entry API.
pub fn word_counts(text: &str) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for word in text.split_whitespace() {
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

/// Returns a `HashMap`'s entries sorted by key, for stable printing.
pub fn sorted_entries<K, V>(map: &HashMap<K, V>) -> Vec<(&K, &V)>
where
    K: Ord,
{
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Returns a new persistent map with `name` bound to `age`; `base` is untouched.
pub fn with_entry(base: &OrdMap<String, u32>, name: &str, age: u32) -> OrdMap<String, u32> {
    base.update(name.to_string(), age)
}

pub fn demonstrate_maps<W: Write>(out: &mut W) -> Result<()> {
    heading(out, "Maps")?;

    // Built up one insert at a time
    let mut scores: HashMap<String, u32> = HashMap::new();
    scores.insert("Zhang San".to_string(), 95);
    scores.insert("Li Si".to_string(), 87);
    scores.insert("Wang Wu".to_string(), 92);

    // Lookup yields Option<&V>
    match scores.get("Zhang San") {
        Some(score) => writeln!(out, "Zhang San's score: {score} (present: true)")?,
        None => writeln!(out, "Zhang San has no score (present: false)")?,
    }
    writeln!(
        out,
        "Zhao Liu present: {}",
        scores.contains_key("Zhao Liu")
    )?;

    // Ordered iteration
    writeln!(out, "all ages:")?;
    for (name, age) in &ages() {
        writeln!(out, "  {name}: {age}")?;
    }

    scores.remove("Li Si");
    let remaining: Vec<String> = sorted_entries(&scores)
        .into_iter()
        .map(|(name, score)| format!("{name}:{score}"))
        .collect();
    writeln!(out, "scores after removing Li Si: {}", remaining.join(" "))?;

    let counts = word_counts("the quick fox jumps over the lazy dog the end");
    writeln!(out, "'the' appears {} times", counts.get("the").copied().unwrap_or(0))?;

    // Persistent update: `before` keeps its three entries
    let before: OrdMap<String, u32> = ages().into_iter().collect();
    let after = with_entry(&before, "Dave", 35);
    writeln!(
        out,
        "persistent map: before has {} entries, after has {} (Dave in before: {})",
        before.len(),
        after.len(),
        before.contains_key("Dave")
    )?;
    tracing::debug!(before = before.len(), after = after.len(), "persistent map updated");

    Ok(())
}
