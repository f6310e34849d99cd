//! Runs topics against an output sink.

use std::io::Write;

use chrono::NaiveDateTime;
use tour_common::console::banner;
use tour_common::{Result, Topic};

use crate::TourConfig;

const OPENING: &str = "Rust Basics: A Guided Tour";
const CLOSING: &str = "Tour complete!";

/// Runs a single topic. `now` feeds the `match` section, which classifies
/// the current weekday and hour.
pub fn run_topic<W: Write>(out: &mut W, topic: Topic, now: NaiveDateTime) -> Result<()> {
    let _span = tracing::debug_span!("topic", key = topic.key()).entered();
    tracing::debug!(title = topic.title(), "running topic");

    match topic {
        Topic::Variables => tour_chapter1::demonstrate_variables(out),
        Topic::Constants => tour_chapter1::demonstrate_constants(out),
        Topic::Types => tour_chapter1::demonstrate_data_types(out),
        Topic::ArraysAndSlices => tour_chapter1::demonstrate_arrays_and_slices(out),
        Topic::Maps => tour_chapter1::demonstrate_maps(out),
        Topic::IfElse => tour_chapter2::demonstrate_if_else(out),
        Topic::Loops => tour_chapter2::demonstrate_loops(out),
        Topic::Match => tour_chapter2::demonstrate_match(out, now),
        Topic::Functions => tour_chapter2::demonstrate_functions(out),
        Topic::Structs => tour_chapter3::demonstrate_structs(out),
        Topic::Traits => tour_chapter3::demonstrate_traits(out),
        Topic::References => tour_chapter3::demonstrate_references(out),
        Topic::Defer => tour_chapter3::demonstrate_defer(out),
    }
}

/// Runs every configured topic in order, framed by the banner if enabled.
pub fn run_tour<W: Write>(out: &mut W, config: &TourConfig, now: NaiveDateTime) -> Result<()> {
    if config.banner {
        banner(out, &[OPENING])?;
    }

    for &topic in &config.topics {
        run_topic(out, topic, now)?;
    }

    if config.banner {
        writeln!(out)?;
        banner(out, &[CLOSING])?;
    }

    tracing::debug!(topics = config.topics.len(), "tour finished");
    Ok(())
}

/// Prints the catalogue: key, title and aliases per line.
pub fn list_topics<W: Write>(out: &mut W) -> Result<()> {
    for topic in Topic::ALL {
        writeln!(
            out,
            "{:<12} {:<20} (also: {})",
            topic.key(),
            topic.title(),
            topic.aliases().join(", ")
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tour_common::console::captured;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 17)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_each_topic_prints_its_own_heading() {
        for topic in Topic::ALL {
            let mut out = Vec::new();
            run_topic(&mut out, topic, noon()).unwrap();
            let text = captured(&out);
            let expected = format!("\n=== {} ===\n", topic.title());
            assert!(text.starts_with(&expected), "{topic} output began with {text:?}");
        }
    }

    #[test]
    fn test_banner_toggle() {
        let with = TourConfig {
            topics: vec![Topic::Constants],
            banner: true,
        };
        let without = TourConfig {
            banner: false,
            ..with.clone()
        };

        let mut out = Vec::new();
        run_tour(&mut out, &with, noon()).unwrap();
        let text = captured(&out);
        assert!(text.contains(OPENING));
        assert!(text.contains(CLOSING));

        let mut out = Vec::new();
        run_tour(&mut out, &without, noon()).unwrap();
        let text = captured(&out);
        assert!(!text.contains(OPENING));
        assert!(text.starts_with("\n=== Constants ==="));
    }

    #[test]
    fn test_list_topics() {
        let mut out = Vec::new();
        list_topics(&mut out).unwrap();
        let text = captured(&out);

        assert_eq!(text.lines().count(), Topic::ALL.len());
        assert!(text.lines().next().unwrap().starts_with("variables"));
        assert!(text.contains("(also: switch)"));
    }
}
