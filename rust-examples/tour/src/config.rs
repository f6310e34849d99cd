//! Run configuration for the tour.

use std::collections::BTreeSet;

use tour_common::{Result, Topic};

/// Which topics to run and whether to frame them with a banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourConfig {
    /// Topics to run, in catalogue order, each at most once.
    pub topics: Vec<Topic>,
    pub banner: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            topics: Topic::ALL.to_vec(),
            banner: true,
        }
    }
}

impl TourConfig {
    /// Builds a config from topic names given on the command line.
    ///
    /// An empty selection means every topic. Names may be keys or aliases;
    /// duplicates collapse and the result is always in catalogue order, no
    /// matter the order the names were given in.
    pub fn from_selection<S: AsRef<str>>(names: &[S], banner: bool) -> Result<Self> {
        if names.is_empty() {
            return Ok(Self {
                banner,
                ..Self::default()
            });
        }

        let selected = names
            .iter()
            .map(|name| name.as_ref().parse::<Topic>())
            .collect::<Result<BTreeSet<Topic>>>()?;

        Ok(Self {
            topics: selected.into_iter().collect(),
            banner,
        })
    }
}
