use super::model::StoryRecord;
use super::rank::RankTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterMode {
    #[serde(rename = "top_10")]
    Top10,
    #[serde(rename = "top_20")]
    Top20,
    #[serde(rename = "top_half")]
    TopHalf,
    #[default]
    #[serde(rename = "all")]
    All,
}

impl FilterMode {
    pub const ALL: [FilterMode; 4] = [
        FilterMode::Top10,
        FilterMode::Top20,
        FilterMode::TopHalf,
        FilterMode::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::Top10 => "Top 10",
            FilterMode::Top20 => "Top 20",
            FilterMode::TopHalf => "Top 50%",
            FilterMode::All => "All Stories",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FilterMode::Top10 => "top_10",
            FilterMode::Top20 => "top_20",
            FilterMode::TopHalf => "top_half",
            FilterMode::All => "all",
        }
    }

    /// How many of `valid_count` titled stories this mode keeps.
    pub fn take_count(&self, valid_count: usize) -> usize {
        match self {
            FilterMode::Top10 => valid_count.min(10),
            FilterMode::Top20 => valid_count.min(20),
            FilterMode::TopHalf => valid_count / 2,
            FilterMode::All => valid_count,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top_10" | "top10" | "10" => Ok(FilterMode::Top10),
            "top_20" | "top20" | "20" => Ok(FilterMode::Top20),
            "top_half" | "half" | "50%" => Ok(FilterMode::TopHalf),
            "all" => Ok(FilterMode::All),
            other => Err(format!(
                "unknown filter '{}' (expected top_10, top_20, top_half or all)",
                other
            )),
        }
    }
}

/// Select the stories `mode` shows, in the order they appear in `stories`.
///
/// Membership comes from `ranks`, the points ranking of the whole day in
/// cache order, so the active sort only decides the output order. Untitled
/// stories never take a slot.
pub fn filter_stories<'a>(
    stories: &'a [StoryRecord],
    ranks: &RankTable,
    mode: FilterMode,
) -> Vec<&'a StoryRecord> {
    let valid = stories.iter().filter(|s| s.has_title());
    if mode == FilterMode::All {
        return valid.collect();
    }

    let keep = mode.take_count(ranks.titled_count());
    valid
        .filter(|s| ranks.titled_rank(&s.id).is_some_and(|rank| rank < keep))
        .take(keep)
        .collect()
}
