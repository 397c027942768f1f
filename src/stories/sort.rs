use super::model::StoryRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    Points,
    Comments,
    #[default]
    #[serde(alias = "date")]
    Time,
}

impl SortMode {
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Points => "Points",
            SortMode::Comments => "Comments",
            SortMode::Time => "Date",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortMode::Points => "points",
            SortMode::Comments => "comments",
            SortMode::Time => "time",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "points" => Ok(SortMode::Points),
            "comments" => Ok(SortMode::Comments),
            "time" | "date" => Ok(SortMode::Time),
            other => Err(format!(
                "unknown sort '{}' (expected points, comments or time)",
                other
            )),
        }
    }
}

/// Descending comparison on the field `mode` names.
pub fn compare_stories(mode: SortMode, a: &StoryRecord, b: &StoryRecord) -> Ordering {
    match mode {
        SortMode::Points => b.points.cmp(&a.points),
        SortMode::Comments => b.comments.cmp(&a.comments),
        SortMode::Time => b.timestamp.cmp(&a.timestamp),
    }
}

/// Reorder `stories` in place. The sort is stable.
pub fn sort_stories(stories: &mut [StoryRecord], mode: SortMode) {
    stories.sort_by(|a, b| compare_stories(mode, a, b));
}
