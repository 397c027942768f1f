//! Points ranking and the visual tier derived from it.
//!
//! Tiers come from the full day collection, so narrowing the view with a
//! filter never recolours a story.

use super::model::StoryRecord;
use std::collections::HashMap;

pub const TOP_TIER_SIZE: usize = 10;
pub const HIGH_TIER_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Top,
    High,
    Mid,
    Featured,
    Low,
}

impl Tier {
    /// 1 for the most salient tier, 5 for the least.
    pub fn level(&self) -> u8 {
        match self {
            Tier::Top => 1,
            Tier::High => 2,
            Tier::Mid => 3,
            Tier::Featured => 4,
            Tier::Low => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Top => "top",
            Tier::High => "high",
            Tier::Mid => "mid",
            Tier::Featured => "featured",
            Tier::Low => "low",
        }
    }
}

/// Stories ordered by points, highest first. Equal points keep input order.
pub fn points_order<'a, I>(stories: I) -> Vec<&'a StoryRecord>
where
    I: IntoIterator<Item = &'a StoryRecord>,
{
    let mut ordered: Vec<&StoryRecord> = stories.into_iter().collect();
    ordered.sort_by(|a, b| b.points.cmp(&a.points));
    ordered
}

pub fn tier_for(rank: Option<usize>, total: usize, homepage: bool) -> Tier {
    match rank {
        Some(r) if r < TOP_TIER_SIZE => Tier::Top,
        Some(r) if r < HIGH_TIER_SIZE => Tier::High,
        Some(r) if r < total / 2 => Tier::Mid,
        _ if homepage => Tier::Featured,
        _ => Tier::Low,
    }
}

/// Rank lookup by story id over one day's collection.
///
/// Built once from the day in cache order, so ties at any cut-off resolve
/// the same way whatever order the stories are later shown in.
#[derive(Debug, Clone, Default)]
pub struct RankTable {
    ranks: HashMap<String, usize>,
    /// Ranks among titled stories only; used to pick filter prefixes
    titled_ranks: HashMap<String, usize>,
    titled: usize,
    total: usize,
}

fn rank_map<'a, I>(stories: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a StoryRecord>,
{
    let mut ranks = HashMap::new();
    for (i, story) in points_order(stories).into_iter().enumerate() {
        ranks.entry(story.id.clone()).or_insert(i);
    }
    ranks
}

impl RankTable {
    pub fn new(stories: &[StoryRecord]) -> Self {
        let titled: Vec<&StoryRecord> = stories.iter().filter(|s| s.has_title()).collect();
        Self {
            ranks: rank_map(stories),
            titled: titled.len(),
            titled_ranks: rank_map(titled),
            total: stories.len(),
        }
    }

    pub fn rank(&self, id: &str) -> Option<usize> {
        self.ranks.get(id).copied()
    }

    /// Rank of `id` among the day's titled stories.
    pub fn titled_rank(&self, id: &str) -> Option<usize> {
        self.titled_ranks.get(id).copied()
    }

    /// Number of titled stories in the day.
    pub fn titled_count(&self) -> usize {
        self.titled
    }

    pub fn tier(&self, story: &StoryRecord) -> Tier {
        tier_for(self.rank(&story.id), self.total, story.homepage)
    }
}
