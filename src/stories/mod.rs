pub mod cache;
pub mod dates;
pub mod filter;
pub mod model;
pub mod rank;
pub mod sort;
pub mod update;

pub use cache::StoryCache;
pub use filter::{FilterMode, filter_stories};
pub use model::{RawStory, StoryRecord, to_int};
pub use rank::{RankTable, Tier, points_order, tier_for};
pub use sort::{SortMode, sort_stories};
pub use update::{PageEntry, StoryFetcher, Updater, split_combined};

/// A story as the table shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRow<'a> {
    pub story: &'a StoryRecord,
    pub tier: Tier,
}

/// Rows for an already sorted collection.
///
/// `ranks` must be built from the full day collection so tiers stay the
/// same under every filter and sort.
pub fn display_rows<'a>(
    sorted: &'a [StoryRecord],
    ranks: &RankTable,
    filter: FilterMode,
) -> Vec<DisplayRow<'a>> {
    filter_stories(sorted, ranks, filter)
        .into_iter()
        .map(|story| DisplayRow {
            story,
            tier: ranks.tier(story),
        })
        .collect()
}

/// Sort a copy of `day` by `sort`, then filter and tier it.
///
/// Ranks come from `day` as given, before sorting.
pub fn view_day(day: &[StoryRecord], filter: FilterMode, sort: SortMode) -> Vec<(StoryRecord, Tier)> {
    let ranks = RankTable::new(day);
    let mut sorted = day.to_vec();
    sort_stories(&mut sorted, sort);
    display_rows(&sorted, &ranks, filter)
        .into_iter()
        .map(|row| (row.story.clone(), row.tier))
        .collect()
}
