use super::App;
use crate::stories::{
    DisplayRow, FilterMode, RankTable, SortMode, StoryFetcher, StoryRecord, display_rows,
    sort_stories,
};

impl<F: StoryFetcher> App<F> {
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter_mode = mode;
        self.selected_index = 0;
    }

    /// Re-sort the loaded stories. Tiers are left as they are.
    pub fn set_sort(&mut self, mode: SortMode) {
        self.sort_mode = mode;
        sort_stories(&mut self.stories, mode);
        self.selected_index = 0;
    }

    /// Replace the loaded day. Ranks are taken from `stories` in cache order,
    /// before the active sort is applied.
    pub(super) fn set_day(&mut self, mut stories: Vec<StoryRecord>) {
        self.ranks = RankTable::new(&stories);
        sort_stories(&mut stories, self.sort_mode);
        self.stories = stories;
        self.selected_index = 0;
        self.status_message = if self.display_rows().is_empty() {
            Some("No stories found".to_string())
        } else {
            None
        };
    }

    pub fn display_rows(&self) -> Vec<DisplayRow<'_>> {
        display_rows(&self.stories, &self.ranks, self.filter_mode)
    }

    pub fn selected_story(&self) -> Option<&StoryRecord> {
        self.display_rows()
            .get(self.selected_index)
            .map(|row| row.story)
    }
}
