use super::model::StoryRecord;
use chrono::NaiveDate;
use std::collections::HashMap;

/// In-memory store of each reference-timezone date's stories.
///
/// Lives as long as the process; entries are only replaced or removed
/// explicitly.
#[derive(Debug, Default)]
pub struct StoryCache {
    entries: HashMap<NaiveDate, Vec<StoryRecord>>,
}

impl StoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, date: NaiveDate, stories: Vec<StoryRecord>) {
        self.entries.insert(date, stories);
    }

    /// `None` means nothing has been fetched for `date`; an empty slice means
    /// a fetch succeeded and found no stories.
    pub fn get(&self, date: NaiveDate) -> Option<&[StoryRecord]> {
        self.entries.get(&date).map(Vec::as_slice)
    }

    pub fn invalidate(&mut self, date: NaiveDate) -> bool {
        self.entries.remove(&date).is_some()
    }

    /// Remove and return the entry for `date`.
    pub fn take(&mut self, date: NaiveDate) -> Option<Vec<StoryRecord>> {
        self.entries.remove(&date)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached dates, newest first.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.entries.keys().copied().collect();
        dates.sort_by(|a, b| b.cmp(a));
        dates
    }
}
