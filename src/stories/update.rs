//! Decides which dates to fetch and fills the story cache.
//!
//! The front page carries both today's and yesterday's stories, so the
//! startup update fetches it once and splits it; older dates get their own
//! dated page. Every date is fetched independently and a failure only
//! leaves that date without an update.

use super::cache::StoryCache;
use super::dates::{days_ago, start_of_day};
use super::model::StoryRecord;
use crate::error::FetchError;
use chrono::NaiveDate;
use std::future::Future;
use tracing::{debug, info, warn};

/// One row of a scraped page, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEntry {
    Story(StoryRecord),
    /// Separator the site renders between one day's stories and the previous day's.
    DayBoundary,
}

#[derive(Debug, Default)]
pub struct DaySplit {
    pub today: Vec<StoryRecord>,
    pub earlier: Vec<StoryRecord>,
}

/// Split a combined page into today's stories and everything older.
///
/// A story counts as today's only if it sits before the first day boundary
/// and its timestamp is at or after `day_start`. If either check fails it
/// goes to `earlier`.
pub fn split_combined(entries: Vec<PageEntry>, day_start: i64) -> DaySplit {
    let mut split = DaySplit::default();
    let mut before_boundary = true;
    for entry in entries {
        match entry {
            PageEntry::DayBoundary => before_boundary = false,
            PageEntry::Story(story) => {
                let after_midnight = story.timestamp > 0 && story.timestamp >= day_start;
                if before_boundary && after_midnight {
                    split.today.push(story);
                } else {
                    split.earlier.push(story);
                }
            }
        }
    }
    split
}

/// Drop boundary markers, keeping stories in page order.
pub fn stories_only(entries: Vec<PageEntry>) -> Vec<StoryRecord> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            PageEntry::Story(story) => Some(story),
            PageEntry::DayBoundary => None,
        })
        .collect()
}

/// Source of scraped pages.
pub trait StoryFetcher {
    /// `None` fetches the combined front page, `Some(date)` that date's page.
    fn fetch_page(
        &self,
        date: Option<NaiveDate>,
    ) -> impl Future<Output = Result<Vec<PageEntry>, FetchError>> + Send;
}

pub struct Updater<F> {
    fetcher: F,
    cache: StoryCache,
}

impl<F: StoryFetcher> Updater<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_cache(fetcher, StoryCache::new())
    }

    pub fn with_cache(fetcher: F, cache: StoryCache) -> Self {
        Self { fetcher, cache }
    }

    pub fn cache(&self) -> &StoryCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut StoryCache {
        &mut self.cache
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fill the cache for `days` dates ending at `today`. Returns the dates updated.
    pub async fn update(&mut self, today: NaiveDate, days: u32) -> Vec<NaiveDate> {
        self.update_range(today, 0, days).await
    }

    /// Fill the cache for day offsets `start_day..start_day + days` back from `today`.
    pub async fn update_range(
        &mut self,
        today: NaiveDate,
        start_day: u32,
        days: u32,
    ) -> Vec<NaiveDate> {
        let mut updated = Vec::new();
        let end = start_day.saturating_add(days);
        let mut offset = start_day;

        if start_day == 0 && days >= 2 {
            updated.extend(self.update_today_and_yesterday(today).await);
            offset = 2;
        }

        while offset < end {
            let date = days_ago(today, u64::from(offset));
            if self.fetch_into_cache(today, date).await {
                updated.push(date);
            }
            offset += 1;
        }

        info!(requested = days, updated = updated.len(), "Story update finished");
        updated
    }

    async fn update_today_and_yesterday(&mut self, today: NaiveDate) -> Vec<NaiveDate> {
        let yesterday = days_ago(today, 1);
        let entries = match self.fetcher.fetch_page(None).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Front page fetch failed");
                return Vec::new();
            }
        };

        let split = split_combined(entries, start_of_day(today));
        debug!(
            today = split.today.len(),
            earlier = split.earlier.len(),
            "Split front page by day"
        );

        // An empty bucket leaves that date unset so a later visit fetches it directly
        let mut updated = Vec::new();
        if !split.today.is_empty() {
            self.cache.put(today, split.today);
            updated.push(today);
        }
        if !split.earlier.is_empty() {
            self.cache.put(yesterday, split.earlier);
            updated.push(yesterday);
        }
        updated
    }

    async fn fetch_date(
        &self,
        today: NaiveDate,
        date: NaiveDate,
    ) -> Result<Vec<StoryRecord>, FetchError> {
        if date == today {
            let entries = self.fetcher.fetch_page(None).await?;
            Ok(split_combined(entries, start_of_day(today)).today)
        } else {
            let entries = self.fetcher.fetch_page(Some(date)).await?;
            Ok(stories_only(entries))
        }
    }

    async fn fetch_into_cache(&mut self, today: NaiveDate, date: NaiveDate) -> bool {
        match self.fetch_date(today, date).await {
            Ok(stories) => {
                info!(date = %date, count = stories.len(), "Cached stories");
                self.cache.put(date, stories);
                true
            }
            Err(e) => {
                warn!(date = %date, error = %e, "Story fetch failed");
                false
            }
        }
    }

    /// Drop and re-fetch one date. If the fetch fails the previous entry is put back.
    pub async fn refresh(&mut self, today: NaiveDate, date: NaiveDate) -> bool {
        let previous = self.cache.take(date);
        match self.fetch_date(today, date).await {
            Ok(stories) => {
                info!(date = %date, count = stories.len(), "Refreshed stories");
                self.cache.put(date, stories);
                true
            }
            Err(e) => {
                warn!(date = %date, error = %e, "Refresh failed, keeping previous stories");
                if let Some(stories) = previous {
                    self.cache.put(date, stories);
                }
                false
            }
        }
    }

    /// Stories for `date`, fetching them first if the date is not cached.
    pub async fn stories_for(&mut self, today: NaiveDate, date: NaiveDate) -> Option<&[StoryRecord]> {
        if !self.cache.contains(date) {
            self.fetch_into_cache(today, date).await;
        }
        self.cache.get(date)
    }
}
