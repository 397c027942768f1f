#![allow(dead_code)]

use chrono::NaiveDate;
use hckr_tui::app::App;
use hckr_tui::config::Config;
use hckr_tui::error::FetchError;
use hckr_tui::stories::{PageEntry, StoryFetcher, StoryRecord};
use std::collections::HashMap;
use std::sync::Mutex;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 2024-07-01 00:00 PDT
pub const JULY_1_START: i64 = 1_719_817_200;

pub fn today() -> NaiveDate {
    date(2024, 7, 1)
}

pub fn make_story(id: &str, points: i64, comments: i64, ts: i64) -> StoryRecord {
    StoryRecord {
        id: id.to_string(),
        points,
        comments,
        link: format!("https://example.com/{}", id),
        title: format!("Story {}", id),
        timestamp: ts,
        homepage: false,
    }
}

pub fn untitled(id: &str, points: i64) -> StoryRecord {
    StoryRecord {
        title: String::new(),
        ..make_story(id, points, 0, 0)
    }
}

/// `n` stories with ids "0".."n-1" and points decreasing from `n`.
pub fn descending_stories(n: usize) -> Vec<StoryRecord> {
    (0..n)
        .map(|i| make_story(&i.to_string(), (n - i) as i64, 0, 0))
        .collect()
}

pub fn ids(stories: &[&StoryRecord]) -> Vec<String> {
    stories.iter().map(|s| s.id.clone()).collect()
}

pub fn story_entries(stories: Vec<StoryRecord>) -> Vec<PageEntry> {
    stories.into_iter().map(PageEntry::Story).collect()
}

/// In-memory page source. Unknown pages fail with a 404.
#[derive(Default)]
pub struct FakeFetcher {
    pages: Mutex<HashMap<Option<NaiveDate>, Vec<PageEntry>>>,
    failing: Mutex<Vec<Option<NaiveDate>>>,
    calls: Mutex<Vec<Option<NaiveDate>>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, date: Option<NaiveDate>, entries: Vec<PageEntry>) -> Self {
        self.set_page(date, entries);
        self
    }

    pub fn set_page(&self, date: Option<NaiveDate>, entries: Vec<PageEntry>) {
        self.pages.lock().unwrap().insert(date, entries);
    }

    pub fn fail(&self, date: Option<NaiveDate>) {
        self.failing.lock().unwrap().push(date);
    }

    pub fn recover(&self, date: Option<NaiveDate>) {
        self.failing.lock().unwrap().retain(|d| *d != date);
    }

    pub fn calls(&self) -> Vec<Option<NaiveDate>> {
        self.calls.lock().unwrap().clone()
    }
}

impl StoryFetcher for FakeFetcher {
    async fn fetch_page(&self, date: Option<NaiveDate>) -> Result<Vec<PageEntry>, FetchError> {
        self.calls.lock().unwrap().push(date);
        if self.failing.lock().unwrap().contains(&date) {
            return Err(FetchError::Network("connection reset".to_string()));
        }
        self.pages
            .lock()
            .unwrap()
            .get(&date)
            .cloned()
            .ok_or(FetchError::Status { status: 404 })
    }
}

/// Creates an App on a fixed "today" with no network or file I/O.
pub fn test_app(fetcher: FakeFetcher) -> App<FakeFetcher> {
    App::test_new(Config::test_config(), fetcher, today())
}
