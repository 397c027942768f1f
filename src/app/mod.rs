mod browser;
mod days;
mod view;

use crate::api::HckrnewsClient;
use crate::config::Config;
use crate::stories::dates::reference_today;
use crate::stories::{FilterMode, RankTable, SortMode, StoryCache, StoryFetcher, StoryRecord, Updater};
use anyhow::Result;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

/// View state for the story table.
///
/// `stories` is the current date's collection as read from the cache, kept
/// in the active sort order. It is reloaded from the cache on every date
/// change or refresh and never written back.
pub struct App<F = HckrnewsClient> {
    pub config: Config,
    pub current_date: NaiveDate,
    pub filter_mode: FilterMode,
    pub sort_mode: SortMode,
    pub stories: Vec<StoryRecord>,
    pub selected_index: usize,
    pub input_mode: InputMode,
    pub status_message: Option<String>,
    /// Set while a fetch is pending; shown in place of the filter/sort title
    pub loading: Option<String>,
    /// Overrides the reference-timezone date, for tests
    pub fixed_today: Option<NaiveDate>,
    ranks: RankTable,
    updater: Updater<F>,
}

impl App<HckrnewsClient> {
    pub fn new(config: Config) -> Result<Self> {
        let client = HckrnewsClient::new(&config)?;
        Ok(Self::with_fetcher(config, client))
    }
}

impl<F: StoryFetcher> App<F> {
    pub fn with_fetcher(config: Config, fetcher: F) -> Self {
        Self {
            current_date: reference_today(),
            filter_mode: config.default_filter,
            sort_mode: config.default_sort,
            config,
            stories: Vec::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            status_message: None,
            loading: None,
            fixed_today: None,
            ranks: RankTable::default(),
            updater: Updater::new(fetcher),
        }
    }

    #[doc(hidden)]
    pub fn test_new(config: Config, fetcher: F, today: NaiveDate) -> Self {
        let mut app = Self::with_fetcher(config, fetcher);
        app.fixed_today = Some(today);
        app.current_date = today;
        app
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(reference_today)
    }

    pub fn cache(&self) -> &StoryCache {
        self.updater.cache()
    }

    pub fn cache_mut(&mut self) -> &mut StoryCache {
        self.updater.cache_mut()
    }

    pub fn fetcher(&self) -> &F {
        self.updater.fetcher()
    }

    pub fn ranks(&self) -> &RankTable {
        &self.ranks
    }

    pub fn begin_loading(&mut self, message: &str) {
        self.loading = Some(message.to_string());
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        let len = self.display_rows().len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn title(&self) -> String {
        let date = crate::stories::dates::cache_key(self.current_date);
        match &self.loading {
            Some(status) => format!("hckrnews: {} | {}", date, status),
            None => format!(
                "hckrnews: {} | {} | Sort: {}",
                date,
                self.filter_mode.label(),
                self.sort_mode.label()
            ),
        }
    }
}
