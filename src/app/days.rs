use super::App;
use crate::stories::StoryFetcher;
use crate::stories::dates::days_ago;
use chrono::{Days, NaiveDate};
use tracing::info;

impl<F: StoryFetcher> App<F> {
    /// Startup fetch of the configured number of days, then show the current date.
    pub async fn initial_load(&mut self) {
        let today = self.today();
        let days = self.config.initial_days;
        let updated = self.updater.update(today, days).await;
        info!(days, updated = updated.len(), "Initial load finished");
        self.load_current().await;
    }

    /// Show the current date from the cache, fetching it on a miss.
    pub async fn load_current(&mut self) {
        let today = self.today();
        let stories = self
            .updater
            .stories_for(today, self.current_date)
            .await
            .map(<[_]>::to_vec)
            .unwrap_or_default();
        self.set_day(stories);
        self.loading = None;
    }

    /// Re-fetch the current date. A failed fetch keeps what was shown.
    pub async fn refresh(&mut self) {
        let today = self.today();
        let date = self.current_date;
        let refreshed = self.updater.refresh(today, date).await;
        let stories = self.cache().get(date).map(<[_]>::to_vec);
        match stories {
            Some(stories) => self.set_day(stories),
            None => self.set_day(Vec::new()),
        }
        if !refreshed {
            self.status_message = Some("Refresh failed".to_string());
        }
        self.loading = None;
    }

    /// Jump to `date`, never past today.
    pub async fn go_to_date(&mut self, date: NaiveDate) {
        self.current_date = date.min(self.today());
        self.load_current().await;
    }

    pub async fn prev_day(&mut self) {
        let date = days_ago(self.current_date, 1);
        self.go_to_date(date).await;
    }

    /// Later day; does nothing when already on today.
    pub async fn next_day(&mut self) {
        if self.current_date >= self.today() {
            return;
        }
        if let Some(date) = self.current_date.checked_add_days(Days::new(1)) {
            self.go_to_date(date).await;
        }
    }

    pub fn can_go_later(&self) -> bool {
        self.current_date < self.today()
    }
}
