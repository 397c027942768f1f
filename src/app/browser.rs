use super::App;
use crate::stories::StoryFetcher;
use tracing::warn;

impl<F: StoryFetcher> App<F> {
    /// Link of the selected story; `None` when it has no usable URL.
    pub fn selected_story_url(&self) -> Option<String> {
        self.selected_story()
            .map(|s| s.link.trim())
            .filter(|link| !link.is_empty())
            .map(str::to_string)
    }

    pub fn selected_comments_url(&self) -> Option<String> {
        self.selected_story()
            .filter(|s| !s.id.is_empty())
            .map(|s| s.comments_url(&self.config.comments_base_url))
    }

    pub fn open_story(&mut self) {
        if let Some(url) = self.selected_story_url() {
            self.open_url(&url);
        }
    }

    pub fn open_comments(&mut self) {
        if let Some(url) = self.selected_comments_url() {
            self.open_url(&url);
        }
    }

    fn open_url(&mut self, url: &str) {
        if let Err(e) = open::that(url) {
            warn!(url, error = %e, "Could not open browser");
            self.status_message = Some(format!("Could not open browser: {}", e));
        }
    }
}
