use crate::config::Config;
use crate::error::{FetchError, ParseError};
use crate::stories::dates::url_segment;
use crate::stories::model::{RawStory, StoryRecord, parse_int};
use crate::stories::update::{PageEntry, StoryFetcher};
use chrono::NaiveDate;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

pub struct HckrnewsClient {
    client: Client,
    base_url: String,
}

impl HckrnewsClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Front page for `None`, otherwise the page for one date.
    pub fn page_url(&self, date: Option<NaiveDate>) -> String {
        match date {
            None => self.base_url.clone(),
            Some(date) => format!("{}/{}", self.base_url, url_segment(date)),
        }
    }

    pub fn archive_url(&self, date: NaiveDate) -> String {
        format!("{}/data/{}.js", self.base_url, url_segment(date))
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    /// Fetch a date from the JSON archive instead of the HTML page.
    pub async fn fetch_archive(&self, date: NaiveDate) -> Result<Vec<StoryRecord>, FetchError> {
        let url = self.archive_url(date);
        let body = self.get_text(&url).await?;
        let stories = parse_archive(&body)?;
        debug!(url = %url, count = stories.len(), "Fetched archive");
        Ok(stories)
    }
}

impl StoryFetcher for HckrnewsClient {
    async fn fetch_page(&self, date: Option<NaiveDate>) -> Result<Vec<PageEntry>, FetchError> {
        let url = self.page_url(date);
        let html = self.get_text(&url).await?;
        let entries = parse_page(&html)?;
        info!(url = %url, stories = story_count(&entries), "Fetched page");

        match archive_fallback(date, &entries) {
            Some(date) => {
                let stories = self.fetch_archive(date).await?;
                Ok(stories.into_iter().map(PageEntry::Story).collect())
            }
            None => Ok(entries),
        }
    }
}

fn story_count(entries: &[PageEntry]) -> usize {
    entries
        .iter()
        .filter(|e| matches!(e, PageEntry::Story(_)))
        .count()
}

/// The date to re-fetch from the JSON archive, if any.
///
/// Only a dated page with no stories falls back; the front page never does.
pub fn archive_fallback(date: Option<NaiveDate>, entries: &[PageEntry]) -> Option<NaiveDate> {
    date.filter(|_| story_count(entries) == 0)
}

fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Selector {
        selector: css.to_string(),
        details: format!("{:?}", e),
    })
}

fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Counts the page leaves blank or non-numeric become 0.
fn count_value(element: Option<ElementRef<'_>>) -> Value {
    let text = element.map(element_text).unwrap_or_default();
    Value::from(parse_int(&text))
}

/// Parse a story page into stories and day boundaries, in page order.
///
/// Job postings are dropped. Rows that are neither stories nor boundaries
/// are ignored.
pub fn parse_page(html: &str) -> Result<Vec<PageEntry>, ParseError> {
    let row_sel = selector("li.row")?;
    let points_sel = selector("span.points")?;
    let comments_sel = selector("span.comments")?;
    let link_sel = selector("a.link")?;
    let source_sel = selector("span.source")?;
    let hn_sel = selector("a.hn")?;

    let document = Html::parse_document(html);
    let mut entries = Vec::new();

    for row in document.select(&row_sel) {
        if has_class(row, "day") {
            entries.push(PageEntry::DayBoundary);
            continue;
        }
        if !has_class(row, "entry") {
            continue;
        }

        let hn_link = row.select(&hn_sel).next();
        if hn_link.is_some_and(|a| has_class(a, "job")) {
            continue;
        }

        let points_elem = row.select(&points_sel).next();
        let link_elem = row.select(&link_sel).next();

        let title = link_elem.map(|link| {
            let full = element_text(link);
            match link.select(&source_sel).next() {
                Some(source) => {
                    let source_text: String = source.text().collect();
                    full.replace(&source_text, "").trim().to_string()
                }
                None => full,
            }
        });

        let raw = RawStory {
            id: row
                .value()
                .attr("id")
                .map(|id| Value::String(id.to_string()))
                .unwrap_or_default(),
            points: count_value(points_elem),
            comments: count_value(row.select(&comments_sel).next()),
            link: link_elem.and_then(|l| l.value().attr("href")).map(str::to_string),
            link_text: title,
            time: hn_link
                .and_then(|a| a.value().attr("data-date"))
                .map(|t| Value::String(t.to_string()))
                .unwrap_or_default(),
            homepage: Value::Bool(points_elem.is_some_and(|p| has_class(p, "homepage"))),
        };
        entries.push(PageEntry::Story(StoryRecord::from_raw(raw)));
    }

    Ok(entries)
}

/// Parse the JSON archive: a list of story objects.
pub fn parse_archive(body: &str) -> Result<Vec<StoryRecord>, ParseError> {
    let value: Value = serde_json::from_str(body.trim())?;
    let Value::Array(items) = value else {
        return Err(ParseError::Malformed("archive is not a list".to_string()));
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value::<RawStory>(item).map(StoryRecord::from_raw))
        .collect::<Result<Vec<_>, _>>()
        .map_err(ParseError::from)
}
