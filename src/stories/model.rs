use serde::Deserialize;
use serde_json::Value;

/// Story fields as they arrive from a scraped page or the JSON archive.
///
/// Every field is loosely typed: counts and timestamps may be numbers,
/// digit strings, `null`, or missing entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStory {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub points: Value,
    #[serde(default)]
    pub comments: Value,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, alias = "title")]
    pub link_text: Option<String>,
    #[serde(default, alias = "date")]
    pub time: Value,
    #[serde(default)]
    pub homepage: Value,
}

/// A single story in a day's collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRecord {
    pub id: String,
    pub points: i64,
    pub comments: i64,
    pub link: String,
    pub title: String,
    pub timestamp: i64,
    pub homepage: bool,
}

impl StoryRecord {
    pub fn from_raw(raw: RawStory) -> Self {
        Self {
            id: id_string(&raw.id),
            points: to_int(&raw.points),
            comments: to_int(&raw.comments),
            link: raw.link.unwrap_or_default(),
            title: raw.link_text.map(|t| t.trim().to_string()).unwrap_or_default(),
            timestamp: to_int(&raw.time),
            homepage: truthy(&raw.homepage),
        }
    }

    /// Stories without a title never appear in a filtered view.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn comments_url(&self, base: &str) -> String {
        format!("{}{}", base, self.id)
    }
}

/// Normalize a loosely typed count to a non-negative integer.
///
/// Integers pass through, strings made only of ASCII digits are parsed,
/// and anything else (floats, negatives, `null`, overflow) yields 0.
pub fn to_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().filter(|v| *v >= 0).unwrap_or(0),
        Value::String(s) => parse_int(s),
        _ => 0,
    }
}

/// String half of [`to_int`].
pub fn parse_int(s: &str) -> i64 {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    s.parse::<i64>().unwrap_or(0)
}

fn id_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64().is_some_and(|v| v != 0),
        Value::String(s) => matches!(s.as_str(), "1" | "true" | "yes"),
        _ => false,
    }
}
