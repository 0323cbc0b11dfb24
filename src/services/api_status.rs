use crate::constants::limits::{STATUS_FEED_DEFAULT_ITEMS, STATUS_FEED_MAX_ITEMS, STATUS_SUMMARY_CHARS};
use crate::constants::network::TIMEOUT_STATUS_FEED_MS;
use crate::services::logger::Logger;
use crate::utils::text::truncate_chars;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

static ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<item\b[^>]*>(.*?)</item>").expect("rss item regex"));
static CHANNEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<channel\b[^>]*>.*</channel>").expect("rss channel regex"));
static CDATA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").expect("cdata regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("html tag regex"));
static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

const ITEM_TAGS: &[&str] = &[
    "title",
    "summary",
    "description",
    "link",
    "api",
    "site",
    "status",
    "lastUpdated",
];

static ELEMENT_RES: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    ITEM_TAGS
        .iter()
        .map(|tag| {
            let pattern = format!(r"(?s)<{tag}\b[^>]*>(.*?)</{tag}>", tag = tag);
            (*tag, Regex::new(&pattern).expect("rss element regex"))
        })
        .collect()
});

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatusItem {
    pub title: String,
    pub summary: String,
    pub link: String,
    pub api: String,
    pub site: String,
    pub status: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, Default)]
pub struct ApiStatusQuery {
    pub limit: Option<usize>,
    /// `Resolved` or `Unresolved`, compared case-insensitively.
    pub status: Option<String>,
    /// Substring match against the item's API name.
    pub api: Option<String>,
}

/// Feed failures are reported in `error` next to an empty item list, never as a tool error.
#[derive(Debug, Clone, Serialize)]
pub struct ApiStatusFeed {
    pub items: Vec<ApiStatusItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct ApiStatusService {
    logger: Logger,
    client: Client,
    feed_url: String,
}

impl ApiStatusService {
    pub fn new(logger: Logger, client: Client, feed_url: impl Into<String>) -> Self {
        Self {
            logger: logger.child("api_status"),
            client,
            feed_url: feed_url.into(),
        }
    }

    pub async fn fetch(&self, query: &ApiStatusQuery) -> ApiStatusFeed {
        match self.download().await {
            Ok(xml) => match parse_feed(&xml) {
                Ok(items) => ApiStatusFeed {
                    items: filter_items(items, query),
                    error: None,
                },
                Err(error) => self.unavailable(error),
            },
            Err(error) => self.unavailable(error),
        }
    }

    async fn download(&self) -> Result<String, String> {
        let response = self
            .client
            .get(&self.feed_url)
            .timeout(Duration::from_millis(TIMEOUT_STATUS_FEED_MS))
            .header(ACCEPT, "application/rss+xml, application/xml, text/xml")
            .send()
            .await
            .map_err(|err| err.to_string())?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("Feed unavailable (HTTP {})", status.as_u16()));
        }
        response.text().await.map_err(|err| err.to_string())
    }

    fn unavailable(&self, error: String) -> ApiStatusFeed {
        self.logger.warn(
            "api status feed unavailable",
            Some(&serde_json::json!({ "url": self.feed_url, "error": error })),
        );
        ApiStatusFeed {
            items: Vec::new(),
            error: Some(error),
        }
    }
}

pub fn parse_feed(xml: &str) -> Result<Vec<ApiStatusItem>, String> {
    let Some(channel) = CHANNEL_RE.find(xml) else {
        return Err("RSS feed missing channel".to_string());
    };
    Ok(ITEM_RE
        .captures_iter(channel.as_str())
        .filter_map(|caps| caps.get(1))
        .map(|body| parse_item(body.as_str()))
        .collect())
}

fn parse_item(body: &str) -> ApiStatusItem {
    let title = element_text(body, "title");
    let summary = Some(element_text(body, "summary"))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            let plain = strip_html(&element_text(body, "description"));
            truncate_chars(&plain, STATUS_SUMMARY_CHARS)
        });
    ApiStatusItem {
        summary: if summary.is_empty() {
            title.clone()
        } else {
            summary
        },
        title: if title.is_empty() {
            "Untitled".to_string()
        } else {
            title
        },
        link: element_text(body, "link"),
        api: element_text(body, "api"),
        site: element_text(body, "site"),
        status: element_text(body, "status"),
        last_updated: element_text(body, "lastUpdated"),
    }
}

fn element_text(body: &str, tag: &str) -> String {
    let Some(re) = ELEMENT_RES.get(tag) else {
        return String::new();
    };
    re.captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| decode_entities(&CDATA_RE.replace_all(m.as_str(), "$1")))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn strip_html(html: &str) -> String {
    let without_tags = TAG_RE.replace_all(html, " ");
    SPACE_RE.replace_all(&without_tags, " ").trim().to_string()
}

fn decode_entities(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

pub fn filter_items(items: Vec<ApiStatusItem>, query: &ApiStatusQuery) -> Vec<ApiStatusItem> {
    let status = query
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let api = query
        .api
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let limit = query
        .limit
        .unwrap_or(STATUS_FEED_DEFAULT_ITEMS)
        .min(STATUS_FEED_MAX_ITEMS);

    items
        .into_iter()
        .filter(|item| match &status {
            Some(wanted) => item.status.to_lowercase() == *wanted,
            None => true,
        })
        .filter(|item| match &api {
            Some(needle) => item.api.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .take(limit)
        .collect()
}
