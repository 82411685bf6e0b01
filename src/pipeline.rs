//! Turns keyword searches into a deduplicated list of [`Article`]s.
//!
//! Raw items are fetched keyword by keyword, titles lose their `<b>` markup,
//! non-video links are optionally dropped, each survivor gets a publisher
//! name, and duplicate links collapse to the last occurrence.

use crate::api::{FetchFailure, FetchOutcome, NewsSource, PressDirectory, RawItem};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Link substrings that mark an item as video content.
pub const VIDEO_HOSTS: [&str; 2] = ["v.news.naver.com", "tv.naver.com"];

pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// A normalized search result. The link doubles as the article's key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub press: String,
}

impl Article {
    pub fn key(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("search item has no link")]
    MissingLink,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub page_size: u32,
    pub video_filter: bool,
    pub press_directory: PressDirectory,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            video_filter: true,
            press_directory: PressDirectory::default(),
        }
    }
}

/// Output of one search action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub articles: Vec<Article>,
    /// Raw items received across all keywords.
    pub fetched: usize,
    /// Items dropped by the video filter.
    pub filtered_out: usize,
    /// Items dropped because they carried no link.
    pub skipped: usize,
    pub failures: Vec<(String, FetchFailure)>,
}

/// Remove the literal `<b>` / `</b>` markers. Other markup is left alone.
pub fn strip_bold(title: &str) -> String {
    title.replace("<b>", "").replace("</b>", "")
}

pub fn is_video_link(link: &str) -> bool {
    VIDEO_HOSTS.iter().any(|host| link.contains(host))
}

/// Split comma-separated keyword input, dropping blanks.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keywords as the comma-separated line shown in the search box.
pub fn keywords_line(keywords: &[String]) -> String {
    keywords.join(", ")
}

/// Collapse articles sharing a url. The last occurrence wins, and the
/// result is ordered by each url's last occurrence.
pub fn dedup_last_wins(articles: Vec<Article>) -> Vec<Article> {
    let mut last_seen: HashMap<String, usize> = HashMap::with_capacity(articles.len());
    for (i, article) in articles.iter().enumerate() {
        last_seen.insert(article.url.clone(), i);
    }
    articles
        .into_iter()
        .enumerate()
        .filter(|(i, a)| last_seen.get(&a.url) == Some(i))
        .map(|(_, a)| a)
        .collect()
}

pub struct ArticlePipeline {
    config: PipelineConfig,
}

impl ArticlePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Normalize one raw item. `Ok(None)` means the video filter dropped it.
    pub fn normalize(&self, item: &RawItem) -> Result<Option<Article>, PipelineError> {
        let link = item
            .link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .ok_or(PipelineError::MissingLink)?;

        if self.config.video_filter && !is_video_link(link) {
            return Ok(None);
        }

        let press_source = item
            .originallink
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(link);

        Ok(Some(Article {
            title: strip_bold(item.title.as_deref().unwrap_or_default()),
            url: link.to_string(),
            press: self.config.press_directory.resolve(press_source),
        }))
    }

    /// Normalize, filter and dedup items already fetched, in fetch order.
    pub fn assemble(&self, items: Vec<RawItem>) -> PipelineReport {
        let mut report = PipelineReport {
            fetched: items.len(),
            ..Default::default()
        };
        let mut articles = Vec::with_capacity(items.len());
        for item in &items {
            match self.normalize(item) {
                Ok(Some(article)) => articles.push(article),
                Ok(None) => report.filtered_out += 1,
                Err(e) => {
                    warn!(title = item.title.as_deref().unwrap_or(""), error = %e, "skipping search item");
                    report.skipped += 1;
                }
            }
        }
        report.articles = dedup_last_wins(articles);
        report
    }

    /// Search every keyword in order, one request at a time, and build the
    /// article list from everything returned.
    pub async fn process<S>(&self, source: &S, keywords: &[String]) -> PipelineReport
    where
        S: NewsSource + ?Sized,
    {
        let mut items = Vec::new();
        let mut failures = Vec::new();
        for keyword in keywords {
            let outcome = source.fetch(keyword, self.config.page_size).await;
            if let FetchOutcome::Failed(failure) = &outcome {
                failures.push((keyword.clone(), failure.clone()));
            }
            let batch = outcome.into_items();
            debug!(keyword = %keyword, count = batch.len(), "collected search items");
            items.extend(batch);
        }

        let mut report = self.assemble(items);
        report.failures = failures;
        info!(
            keywords = keywords.len(),
            fetched = report.fetched,
            kept = report.articles.len(),
            filtered_out = report.filtered_out,
            skipped = report.skipped,
            failed = report.failures.len(),
            "search finished"
        );
        report
    }
}

impl Default for ArticlePipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
