#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use vidnews_cli::api::{FetchFailure, FetchOutcome, NewsSource, RawItem};
use vidnews_cli::app::App;
use vidnews_cli::config::Config;
use vidnews_cli::pipeline::Article;

/// Canned answers per keyword. Unknown keywords return no items.
pub struct MockSource {
    responses: HashMap<String, FetchOutcome>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_items(mut self, keyword: &str, items: Vec<RawItem>) -> Self {
        self.responses
            .insert(keyword.to_string(), FetchOutcome::Items(items));
        self
    }

    pub fn with_failure(mut self, keyword: &str, failure: FetchFailure) -> Self {
        self.responses
            .insert(keyword.to_string(), FetchOutcome::Failed(failure));
        self
    }

    /// Keywords and page sizes requested so far, in call order.
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl NewsSource for MockSource {
    fn fetch<'a>(
        &'a self,
        keyword: &'a str,
        page_size: u32,
    ) -> Pin<Box<dyn Future<Output = FetchOutcome> + Send + 'a>> {
        self.calls
            .lock()
            .unwrap()
            .push((keyword.to_string(), page_size));
        let outcome = self
            .responses
            .get(keyword)
            .cloned()
            .unwrap_or(FetchOutcome::Items(Vec::new()));
        Box::pin(async move { outcome })
    }
}

pub fn make_item(title: &str, link: &str) -> RawItem {
    RawItem {
        title: Some(title.to_string()),
        link: Some(link.to_string()),
        ..Default::default()
    }
}

pub fn make_item_from(title: &str, link: &str, originallink: &str) -> RawItem {
    RawItem {
        originallink: Some(originallink.to_string()),
        ..make_item(title, link)
    }
}

pub fn make_article(title: &str, url: &str, press: &str) -> Article {
    Article {
        title: title.to_string(),
        url: url.to_string(),
        press: press.to_string(),
    }
}

pub fn video_link(id: u32) -> String {
    format!("https://tv.naver.com/v/{}", id)
}

/// App over a mock source, without touching the config file.
pub fn test_app(source: MockSource) -> App {
    App::new(Config::default(), Box::new(source))
}
