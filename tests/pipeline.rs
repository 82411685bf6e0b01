mod common;

use common::{MockSource, make_item, make_item_from, video_link};
use std::collections::HashSet;
use vidnews_cli::api::{FetchFailure, PressDirectory, RawItem};
use vidnews_cli::pipeline::{ArticlePipeline, PipelineConfig, VIDEO_HOSTS, is_video_link};

fn keywords(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

fn unfiltered() -> ArticlePipeline {
    ArticlePipeline::new(PipelineConfig {
        video_filter: false,
        ..PipelineConfig::default()
    })
}

#[tokio::test]
async fn keywords_are_fetched_in_order_with_page_size() {
    let source = MockSource::new();
    let pipeline = ArticlePipeline::new(PipelineConfig {
        page_size: 20,
        ..PipelineConfig::default()
    });
    pipeline.process(&source, &keywords(&["육군", "국방", "외교"])).await;
    assert_eq!(
        source.calls(),
        vec![
            ("육군".to_string(), 20),
            ("국방".to_string(), 20),
            ("외교".to_string(), 20),
        ]
    );
}

#[tokio::test]
async fn urls_are_unique() {
    let source = MockSource::new()
        .with_items("a", vec![make_item("1", &video_link(1)), make_item("2", &video_link(2))])
        .with_items("b", vec![make_item("3", &video_link(2)), make_item("4", &video_link(1))]);
    let report = ArticlePipeline::default()
        .process(&source, &keywords(&["a", "b"]))
        .await;
    let urls: HashSet<&str> = report.articles.iter().map(|a| a.url.as_str()).collect();
    assert_eq!(urls.len(), report.articles.len());
    assert_eq!(report.articles.len(), 2);
}

#[tokio::test]
async fn duplicate_url_keeps_later_title() {
    let source = MockSource::new()
        .with_items("a", vec![make_item("first", &video_link(7))])
        .with_items("b", vec![make_item("second", &video_link(7))]);
    let report = ArticlePipeline::default()
        .process(&source, &keywords(&["a", "b"]))
        .await;
    assert_eq!(report.articles.len(), 1);
    assert_eq!(report.articles[0].title, "second");
}

#[tokio::test]
async fn order_follows_last_occurrence() {
    let source = MockSource::new()
        .with_items("a", vec![make_item("x1", &video_link(1)), make_item("y", &video_link(2))])
        .with_items("b", vec![make_item("x2", &video_link(1))]);
    let report = ArticlePipeline::default()
        .process(&source, &keywords(&["a", "b"]))
        .await;
    let titles: Vec<&str> = report.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["y", "x2"]);
}

#[tokio::test]
async fn bold_markers_are_stripped_from_titles() {
    let source = MockSource::new().with_items(
        "a",
        vec![
            make_item("<b>Army</b> news", &video_link(1)),
            make_item("<i>x</i>", &video_link(2)),
        ],
    );
    let report = ArticlePipeline::default()
        .process(&source, &keywords(&["a"]))
        .await;
    assert_eq!(report.articles[0].title, "Army news");
    assert_eq!(report.articles[1].title, "<i>x</i>");
}

#[tokio::test]
async fn video_filter_keeps_only_video_hosts() {
    let items = vec![
        make_item("v1", "https://v.news.naver.com/v/1"),
        make_item("text", "https://n.news.naver.com/article/001/1"),
        make_item("v2", "https://tv.naver.com/v/2"),
        make_item("outside", "https://www.ytn.co.kr/_ln/1"),
    ];
    let source = MockSource::new().with_items("a", items.clone());
    let report = ArticlePipeline::default()
        .process(&source, &keywords(&["a"]))
        .await;

    assert_eq!(report.articles.len(), 2);
    assert_eq!(report.filtered_out, 2);
    for article in &report.articles {
        assert!(VIDEO_HOSTS.iter().any(|h| article.url.contains(h)));
    }
    let kept: HashSet<&str> = report.articles.iter().map(|a| a.url.as_str()).collect();
    for item in &items {
        let link = item.link.as_deref().unwrap();
        if !kept.contains(link) {
            assert!(!is_video_link(link));
        }
    }
}

#[tokio::test]
async fn disabled_filter_keeps_everything() {
    let source = MockSource::new().with_items(
        "a",
        vec![
            make_item("text", "https://n.news.naver.com/article/001/1"),
            make_item("v", "https://tv.naver.com/v/2"),
        ],
    );
    let report = unfiltered().process(&source, &keywords(&["a"])).await;
    assert_eq!(report.articles.len(), 2);
    assert_eq!(report.filtered_out, 0);
}

#[tokio::test]
async fn press_comes_from_originallink_then_link() {
    let source = MockSource::new().with_items(
        "a",
        vec![
            make_item_from("with original", &video_link(1), "https://www.ytn.co.kr/_ln/0101_1"),
            make_item("without original", &video_link(2)),
        ],
    );
    let report = ArticlePipeline::default()
        .process(&source, &keywords(&["a"]))
        .await;
    assert_eq!(report.articles[0].press, "YTN");
    // tv.naver.com is not in the directory, so the fallback label applies
    assert_eq!(report.articles[1].press, "tv.nav");
}

#[tokio::test]
async fn custom_press_directory_is_used() {
    let mut names = std::collections::HashMap::new();
    names.insert("tv.naver.com".to_string(), "네이버TV".to_string());
    let pipeline = ArticlePipeline::new(PipelineConfig {
        press_directory: PressDirectory::new(names),
        ..PipelineConfig::default()
    });
    let source = MockSource::new().with_items("a", vec![make_item("t", &video_link(1))]);
    let report = pipeline.process(&source, &keywords(&["a"])).await;
    assert_eq!(report.articles[0].press, "네이버TV");
}

#[tokio::test]
async fn items_without_link_are_skipped() {
    let no_link = RawItem {
        title: Some("orphan".to_string()),
        originallink: Some("https://www.kbs.co.kr/1".to_string()),
        ..Default::default()
    };
    let source = MockSource::new()
        .with_items("a", vec![no_link, make_item("ok", &video_link(1))]);
    let report = ArticlePipeline::default()
        .process(&source, &keywords(&["a"]))
        .await;
    assert_eq!(report.skipped, 1);
    assert_eq!(report.fetched, 2);
    assert_eq!(report.articles.len(), 1);
    assert_eq!(report.articles[0].title, "ok");
}

#[tokio::test]
async fn failed_keyword_is_reported_and_others_still_count() {
    let source = MockSource::new()
        .with_failure("a", FetchFailure::Status(429))
        .with_items("b", vec![make_item("ok", &video_link(1))]);
    let report = ArticlePipeline::default()
        .process(&source, &keywords(&["a", "b"]))
        .await;
    assert_eq!(report.failures, vec![("a".to_string(), FetchFailure::Status(429))]);
    assert_eq!(report.articles.len(), 1);
}

#[tokio::test]
async fn failure_and_empty_result_differ_only_in_report() {
    let failing = MockSource::new().with_failure("a", FetchFailure::Transport("timeout".into()));
    let empty = MockSource::new().with_items("a", Vec::new());
    let pipeline = ArticlePipeline::default();

    let failed = pipeline.process(&failing, &keywords(&["a"])).await;
    let nothing = pipeline.process(&empty, &keywords(&["a"])).await;

    assert_eq!(failed.articles, nothing.articles);
    assert_eq!(failed.failures.len(), 1);
    assert!(nothing.failures.is_empty());
}

#[tokio::test]
async fn no_keywords_means_no_requests() {
    let source = MockSource::new();
    let report = ArticlePipeline::default().process(&source, &[]).await;
    assert!(source.calls().is_empty());
    assert!(report.articles.is_empty());
}
