use super::{App, ExportFormat, InputMode};
use super::selection::SelectionStore;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One selected article, ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportLine {
    pub title: String,
    pub press: String,
    pub url: String,
}

/// Selected articles of `store`, in result order.
pub fn export(store: &SelectionStore) -> Vec<ExportLine> {
    store
        .selected_articles()
        .map(|a| ExportLine {
            title: a.title.clone(),
            press: a.press.clone(),
            url: a.url.clone(),
        })
        .collect()
}

/// `■ title (press)` followed by the url and a blank line, per article.
pub fn render_text(lines: &[ExportLine]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&format!("■ {} ({})\n{}\n\n", line.title, line.press, line.url));
    }
    out
}

pub fn render_json(lines: &[ExportLine]) -> String {
    serde_json::to_string_pretty(lines).unwrap_or_else(|_| "[]".to_string())
}

impl App {
    pub fn open_export(&mut self) {
        self.input_mode = InputMode::Export;
        self.export_scroll = 0;
    }

    pub fn close_export(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn toggle_export_format(&mut self) {
        self.export_format = match self.export_format {
            ExportFormat::Text => ExportFormat::Json,
            ExportFormat::Json => ExportFormat::Text,
        };
    }

    pub fn export_scroll_up(&mut self) {
        self.export_scroll = self.export_scroll.saturating_sub(1);
    }

    pub fn export_scroll_down(&mut self) {
        self.export_scroll = self.export_scroll.saturating_add(1);
    }

    pub fn export_lines(&self) -> Vec<ExportLine> {
        export(&self.store)
    }

    /// The selection rendered in the current export format.
    pub fn export_content(&self) -> String {
        let lines = self.export_lines();
        match self.export_format {
            ExportFormat::Text => render_text(&lines),
            ExportFormat::Json => render_json(&lines),
        }
    }

    /// Write the selection to the export directory and report the outcome
    /// in the status line.
    pub fn confirm_export(&mut self) {
        let result = self
            .export_dir()
            .and_then(|dir| self.export_to(&dir));
        self.input_mode = InputMode::Normal;
        match result {
            Ok(path) => {
                info!(path = %path.display(), count = self.store.selected_count(), "exported selection");
                self.status_message = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                warn!(error = %e, "export failed");
                self.status_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    pub fn export_to(&self, dir: &Path) -> Result<PathBuf> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let ext = match self.export_format {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        };
        let path = dir.join(format!("vidnews_{}.{}", timestamp, ext));
        std::fs::write(&path, self.export_content())?;
        Ok(path)
    }

    fn export_dir(&self) -> Result<PathBuf> {
        if let Some(home) = dirs::home_dir() {
            let downloads = home.join("Downloads");
            if downloads.exists() {
                return Ok(downloads);
            }
            return Ok(home);
        }
        Ok(std::env::current_dir()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_block_layout() {
        let lines = vec![ExportLine {
            title: "훈련 영상".into(),
            press: "YTN".into(),
            url: "https://tv.naver.com/v/1".into(),
        }];
        assert_eq!(
            render_text(&lines),
            "■ 훈련 영상 (YTN)\nhttps://tv.naver.com/v/1\n\n"
        );
    }

    #[test]
    fn empty_selection_renders_empty() {
        assert_eq!(render_text(&[]), "");
        assert_eq!(render_json(&[]), "[]");
    }
}
