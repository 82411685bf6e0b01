pub mod export;
mod search;
pub mod selection;

pub use export::ExportLine;
pub use selection::SelectionStore;

use crate::api::NewsSource;
use crate::config::Config;
use crate::pipeline::ArticlePipeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Keywords,
    Help,
    Export,
}

/// Idle until the first search; every search after that stays in Results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

pub struct App {
    pub config: Config,
    pub keywords: Vec<String>,
    pub store: SelectionStore,
    pub phase: Phase,
    pub selected_index: usize,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub status_message: Option<String>,
    pub loading: bool,
    pub last_search: Option<String>,
    pub export_format: ExportFormat,
    pub export_scroll: u16,
    pipeline: ArticlePipeline,
    source: Box<dyn NewsSource>,
}

impl App {
    pub fn new(config: Config, source: Box<dyn NewsSource>) -> Self {
        let pipeline = ArticlePipeline::new(config.pipeline_config());
        Self {
            keywords: config.keywords.clone(),
            config,
            store: SelectionStore::new(),
            phase: Phase::Idle,
            selected_index: 0,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            status_message: None,
            loading: false,
            last_search: None,
            export_format: ExportFormat::default(),
            export_scroll: 0,
            pipeline,
            source,
        }
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        let len = self.store.len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn current_article_key(&self) -> Option<String> {
        self.store
            .get(self.selected_index)
            .map(|a| a.key().to_string())
    }

    /// Flip the checkbox under the cursor.
    pub fn toggle_current(&mut self) {
        if let Some(key) = self.current_article_key() {
            self.store.flip(&key);
        }
    }

    pub fn select_all(&mut self) {
        self.store.select_all();
    }

    pub fn select_none(&mut self) {
        self.store.select_none();
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
