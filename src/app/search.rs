use super::{App, InputMode, Phase};
use crate::pipeline::{PipelineReport, keywords_line, parse_keywords};
use chrono::Local;

impl App {
    /// Open the keyword editor prefilled with the current keywords.
    pub fn start_keyword_edit(&mut self) {
        self.input_mode = InputMode::Keywords;
        self.input_buffer = keywords_line(&self.keywords);
    }

    /// Adopt the edited keywords and mark a search as pending.
    pub fn confirm_keywords(&mut self) {
        self.keywords = parse_keywords(&self.input_buffer);
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.begin_search();
    }

    /// Set `loading` so the next draw shows the search in progress.
    pub fn begin_search(&mut self) {
        self.loading = true;
        self.status_message = None;
    }

    /// Fetch every keyword, rebuild the result list and select everything.
    /// The previous results and selection are discarded.
    pub async fn run_search(&mut self) -> PipelineReport {
        self.loading = true;
        let report = self
            .pipeline
            .process(self.source.as_ref(), &self.keywords)
            .await;
        self.apply_report(&report);
        self.loading = false;
        report
    }

    fn apply_report(&mut self, report: &PipelineReport) {
        self.store.replace(report.articles.clone());
        self.phase = Phase::Results;
        self.selected_index = 0;
        self.last_search = Some(Local::now().format("%H:%M:%S").to_string());
        self.status_message = search_status(report, self.keywords.len());
    }
}

fn search_status(report: &PipelineReport, keyword_count: usize) -> Option<String> {
    if keyword_count == 0 {
        return Some("No keywords to search".to_string());
    }
    let mut parts = Vec::new();
    if !report.failures.is_empty() {
        parts.push(format!(
            "{} of {} keyword searches failed",
            report.failures.len(),
            keyword_count
        ));
    }
    if report.skipped > 0 {
        parts.push(format!("{} items without a link skipped", report.skipped));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
