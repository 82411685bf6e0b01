pub fn truncate_str(s: &str, max_len: usize) -> String {
    if max_len < 4 {
        return s.chars().take(max_len).collect();
    }
    if s.chars().count() > max_len {
        let end = s
            .char_indices()
            .nth(max_len - 3)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        format!("{}...", &s[..end])
    } else {
        s.to_string()
    }
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// `title (press)` as shown in the result list and the export view.
pub fn headline(title: &str, press: &str) -> String {
    format!("{} ({})", title, press)
}

pub fn selection_summary(selected: usize, total: usize) -> String {
    format!("{}/{} selected", selected, total)
}
