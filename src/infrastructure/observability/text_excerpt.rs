const MAX_EXCERPT_CHARS: usize = 80;

/// Shortens caller-supplied text for logging, so a multi-megabyte book body
/// never lands in the log stream.
pub fn log_excerpt(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total <= MAX_EXCERPT_CHARS {
        return trimmed.to_string();
    }

    let head: String = trimmed.chars().take(MAX_EXCERPT_CHARS).collect();
    format!("{}... ({} chars total)", head, total)
}
