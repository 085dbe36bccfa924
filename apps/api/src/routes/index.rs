use axum::response::Html;

/// GET /
/// The single study page. Static markup; all state lives server-side and
/// the page drives the JSON API with the typed email.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

#[cfg(test)]
mod tests {
    const PAGE: &str = include_str!("../../assets/index.html");

    #[test]
    fn test_page_carries_study_notice_and_example() {
        assert!(PAGE.contains("Experimental Considerations"));
        assert!(PAGE.contains("Example Video &amp; Expected Description"));
        // The sample description shown before the task.
        assert!(PAGE.contains("dominant hand in a '4' handshape"));
        assert!(PAGE.contains("When writing your own description"));
    }

    #[test]
    fn test_page_handles_empty_history() {
        assert!(PAGE.contains("No submissions found."));
        assert!(PAGE.contains("session.submissions.length === 0"));
    }
}
