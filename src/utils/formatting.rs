const MAX_STATUS_LEN: usize = 160;

/// Escapes text for interpolation into HTML element content or
/// double-quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// `"1 record"`, `"3 records"`.
pub fn count_label(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

/// Shortens a status line to a single display row.
pub fn truncate_status(message: &str) -> String {
    let first_line = message.lines().next().unwrap_or_default();
    if first_line.chars().count() > MAX_STATUS_LEN {
        let mut truncated = first_line.chars().take(MAX_STATUS_LEN).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        first_line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x&y")</script>'"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;&#39;"
        );
        assert_eq!(escape_html("Troponin 4.5 ng/mL"), "Troponin 4.5 ng/mL");
    }

    #[test]
    fn pluralizes_counts() {
        assert_eq!(count_label(1, "record"), "1 record");
        assert_eq!(count_label(0, "code"), "0 codes");
        assert_eq!(count_label(12, "code"), "12 codes");
    }

    #[test]
    fn status_keeps_first_line_only() {
        assert_eq!(truncate_status("saved\nsecond line"), "saved");
        let long = "x".repeat(200);
        let truncated = truncate_status(&long);
        assert_eq!(truncated.chars().count(), MAX_STATUS_LEN + 1);
        assert!(truncated.ends_with('…'));
    }
}
