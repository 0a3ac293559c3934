//! Line-oriented mini-languages for operator-authored content. Malformed
//! lines are skipped, never an error: a half-typed line in the config must
//! not take the whole build down.

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Parse `icon | title | description` lines. Lines with fewer than three
/// pipe-fields are dropped; extra fields beyond the third are ignored.
pub fn parse_features(text: &str) -> Vec<Feature> {
    text.lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split('|').collect();
            if parts.len() < 3 {
                return None;
            }
            Some(Feature {
                icon: parts[0].trim().to_string(),
                title: parts[1].trim().to_string(),
                description: parts[2].trim().to_string(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub author: String,
    pub quote: String,
}

/// Parse `author | quote` lines, split on the first pipe.
pub fn parse_testimonials(text: &str) -> Vec<Testimonial> {
    text.lines()
        .filter_map(|line| {
            let (author, quote) = line.split_once('|')?;
            Some(Testimonial {
                author: author.trim().to_string(),
                quote: quote.trim().to_string(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Parse `question ? answer` lines, split on the first `?`. Any further `?`
/// characters in the answer are stripped.
pub fn parse_faq(text: &str) -> Vec<FaqEntry> {
    text.lines()
        .filter_map(|line| {
            let (question, answer) = line.split_once('?')?;
            Some(FaqEntry {
                question: question.trim().to_string(),
                answer: answer.replace('?', "").trim().to_string(),
            })
        })
        .collect()
}

/// Feature-card icon lookup: known keywords matched case-insensitively as
/// substrings, in a fixed order. Anything unrecognized gets the checkmark,
/// so a card never renders without an icon.
pub fn icon_svg(name: &str) -> &'static str {
    let name = name.to_lowercase();

    if name.contains("code") {
        return r#"<svg viewBox="0 0 24 24" width="32" height="32" fill="currentColor"><path d="M9.4 16.6L4.8 12l4.6-4.6L8 6l-6 6 6 6 1.4-1.4zm5.2 0l4.6-4.6-4.6-4.6L16 6l6 6-6 6-1.4-1.4z"/></svg>"#;
    }
    if name.contains("shield") {
        return r#"<svg viewBox="0 0 24 24" width="32" height="32" fill="currentColor"><path d="M12 1L3 5v6c0 5.55 3.84 10.74 9 12 5.16-1.26 9-6.45 9-12V5l-9-4zm0 10.99h7c-.53 4.12-3.28 7.79-7 8.94V12H5V6.3l7-3.11v8.8z"/></svg>"#;
    }
    if name.contains("bolt") {
        return r#"<svg viewBox="0 0 24 24" width="32" height="32" fill="currentColor"><path d="M11 21h-1l1-7H7.5c-.58 0-.57-.32-.38-.66.19-.34.05-.08.07-.12C8.48 10.94 10.42 7.54 13 3h1l-1 7h3.5c.49 0 .56.33.47.51l-.07.15C12.96 17.55 11 21 11 21z"/></svg>"#;
    }
    if name.contains("star") {
        return r#"<svg viewBox="0 0 24 24" width="32" height="32" fill="currentColor"><path d="M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z"/></svg>"#;
    }
    if name.contains("heart") {
        return r#"<svg viewBox="0 0 24 24" width="32" height="32" fill="currentColor"><path d="M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z"/></svg>"#;
    }
    if name.contains("wallet") {
        return r#"<svg viewBox="0 0 24 24" width="32" height="32" fill="currentColor"><path d="M21 18v1c0 1.1-.9 2-2 2H5c-1.11 0-2-.9-2-2V5c0-1.1.89-2 2-2h14c1.1 0 2 .9 2 2v1h-9c-1.11 0-2 .9-2 2v8c0 1.1.89 2 2 2h9zm-9-2h10V8H12v8zm4-2.5c-.83 0-1.5-.67-1.5-1.5s.67-1.5 1.5-1.5 1.5.67 1.5 1.5-.67 1.5-1.5 1.5z"/></svg>"#;
    }
    if name.contains("table") {
        return r#"<svg viewBox="0 0 24 24" width="32" height="32" fill="currentColor"><path d="M19 3H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zM5 19V5h14v14H5zm2-2h10v-2H7v2zm0-4h10v-2H7v2zm0-4h10V7H7v2z"/></svg>"#;
    }

    r#"<svg viewBox="0 0 24 24" width="32" height="32" fill="currentColor"><path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z"/></svg>"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_line_with_two_fields_is_dropped() {
        let features = parse_features("bolt | Fast\nstar | Loved | By everyone");
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].title, "Loved");
    }

    #[test]
    fn feature_line_keeps_only_first_three_fields() {
        let features = parse_features("bolt | Fast | Really fast | ignored | also ignored");
        assert_eq!(features.len(), 1);
        assert_eq!(
            features[0],
            Feature {
                icon: "bolt".into(),
                title: "Fast".into(),
                description: "Really fast".into(),
            }
        );
    }

    #[test]
    fn testimonial_without_pipe_is_skipped() {
        let parsed = parse_testimonials("no delimiter here\nAda | It just works");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].author, "Ada");
        assert_eq!(parsed[0].quote, "It just works");
    }

    #[test]
    fn faq_splits_on_first_question_mark_and_strips_the_rest() {
        let parsed = parse_faq("Q1 ? A1 ? extra");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].question, "Q1");
        assert_eq!(parsed[0].answer, "A1  extra");
    }

    #[test]
    fn faq_line_without_question_mark_is_skipped() {
        assert!(parse_faq("statement with no delimiter").is_empty());
    }

    #[test]
    fn icon_lookup_is_substring_and_case_insensitive() {
        assert!(icon_svg("The BOLT one").contains("M11 21h-1l1-7"));
        assert!(icon_svg("wallet-ish").contains("M21 18v1"));
    }

    #[test]
    fn unknown_icon_falls_back_to_checkmark() {
        let svg = icon_svg("nope");
        assert!(svg.contains("M12 2C6.48"));
        assert!(!svg.is_empty());
    }
}
