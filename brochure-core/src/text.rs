use std::sync::LazyLock;

use regex::Regex;

// Non-greedy, so adjacent spans stay separate: "**a** x **b**" is two spans.
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Render the operator mini-format to an HTML fragment.
///
/// `**text**` becomes a bold span. Lines starting with `* ` become items of
/// one unordered list; a line that is entirely a single bold span becomes a
/// sub-heading; anything else is a paragraph. Blank lines are dropped.
pub fn format(text: &str) -> String {
    let mut html = String::new();
    let mut in_list = false;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(item) = line.strip_prefix("* ") {
            if !in_list {
                html.push_str("<ul>");
                in_list = true;
            }
            html.push_str("<li>");
            html.push_str(&render_spans(item));
            html.push_str("</li>");
            continue;
        }

        if in_list {
            html.push_str("</ul>");
            in_list = false;
        }

        let rendered = render_spans(line);
        if is_sub_heading(&rendered) {
            let inner = rendered
                .strip_prefix("<strong>")
                .and_then(|r| r.strip_suffix("</strong>"))
                .unwrap_or(&rendered);
            html.push_str("<h3>");
            html.push_str(inner);
            html.push_str("</h3>");
        } else {
            html.push_str("<p>");
            html.push_str(&rendered);
            html.push_str("</p>");
        }
    }

    if in_list {
        html.push_str("</ul>");
    }

    html
}

/// Substitute bold spans left to right, escaping all literal text.
fn render_spans(line: &str) -> String {
    let mut out = String::new();
    let mut last = 0;

    for caps in BOLD.captures_iter(line) {
        let span = caps.get(0).expect("match has a full capture");
        out.push_str(&html_escape::encode_text(&line[last..span.start()]));
        out.push_str("<strong>");
        out.push_str(&html_escape::encode_text(&caps[1]));
        out.push_str("</strong>");
        last = span.end();
    }
    out.push_str(&html_escape::encode_text(&line[last..]));

    out
}

/// A sub-heading is one bold span covering the whole line, nothing else.
fn is_sub_heading(rendered: &str) -> bool {
    rendered.starts_with("<strong>")
        && rendered.ends_with("</strong>")
        && rendered.matches("<strong>").count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_list_paragraph_in_order() {
        let html = format("**Title**\n* a\n* b\nPara.");
        assert_eq!(
            html,
            "<h3>Title</h3><ul><li>a</li><li>b</li></ul><p>Para.</p>"
        );
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(format(""), "");
        assert_eq!(format("\n  \n"), "");
    }

    #[test]
    fn list_at_end_of_input_is_closed() {
        assert_eq!(format("* only"), "<ul><li>only</li></ul>");
    }

    #[test]
    fn two_spans_on_one_line_stay_a_paragraph() {
        assert_eq!(
            format("**A** and **B**"),
            "<p><strong>A</strong> and <strong>B</strong></p>"
        );
    }

    #[test]
    fn bold_inside_list_items() {
        assert_eq!(
            format("* **fast** pages"),
            "<ul><li><strong>fast</strong> pages</li></ul>"
        );
    }

    #[test]
    fn literal_text_is_escaped() {
        assert_eq!(format("a < b"), "<p>a &lt; b</p>");
    }

    #[test]
    fn blank_lines_do_not_split_lists() {
        // A blank line is dropped entirely, so the list keeps going.
        assert_eq!(
            format("* a\n\n* b"),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }
}
