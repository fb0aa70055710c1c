use crate::{MetaTag, PageReport};
use std::fmt::Write as _;

pub fn verbose(report: &PageReport, status: Option<u16>) -> String {
    let mut out = String::new();
    if let Some(status) = status {
        let _ = writeln!(out, "Status Code: {status}");
        out.push('\n');
    }
    out.push_str("--- Meta Tags in Head ---\n");
    for tag in &report.meta_tags {
        let _ = writeln!(out, "{}", attribute_map(tag));
    }
    out.push_str("\n--- Title ---\n");
    match &report.title {
        Some(title) => {
            let _ = writeln!(out, "{title}");
        }
        None => out.push_str("No title tag\n"),
    }
    out
}

pub fn normalized(report: &PageReport) -> String {
    let mut out = String::from("--- Meta Tags ---\n");
    for tag in &report.meta_tags {
        match &tag.content {
            Some(content) => {
                let _ = writeln!(out, "{}: {content}", tag.key);
            }
            None => {
                let _ = writeln!(out, "{}: None", tag.key);
            }
        }
    }
    out.push_str("\n--- Title ---\n");
    match &report.title {
        Some(title) => {
            let _ = writeln!(out, "{title}");
        }
        None => out.push_str("No title found\n"),
    }
    out
}

fn attribute_map(tag: &MetaTag) -> String {
    let pairs = tag
        .attrs
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{pairs}}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect_html;

    #[test]
    fn normalized_renders_the_file_mode_report() {
        let html = r#"<html><head>
            <meta property="og:title" content="Example">
            <title>Example Page</title>
        </head></html>"#;
        let out = normalized(&inspect_html(html));
        assert_eq!(
            out,
            "--- Meta Tags ---\nog:title: Example\n\n--- Title ---\nExample Page\n"
        );
    }

    #[test]
    fn normalized_prints_none_for_absent_content() {
        let out = normalized(&inspect_html(r#"<meta name="robots">"#));
        assert!(out.contains("robots: None\n"));
    }

    #[test]
    fn normalized_reports_a_missing_title() {
        let out = normalized(&inspect_html("<html><body>no title here</body></html>"));
        assert!(out.ends_with("--- Title ---\nNo title found\n"));
    }

    #[test]
    fn verbose_renders_status_and_attribute_maps() {
        let html = r#"<head>
            <meta property="og:title" content="Example">
            <title>Example Page</title>
        </head>"#;
        let out = verbose(&inspect_html(html), Some(200));
        assert!(out.starts_with("Status Code: 200\n\n--- Meta Tags in Head ---\n"));
        assert!(out.contains("{property: og:title, content: Example}\n"));
        assert!(out.ends_with("--- Title ---\nExample Page\n"));
    }

    #[test]
    fn verbose_without_status_omits_the_status_line() {
        let out = verbose(&inspect_html("<title>t</title>"), None);
        assert!(out.starts_with("--- Meta Tags in Head ---\n"));
    }

    #[test]
    fn verbose_reports_a_missing_title() {
        let out = verbose(&inspect_html("<p>nothing</p>"), Some(404));
        assert!(out.ends_with("--- Title ---\nNo title tag\n"));
    }
}
