//! HTML rendering of a [`MatchReport`].
//!
//! Output is a fragment meant for a result container; [`render_document`]
//! wraps it into a standalone page for export. Every backend-supplied string
//! goes through [`escape_html`].

use crate::model::{Diagnosis, FileMatchResult, MatchReport, PatientRecord, TextMatchResult};
use crate::utils::escape_html;

const PRIMARY_GREEN: &str = "#27ae60";
const SECONDARY_BLUE: &str = "#3498db";
const COMPLICATION_RED: &str = "#e74c3c";
const LAB_ORANGE: &str = "#f39c12";

pub fn render_html(report: &MatchReport) -> String {
    let mut html = String::new();
    push_statistics(&mut html, report);

    match report {
        MatchReport::File(result) if result.has_records() => push_records(&mut html, result),
        MatchReport::Text(result) if result.has_codes() => push_matched_codes(&mut html, result),
        _ => push_no_data(&mut html, report.no_data_message()),
    }

    html
}

/// Standalone page around [`render_html`].
pub fn render_document(report: &MatchReport) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>ICD Code Suggestions</title>
<style>
body {{ font-family: sans-serif; max-width: 960px; margin: 40px auto; color: #2c3e50; }}
.result-box {{ border: 1px solid #e0e0e0; border-radius: 8px; padding: 20px; }}
.result-item {{ display: flex; gap: 10px; margin-bottom: 8px; }}
.result-label {{ font-weight: 600; }}
</style>
</head>
<body>
{}
</body>
</html>
"#,
        render_html(report)
    )
}

fn push_statistics(html: &mut String, report: &MatchReport) {
    html.push_str(
        r#"<div class="result-box">
<h2 style="color: #2c3e50; margin-bottom: 20px;">🤖 AI-Suggested ICD Codes</h2>
<div style="background: #f8f9ff; padding: 20px; border-radius: 8px; margin-bottom: 20px;">
<h3 style="margin-bottom: 15px; color: #34495e;">📊 Statistics</h3>
"#,
    );
    for line in report.statistics() {
        html.push_str(&format!(
            "<div class=\"result-item\">\n<div class=\"result-label\">{}:</div>\n<div class=\"result-value\">{}</div>\n</div>\n",
            line.label, line.value
        ));
    }
    html.push_str("</div>\n</div>\n");
}

fn push_records(html: &mut String, result: &FileMatchResult) {
    for record in &result.results {
        push_record(html, record);
    }
}

fn push_record(html: &mut String, record: &PatientRecord) {
    let principal = &record.principal_diagnosis;
    html.push_str(&format!(
        r#"<div class="result-box" style="margin-top: 20px; border-left: 4px solid {PRIMARY_GREEN};">
<h3 style="color: {PRIMARY_GREEN}; margin-bottom: 15px;">📋 AN: {}</h3>
<div style="margin-bottom: 15px;">
<strong style="color: #2c3e50; font-size: 1.1em;">Principal Diagnosis:</strong>
<div style="margin-left: 20px; margin-top: 8px;">
<span style="background: {PRIMARY_GREEN}; color: white; padding: 4px 10px; border-radius: 4px; font-weight: 600;">{}</span>
<span style="margin-left: 10px; color: #555;">{}</span>
</div>
</div>
"#,
        escape_html(record.visit_id()),
        escape_html(principal.code_or_placeholder()),
        escape_html(principal.description_or_placeholder()),
    ));

    push_diagnosis_list(
        html,
        "color: #2c3e50;",
        "Secondary Diagnoses:",
        SECONDARY_BLUE,
        &record.secondary_diagnoses,
    );
    push_diagnosis_list(
        html,
        &format!("color: {COMPLICATION_RED};"),
        "⚠️ Complications:",
        COMPLICATION_RED,
        &record.complications,
    );
    push_lab_findings(html, &record.laboratory_findings);

    html.push_str("</div>\n");
}

/// Omitted entirely when `items` is empty.
fn push_diagnosis_list(
    html: &mut String,
    title_style: &str,
    title: &str,
    badge_color: &str,
    items: &[Diagnosis],
) {
    if items.is_empty() {
        return;
    }

    html.push_str(&format!(
        "<div style=\"margin-bottom: 15px;\">\n<strong style=\"{title_style}\">{title}</strong>\n<ul style=\"margin-left: 20px; margin-top: 8px; list-style: none; padding: 0;\">\n"
    ));
    for item in items {
        html.push_str(&format!(
            "<li style=\"margin-bottom: 6px;\">\n<span style=\"background: {badge_color}; color: white; padding: 3px 8px; border-radius: 3px; font-size: 0.9em;\">{}</span>\n<span style=\"margin-left: 10px; color: #555;\">{}</span>\n</li>\n",
            escape_html(item.code().unwrap_or_default()),
            escape_html(item.description().unwrap_or_default()),
        ));
    }
    html.push_str("</ul>\n</div>\n");
}

fn push_lab_findings(html: &mut String, findings: &[String]) {
    if findings.is_empty() {
        return;
    }

    html.push_str(&format!(
        "<div>\n<strong style=\"color: {LAB_ORANGE};\">🧪 Laboratory Findings:</strong>\n<ul style=\"margin-left: 20px; margin-top: 8px; list-style: disc; padding-left: 20px;\">\n"
    ));
    for finding in findings {
        html.push_str(&format!(
            "<li style=\"margin-bottom: 4px; color: #555;\">{}</li>\n",
            escape_html(finding)
        ));
    }
    html.push_str("</ul>\n</div>\n");
}

fn push_matched_codes(html: &mut String, result: &TextMatchResult) {
    html.push_str(&format!(
        "<div class=\"result-box\" style=\"margin-top: 20px; border-left: 4px solid {PRIMARY_GREEN};\">\n<h3 style=\"color: {PRIMARY_GREEN}; margin-bottom: 15px;\">📋 Extracted Findings</h3>\n<ul style=\"list-style: none; padding: 0;\">\n"
    ));
    for entry in &result.matched_codes {
        html.push_str(&format!(
            "<li style=\"margin-bottom: 6px;\">\n<span style=\"background: {SECONDARY_BLUE}; color: white; padding: 3px 8px; border-radius: 3px; font-size: 0.9em;\">{}</span>\n<span style=\"margin-left: 10px; color: #555;\">{}</span>\n<span style=\"margin-left: 10px; color: #999; font-size: 0.85em;\">{}</span>\n</li>\n",
            escape_html(&entry.code),
            escape_html(&entry.description),
            entry.found_in_column(),
        ));
    }
    html.push_str("</ul>\n</div>\n");
}

fn push_no_data(html: &mut String, message: &str) {
    html.push_str(&format!(
        r#"<div class="result-box" style="margin-top: 20px; background: #fff3cd; border-color: #ffc107;">
<h3 style="color: #856404;">⚠️ No Data Found</h3>
<p style="color: #856404;">{message}</p>
</div>
"#
    ));
}
