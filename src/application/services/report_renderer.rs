use crate::domain::ClinicalSection;

/// Display fields for the report header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub patient_name: String,
    pub patient_id: String,
    pub visit_date: String,
}

/// Render the full patient report. Deterministic: same sections and header
/// always produce the same document. Sections whose text is empty after
/// joining fragments are dropped.
pub fn render_report(sections: &[ClinicalSection], header: &ReportHeader) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>Clinical Visit Summary - {name}</title>
<style>
{styles}
</style>
</head>
<body>

<div class="header">
    <h1>Clinical Visit Summary</h1>
    <div class="patient-info">
        <div><strong>Patient:</strong> {name}</div>
        <div class="patient-badge">{id}</div>
        <div><strong>Date:</strong> {date}</div>
    </div>
</div>
"#,
        name = header.patient_name,
        id = header.patient_id,
        date = header.visit_date,
        styles = STYLES,
    ));

    for section in sections {
        html.push_str(&render_section(section));
    }

    html.push_str(FOOTER);
    html
}

fn render_section(section: &ClinicalSection) -> String {
    let text = section.text();
    if text.is_empty() {
        return String::new();
    }

    let content = if section.name.is_treatment_plan() {
        text_to_numbered(&text)
    } else {
        text_to_bullets(&text)
    };

    format!(
        r#"
<div class="section">
    <div class="section-title">{title}</div>
    <div class="section-content">{content}</div>
</div>
"#,
        title = section.name.title(),
    )
}

/// Unordered list: dash-separated sub-items are normalized to sentences
/// before splitting on periods.
fn text_to_bullets(text: &str) -> String {
    let items: String = text
        .replace(" - ", ". ")
        .split('.')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<li>{p}</li>"))
        .collect();
    format!("<ul class='bullet-list'>{items}</ul>")
}

/// Ordered list: one numbered step per sentence.
fn text_to_numbered(text: &str) -> String {
    let items: String = text
        .split('.')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<li>{p}</li>"))
        .collect();
    format!("<ol class='numbered-list'>{items}</ol>")
}

const STYLES: &str = r#"
body {
    font-family: Arial, Helvetica, sans-serif;
    background-color: #F8FAFC;
    max-width: 800px;
    margin: auto;
    padding: 20px;
    color: #0F172A;
}

.header {
    background: linear-gradient(135deg, #2563EB, #1D4ED8);
    color: white;
    padding: 30px;
    border-radius: 10px;
    margin-bottom: 30px;
}

.header h1 {
    margin: 0 0 10px 0;
}

.patient-info {
    display: flex;
    gap: 20px;
    font-size: 14px;
}

.patient-badge {
    background: rgba(255,255,255,0.2);
    padding: 5px 12px;
    border-radius: 5px;
    font-weight: bold;
}

.section {
    background: white;
    padding: 22px;
    margin-bottom: 20px;
    border-radius: 8px;
    border-left: 4px solid #2563EB;
}

.section-title {
    color: #2563EB;
    font-size: 17px;
    font-weight: bold;
    margin-bottom: 12px;
    text-transform: uppercase;
}

.section-content {
    color: #334155;
    font-size: 15px;
}

.bullet-list {
    padding-left: 20px;
    margin: 0;
}

.bullet-list li {
    margin-bottom: 6px;
}

.numbered-list {
    padding-left: 22px;
}

.footer-note {
    background: #FEF3C7;
    border-left: 4px solid #F59E0B;
    padding: 15px;
    margin-top: 30px;
    border-radius: 5px;
    font-size: 13px;
}

.footer {
    text-align: center;
    margin-top: 30px;
    font-size: 13px;
    color: #64748B;
}
"#;

const FOOTER: &str = r#"
<div class="footer-note">
<strong>Note:</strong> This is an AI-generated summary for your convenience.
Please review and verify all information.
</div>

<div class="footer">
<p><strong>MediVoice</strong> – Clinical Documentation Assistant</p>
<p>© 2026 All rights reserved</p>
</div>

</body>
</html>
"#;
