use crate::models::resume::{AnalysisResult, UploadResult};
use crate::render::escape;

pub fn render_analysis(result: &AnalysisResult) -> String {
    let items: String = result
        .suggestions
        .iter()
        .map(|s| format!("<li>{}</li>", escape(s)))
        .collect();
    format!(
        "<h3>Match Score: {}%</h3><ul>{items}</ul>",
        result.match_score
    )
}

pub fn render_upload(result: &UploadResult) -> String {
    let parsed = &result.parsed_data;
    let mut html = format!(
        "<pre class=\"preview\">Preview:\n{}</pre>",
        escape(&result.content_preview)
    );

    let fields = [
        ("Name", parsed.full_name.as_deref()),
        ("Email", parsed.email.as_deref()),
        ("Phone", parsed.phone.as_deref()),
        ("Education", parsed.education.as_deref()),
        ("Work history", parsed.work_history.as_deref()),
    ];
    let known: String = fields
        .iter()
        .filter_map(|(label, value)| {
            value.map(|v| format!("<dt>{label}</dt><dd>{}</dd>", escape(v)))
        })
        .collect();
    if !known.is_empty() {
        html.push_str(&format!("<dl class=\"parsed\">{known}</dl>"));
    }
    if let Some(id) = result.id {
        html.push_str(&format!("<p class=\"saved\">Saved as profile #{id}</p>"));
    }
    html
}
