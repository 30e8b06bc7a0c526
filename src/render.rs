use crate::airdate::format_airdate;
use crate::types::{AlfredIcon, AlfredItem, AlfredResponse, DisplayRecord, ReleaseMap};

/// Display records sorted by show name
pub fn build_response(releases: &ReleaseMap) -> Vec<DisplayRecord> {
    let mut entries: Vec<_> = releases.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name));

    entries
        .into_iter()
        .map(|(show, date)| DisplayRecord {
            title: show.name.clone(),
            subtitle: format_airdate(*date),
            id: show.name.clone(),
        })
        .collect()
}

/// Render records as an Alfred script filter document
pub fn render_alfred(records: &[DisplayRecord]) -> Result<String, serde_json::Error> {
    let response = AlfredResponse {
        items: records
            .iter()
            .map(|record| AlfredItem {
                title: &record.title,
                subtitle: &record.subtitle,
                arg: &record.id,
                icon: AlfredIcon::default(),
            })
            .collect(),
    };
    serde_json::to_string(&response)
}

/// Render records as Markdown
pub fn render_markdown(records: &[DisplayRecord]) -> String {
    let mut output = String::from("# Upcoming shows\n\n");
    for record in records {
        output.push_str(&format!("- **{}**: {}\n", record.title, record.subtitle));
    }
    output
}

/// Render records as HTML
pub fn render_html(records: &[DisplayRecord]) -> String {
    let mut output = String::from("<html><body><h1>Upcoming shows</h1>\n<ul>\n");
    for record in records {
        output.push_str(&format!(
            "<li><strong>{}</strong>: {}</li>\n",
            html_escape(&record.title),
            html_escape(&record.subtitle)
        ));
    }
    output.push_str("</ul>\n</body></html>");
    output
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
