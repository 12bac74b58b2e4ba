use crate::dashboard::controller::DashboardView;
use crate::dashboard::grouping::StatusColumn;
use crate::models::application::{Application, Status};
use crate::render::{escape, message};

pub const LOAD_FAILED: &str = "Failed to load dashboard.";

/// Renders the content of the `#dashboard` container.
pub fn render_dashboard(view: &DashboardView) -> String {
    match view {
        DashboardView::Columns(columns) => columns.iter().map(render_column).collect(),
        DashboardView::Failed => message(LOAD_FAILED),
    }
}

fn render_column(column: &StatusColumn) -> String {
    let status = column.status.as_str();
    let cards: String = column.applications.iter().map(render_card).collect();
    format!(
        "<div class=\"column\" data-status=\"{status}\" \
         ondragover=\"event.preventDefault()\" \
         ondrop=\"handleDrop(event, '{status}')\">\
         <h3>{status}</h3>{cards}</div>"
    )
}

fn render_card(app: &Application) -> String {
    let id = app.id;
    let options: String = Status::ALL
        .iter()
        .map(|s| {
            let selected = if app.known_status() == Some(*s) {
                " selected"
            } else {
                ""
            };
            format!("<option value=\"{s}\"{selected}>{s}</option>")
        })
        .collect();
    format!(
        "<div class=\"app-card\" data-id=\"{id}\" draggable=\"true\" \
         ondragstart=\"handleDragStart(event, {id})\">\
         <strong>{company}</strong><br /><span>{role}</span><br />\
         <label>Status:</label>\
         <select onchange=\"updateStatus({id}, this.value)\">{options}</select></div>",
        company = escape(&app.company),
        role = escape(&app.role),
    )
}
