use crate::models::profile::UserProfile;
use crate::render::escape;

pub fn render_profile(profile: &UserProfile) -> String {
    let rows = [
        ("Name", Some(profile.full_name.as_str())),
        ("Email", Some(profile.email.as_str())),
        ("Phone", profile.phone.as_deref()),
        ("Education", profile.education.as_deref()),
        ("Work history", profile.work_history.as_deref()),
    ];

    let body: String = rows
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .map(|(label, value)| format!("<dt>{label}</dt><dd>{}</dd>", escape(value)))
        .collect();
    format!("<dl class=\"profile\">{body}</dl>")
}
