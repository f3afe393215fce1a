//! HTML fragments the host places in its content container.

use crate::escape::escape_html;

pub const EXAMPLE_CONFIG_URL: &str = "https://rtdlearning2.github.io/rtd-applets-engine/activity/?src=https://raw.githubusercontent.com/rtdlearning2/rtd-applets-math30-1/main/configs/unit-1-transformations/reflections/reflect_x_001.json";

/// Panel shown when the config could not be fetched or parsed.
pub fn load_error_panel(detail: &str) -> String {
    format!(
        r#"<div class="muted">Fix the URL or config path and reload.</div><pre>{}</pre>"#,
        escape_html(detail)
    )
}

/// Panel shown when a config is valid JSON but lacks required fields.
pub fn shape_diagnostic_panel(raw: &serde_json::Value, problems: &[String]) -> String {
    let pretty = serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string());
    let mut out = String::from(r#"<div class="muted">Config is missing required fields.</div>"#);
    if !problems.is_empty() {
        out.push_str("<ul>");
        for problem in problems {
            out.push_str("<li>");
            out.push_str(&escape_html(problem));
            out.push_str("</li>");
        }
        out.push_str("</ul>");
    }
    out.push_str("<pre>");
    out.push_str(&escape_html(&pretty));
    out.push_str("</pre>");
    out
}

/// Panel shown when the page was opened without a `src` parameter.
pub fn missing_source_panel() -> String {
    format!(
        r#"<p class="muted">Example:</p><pre>{}</pre>"#,
        escape_html(EXAMPLE_CONFIG_URL)
    )
}

/// Inner markup of the instructions card: prompt, how-to, controls and
/// feedback slots. Element ids are what the browser bridge binds to.
pub fn instructions_card(max_points: usize) -> String {
    format!(
        concat!(
            r#"<div id="prompt" style="font-size:16px; font-weight:600;"></div>"#,
            r#"<div id="howto" class="muted" style="margin-top:6px;"></div>"#,
            r#"<div class="muted" style="margin-top:6px;">"#,
            "Plot <b>up to {max} points</b>, from left to right. Clicks snap to the nearest grid point.",
            "</div>",
            r#"<div style="margin-top:12px; display:flex; gap:10px; flex-wrap:wrap;">"#,
            r#"<button id="btnUndo" type="button">Undo</button>"#,
            r#"<button id="btnReset" type="button">Reset</button>"#,
            r#"<button id="btnSubmit" type="button">Submit</button>"#,
            r#"<button id="btnSeeSolution" type="button" style="display:none;">See solution</button>"#,
            "</div>",
            r#"<div id="feedback" style="margin-top:12px;"></div>"#,
        ),
        max = max_points
    )
}
