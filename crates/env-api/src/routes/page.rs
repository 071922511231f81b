//! Server-rendered HTML view of `GET /api/env`.

use super::env::read_snapshot;
use super::AppState;
use crate::middleware::RequestTimer;
use axum::{extract::State, http::StatusCode, response::Html};
use env_types::EnvResponse;
use std::fmt::Write;
use std::sync::Arc;

const TITLE: &str = "Environment Variables Tester";
const SUBTITLE: &str = "Test and view your environment variables safely";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f8fafc;color:#0f172a}\
main{max-width:56rem;margin:0 auto;padding:2rem 1rem}\
.card{background:#fff;border:1px solid #e2e8f0;border-radius:.5rem;padding:1.25rem;margin-bottom:1.5rem}\
.error{background:#fef2f2;border-color:#fecaca;color:#b91c1c}\
.row{font-family:ui-monospace,monospace;font-size:.875rem;display:flex;gap:.75rem;padding:.5rem;background:#f1f5f9;border-radius:.25rem;margin-bottom:.5rem}\
.key{font-weight:600;color:#2563eb}.value{word-break:break-all}\
.muted{color:#64748b}\
code{background:#f1f5f9;padding:0 .25rem;border-radius:.25rem}";

/// Page handler. Status mirrors `/api/env`.
pub async fn index(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    let timer = RequestTimer::new(Arc::clone(&state.metrics));
    let result = read_snapshot(&state);
    timer.finish(result.is_ok());

    match result {
        Ok(snapshot) => (StatusCode::OK, Html(render_page(&snapshot))),
        Err(e) => (e.status, Html(render_page(&e.to_body()))),
    }
}

/// Render a snapshot (or failure body) as a complete HTML document.
pub fn render_page(snapshot: &EnvResponse) -> String {
    let mut html = String::with_capacity(4096);

    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{TITLE}</title><style>{STYLE}</style></head><body><main>\
         <h1>{TITLE}</h1><p class=\"muted\">{SUBTITLE}</p>\
         <p><a href=\"/\">Refresh Variables</a></p>"
    );

    if let Some(error) = &snapshot.error {
        let _ = write!(
            html,
            "<div class=\"card error\"><strong>Error:</strong> {}</div>",
            escape_html(error)
        );
    }

    let _ = write!(
        html,
        "<section class=\"card\"><h2>Environment Variables ({})</h2>",
        snapshot.count
    );

    if snapshot.environment_variables.is_empty() {
        html.push_str(
            "<div class=\"muted\"><p>No environment variables found</p>\
             <p>Add some environment variables to your .env file or deployment settings</p></div>",
        );
    } else {
        for (key, value) in &snapshot.environment_variables {
            let value = if value.is_empty() {
                "(empty)".to_string()
            } else {
                escape_html(value)
            };
            let _ = write!(
                html,
                "<div class=\"row\"><span class=\"key\">{}:</span><span class=\"value\">{}</span></div>",
                escape_html(key),
                value
            );
        }
    }
    html.push_str("</section>");

    html.push_str(
        "<section class=\"card\"><h2>How to add environment variables</h2>\
         <h3>Local development</h3>\
         <p>Create a <code>.env.local</code> or <code>.env</code> file next to the server:</p>\
         <pre><code>NEXT_PUBLIC_SITE_NAME=My App\nNEXT_PUBLIC_API_URL=https://api.example.com</code></pre>\
         <h3>Deployment</h3>\
         <p>Set variables in your platform's environment settings and restart the service.</p>\
         <h3>Public prefix</h3>\
         <p>Only names starting with <code>NEXT_PUBLIC_</code> or on the allow-list are shown \
         unless the server runs with the <code>unfiltered</code> policy.</p></section>",
    );

    html.push_str("</main></body></html>");
    html
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
