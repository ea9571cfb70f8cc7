//! Interactive view handlers
//!
//! The server owns the per-section toggle state, so a reload shows the
//! sections the way they were left.

use crate::state::{AppState, ServerEvent};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use clipmark_core::encoder::{escape_html, HtmlEncoder};
use clipmark_core::view::SectionSummary;
use clipmark_core::SectionState;
use serde::Serialize;

const PAGE_SCRIPT: &str = r#"
document.getElementById('clippingsFile').addEventListener('change', function (event) {
  var file = event.target.files[0];
  var status = document.getElementById('status');
  if (!file) {
    status.textContent = 'No file selected.';
    return;
  }
  status.textContent = 'Reading file "' + file.name + '"...';
  var form = new FormData();
  form.append('file', file);
  fetch('/api/v1/clippings', { method: 'POST', body: form }).then(function () {
    window.location.reload();
  });
});
document.querySelectorAll('.book-header').forEach(function (header) {
  header.addEventListener('click', function () {
    var container = header.parentElement;
    var index = container.getAttribute('data-section');
    fetch('/api/v1/view/sections/' + index + '/toggle', { method: 'POST' })
      .then(function (response) { return response.json(); })
      .then(function (body) {
        var expanded = body.state === 'expanded';
        container.setAttribute('data-state', body.state);
        header.classList.toggle('active', expanded);
        container.querySelector('.clippings-list').hidden = !expanded;
      });
  });
});
"#;

/// Toggle response
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub index: usize,
    pub state: SectionState,
}

/// The page: file picker, status line, Markdown output and expandable view
pub async fn index_page(State(state): State<AppState>) -> Html<String> {
    let session = state.session.read().await;
    let encoder = HtmlEncoder::new();

    let (markdown, sections) = match &session.run {
        Some(run) => (
            escape_html(&run.conversion.markdown),
            encoder.render_fragment(&run.view),
        ),
        None => (String::new(), String::from("<div id=\"html-output\"></div>\n")),
    };

    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Kindle Clippings</title>\n\
         <style>{style}</style>\n\
         </head>\n<body>\n\
         <h1>Kindle Clippings</h1>\n\
         <input type=\"file\" id=\"clippingsFile\" accept=\".txt\">\n\
         <p id=\"status\">{status}</p>\n\
         <textarea id=\"output\" rows=\"12\" cols=\"80\" readonly>{markdown}</textarea>\n\
         {sections}\
         <script>{script}</script>\n\
         </body>\n</html>\n",
        style = encoder.stylesheet(),
        status = escape_html(&session.status.to_string()),
        script = PAGE_SCRIPT,
    ))
}

/// Sections of the current view with their toggle states
pub async fn get_view(State(state): State<AppState>) -> Json<Vec<SectionSummary>> {
    let session = state.session.read().await;
    let sections = session
        .run
        .as_ref()
        .map(|run| run.view.summaries())
        .unwrap_or_default();
    Json(sections)
}

/// Flip one section between collapsed and expanded
pub async fn toggle_section(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ToggleResponse>, StatusCode> {
    let new_state = {
        let mut session = state.session.write().await;
        let run = session.run.as_mut().ok_or(StatusCode::NOT_FOUND)?;
        run.view.toggle(index).ok_or(StatusCode::NOT_FOUND)?
    };

    tracing::debug!(index, state = new_state.as_str(), "section toggled");
    state.broadcast(ServerEvent::SectionToggled {
        index,
        state: new_state,
    });

    Ok(Json(ToggleResponse {
        index,
        state: new_state,
    }))
}
