use std::convert::Infallible;

use axum::response::sse::{Event, Sse};
use futures::{stream, Stream};

const MERGE_FRAGMENTS: &str = "datastar-merge-fragments";

/// A one-event stream asking datastar to merge `html` into the page.
pub fn merge_fragments(
    html: &str,
    view_transition: bool,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let event = Event::default()
        .event(MERGE_FRAGMENTS)
        .data(fragment_data(html, view_transition));

    Sse::new(stream::iter([Ok(event)]))
}

/// Event data lines; axum prefixes each with `data: `.
fn fragment_data(html: &str, view_transition: bool) -> String {
    let mut lines = Vec::new();

    if view_transition {
        lines.push("useViewTransition true".to_owned());
    }

    lines.extend(
        html.lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .map(|line| format!("fragments {line}")),
    );

    lines.join("\n")
}
