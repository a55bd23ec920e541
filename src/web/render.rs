//! HTML fragments for the board. Pure functions of a [`GameRecord`].

use crate::games::wordle::{GameRecord, Status};

pub const INDEX: &str = include_str!("../../static/index.html");

/// The `<main>` fragment datastar swaps into the page after every move.
pub fn board(record: &GameRecord) -> String {
    let tries = record.max_attempts();
    let letters = record.word_length();
    let attempts = record.attempts();

    let mut html = String::new();

    html.push_str(
        r#"<main id="main" class="gz" data-on-wordle="@post('/attempt/' + evt.detail.value)" data-indicator-fetching>"#,
    );
    html.push_str(&overlay(record));
    html.push_str(r#"<img src="/static/gooey-balls.svg" class="gc" data-show="$fetching">"#);

    html.push_str(&format!(
        r#"<div class="gc wordle-wrapper" style="grid-template-rows: repeat({tries}, 1fr); gap: .2rem">"#
    ));

    let step = 2.0 / tries as f32;
    for attempt in attempts {
        html.push_str(&line_open(letters));

        let squares = attempt.letters.iter().zip(attempt.colors.iter());
        for (index, (letter, verdict)) in squares.enumerate() {
            let delay = step * index as f32;
            html.push_str(&format!(
                r#"<div class="square" completed data-delay="{delay}s" style="background: {}">{letter}</div>"#,
                verdict.color()
            ));
        }

        html.push_str("</div>");
    }

    let mut empty = tries.saturating_sub(attempts.len());
    if record.status().is_running() && empty > 0 {
        html.push_str(&format!(r#"<wordle-line length="{letters}"></wordle-line>"#));
        empty -= 1;
    }

    for _ in 0..empty {
        html.push_str(&line_open(letters));
        for _ in 0..letters {
            html.push_str(r#"<div class="square"></div>"#);
        }
        html.push_str("</div>");
    }

    html.push_str("</div></main>");
    html
}

fn line_open(letters: usize) -> String {
    format!(r#"<div class="line" style="grid-template-columns: repeat({letters}, 1fr)">"#)
}

fn overlay(record: &GameRecord) -> String {
    let (title, detail) = match record.status() {
        Status::Running => return String::new(),
        Status::Won => (
            "A WINNER IS YOU",
            format!("In only {} attempts, wow :o", record.attempts().len()),
        ),
        Status::Lost => ("NICE TRY...", format!("The word was {}", record.word())),
    };

    format!(
        r#"<div class="gc overlay"><p class="gt l">{title}</p><p>{detail}</p><a href="/new_game"><div class="gc difficulty-button">Play again?</div></a></div>"#
    )
}
