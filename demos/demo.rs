//! End-to-end demo of a quiz session.
//!
//! Run with: `RUST_LOG=debug cargo run --example demo`
//!
//! 1. **Seeded session**: plays one topic to the results screen, answering
//!    with the first displayed option every time, and prints each screen.
//! 2. **Retry / change topic**: retries the same question set, then switches
//!    to another topic.
//! 3. **JSON view**: dumps the snapshot a web front end would receive.
//!
//! Pass a path as the first argument to load content from a JSON file of the
//! shape `{ "<topic>": [ { "title": "...", "content": "..." } ] }` instead of
//! the built-in dataset.

use std::env;

use topic_quiz::{start_quiz, ContentStore, OptionMark, QuizRequest, QuizSession, QuizView};

/// Pretty-print whatever screen the session is on.
fn print_view(session: &QuizSession) {
    match QuizView::of(session) {
        QuizView::Loading => println!("  Loading Quiz..."),
        QuizView::Question { topic, number, total, prompt, options, score, action_label, .. } => {
            println!("  Topic: {topic}   Question {number}/{total}   Score: {score}");
            println!("  Q: {prompt}");
            for (i, opt) in options.iter().enumerate() {
                let marker = match opt.mark {
                    OptionMark::Neutral => " ",
                    OptionMark::Selected => ">",
                    OptionMark::Correct => "✓",
                    OptionMark::Wrong => "✗",
                };
                println!("    [{i}] {marker} {}", opt.text);
            }
            println!("  ({action_label})");
            println!();
        }
        QuizView::Results { summary, percentage } => {
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!("  Quiz Results   Topic: {}", summary.topic);
            println!("  Your Score: {} / {} ({percentage:.0}%)", summary.correct, summary.total);
            println!("  Correct: {}   Incorrect: {}", summary.correct, summary.incorrect);
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!();
        }
    }
}

fn play(session: &mut QuizSession) -> Result<(), topic_quiz::QuizError> {
    while !session.state().map_or(true, |s| s.finished()) {
        session.select_option_at(0)?;
        session.submit()?;
        print_view(session);
        session.next()?;
    }
    print_view(session);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let store = match env::args().nth(1) {
        Some(path) => ContentStore::from_json_file(path)?,
        None => ContentStore::builtin(),
    };

    println!();
    println!("══ Seeded session (seed = 2024) ══");
    println!();
    let mut session = start_quiz(store, &QuizRequest::new().with_seed(2024))?;
    play(&mut session)?;

    println!("══ Try Again ══");
    println!();
    session.retry()?;
    print_view(&session);

    println!("══ Change Topic ══");
    println!();
    session.change_topic()?;
    print_view(&session);

    println!("══ JSON view ══");
    println!();
    println!("{}", serde_json::to_string_pretty(&QuizView::of(&session).to_json())?);
    Ok(())
}
