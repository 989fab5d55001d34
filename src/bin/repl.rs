//! Terminal front end for the etymology proxy.
//!
//! Type a word and press Enter to show it; press Enter on an empty line to
//! "click" it and fetch its breakdown. `:reset` clears the page, `:quit` exits.

use anyhow::Result;
use etymology_fx::{
    config, logging,
    ui::{ClickOutcome, EtymologyView, HttpEtymologyFetcher, Results, UiController},
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load().await?;
    logging::init(&config.server.logs.level)?;

    let fetcher = HttpEtymologyFetcher::new(&config.client.api_base_url);
    info!("Using etymology endpoint {}", fetcher.endpoint());
    let controller = UiController::new(Arc::new(fetcher));

    println!("Type a word, then press Enter on an empty line to reveal its etymology.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":quit" | ":q" => break,
            ":reset" => match controller.reset() {
                Ok(()) => println!("(cleared)"),
                Err(e) => println!("(nothing to clear: {})", e),
            },
            "" => click(&controller).await,
            text => {
                controller.set_input(text);
                if controller.on_enter() {
                    if let Some(word) = controller.snapshot().word_token {
                        println!("[ {} ]  press Enter to break it apart", word);
                    }
                }
            }
        }
    }

    Ok(())
}

async fn click(controller: &UiController) {
    if controller.snapshot().current_word.is_none() {
        println!("(type a word first)");
        return;
    }

    println!("...");
    match controller.on_word_clicked().await {
        ClickOutcome::Rendered => {
            if let Some(Results::Etymology(view)) = controller.snapshot().results {
                print_staggered(&view).await;
            }
        }
        ClickOutcome::Errored => {
            if let Some(text) = controller.error_text() {
                println!("{}", text);
            }
        }
        ClickOutcome::Ignored | ClickOutcome::Superseded => {}
    }
}

async fn print_staggered(view: &EtymologyView) {
    if view.shows_fallback() {
        println!("{}", view.fallback_message());
        return;
    }

    if let Some(ref overall) = view.overall {
        println!("{}", overall);
    }

    let mut elapsed = std::time::Duration::ZERO;
    for morph in &view.morphemes {
        tokio::time::sleep(morph.reveal_delay.saturating_sub(elapsed)).await;
        elapsed = morph.reveal_delay;

        println!();
        println!("  {}", morph.morpheme);
        for (label, value) in &morph.details {
            println!("    {}: {}", label, value);
        }
    }
}
