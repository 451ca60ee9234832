// src/bin/set_cli.rs
#![forbid(unsafe_code)]

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use set_engine::{CardState, CardView, Feature, GameConfig, GameSession, Outcome};

#[derive(Parser, Debug)]
#[command(name = "set-cli", about = "Play Set in the terminal")]
struct Args {
    /// Shuffle seed for the first deal. If omitted, one is drawn at random.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of face-up cards (3..=81).
    #[arg(long, default_value_t = 12)]
    tableau_size: usize,
}

enum Command {
    Choose(Vec<usize>),
    Hint,
    New,
    Show,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "h" | "hint" => Some(Command::Hint),
        "n" | "new" => Some(Command::New),
        "" | "s" | "show" => Some(Command::Show),
        "q" | "quit" => Some(Command::Quit),
        _ => line
            .split_whitespace()
            .map(|tok| tok.parse::<usize>().ok())
            .collect::<Option<Vec<_>>>()
            .map(Command::Choose),
    }
}

fn render_card(pos: usize, card: &CardView) -> String {
    let mut marks = String::new();
    if card.is_chosen {
        marks.push('*');
    }
    if card.is_wrong_set {
        marks.push('!');
    }
    if card.is_hinted {
        marks.push('?');
    }
    if card.state == CardState::FoundSet {
        marks.push('+');
    }
    format!(
        "{:>2}: {}{}{}{} {:<3}",
        pos + 1,
        card.number,
        card.color,
        card.shape,
        card.fill,
        marks
    )
}

/// Order of the four letters in each rendered card.
fn legend() -> String {
    let names: Vec<&str> = Feature::ALL.iter().map(|f| f.name()).collect();
    format!("cards read as {}", names.join(" / "))
}

fn render(session: &GameSession) {
    let summary = session.summary();
    let dealt: Vec<CardView> = session.cards().into_iter().filter(CardView::is_visible).collect();

    for (r, cards) in dealt.chunks(4).enumerate() {
        let line: Vec<String> = cards
            .iter()
            .enumerate()
            .map(|(c, card)| render_card(r * 4 + c, card))
            .collect();
        println!("{}", line.join("  "));
    }
    println!(
        "found {} | matches on table {} | undealt {} | {}s{}",
        summary.found_set_count,
        summary.available_hints,
        summary.remaining_card_count,
        summary.elapsed_seconds,
        if summary.finished { " | finished!" } else { "" }
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = GameConfig {
        tableau_size: args.tableau_size,
        seed: args.seed,
    };

    let mut session = match GameSession::new(config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let (tick_tx, tick_rx) = mpsc::channel::<()>();
    thread::spawn(move || loop {
        thread::sleep(Duration::from_secs(1));
        if tick_tx.send(()).is_err() {
            break;
        }
    });

    println!("Commands: card numbers (e.g. `1 5 9`), h = hint, n = new game, q = quit");
    println!("{}", legend());
    render(&session);
    print!("> ");
    let _ = io::stdout().flush();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        while tick_rx.try_recv().is_ok() {
            session.tick();
        }

        let Ok(line) = line else { break };
        let Some(command) = parse_command(&line) else {
            println!("unrecognized command: {line}");
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Show => {}
            Command::New => session.new_game(),
            Command::Hint => {
                if session.hint().is_none() {
                    println!("no hints available");
                }
            }
            Command::Choose(positions) => {
                for pos in positions {
                    let id = pos
                        .checked_sub(1)
                        .filter(|&i| i < session.game().playing_card_count())
                        .map(|i| session.game().cards()[i].id);
                    let Some(id) = id else {
                        println!("no card at {pos}");
                        continue;
                    };
                    match session.choose(id) {
                        Ok(Outcome::Matched(_)) => println!("match!"),
                        Ok(Outcome::Finished(_)) => println!("match! every match found."),
                        Ok(Outcome::Mismatched { already_found: true, .. }) => {
                            println!("already found")
                        }
                        Ok(Outcome::Mismatched { .. }) => println!("not a match"),
                        Ok(_) => {}
                        Err(err) => println!("{err}"),
                    }
                }
            }
        }

        render(&session);
        print!("> ");
        let _ = io::stdout().flush();
    }
}
