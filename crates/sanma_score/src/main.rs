//! Sanma score keeper - terminal front end.
//!
//! A thin line-oriented shell over a [`ScoreSession`]. All scoring rules
//! live in the `sanma_ledger` crate; this binary only parses commands,
//! prints state, and sequences the confirmation prompt for resets.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use sanma_ledger::{
    Fan, GameState, PlayerId, Selection, SettlementEvent, SettlementKind, SettlementRequest,
};
use sanma_score::{JsonFileStore, ScoreSession, ScoreStore, StdinConfirm};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    info!(data_file = %cli.data_file.display(), fresh = cli.fresh, "Starting score keeper");

    let store = JsonFileStore::new(&cli.data_file);
    if cli.fresh {
        store.clear()?;
    }

    let mut session = ScoreSession::open(store);

    println!("Sanma score keeper. Type 'help' for commands.");
    print_balances(session.state());

    run_shell(&mut session).await
}

/// Reads commands until quit or end of input.
async fn run_shell(session: &mut ScoreSession<JsonFileStore>) -> Result<()> {
    loop {
        let Some(line) = read_line().await else {
            return Ok(());
        };
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["help"] => print_help(),
            ["show"] => print_balances(session.state()),
            ["history"] => print_history(session.state(), usize::MAX),
            ["history", count] => match count.parse::<usize>() {
                Ok(count) => print_history(session.state(), count),
                Err(_) => println!("history takes a number of entries"),
            },
            ["draw"] => {
                let event = session.settle_no_win_draw();
                print_event(session.state(), &event);
                print_balances(session.state());
            }
            ["discard", winner, loser, fan] => {
                match (parse_player(winner), parse_player(loser), parse_fan(fan)) {
                    (Some(winner), Some(loser), Some(fan)) => {
                        match session.settle_discard_win(winner, loser, fan) {
                            Ok(event) => {
                                print_event(session.state(), &event);
                                print_balances(session.state());
                            }
                            Err(error) => println!("Rejected: {error}"),
                        }
                    }
                    _ => println!("usage: discard <winner 1-3> <loser 1-3> <fan 6-11>"),
                }
            }
            ["selfdraw", winner, fan] => match (parse_player(winner), parse_fan(fan)) {
                (Some(winner), Some(fan)) => {
                    let event = session.settle_self_draw(winner, fan);
                    print_event(session.state(), &event);
                    print_balances(session.state());
                }
                _ => println!("usage: selfdraw <winner 1-3> <fan 6-11>"),
            },
            ["declare", player] => match parse_player(player) {
                Some(player) => declare_flow(session, player).await,
                None => println!("usage: declare <player 1-3>"),
            },
            ["rename", player, name @ ..] if !name.is_empty() => match parse_player(player) {
                Some(player) => match session.rename_player(player, &name.join(" ")) {
                    Ok(()) => print_balances(session.state()),
                    Err(error) => println!("Rejected: {error}"),
                },
                None => println!("usage: rename <player 1-3> <name>"),
            },
            ["reset"] => {
                if session.reset(&StdinConfirm).await {
                    println!("Game reset.");
                    print_balances(session.state());
                } else {
                    println!("Reset cancelled.");
                }
            }
            ["quit"] | ["exit"] => return Ok(()),
            _ => println!("Unknown command. Type 'help' for commands."),
        }
    }
}

/// Walks one player's declaration through the step-wise selection flow.
#[instrument(skip(session))]
async fn declare_flow(session: &mut ScoreSession<JsonFileStore>, player: PlayerId) {
    let mut selection = Selection::new(player);
    println!(
        "Declaring for {}. Steps accept 'back' to go one step up.",
        session.state().ledger().account(player).name()
    );

    let request = loop {
        let prompt = if selection.is_idle() {
            "win type? (discard / selfdraw / draw / back)"
        } else if selection.awaiting_opponent() {
            "who discarded? (player 1-3 / back)"
        } else {
            "fan? (6-11 / back)"
        };
        println!("{prompt}");

        let Some(line) = read_line().await else {
            return;
        };
        let answer = line.trim();

        if answer.eq_ignore_ascii_case("back") {
            if selection.is_idle() {
                println!("Declaration cancelled.");
                return;
            }
            selection.back();
            continue;
        }

        if selection.is_idle() {
            let kind = match answer {
                "discard" => SettlementKind::DiscardWin,
                "selfdraw" => SettlementKind::SelfDrawWin,
                "draw" => SettlementKind::NoWinDraw,
                _ => {
                    println!("Unknown win type.");
                    continue;
                }
            };
            match selection.choose_kind(kind) {
                Ok(Some(request)) => break request,
                Ok(None) => {}
                Err(error) => println!("Rejected: {error}"),
            }
        } else if selection.awaiting_opponent() {
            match parse_player(answer) {
                Some(opponent) => {
                    if let Err(error) = selection.choose_opponent(opponent) {
                        println!("Rejected: {error}");
                    }
                }
                None => println!("Expected a player number 1-3."),
            }
        } else {
            match parse_fan(answer) {
                Some(fan) => match selection.choose_fan(fan) {
                    Ok(request) => break request,
                    Err(error) => println!("Rejected: {error}"),
                },
                None => println!("Expected a fan count 6-11."),
            }
        }
    };

    let settled = match request {
        SettlementRequest::DiscardWin { winner, loser, fan } => {
            session.settle_discard_win(winner, loser, fan)
        }
        SettlementRequest::SelfDrawWin { winner, fan } => {
            Ok(session.settle_self_draw(winner, fan))
        }
        SettlementRequest::NoWinDraw => Ok(session.settle_no_win_draw()),
    };

    match settled {
        Ok(event) => {
            print_event(session.state(), &event);
            print_balances(session.state());
        }
        Err(error) => println!("Rejected: {error}"),
    }
}

/// Reads one line from the terminal; `None` on end of input.
async fn read_line() -> Option<String> {
    let mut line = String::new();
    let mut reader = BufReader::new(tokio::io::stdin());
    match reader.read_line(&mut line).await {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

fn parse_player(word: impl AsRef<str>) -> Option<PlayerId> {
    word.as_ref()
        .parse::<u8>()
        .ok()
        .and_then(|n| PlayerId::try_from(n).ok())
}

fn parse_fan(word: impl AsRef<str>) -> Option<Fan> {
    word.as_ref()
        .parse::<u8>()
        .ok()
        .and_then(|n| Fan::try_from(n).ok())
}

fn print_help() {
    println!("commands:");
    println!("  show                              balances and jackpot");
    println!("  history [n]                       recent settlements, newest first");
    println!("  declare <player>                  step-wise declaration for one player");
    println!("  discard <winner> <loser> <fan>    settle a discard win");
    println!("  selfdraw <winner> <fan>           settle a self-draw win");
    println!("  draw                              settle a no-win draw");
    println!("  rename <player> <name>            rename a player");
    println!("  reset                             wipe balances, jackpot, and history");
    println!("  quit                              leave (the game is saved)");
}

fn print_balances(state: &GameState) {
    for account in state.ledger().accounts() {
        println!("  {:<12} {:>6}", account.name(), account.balance());
    }
    println!("  {:<12} {:>6}", "Jackpot", state.ledger().jackpot());
}

fn print_history(state: &GameState, limit: usize) {
    if state.history().is_empty() {
        println!("No settlements yet.");
        return;
    }
    for event in state.history().all().take(limit) {
        println!("  {}", describe_event(state, event));
    }
}

fn print_event(state: &GameState, event: &SettlementEvent) {
    println!("{}", describe_event(state, event));
}

/// One-line human description of a settlement.
fn describe_event(state: &GameState, event: &SettlementEvent) -> String {
    let time = event.at().format("%Y-%m-%d %H:%M");

    match event.kind() {
        SettlementKind::NoWinDraw => {
            format!("[{time}] no-win draw, jackpot +{}", event.jackpot_delta())
        }
        kind => {
            let winner = event
                .actor()
                .map(|id| state.ledger().account(id).name().clone())
                .unwrap_or_else(|| "?".to_string());
            let fan = event
                .fan()
                .map(|fan| fan.to_string())
                .unwrap_or_else(|| "?".to_string());
            let gain = event
                .actor()
                .and_then(|id| event.change_for(id))
                .unwrap_or(0);
            let jackpot = if *event.jackpot_bonus() > 0 {
                format!(", jackpot {} collected", event.jackpot_bonus())
            } else {
                String::new()
            };
            let how = match kind {
                SettlementKind::DiscardWin => "discard win",
                _ => "self-draw",
            };
            format!("[{time}] {winner} +{gain}, {fan} fan {how}{jackpot}")
        }
    }
}
