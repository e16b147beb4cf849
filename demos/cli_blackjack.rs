//! CLI blackjack demo driving a session.
//!
//! Keys: `b` bet, `d` deal, `h` hit, `s` stand, `q` quit.
//! Set `RUST_LOG=blackjack_table=debug` to watch the state machine.

use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_table::session::{Mailbox, Session};
use blackjack_table::{Action, Card, Intent, Phase, Snapshot, Suit, TableOptions};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();
    let bet_increment = options.bet_increment;

    let (session, mailbox, snapshots) = Session::new(options, seed);
    let session = tokio::spawn(session.run());
    let renderer = tokio::spawn(render(snapshots));

    read_intents(&mailbox, bet_increment).await;

    drop(mailbox);
    renderer.abort();
    if let Ok(game) = session.await {
        println!(
            "Goodbye. You leave with {} chips.",
            game.ledger().player_chips()
        );
    }
}

async fn read_intents(mailbox: &Mailbox, bet_increment: usize) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let intent = match line.trim().to_lowercase().as_str() {
            "b" | "bet" => Intent::PlaceBet(bet_increment),
            "d" | "deal" => Intent::DealCards,
            "h" | "hit" => Intent::Hit,
            "s" | "stand" => Intent::Stand,
            "q" | "quit" => return,
            "" => continue,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if mailbox.send(intent).await.is_err() {
            println!("Table closed.");
            return;
        }
    }
}

async fn render(mut snapshots: watch::Receiver<Snapshot>) {
    loop {
        let snapshot = snapshots.borrow_and_update().clone();
        print_table(&snapshot);
        if snapshots.changed().await.is_err() {
            return;
        }
    }
}

fn print_table(snapshot: &Snapshot) {
    println!("\nShoe: {} cards remaining", snapshot.shoe_size);
    println!(
        "Chips: {} | Dealer chips: {} | Bet: {}",
        snapshot.player_chips, snapshot.dealer_chips, snapshot.bet
    );

    if !snapshot.dealer_hand.is_empty() {
        println!(
            "Dealer: {} (value {})",
            format_dealer(snapshot),
            snapshot.dealer_display_value
        );
    }
    if !snapshot.player_hand.is_empty() {
        println!(
            "You:    {} (value {})",
            format_hand(&snapshot.player_hand),
            snapshot.player_value
        );
    }

    if !snapshot.message.is_empty() {
        println!("{}", colorize(&snapshot.message, "1"));
    }

    match snapshot.phase {
        Phase::Betting | Phase::PlayerTurn => println!("{}", format_actions(snapshot)),
        Phase::DealerTurn => println!("Dealer is drawing..."),
        Phase::Idle | Phase::Dealt | Phase::Settled => {}
    }
}

fn format_actions(snapshot: &Snapshot) -> String {
    let parts = [
        format_action("bet", "b", snapshot.allows(Action::PlaceBet)),
        format_action("deal", "d", snapshot.allows(Action::DealCards)),
        format_action("hit", "h", snapshot.allows(Action::Hit)),
        format_action("stand", "s", snapshot.allows(Action::Stand)),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(snapshot: &Snapshot) -> String {
    let mut parts: Vec<String> = snapshot
        .visible_dealer_cards()
        .iter()
        .map(format_card)
        .collect();
    if !snapshot.dealer_visible && snapshot.dealer_hand.len() > 1 {
        parts.push("??".to_string());
    }
    parts.join(" ")
}

fn format_hand(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(", ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
