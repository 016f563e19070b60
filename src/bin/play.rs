//! Interactive terminal front end for Topsy-Turvy.
//!
//! Usage: cargo run --bin play -- --run 4 --width 7 --height 6 [--packed]

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use topsy_turvy::board::Layout;
use topsy_turvy::game::Game;
use topsy_turvy::notation::{index_label, MAX_LABELED};
use topsy_turvy::r#move::Move;

/// Play Topsy-Turvy in the terminal
#[derive(Parser, Debug)]
#[command(name = "play")]
#[command(about = "Play Topsy-Turvy in the terminal", long_about = None)]
struct Args {
    /// Consecutive pieces needed to win
    #[arg(short, long, default_value_t = 4)]
    run: u16,

    /// Number of columns
    #[arg(short, long, default_value_t = 7)]
    width: u16,

    /// Number of rows
    #[arg(long, default_value_t = 6)]
    height: u16,

    /// Use the 2-bit packed board storage instead of the dense grid
    #[arg(long)]
    packed: bool,
}

fn print_intro(game: &Game) {
    println!("Welcome to Topsy-Turvy!");
    println!(
        "Complete a line of {} pieces horizontally, vertically, or diagonally to win.",
        game.run()
    );
    println!("Moves:");
    println!(
        "  a column label ({}..{}) drops your piece into that column,",
        index_label(0),
        index_label(game.width() - 1)
    );
    println!("  ^ flips every column's stack upside down (disarray),");
    println!("  ! removes your oldest piece and your opponent's newest (offset).");
    println!();
}

fn read_token(prompt: &str) -> Option<char> {
    loop {
        print!("{}", prompt);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => return None, // EOF or broken input
            Ok(_) => {}
        }

        match line.trim().chars().next() {
            Some(token) => return Some(token),
            None => continue, // blank line, ask again
        }
    }
}

fn prompt_move(game: &Game) -> Option<Move> {
    loop {
        let prompt = format!("Enter {}'s move:  ", game.turn());
        let token = read_token(&prompt)?;

        match Move::from_token(token) {
            Some(mv) => return Some(mv),
            None => println!("That is an invalid input, please try again."),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.width > MAX_LABELED {
        eprintln!(
            "A width of {} cannot be labeled with the {} available column labels.",
            args.width, MAX_LABELED
        );
        return ExitCode::FAILURE;
    }

    let layout = if args.packed {
        Layout::Packed
    } else {
        Layout::Dense
    };
    let mut game = match Game::new(args.run, args.width, args.height, layout) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Cannot start a game: {}", err);
            return ExitCode::FAILURE;
        }
    };

    print_intro(&game);

    loop {
        print!("{}", game.board());

        loop {
            let Some(mv) = prompt_move(&game) else {
                println!("\nGoodbye!");
                return ExitCode::SUCCESS;
            };

            if game.apply(mv) {
                break;
            }
            match mv {
                Move::Drop { col } => println!(
                    "You may not drop a piece in column {}. Please try again.",
                    index_label(col)
                ),
                Move::Offset => println!(
                    "An offset move is not possible with the current board. Please try again."
                ),
                Move::Disarray => {}
            }
        }
        println!();

        let outcome = game.outcome();
        if outcome.is_decided() {
            println!("Game over! The game has resulted in a {}!", outcome);
            println!("The final state of the board is as follows:");
            print!("{}", game.board());
            println!("\nThank you for playing Topsy-Turvy!");
            return ExitCode::SUCCESS;
        }
    }
}
