//! "Who's that pokemon?" in the terminal
//!
//! Usage: cargo run --example guess -- [generation]

use std::io::{self, BufRead, Write};

use anyhow::Result;
use pokedex_client::dex::{Guess, RosterLoader};
use pokedex_client::{GuessSession, LoadOutcome, PokeApiClient};

#[tokio::main]
async fn main() -> Result<()> {
    let generation: u32 = std::env::args()
        .nth(1)
        .map(|g| g.parse::<u32>())
        .transpose()?
        .unwrap_or(1);

    let loader = RosterLoader::new(PokeApiClient::new()?);
    let mut session = GuessSession::new(generation);

    if session.select_generation(&loader, generation).await == LoadOutcome::Failed {
        if let Some(err) = session.roster().error() {
            eprintln!("{}", err.user_message());
        }
        return Ok(());
    }

    let mut rng = rand::thread_rng();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let round = session.next_round(&mut rng)?;
        println!("\nWho's that pokemon? (cry: {})", round.answer().cry_url());
        let options = round.options().to_vec();
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }
        print!("(number or name, r to reset, q to quit) > ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let pick = match line.trim().parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].clone(),
            _ if line.trim() == "q" => break,
            _ if line.trim() == "r" => {
                session.reset();
                println!("Score reset.");
                continue;
            }
            _ => line.trim().to_string(),
        };

        match session.answer(&pick) {
            Guess::Correct => println!("Correct!"),
            Guess::Wrong { answer } => println!("It was {}.", answer),
            Guess::Ignored => {}
        }

        let game = session.game();
        println!(
            "Score {} | streak {} | best {}",
            game.score(),
            game.streak(),
            game.best_streak()
        );
    }

    Ok(())
}
