//! Browse a generation
//!
//! Usage: cargo run --example roster -- [generation] [search]

use anyhow::Result;
use pokedex_client::{LoadOutcome, PokeApiClient, RosterSession};
use pokedex_client::dex::{Region, RosterLoader};

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let generation: u32 = args.next().map(|g| g.parse::<u32>()).transpose()?.unwrap_or(1);
    let query = args.next().unwrap_or_default();

    let loader = RosterLoader::new(PokeApiClient::new()?);
    let mut session = RosterSession::new(generation);

    if session.select_generation(&loader, generation).await == LoadOutcome::Failed {
        if let Some(err) = session.error() {
            eprintln!("{}", err.user_message());
        }
        return Ok(());
    }

    match Region::for_generation(generation) {
        Some(region) => println!(
            "Generation {} ({}): {} pokemon",
            generation,
            region,
            session.roster().len()
        ),
        None => println!("Generation {}: {} pokemon", generation, session.roster().len()),
    }

    session.set_query(query);
    for entry in session.visible() {
        println!("{}  {}", entry, entry.artwork_url());
    }

    if let Some(first) = session.visible().first() {
        let detail = loader.load_details(first).await?;
        println!(
            "\n{}: {} | {:.1} m, {:.1} kg",
            first.display_name(),
            detail.type_names().join("/"),
            detail.height_m(),
            detail.weight_kg()
        );
    }

    Ok(())
}
