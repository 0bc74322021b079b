//! Type matchups
//!
//! Usage: cargo run --example type_calculator -- <attacker[/attacker]> <defender[/defender]>
//! Pass `--offline` as a third argument to use the built-in chart.

use anyhow::{Context, Result, bail};
use pokedex_client::{CalculatorSession, LoadOutcome, PokeApiClient, Slot};
use pokedex_client::dex::{
    Type, TypeChart, TypeDataSource, TypeEffectivenessCalculator, TypePair,
};

fn parse_pair(arg: &str) -> Result<TypePair> {
    let mut names = arg.split('/');
    let first = names.next().context("missing type")?;
    let pair = TypePair::from_names(first, names.next())
        .with_context(|| format!("unknown type in {:?}", arg))?;
    Ok(pair)
}

async fn run<S: TypeDataSource>(
    calculator: TypeEffectivenessCalculator<S>,
    attackers: TypePair,
    defenders: TypePair,
) -> Result<()> {
    let mut session = CalculatorSession::new();
    session.toggle_attacker(Slot::First, attackers.primary);
    session.toggle_defender(Slot::First, defenders.primary);
    if let Some(t) = attackers.secondary {
        session.toggle_attacker(Slot::Second, t);
    }
    if let Some(t) = defenders.secondary {
        session.toggle_defender(Slot::Second, t);
    }

    if session.calculate(&calculator).await != LoadOutcome::Applied {
        if let Some(err) = session.error() {
            bail!("{}", err.user_message());
        }
    }

    if let Some(matchup) = session.result() {
        for (attacker, result) in matchup.results() {
            println!(
                "{} -> {}: {} ({})",
                attacker,
                matchup.defenders,
                result,
                result.description()
            );
        }
    }

    let profile = calculator.defensive_profile(defenders).await?;
    let names = |types: Vec<Type>| {
        types
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("\n{} is weak to: {}", defenders, names(profile.weaknesses()));
    println!("{} resists: {}", defenders, names(profile.resistances()));
    println!("{} is immune to: {}", defenders, names(profile.immunities()));

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("usage: type_calculator <attacker[/attacker]> <defender[/defender]> [--offline]");
    }

    let attackers = parse_pair(&args[0])?;
    let defenders = parse_pair(&args[1])?;

    if args.get(2).is_some_and(|a| a == "--offline") {
        run(TypeEffectivenessCalculator::new(TypeChart), attackers, defenders).await
    } else {
        let client = PokeApiClient::new()?;
        run(TypeEffectivenessCalculator::new(client), attackers, defenders).await
    }
}
