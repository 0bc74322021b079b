use pokedex_dex::{DexError, Guess, GuessGame, Roster, RosterLoader, Round, SpeciesSource};
use rand::Rng;

use super::{LoadOutcome, RosterSession};
use crate::sequence::RequestToken;

/// Cry playback volume a new session starts with
pub const DEFAULT_VOLUME: f32 = 0.5;

/// "Who's that pokemon?" screen: a generation roster and the running game
#[derive(Debug)]
pub struct GuessSession {
    roster: RosterSession,
    game: GuessGame,
    volume: f32,
}

impl Default for GuessSession {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GuessSession {
    pub fn new(generation: u32) -> Self {
        Self {
            roster: RosterSession::new(generation),
            game: GuessGame::new(),
            volume: DEFAULT_VOLUME,
        }
    }

    pub fn begin_load(&mut self, generation: u32) -> RequestToken {
        self.roster.begin_load(generation)
    }

    /// Apply a roster load; a new roster ends the current round, not the score
    pub fn finish_load(
        &mut self,
        token: RequestToken,
        result: Result<Roster, DexError>,
    ) -> LoadOutcome {
        let outcome = self.roster.finish_load(token, result);
        if outcome.is_applied() {
            self.game.clear_round();
        }
        outcome
    }

    pub async fn select_generation<S: SpeciesSource>(
        &mut self,
        loader: &RosterLoader<S>,
        generation: u32,
    ) -> LoadOutcome {
        let outcome = self.roster.select_generation(loader, generation).await;
        if outcome.is_applied() {
            self.game.clear_round();
        }
        outcome
    }

    /// Draw a round from the loaded roster
    pub fn next_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Round, DexError> {
        self.game.next_round(self.roster.roster(), rng)
    }

    pub fn answer(&mut self, name: &str) -> Guess {
        self.game.answer(name)
    }

    /// Zero the score and streak and drop the active round
    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// [`Self::reset`], then draw a fresh round from the loaded roster
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Round, DexError> {
        self.reset();
        self.next_round(rng)
    }

    pub fn game(&self) -> &GuessGame {
        &self.game
    }

    pub fn roster(&self) -> &RosterSession {
        &self.roster
    }

    /// Cry playback volume in `0.0..=1.0`
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Clamped into `0.0..=1.0`; NaN mutes
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
    }

    /// Volume as a whole percentage for display
    pub fn volume_percent(&self) -> u8 {
        (self.volume * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_dex::NamedResource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn roster(names: &[(u32, &str)]) -> Roster {
        Roster::from_resources(names.iter().map(|(id, name)| {
            NamedResource::new(
                *name,
                format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id),
            )
        }))
        .unwrap()
    }

    fn kanto() -> Roster {
        roster(&[
            (1, "bulbasaur"),
            (4, "charmander"),
            (7, "squirtle"),
            (25, "pikachu"),
            (133, "eevee"),
        ])
    }

    #[test]
    fn test_round_requires_loaded_roster() {
        let mut session = GuessSession::new(1);
        let mut rng = StdRng::seed_from_u64(5);

        assert!(matches!(
            session.next_round(&mut rng),
            Err(DexError::RosterTooSmall { available: 0, .. })
        ));

        let token = session.begin_load(1);
        session.finish_load(token, Ok(kanto()));
        let answer = session.next_round(&mut rng).unwrap().answer().name.clone();
        assert!(session.roster().roster().find_by_name(&answer).is_some());
    }

    #[test]
    fn test_new_roster_ends_round_keeps_score() {
        let mut session = GuessSession::new(1);
        let mut rng = StdRng::seed_from_u64(9);
        let token = session.begin_load(1);
        session.finish_load(token, Ok(kanto()));

        let answer = session.next_round(&mut rng).unwrap().answer().name.clone();
        assert_eq!(session.answer(&answer), Guess::Correct);

        let token = session.begin_load(1);
        assert_eq!(session.finish_load(token, Ok(kanto())), LoadOutcome::Applied);
        assert!(session.game().round().is_none());
        assert_eq!(session.game().score(), 1);
    }

    #[test]
    fn test_stale_roster_keeps_round() {
        let mut session = GuessSession::new(1);
        let mut rng = StdRng::seed_from_u64(2);

        let stale = session.begin_load(2);
        let token = session.begin_load(1);
        session.finish_load(token, Ok(kanto()));
        session.next_round(&mut rng).unwrap();

        assert_eq!(session.finish_load(stale, Ok(kanto())), LoadOutcome::Stale);
        assert!(session.game().round().is_some());
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut session = GuessSession::default();
        assert_eq!(session.volume(), DEFAULT_VOLUME);
        assert_eq!(session.volume_percent(), 50);

        session.set_volume(1.7);
        assert_eq!(session.volume(), 1.0);
        session.set_volume(-0.2);
        assert_eq!(session.volume(), 0.0);
        session.set_volume(f32::NAN);
        assert_eq!(session.volume(), 0.0);
        session.set_volume(0.333);
        assert_eq!(session.volume_percent(), 33);
    }

    #[test]
    fn test_restart_zeroes_score() {
        let mut session = GuessSession::new(1);
        let mut rng = StdRng::seed_from_u64(4);
        let token = session.begin_load(1);
        session.finish_load(token, Ok(kanto()));

        for _ in 0..3 {
            let answer = session.next_round(&mut rng).unwrap().answer().name.clone();
            session.answer(&answer);
        }
        assert_eq!(session.game().score(), 3);

        let answer = session.restart(&mut rng).unwrap().answer().name.clone();
        assert_eq!(session.game().score(), 0);
        assert_eq!(session.game().streak(), 0);
        let round = session.game().round().unwrap();
        assert!(!round.is_revealed());
        assert_eq!(round.answer().name, answer);
    }

    #[test]
    fn test_restart_without_roster_still_zeroes_score() {
        let mut session = GuessSession::new(1);
        let mut rng = StdRng::seed_from_u64(4);

        assert!(session.restart(&mut rng).is_err());
        assert_eq!(session.game().score(), 0);
        assert!(session.game().round().is_none());
    }
}
