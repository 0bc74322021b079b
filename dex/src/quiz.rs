//! "Who's that pokemon?" guessing game

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::DexError;
use crate::roster::{Roster, RosterEntry};

/// Number of names offered per round
pub const OPTION_COUNT: usize = 4;

/// One question: a hidden species and the names offered for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    answer: RosterEntry,
    options: Vec<String>,
    picked: Option<String>,
}

impl Round {
    /// The species to guess. Callers should hide it until [`Round::is_revealed`].
    pub fn answer(&self) -> &RosterEntry {
        &self.answer
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn picked(&self) -> Option<&str> {
        self.picked.as_deref()
    }

    pub fn is_revealed(&self) -> bool {
        self.picked.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Correct,
    Wrong { answer: String },
    /// The round was already answered, or no round is active
    Ignored,
}

/// Score keeping across rounds
#[derive(Debug, Clone, Default)]
pub struct GuessGame {
    score: u32,
    streak: u32,
    best_streak: u32,
    round: Option<Round>,
}

impl GuessGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new round drawn from `roster`
    pub fn next_round<R: Rng + ?Sized>(
        &mut self,
        roster: &Roster,
        rng: &mut R,
    ) -> Result<&Round, DexError> {
        let too_small = DexError::RosterTooSmall {
            needed: OPTION_COUNT,
            available: roster.len(),
        };

        let answer = roster
            .entries()
            .choose(rng)
            .cloned()
            .ok_or_else(|| too_small.clone())?;

        let mut seen = HashSet::from([answer.name.as_str()]);
        let candidates: Vec<&str> = roster
            .iter()
            .map(|e| e.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect();

        if candidates.len() < OPTION_COUNT - 1 {
            return Err(too_small);
        }

        let mut options: Vec<String> = candidates
            .choose_multiple(rng, OPTION_COUNT - 1)
            .map(|name| name.to_string())
            .collect();
        options.push(answer.name.clone());
        options.shuffle(rng);

        tracing::debug!(answer = %answer.name, "Started guessing round");

        Ok(&*self.round.insert(Round {
            answer,
            options,
            picked: None,
        }))
    }

    /// Answer the current round. Only the first answer of a round counts.
    pub fn answer(&mut self, name: &str) -> Guess {
        let Some(round) = self.round.as_mut() else {
            return Guess::Ignored;
        };
        if round.picked.is_some() {
            return Guess::Ignored;
        }

        round.picked = Some(name.to_string());

        if name == round.answer.name {
            self.score += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
            Guess::Correct
        } else {
            self.streak = 0;
            Guess::Wrong {
                answer: round.answer.name.clone(),
            }
        }
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// Drop the active round, keeping the score
    pub fn clear_round(&mut self) {
        self.round = None;
    }

    /// Start over: zero the score and streak and drop the round.
    /// The best streak survives.
    pub fn reset(&mut self) {
        self.score = 0;
        self.streak = 0;
        self.round = None;
    }
}
