//! Query helpers for defensive matchups
//!
//! This module answers "what hurts this pokemon" questions from the
//! `*_damage_from` relations of the defending types.

mod matchup;

pub use matchup::DefensiveProfile;
