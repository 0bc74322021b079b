//! Attacker vs defender effectiveness, composed from per-type relations

use futures_util::future::try_join_all;

use crate::error::DexError;
use crate::query::DefensiveProfile;
use crate::source::TypeDataSource;
use crate::types::{Effectiveness, Type, TypePair, TypeRelations};

/// Result of a matchup where the attacker may have two types
///
/// Both attacking types are evaluated against the same defender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup {
    pub attackers: TypePair,
    pub defenders: TypePair,
    /// Effectiveness of the primary attacking type
    pub first: Effectiveness,
    /// Effectiveness of the secondary attacking type, if any
    pub second: Option<Effectiveness>,
}

impl Matchup {
    /// The primary attacking type's result
    pub fn primary(&self) -> Effectiveness {
        self.first
    }

    /// The better of the two attacking types
    pub fn best(&self) -> Effectiveness {
        self.second.map_or(self.first, |second| self.first.max(second))
    }

    /// Each attacking type with its result, primary first
    pub fn results(&self) -> Vec<(Type, Effectiveness)> {
        let mut results = vec![(self.attackers.primary, self.first)];
        if let (Some(t), Some(e)) = (self.attackers.secondary, self.second) {
            results.push((t, e));
        }
        results
    }
}

/// Computes damage multipliers from type relations supplied by `S`
///
/// Every call fetches the attacker's relations afresh; nothing is cached
/// between calls.
pub struct TypeEffectivenessCalculator<S> {
    source: S,
}

impl<S: TypeDataSource> TypeEffectivenessCalculator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and parse the relations of one type
    pub async fn relations(&self, type_name: Type) -> Result<TypeRelations, DexError> {
        let response = self
            .source
            .type_data(type_name)
            .await
            .map_err(|source| DexError::TypeData { type_name, source })?;

        Ok(TypeRelations::from_response(&response.damage_relations)?)
    }

    /// Multiplier of `attacker` against a defender with one or two types
    ///
    /// Both defender factors are multiplied as given, so a repeated type
    /// counts twice.
    pub async fn effectiveness(
        &self,
        attacker: Type,
        defender: Type,
        second_defender: Option<Type>,
    ) -> Result<Effectiveness, DexError> {
        let relations = self.relations(attacker).await?;
        let result = Effectiveness::from_factors(
            relations.against(defender),
            second_defender.map(|t| relations.against(t)),
        );

        tracing::debug!(
            attacker = %attacker,
            defender = %defender,
            second_defender = ?second_defender,
            result = %result,
            "Computed type effectiveness"
        );

        Ok(result)
    }

    /// Same as [`Self::effectiveness`] but with API type names
    pub async fn effectiveness_by_name(
        &self,
        attacker: &str,
        defender: &str,
        second_defender: Option<&str>,
    ) -> Result<Effectiveness, DexError> {
        let attacker = parse_type(attacker)?;
        let defender = parse_type(defender)?;
        let second_defender = second_defender.map(parse_type).transpose()?;

        self.effectiveness(attacker, defender, second_defender).await
    }

    /// Evaluate every attacking type against the defender
    pub async fn matchup(
        &self,
        attackers: TypePair,
        defenders: TypePair,
    ) -> Result<Matchup, DexError> {
        let first = self
            .effectiveness(attackers.primary, defenders.primary, defenders.secondary)
            .await?;

        let second = match attackers.secondary {
            Some(attacker) => Some(
                self.effectiveness(attacker, defenders.primary, defenders.secondary)
                    .await?,
            ),
            None => None,
        };

        Ok(Matchup {
            attackers,
            defenders,
            first,
            second,
        })
    }

    /// How every attacking type fares against `defenders`
    pub async fn defensive_profile(
        &self,
        defenders: TypePair,
    ) -> Result<DefensiveProfile, DexError> {
        let relations = try_join_all(defenders.iter().map(|t| self.relations(t))).await?;

        Ok(DefensiveProfile::from_relations(
            defenders,
            &relations[0],
            relations.get(1),
        ))
    }
}

fn parse_type(name: &str) -> Result<Type, DexError> {
    Type::from_api(name).ok_or_else(|| DexError::UnknownType(name.to_string()))
}
