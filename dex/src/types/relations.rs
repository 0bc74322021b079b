//! Damage relations of a single type

use std::collections::BTreeSet;

use pokedex_schema::{DamageRelations, NamedResource, ParseError};

use super::{Effectiveness, Factor, Type, TypePair};

/// The six relation sets of one type
///
/// "to" sets describe this type attacking, "from" sets describe this type
/// defending. A type appears in at most one "to" set and one "from" set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRelations {
    pub double_damage_to: BTreeSet<Type>,
    pub half_damage_to: BTreeSet<Type>,
    pub no_damage_to: BTreeSet<Type>,
    pub double_damage_from: BTreeSet<Type>,
    pub half_damage_from: BTreeSet<Type>,
    pub no_damage_from: BTreeSet<Type>,
}

impl TypeRelations {
    /// Build from the API's relation lists, rejecting unknown type names
    pub fn from_response(relations: &DamageRelations) -> Result<Self, ParseError> {
        Ok(Self {
            double_damage_to: parse_set(&relations.double_damage_to)?,
            half_damage_to: parse_set(&relations.half_damage_to)?,
            no_damage_to: parse_set(&relations.no_damage_to)?,
            double_damage_from: parse_set(&relations.double_damage_from)?,
            half_damage_from: parse_set(&relations.half_damage_from)?,
            no_damage_from: parse_set(&relations.no_damage_from)?,
        })
    }

    /// Relations of `t` according to the offline chart
    pub fn from_chart(t: Type) -> Self {
        let mut relations = Self::default();

        for other in Type::all().iter().copied() {
            match t.chart_factor(other) {
                Factor::Double => relations.double_damage_to.insert(other),
                Factor::Half => relations.half_damage_to.insert(other),
                Factor::Immune => relations.no_damage_to.insert(other),
                Factor::Neutral => false,
            };
            match other.chart_factor(t) {
                Factor::Double => relations.double_damage_from.insert(other),
                Factor::Half => relations.half_damage_from.insert(other),
                Factor::Immune => relations.no_damage_from.insert(other),
                Factor::Neutral => false,
            };
        }

        relations
    }

    /// Factor of this type attacking `defender`
    ///
    /// Checked in order double, half, none; absent from all three is neutral.
    pub fn against(&self, defender: Type) -> Factor {
        if self.double_damage_to.contains(&defender) {
            Factor::Double
        } else if self.half_damage_to.contains(&defender) {
            Factor::Half
        } else if self.no_damage_to.contains(&defender) {
            Factor::Immune
        } else {
            Factor::Neutral
        }
    }

    /// Factor of `attacker` hitting this type
    pub fn from_attacker(&self, attacker: Type) -> Factor {
        if self.double_damage_from.contains(&attacker) {
            Factor::Double
        } else if self.half_damage_from.contains(&attacker) {
            Factor::Half
        } else if self.no_damage_from.contains(&attacker) {
            Factor::Immune
        } else {
            Factor::Neutral
        }
    }

    /// Combined effectiveness of this type attacking a one- or two-typed defender
    pub fn effectiveness_against(&self, defenders: TypePair) -> Effectiveness {
        Effectiveness::from_factors(
            self.against(defenders.primary),
            defenders.secondary.map(|t| self.against(t)),
        )
    }
}

fn parse_set(resources: &[NamedResource]) -> Result<BTreeSet<Type>, ParseError> {
    resources.iter().map(|r| r.name.parse::<Type>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(name: &str) -> NamedResource {
        NamedResource::new(name, format!("https://pokeapi.co/api/v2/type/{}/", name))
    }

    #[test]
    fn test_from_response() {
        let wire = DamageRelations {
            double_damage_to: vec![resource("fire"), resource("ground"), resource("rock")],
            half_damage_to: vec![resource("water"), resource("grass"), resource("dragon")],
            ..Default::default()
        };

        let relations = TypeRelations::from_response(&wire).unwrap();

        assert_eq!(relations.against(Type::Fire), Factor::Double);
        assert_eq!(relations.against(Type::Dragon), Factor::Half);
        assert_eq!(relations.against(Type::Ghost), Factor::Neutral);
    }

    #[test]
    fn test_from_response_unknown_type() {
        let wire = DamageRelations {
            no_damage_from: vec![resource("shadow")],
            ..Default::default()
        };

        assert_eq!(
            TypeRelations::from_response(&wire),
            Err(ParseError::UnknownType("shadow".to_string()))
        );
    }

    #[test]
    fn test_from_chart_water() {
        let water = TypeRelations::from_chart(Type::Water);

        let expected_to: BTreeSet<Type> = [Type::Fire, Type::Ground, Type::Rock].into();
        assert_eq!(water.double_damage_to, expected_to);

        let expected_from: BTreeSet<Type> = [Type::Electric, Type::Grass].into();
        assert_eq!(water.double_damage_from, expected_from);
        assert!(water.no_damage_to.is_empty());
    }

    #[test]
    fn test_from_chart_ghost_immunities() {
        let ghost = TypeRelations::from_chart(Type::Ghost);

        let expected: BTreeSet<Type> = [Type::Normal, Type::Fighting].into();
        assert_eq!(ghost.no_damage_from, expected);
        assert_eq!(ghost.no_damage_to, BTreeSet::from([Type::Normal]));
    }

    #[test]
    fn test_to_sets_are_disjoint() {
        for t in Type::all() {
            let r = TypeRelations::from_chart(*t);
            assert!(r.double_damage_to.is_disjoint(&r.half_damage_to));
            assert!(r.double_damage_to.is_disjoint(&r.no_damage_to));
            assert!(r.half_damage_to.is_disjoint(&r.no_damage_to));
        }
    }

    #[test]
    fn test_effectiveness_against_pair() {
        let electric = TypeRelations::from_chart(Type::Electric);

        assert_eq!(
            electric.effectiveness_against(TypePair::dual(Type::Water, Type::Flying)),
            Effectiveness::Quadruple
        );
        assert_eq!(
            electric.effectiveness_against(TypePair::dual(Type::Ground, Type::Water)),
            Effectiveness::Immune
        );
    }
}
