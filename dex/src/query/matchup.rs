//! Defensive matchup of a one- or two-typed defender

use crate::types::{Effectiveness, Type, TypePair, TypeRelations};

/// Effectiveness of every attacking type against one defender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefensiveProfile {
    defenders: TypePair,
    multipliers: [Effectiveness; 18],
}

impl DefensiveProfile {
    /// Build from the relations of the defending types
    ///
    /// `secondary` is ignored when `defenders` has a single type.
    pub fn from_relations(
        defenders: TypePair,
        primary: &TypeRelations,
        secondary: Option<&TypeRelations>,
    ) -> Self {
        let secondary = secondary.filter(|_| defenders.is_dual());
        let mut multipliers = [Effectiveness::Neutral; 18];

        for attacker in Type::all().iter().copied() {
            multipliers[attacker as usize] = Effectiveness::from_factors(
                primary.from_attacker(attacker),
                secondary.map(|r| r.from_attacker(attacker)),
            );
        }

        Self {
            defenders,
            multipliers,
        }
    }

    pub fn defenders(&self) -> TypePair {
        self.defenders
    }

    /// Effectiveness of `attacker` against this defender
    pub fn against(&self, attacker: Type) -> Effectiveness {
        self.multipliers[attacker as usize]
    }

    /// Check if the defender is weak (>1x) to any of the attacking types
    pub fn is_weak_to_any(&self, attacking_types: &[Type]) -> bool {
        attacking_types
            .iter()
            .any(|t| self.against(*t).is_super_effective())
    }

    /// Check if the defender takes <1x from all of the attacking types
    pub fn resists_all(&self, attacking_types: &[Type]) -> bool {
        if attacking_types.is_empty() {
            return false;
        }
        attacking_types
            .iter()
            .all(|t| self.against(*t) < Effectiveness::Neutral)
    }

    pub fn is_immune_to(&self, attacking_type: Type) -> bool {
        self.against(attacking_type).is_immune()
    }

    /// All types that are super effective against the defender
    pub fn weaknesses(&self) -> Vec<Type> {
        self.select(Effectiveness::is_super_effective)
    }

    /// All types the defender resists (0 < effectiveness < 1)
    pub fn resistances(&self) -> Vec<Type> {
        self.select(Effectiveness::is_resisted)
    }

    /// All types the defender is immune to
    pub fn immunities(&self) -> Vec<Type> {
        self.select(Effectiveness::is_immune)
    }

    fn select(&self, predicate: impl Fn(Effectiveness) -> bool) -> Vec<Type> {
        Type::all()
            .iter()
            .copied()
            .filter(|t| predicate(self.against(*t)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(defenders: TypePair) -> DefensiveProfile {
        let primary = TypeRelations::from_chart(defenders.primary);
        let secondary = defenders.secondary.map(TypeRelations::from_chart);
        DefensiveProfile::from_relations(defenders, &primary, secondary.as_ref())
    }

    #[test]
    fn test_is_weak_to_any() {
        let water = profile(TypePair::single(Type::Water));
        assert!(water.is_weak_to_any(&[Type::Electric, Type::Grass]));
        assert!(!water.is_weak_to_any(&[Type::Fire, Type::Ice]));
    }

    #[test]
    fn test_resists_all() {
        // Steel resists Normal, Flying, Rock, Bug, Steel, Grass, Psychic, Ice, Dragon, Fairy
        let steel = profile(TypePair::single(Type::Steel));
        assert!(steel.resists_all(&[Type::Normal, Type::Ice, Type::Fairy]));
        assert!(!steel.resists_all(&[Type::Fire, Type::Ice]));
        assert!(!steel.resists_all(&[]));
    }

    #[test]
    fn test_is_immune_to() {
        let ghost = profile(TypePair::single(Type::Ghost));
        assert!(ghost.is_immune_to(Type::Normal));
        assert!(ghost.is_immune_to(Type::Fighting));
        assert!(!ghost.is_immune_to(Type::Dark));

        let ground = profile(TypePair::single(Type::Ground));
        assert!(ground.is_immune_to(Type::Electric));
    }

    #[test]
    fn test_weaknesses() {
        let steel = profile(TypePair::single(Type::Steel));
        assert_eq!(steel.weaknesses(), vec![Type::Fire, Type::Fighting, Type::Ground]);
    }

    #[test]
    fn test_weaknesses_dual_type() {
        // Water/Ground (Swampert) is only weak to Grass (4x)
        let swampert = profile(TypePair::dual(Type::Water, Type::Ground));
        assert_eq!(swampert.weaknesses(), vec![Type::Grass]);
        assert_eq!(swampert.against(Type::Grass), Effectiveness::Quadruple);
        assert_eq!(swampert.immunities(), vec![Type::Electric]);
    }

    #[test]
    fn test_resistances() {
        let steel = profile(TypePair::single(Type::Steel));
        let resists = steel.resistances();
        assert!(resists.contains(&Type::Normal));
        assert!(resists.contains(&Type::Ice));
        assert!(resists.contains(&Type::Fairy));
        assert!(!resists.contains(&Type::Fire));
        // Poison is an immunity, not a resistance
        assert!(!resists.contains(&Type::Poison));
    }

    #[test]
    fn test_immunities() {
        let ghost = profile(TypePair::single(Type::Ghost));
        assert_eq!(ghost.immunities(), vec![Type::Normal, Type::Fighting]);
    }

    #[test]
    fn test_profile_agrees_with_attacking_relations() {
        // "from" sets of the defender must mirror "to" sets of the attacker
        for d1 in Type::all() {
            for d2 in Type::all() {
                let defenders = TypePair::dual(*d1, *d2);
                let p = profile(defenders);
                for attacker in Type::all() {
                    let forward = TypeRelations::from_chart(*attacker).effectiveness_against(defenders);
                    assert_eq!(p.against(*attacker), forward);
                }
            }
        }
    }

    #[test]
    fn test_single_type_ignores_stray_secondary() {
        let fire = TypeRelations::from_chart(Type::Fire);
        let water = TypeRelations::from_chart(Type::Water);
        let p = DefensiveProfile::from_relations(TypePair::single(Type::Fire), &fire, Some(&water));

        assert_eq!(p.against(Type::Water), Effectiveness::Double);
        assert_eq!(p.against(Type::Electric), Effectiveness::Neutral);
    }
}
