//! Pokemon types and the offline effectiveness chart

use std::fmt;
use std::str::FromStr;

use pokedex_schema::ParseError;

use super::Factor;

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 Pokemon types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Parse from an API name (case-insensitive)
    pub fn from_api(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Lowercase name used in API paths and relation lists
    pub fn api_name(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }

    /// Numeric id the API assigns to this type (`/type/{id}/`)
    pub fn api_id(&self) -> u32 {
        match self {
            Type::Normal => 1,
            Type::Fighting => 2,
            Type::Flying => 3,
            Type::Poison => 4,
            Type::Ground => 5,
            Type::Rock => 6,
            Type::Bug => 7,
            Type::Ghost => 8,
            Type::Steel => 9,
            Type::Fire => 10,
            Type::Water => 11,
            Type::Grass => 12,
            Type::Electric => 13,
            Type::Psychic => 14,
            Type::Ice => 15,
            Type::Dragon => 16,
            Type::Dark => 17,
            Type::Fairy => 18,
        }
    }

    /// Canonical display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }

    /// UI colour as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            Type::Normal => "#A8A878",
            Type::Fire => "#F08030",
            Type::Water => "#6890F0",
            Type::Electric => "#F8D030",
            Type::Grass => "#78C850",
            Type::Ice => "#98D8D8",
            Type::Fighting => "#C03028",
            Type::Poison => "#A040A0",
            Type::Ground => "#E0C068",
            Type::Flying => "#A890F0",
            Type::Psychic => "#F85888",
            Type::Bug => "#A8B820",
            Type::Rock => "#B8A038",
            Type::Ghost => "#705898",
            Type::Dragon => "#7038F8",
            Type::Dark => "#705848",
            Type::Steel => "#B8B8D0",
            Type::Fairy => "#EE99AC",
        }
    }

    /// Factor from the offline chart, attacking `defender`
    pub fn chart_factor(&self, defender: Type) -> Factor {
        Factor::from_chart_value(TYPE_CHART[*self as usize][defender as usize])
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Type {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::from_api(s).ok_or_else(|| ParseError::UnknownType(s.to_string()))
    }
}

/// One or two types, as carried by a species or selected in the calculator
///
/// A duplicated second type collapses to a single type, so `Fire/Fire` never
/// counts the same factor twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypePair {
    pub primary: Type,
    pub secondary: Option<Type>,
}

impl TypePair {
    pub fn new(primary: Type, secondary: Option<Type>) -> Self {
        Self {
            primary,
            secondary: secondary.filter(|t| *t != primary),
        }
    }

    pub fn single(primary: Type) -> Self {
        Self::new(primary, None)
    }

    pub fn dual(primary: Type, secondary: Type) -> Self {
        Self::new(primary, Some(secondary))
    }

    /// Parse from API names, e.g. `("fire", Some("flying"))`
    pub fn from_names(primary: &str, secondary: Option<&str>) -> Result<Self, ParseError> {
        let primary = primary.parse()?;
        let secondary = secondary.map(str::parse).transpose()?;
        Ok(Self::new(primary, secondary))
    }

    pub fn is_dual(&self) -> bool {
        self.secondary.is_some()
    }

    pub fn contains(&self, t: Type) -> bool {
        self.primary == t || self.secondary == Some(t)
    }

    pub fn iter(&self) -> impl Iterator<Item = Type> {
        std::iter::once(self.primary).chain(self.secondary)
    }

    /// Same pair with primary and secondary swapped
    pub fn swapped(&self) -> Self {
        match self.secondary {
            Some(secondary) => Self::dual(secondary, self.primary),
            None => *self,
        }
    }
}

impl From<Type> for TypePair {
    fn from(t: Type) -> Self {
        Self::single(t)
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}

/// 18x18 type effectiveness chart
/// Row = attacking type, Column = defending type
/// Values: 0.0 = immune, 0.5 = not very effective, 1.0 = neutral, 2.0 = super effective
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
pub static TYPE_CHART: [[f32; 18]; 18] = [
    // Normal attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0],
    // Fire attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0],
    // Water attacking
    [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Electric attacking
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Grass attacking
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0],
    // Ice attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0],
    // Fighting attacking
    [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5],
    // Poison attacking
    [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0],
    // Ground attacking
    [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0],
    // Flying attacking
    [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Psychic attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0],
    // Bug attacking
    [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5],
    // Rock attacking
    [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Ghost attacking
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0],
    // Dragon attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0],
    // Dark attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5],
    // Steel attacking
    [1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0],
    // Fairy attacking
    [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_factor() {
        assert_eq!(Type::Water.chart_factor(Type::Fire), Factor::Double);
        assert_eq!(Type::Fire.chart_factor(Type::Water), Factor::Half);
        assert_eq!(Type::Normal.chart_factor(Type::Ghost), Factor::Immune);
        assert_eq!(Type::Dragon.chart_factor(Type::Fairy), Factor::Immune);
        assert_eq!(Type::Fire.chart_factor(Type::Normal), Factor::Neutral);
    }

    #[test]
    fn test_type_from_api() {
        assert_eq!(Type::from_api("fire"), Some(Type::Fire));
        assert_eq!(Type::from_api("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_api("FAIRY"), Some(Type::Fairy));
        assert_eq!(Type::from_api("stellar"), None);
        assert_eq!(
            "shadow".parse::<Type>(),
            Err(ParseError::UnknownType("shadow".to_string()))
        );
    }

    #[test]
    fn test_api_name_round_trips() {
        for t in Type::all() {
            assert_eq!(Type::from_api(t.api_name()), Some(*t));
        }
    }

    #[test]
    fn test_api_ids_are_distinct() {
        let mut ids: Vec<u32> = Type::all().iter().map(Type::api_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=18).collect::<Vec<_>>());
    }

    #[test]
    fn test_type_pair_collapses_duplicate() {
        let pair = TypePair::new(Type::Fire, Some(Type::Fire));
        assert_eq!(pair, TypePair::single(Type::Fire));
        assert!(!pair.is_dual());
    }

    #[test]
    fn test_type_pair_from_names() {
        let pair = TypePair::from_names("fire", Some("Flying")).unwrap();
        assert_eq!(pair, TypePair::dual(Type::Fire, Type::Flying));
        assert_eq!(pair.to_string(), "Fire/Flying");
        assert_eq!(pair.swapped(), TypePair::dual(Type::Flying, Type::Fire));
        assert_eq!(pair.iter().collect::<Vec<_>>(), vec![Type::Fire, Type::Flying]);

        assert!(TypePair::from_names("fire", Some("plasma")).is_err());
    }

    #[test]
    fn test_all_types() {
        assert_eq!(Type::all().len(), 18);
        assert_eq!(Type::all()[0], Type::Normal);
        assert_eq!(Type::all()[17], Type::Fairy);
    }

    #[test]
    fn test_colors_are_hex() {
        for t in Type::all() {
            let color = t.color();
            assert_eq!(color.len(), 7, "{}", t);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
        assert_eq!(Type::Fire.color(), "#F08030");
    }
}
