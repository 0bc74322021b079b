//! Damage multipliers

use std::fmt;

/// Multiplier of one attacking type against one defending type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Factor {
    Immune,
    Half,
    Neutral,
    Double,
}

impl Factor {
    pub fn multiplier(self) -> f32 {
        match self {
            Factor::Immune => 0.0,
            Factor::Half => 0.5,
            Factor::Neutral => 1.0,
            Factor::Double => 2.0,
        }
    }

    /// Power of two of the multiplier; `None` for immunity
    fn exponent(self) -> Option<i8> {
        match self {
            Factor::Immune => None,
            Factor::Half => Some(-1),
            Factor::Neutral => Some(0),
            Factor::Double => Some(1),
        }
    }

    /// Map a chart cell to a factor. Anything that is not 0, 0.5 or 2 is neutral.
    pub(crate) fn from_chart_value(value: f32) -> Self {
        if value == 0.0 {
            Factor::Immune
        } else if value == 0.5 {
            Factor::Half
        } else if value == 2.0 {
            Factor::Double
        } else {
            Factor::Neutral
        }
    }
}

/// Combined multiplier against a one- or two-typed defender
///
/// Only the six values reachable by multiplying two [`Factor`]s exist, so an
/// out-of-range multiplier cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Effectiveness {
    Immune,
    Quarter,
    Half,
    Neutral,
    Double,
    Quadruple,
}

impl Effectiveness {
    pub const ALL: [Effectiveness; 6] = [
        Effectiveness::Immune,
        Effectiveness::Quarter,
        Effectiveness::Half,
        Effectiveness::Neutral,
        Effectiveness::Double,
        Effectiveness::Quadruple,
    ];

    /// Combine the factors against each defending type
    pub fn from_factors(first: Factor, second: Option<Factor>) -> Self {
        let second = second.unwrap_or(Factor::Neutral);
        match (first.exponent(), second.exponent()) {
            (None, _) | (_, None) => Effectiveness::Immune,
            (Some(a), Some(b)) => match a + b {
                i8::MIN..=-2 => Effectiveness::Quarter,
                -1 => Effectiveness::Half,
                0 => Effectiveness::Neutral,
                1 => Effectiveness::Double,
                _ => Effectiveness::Quadruple,
            },
        }
    }

    pub fn multiplier(self) -> f32 {
        match self {
            Effectiveness::Immune => 0.0,
            Effectiveness::Quarter => 0.25,
            Effectiveness::Half => 0.5,
            Effectiveness::Neutral => 1.0,
            Effectiveness::Double => 2.0,
            Effectiveness::Quadruple => 4.0,
        }
    }

    pub fn from_multiplier(value: f32) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.multiplier() == value)
    }

    pub fn description(self) -> &'static str {
        match self {
            Effectiveness::Immune => "No effect",
            Effectiveness::Quarter => "Barely effective",
            Effectiveness::Half => "Not very effective",
            Effectiveness::Neutral => "Normal effectiveness",
            Effectiveness::Double => "Super effective",
            Effectiveness::Quadruple => "Extremely effective",
        }
    }

    /// UI colour as a hex string
    pub fn color(self) -> &'static str {
        match self {
            Effectiveness::Immune => "#999",
            Effectiveness::Quarter | Effectiveness::Half => "#E74C3C",
            Effectiveness::Neutral => "#95A5A6",
            Effectiveness::Double | Effectiveness::Quadruple => "#27AE60",
        }
    }

    pub fn is_immune(self) -> bool {
        self == Effectiveness::Immune
    }

    pub fn is_super_effective(self) -> bool {
        self > Effectiveness::Neutral
    }

    /// Resisted but not immune
    pub fn is_resisted(self) -> bool {
        self > Effectiveness::Immune && self < Effectiveness::Neutral
    }
}

impl From<Factor> for Effectiveness {
    fn from(factor: Factor) -> Self {
        Effectiveness::from_factors(factor, None)
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "×{}", self.multiplier())
    }
}
