use pokedex_dex::{DexError, Matchup, Type, TypeDataSource, TypeEffectivenessCalculator, TypePair};

use super::LoadOutcome;
use crate::sequence::{RequestSequencer, RequestToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

/// Two-slot type picker for one side of a matchup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TypeSlots {
    first: Option<Type>,
    second: Option<Type>,
}

impl TypeSlots {
    /// Returns false when the pick was rejected
    ///
    /// The second slot only takes a type while the first is filled, and is
    /// emptied along with it.
    fn toggle(&mut self, slot: Slot, t: Type) -> bool {
        match slot {
            Slot::First => {
                if self.first == Some(t) {
                    self.first = None;
                    self.second = None;
                } else {
                    self.first = Some(t);
                    if self.second == Some(t) {
                        self.second = None;
                    }
                }
                true
            }
            Slot::Second => {
                if self.first.is_none() || self.first == Some(t) {
                    return false;
                }
                self.second = if self.second == Some(t) { None } else { Some(t) };
                true
            }
        }
    }

    fn pair(&self) -> Option<TypePair> {
        self.first.map(|first| TypePair::new(first, self.second))
    }
}

/// Type calculator screen: attacking and defending selections plus the last result
#[derive(Debug, Default)]
pub struct CalculatorSession {
    attackers: TypeSlots,
    defenders: TypeSlots,
    result: Option<Matchup>,
    error: Option<DexError>,
    pending: Option<RequestToken>,
    sequencer: RequestSequencer,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick `t` for an attacking slot; picking the current type clears the slot
    ///
    /// The second slot stays locked until the first is filled and refuses the
    /// type already in the first. Clearing the first slot clears the second.
    pub fn toggle_attacker(&mut self, slot: Slot, t: Type) -> bool {
        self.attackers.toggle(slot, t)
    }

    /// Same rules as [`Self::toggle_attacker`]
    pub fn toggle_defender(&mut self, slot: Slot, t: Type) -> bool {
        self.defenders.toggle(slot, t)
    }

    pub fn attacker(&self, slot: Slot) -> Option<Type> {
        match slot {
            Slot::First => self.attackers.first,
            Slot::Second => self.attackers.second,
        }
    }

    pub fn defender(&self, slot: Slot) -> Option<Type> {
        match slot {
            Slot::First => self.defenders.first,
            Slot::Second => self.defenders.second,
        }
    }

    /// Selected attacking types; `None` until the first slot is filled
    pub fn attackers(&self) -> Option<TypePair> {
        self.attackers.pair()
    }

    pub fn defenders(&self) -> Option<TypePair> {
        self.defenders.pair()
    }

    pub fn can_calculate(&self) -> bool {
        self.attackers().is_some() && self.defenders().is_some()
    }

    /// Validate the selection and issue a token for the calculation
    pub fn begin_calculation(&mut self) -> Result<(RequestToken, TypePair, TypePair), DexError> {
        let (Some(attackers), Some(defenders)) = (self.attackers(), self.defenders()) else {
            self.error = Some(DexError::IncompleteSelection);
            return Err(DexError::IncompleteSelection);
        };

        let token = self.sequencer.issue();
        self.pending = Some(token);
        Ok((token, attackers, defenders))
    }

    pub fn finish_calculation(
        &mut self,
        token: RequestToken,
        result: Result<Matchup, DexError>,
    ) -> LoadOutcome {
        if self.pending != Some(token) || !self.sequencer.is_current(token) {
            tracing::warn!(?token, "Discarding stale calculation");
            return LoadOutcome::Stale;
        }
        self.pending = None;

        match result {
            Ok(matchup) => {
                self.result = Some(matchup);
                self.error = None;
                LoadOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "Type calculation failed");
                self.error = Some(e);
                LoadOutcome::Failed
            }
        }
    }

    /// Run the calculation for the current selection
    pub async fn calculate<S: TypeDataSource>(
        &mut self,
        calculator: &TypeEffectivenessCalculator<S>,
    ) -> LoadOutcome {
        let (token, attackers, defenders) = match self.begin_calculation() {
            Ok(request) => request,
            Err(_) => return LoadOutcome::Failed,
        };

        let result = calculator.matchup(attackers, defenders).await;
        self.finish_calculation(token, result)
    }

    /// Clear selections, result and error; any calculation in flight becomes stale
    pub fn reset(&mut self) {
        self.attackers = TypeSlots::default();
        self.defenders = TypeSlots::default();
        self.result = None;
        self.error = None;
        self.pending = None;
        self.sequencer.invalidate();
    }

    pub fn result(&self) -> Option<&Matchup> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&DexError> {
        self.error.as_ref()
    }

    pub fn is_calculating(&self) -> bool {
        self.pending.is_some()
    }
}
