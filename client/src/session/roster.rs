use pokedex_dex::{DexError, Roster, RosterEntry, RosterLoader, SpeciesSource};

use super::LoadOutcome;
use crate::sequence::{RequestSequencer, RequestToken};

/// Generation browser state: selected generation, search text and roster
#[derive(Debug)]
pub struct RosterSession {
    selected: u32,
    loaded: Option<u32>,
    query: String,
    roster: Roster,
    error: Option<DexError>,
    pending: Option<(RequestToken, u32)>,
    sequencer: RequestSequencer,
}

impl Default for RosterSession {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RosterSession {
    /// Session with `generation` selected and nothing loaded yet
    pub fn new(generation: u32) -> Self {
        Self {
            selected: generation,
            loaded: None,
            query: String::new(),
            roster: Roster::default(),
            error: None,
            pending: None,
            sequencer: RequestSequencer::new(),
        }
    }

    /// Select `generation` and issue a token for loading it
    ///
    /// Any load still in flight becomes stale.
    pub fn begin_load(&mut self, generation: u32) -> RequestToken {
        let token = self.sequencer.issue();
        self.selected = generation;
        self.pending = Some((token, generation));
        tracing::debug!(generation, ?token, "Loading generation");
        token
    }

    /// Apply the result of the load identified by `token`
    ///
    /// Success replaces the roster and clears the search text. Failure keeps
    /// the roster on display and records the error.
    pub fn finish_load(
        &mut self,
        token: RequestToken,
        result: Result<Roster, DexError>,
    ) -> LoadOutcome {
        let generation = match self.pending {
            Some((pending, generation))
                if pending == token && self.sequencer.is_current(token) =>
            {
                generation
            }
            _ => {
                tracing::warn!(?token, "Discarding stale roster response");
                return LoadOutcome::Stale;
            }
        };
        self.pending = None;

        match result {
            Ok(roster) => {
                self.roster = roster;
                self.loaded = Some(generation);
                self.query.clear();
                self.error = None;
                LoadOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(generation, error = %e, "Roster load failed");
                self.error = Some(e);
                LoadOutcome::Failed
            }
        }
    }

    /// Select and load `generation`; a no-op when it is already on display
    pub async fn select_generation<S: SpeciesSource>(
        &mut self,
        loader: &RosterLoader<S>,
        generation: u32,
    ) -> LoadOutcome {
        if self.loaded == Some(generation) && self.selected == generation && self.error.is_none()
        {
            return LoadOutcome::Unchanged;
        }

        let token = self.begin_load(generation);
        let result = loader.load_generation(generation).await;
        self.finish_load(token, result)
    }

    /// Load the selected generation again, e.g. after a failure
    pub async fn reload<S: SpeciesSource>(&mut self, loader: &RosterLoader<S>) -> LoadOutcome {
        let token = self.begin_load(self.selected);
        let result = loader.load_generation(self.selected).await;
        self.finish_load(token, result)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Entries matching the search text, in id order
    pub fn visible(&self) -> Vec<&RosterEntry> {
        self.roster.filter(&self.query)
    }

    /// Generation chosen by the user, loaded or not
    pub fn selected_generation(&self) -> u32 {
        self.selected
    }

    /// Generation the roster on display belongs to
    pub fn loaded_generation(&self) -> Option<u32> {
        self.loaded
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn error(&self) -> Option<&DexError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_dex::{ApiError, ErrorKind, NamedResource};

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
            (5, "charmeleon"),
            (6, "charizard"),
        ])
    }

    fn johto() -> Roster {
        roster(&[(152, "chikorita"), (155, "cyndaquil"), (158, "totodile")])
    }

    #[test]
    fn test_load_resets_query() {
        let mut session = RosterSession::default();
        let token = session.begin_load(1);
        assert!(session.is_loading());
        assert_eq!(session.finish_load(token, Ok(kanto())), LoadOutcome::Applied);

        session.set_query("char");
        assert_eq!(session.visible().len(), 3);

        let token = session.begin_load(2);
        assert_eq!(session.finish_load(token, Ok(johto())), LoadOutcome::Applied);
        assert_eq!(session.query(), "");
        assert_eq!(session.visible().len(), 3);
        assert_eq!(session.loaded_generation(), Some(2));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_stale_response_never_overwrites_newer() {
        let mut session = RosterSession::default();

        let slow = session.begin_load(1);
        let fast = session.begin_load(2);

        assert_eq!(session.finish_load(fast, Ok(johto())), LoadOutcome::Applied);
        assert_eq!(session.finish_load(slow, Ok(kanto())), LoadOutcome::Stale);

        assert_eq!(session.loaded_generation(), Some(2));
        assert_eq!(session.roster().first().unwrap().name, "chikorita");
    }

    #[test]
    fn test_stale_response_before_newer_is_dropped() {
        let mut session = RosterSession::default();

        let first = session.begin_load(1);
        let second = session.begin_load(2);

        assert_eq!(session.finish_load(first, Ok(kanto())), LoadOutcome::Stale);
        assert!(session.roster().is_empty());
        assert!(session.is_loading());

        assert_eq!(session.finish_load(second, Ok(johto())), LoadOutcome::Applied);
    }

    #[test]
    fn test_failure_keeps_roster() {
        let mut session = RosterSession::default();
        let token = session.begin_load(1);
        session.finish_load(token, Ok(kanto()));
        session.set_query("bulba");

        let token = session.begin_load(42);
        let err = DexError::Generation {
            generation: 42,
            source: ApiError::NotFound("/generation/42".into()),
        };
        assert_eq!(session.finish_load(token, Err(err)), LoadOutcome::Failed);

        assert_eq!(session.roster().len(), 4);
        assert_eq!(session.query(), "bulba");
        assert_eq!(session.selected_generation(), 42);
        assert_eq!(session.loaded_generation(), Some(1));
        assert_eq!(session.error().unwrap().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_success_clears_error() {
        let mut session = RosterSession::default();
        let token = session.begin_load(1);
        session.finish_load(
            token,
            Err(DexError::Generation {
                generation: 1,
                source: ApiError::Network("timed out".into()),
            }),
        );
        assert!(session.error().is_some());

        let token = session.begin_load(1);
        session.finish_load(token, Ok(kanto()));
        assert!(session.error().is_none());
    }

    #[test]
    fn test_blank_query_shows_everything() {
        let mut session = RosterSession::default();
        let token = session.begin_load(1);
        session.finish_load(token, Ok(kanto()));

        session.set_query("   ");
        assert_eq!(session.visible().len(), session.roster().len());
    }
}
