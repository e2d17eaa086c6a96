//! In-memory registry of all tournament entities.
//!
//! Relationships are plain identifier references. Each entity kind lives in
//! its own table keyed by a sequential id; referential integrity is checked
//! explicitly on insert, update, and delete.

use crate::models::error::{BtmsError, EntityKind};
use crate::models::fixture::{Match, MatchId, NewMatch};
use crate::models::player::{NewPlayer, Player, PlayerId};
use crate::models::round::{NewRound, Round, RoundId};
use crate::models::team::{Coach, CoachId, NewCoach, NewTeam, Team, TeamId};
use std::collections::BTreeMap;

/// Rows of one entity kind. Ids start at 1 and are never reused.
#[derive(Clone, Debug)]
struct Table<T> {
    rows: BTreeMap<u32, T>,
    next_id: u32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert(&mut self, build: impl FnOnce(u32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, kind: EntityKind, id: u32) -> Result<&T, BtmsError> {
        self.rows.get(&id).ok_or(BtmsError::NotFound { kind, id })
    }

    fn replace(&mut self, kind: EntityKind, id: u32, row: T) -> Result<T, BtmsError> {
        let slot = self.rows.get_mut(&id).ok_or(BtmsError::NotFound { kind, id })?;
        *slot = row.clone();
        Ok(row)
    }

    fn remove(&mut self, kind: EntityKind, id: u32) -> Result<T, BtmsError> {
        self.rows.remove(&id).ok_or(BtmsError::NotFound { kind, id })
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

/// All entities of one tournament: teams, coaches, players, rounds, matches.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    teams: Table<Team>,
    coaches: Table<Coach>,
    players: Table<Player>,
    rounds: Table<Round>,
    matches: Table<Match>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- lookups -------------------------------------------------------

    pub fn team(&self, id: TeamId) -> Result<&Team, BtmsError> {
        self.teams.get(EntityKind::Team, id)
    }

    pub fn coach(&self, id: CoachId) -> Result<&Coach, BtmsError> {
        self.coaches.get(EntityKind::Coach, id)
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, BtmsError> {
        self.players.get(EntityKind::Player, id)
    }

    pub fn round(&self, id: RoundId) -> Result<&Round, BtmsError> {
        self.rounds.get(EntityKind::Round, id)
    }

    pub fn match_by_id(&self, id: MatchId) -> Result<&Match, BtmsError> {
        self.matches.get(EntityKind::Match, id)
    }

    /// All teams in id order.
    pub fn teams(&self) -> Vec<Team> {
        self.teams.values().cloned().collect()
    }

    pub fn coaches(&self) -> Vec<Coach> {
        self.coaches.values().cloned().collect()
    }

    pub fn players(&self) -> Vec<Player> {
        self.players.values().cloned().collect()
    }

    /// All rounds ordered by `round_no`.
    pub fn rounds(&self) -> Vec<Round> {
        let mut rounds: Vec<Round> = self.rounds.values().cloned().collect();
        rounds.sort_by_key(|r| r.round_no);
        rounds
    }

    pub fn matches(&self) -> Vec<Match> {
        self.matches.values().cloned().collect()
    }

    // ---- teams ---------------------------------------------------------

    pub fn insert_team(&mut self, draft: NewTeam) -> Result<Team, BtmsError> {
        validate_team(&draft)?;
        let team = self.teams.insert(|id| Team::from_draft(id, draft));
        log::debug!("Inserted team {} ({})", team.id, team.name);
        Ok(team)
    }

    pub fn update_team(&mut self, id: TeamId, draft: NewTeam) -> Result<Team, BtmsError> {
        validate_team(&draft)?;
        let team = self
            .teams
            .replace(EntityKind::Team, id, Team::from_draft(id, draft))?;
        log::debug!("Updated team {}", id);
        Ok(team)
    }

    /// Delete a team. Blocked while any coach, player, or match references it.
    pub fn delete_team(&mut self, id: TeamId) -> Result<Team, BtmsError> {
        self.team(id)?;
        let restricted = |referenced_by| BtmsError::Restricted {
            kind: EntityKind::Team,
            id,
            referenced_by,
        };
        if self.coaches.values().any(|c| c.team == id) {
            return Err(restricted(EntityKind::Coach));
        }
        if self.players.values().any(|p| p.team == id) {
            return Err(restricted(EntityKind::Player));
        }
        if self.matches.values().any(|m| m.references_team(id)) {
            return Err(restricted(EntityKind::Match));
        }
        let team = self.teams.remove(EntityKind::Team, id)?;
        log::debug!("Deleted team {}", id);
        Ok(team)
    }

    // ---- coaches -------------------------------------------------------

    pub fn insert_coach(&mut self, draft: NewCoach) -> Result<Coach, BtmsError> {
        self.team(draft.team)?;
        let coach = self.coaches.insert(|id| Coach::from_draft(id, draft));
        log::debug!("Inserted coach {} for team {}", coach.id, coach.team);
        Ok(coach)
    }

    pub fn update_coach(&mut self, id: CoachId, draft: NewCoach) -> Result<Coach, BtmsError> {
        self.team(draft.team)?;
        self.coaches
            .replace(EntityKind::Coach, id, Coach::from_draft(id, draft))
    }

    pub fn delete_coach(&mut self, id: CoachId) -> Result<Coach, BtmsError> {
        let coach = self.coaches.remove(EntityKind::Coach, id)?;
        log::debug!("Deleted coach {}", id);
        Ok(coach)
    }

    // ---- players -------------------------------------------------------

    pub fn insert_player(&mut self, draft: NewPlayer) -> Result<Player, BtmsError> {
        draft.validate()?;
        self.team(draft.team)?;
        let player = self.players.insert(|id| Player::from_draft(id, draft));
        log::debug!("Inserted player {} for team {}", player.id, player.team);
        Ok(player)
    }

    pub fn update_player(&mut self, id: PlayerId, draft: NewPlayer) -> Result<Player, BtmsError> {
        draft.validate()?;
        self.team(draft.team)?;
        self.players
            .replace(EntityKind::Player, id, Player::from_draft(id, draft))
    }

    pub fn delete_player(&mut self, id: PlayerId) -> Result<Player, BtmsError> {
        let player = self.players.remove(EntityKind::Player, id)?;
        log::debug!("Deleted player {}", id);
        Ok(player)
    }

    // ---- rounds --------------------------------------------------------

    pub fn insert_round(&mut self, draft: NewRound) -> Result<Round, BtmsError> {
        self.validate_round(None, &draft)?;
        let round = self.rounds.insert(|id| Round::from_draft(id, draft));
        log::debug!("Inserted round {} ({})", round.round_no, round.round_code);
        Ok(round)
    }

    pub fn update_round(&mut self, id: RoundId, draft: NewRound) -> Result<Round, BtmsError> {
        self.round(id)?;
        self.validate_round(Some(id), &draft)?;
        self.rounds
            .replace(EntityKind::Round, id, Round::from_draft(id, draft))
    }

    /// Delete a round. Blocked while any match belongs to it.
    pub fn delete_round(&mut self, id: RoundId) -> Result<Round, BtmsError> {
        self.round(id)?;
        if self.matches.values().any(|m| m.round == id) {
            return Err(BtmsError::Restricted {
                kind: EntityKind::Round,
                id,
                referenced_by: EntityKind::Match,
            });
        }
        let round = self.rounds.remove(EntityKind::Round, id)?;
        log::debug!("Deleted round {}", id);
        Ok(round)
    }

    /// `round_no` is 1-based and unique; `existing` is the round being replaced, if any.
    fn validate_round(&self, existing: Option<RoundId>, draft: &NewRound) -> Result<(), BtmsError> {
        if draft.round_no == 0 {
            return Err(BtmsError::InvalidArgument(
                "round_no must be at least 1".to_string(),
            ));
        }
        let taken = self
            .rounds
            .values()
            .any(|r| r.round_no == draft.round_no && Some(r.id) != existing);
        if taken {
            return Err(BtmsError::InvalidArgument(format!(
                "round_no {} is already in use",
                draft.round_no
            )));
        }
        Ok(())
    }

    // ---- matches -------------------------------------------------------

    pub fn insert_match(&mut self, draft: NewMatch) -> Result<Match, BtmsError> {
        self.validate_match(&draft)?;
        let m = self.matches.insert(|id| Match::from_draft(id, draft));
        log::debug!(
            "Inserted match {} (round {}: {} vs {})",
            m.id,
            m.round,
            m.host_team,
            m.guest_team
        );
        Ok(m)
    }

    pub fn update_match(&mut self, id: MatchId, draft: NewMatch) -> Result<Match, BtmsError> {
        self.validate_match(&draft)?;
        self.matches
            .replace(EntityKind::Match, id, Match::from_draft(id, draft))
    }

    pub fn delete_match(&mut self, id: MatchId) -> Result<Match, BtmsError> {
        let m = self.matches.remove(EntityKind::Match, id)?;
        log::debug!("Deleted match {}", id);
        Ok(m)
    }

    fn validate_match(&self, draft: &NewMatch) -> Result<(), BtmsError> {
        draft.validate()?;
        self.round(draft.round)?;
        self.team(draft.host_team)?;
        self.team(draft.guest_team)?;
        Ok(())
    }
}

fn validate_team(draft: &NewTeam) -> Result<(), BtmsError> {
    if !draft.average_score.is_finite() {
        return Err(BtmsError::InvalidArgument(
            "average_score must be a finite number".to_string(),
        ));
    }
    Ok(())
}
