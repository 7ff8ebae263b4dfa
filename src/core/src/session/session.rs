use crate::error::SessionError;
use crate::knockout::{Bracket, KNOCKOUT_QUALIFIERS, KnockoutTie};
use crate::league::{LeagueSettings, LeagueTable, Schedule};
use crate::r#match::{Fixture, GroupMatch, KnockoutMatch, KnockoutStage, Leg, MatchId, Score};
use crate::session::{
    CompetitionStage, LogNotifier, Notification, Notifier, RandomScoreGenerator, ScoreGenerator,
    SessionState,
};
use crate::team::{Team, TeamCollection, TeamId};
use crate::utils::Logging;
use log::{debug, info};

/// One running competition: the group stage, then the knockout bracket.
/// Every mutation runs to completion and rebuilds the derived tables.
pub struct Session {
    teams: TeamCollection,
    settings: LeagueSettings,
    state: SessionState,
    notifier: Box<dyn Notifier>,
    scores: Box<dyn ScoreGenerator>,
}

impl Session {
    pub fn new(teams: TeamCollection, settings: LeagueSettings) -> Result<Self, SessionError> {
        let state = Self::initial_state(&teams)?;

        info!(
            "⚽ New session: {} teams, {} group matches",
            teams.len(),
            state.group_matches.len()
        );

        Ok(Session {
            teams,
            settings,
            state,
            notifier: Box::new(LogNotifier),
            scores: Box::new(RandomScoreGenerator),
        })
    }

    pub fn with_notifier<N: Notifier + 'static>(mut self, notifier: N) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_score_generator<G: ScoreGenerator + 'static>(mut self, scores: G) -> Self {
        self.scores = Box::new(scores);
        self
    }

    fn initial_state(teams: &TeamCollection) -> Result<SessionState, SessionError> {
        let group_matches = Schedule::generate(teams)?;
        let knockout = Bracket::skeleton();

        Ok(SessionState {
            stage: CompetitionStage::Group,
            current_round: 1,
            table: LeagueTable::compute(&group_matches, teams),
            ties: knockout.ties(),
            group_matches,
            knockout,
        })
    }

    // ========== READ ACCESSORS ==========

    pub fn teams(&self) -> &TeamCollection {
        &self.teams
    }

    pub fn team(&self, id: Option<TeamId>) -> Option<&Team> {
        self.teams.by_id(id)
    }

    pub fn settings(&self) -> &LeagueSettings {
        &self.settings
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn stage(&self) -> CompetitionStage {
        self.state.stage
    }

    pub fn current_round(&self) -> u8 {
        self.state.current_round
    }

    pub fn max_round(&self) -> u8 {
        Schedule::max_round(&self.state.group_matches)
    }

    pub fn group_matches(&self) -> &[GroupMatch] {
        &self.state.group_matches
    }

    pub fn round_matches(&self, round: u8) -> Vec<&GroupMatch> {
        self.state
            .group_matches
            .iter()
            .filter(|m| m.round == round)
            .collect()
    }

    pub fn knockout_matches(&self) -> &[KnockoutMatch] {
        &self.state.knockout.matches
    }

    pub fn knockout_ties(&self) -> &[KnockoutTie] {
        &self.state.ties
    }

    pub fn standings(&self) -> &LeagueTable {
        &self.state.table
    }

    pub fn fixtures(&self) -> Vec<Fixture<'_>> {
        self.state
            .group_matches
            .iter()
            .map(Fixture::Group)
            .chain(self.state.knockout.matches.iter().map(Fixture::Knockout))
            .collect()
    }

    pub fn champion(&self) -> Option<TeamId> {
        self.state.knockout.champion()
    }

    pub fn promoted_teams(&self) -> Vec<TeamId> {
        self.state.knockout.promoted_teams()
    }

    // ========== GROUP STAGE ==========

    /// Goal values are taken as given; callers validate their own input.
    pub fn record_group_result(
        &mut self,
        match_id: MatchId,
        home_goals: u8,
        away_goals: u8,
    ) -> Result<(), SessionError> {
        let group_match = self
            .state
            .group_matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(SessionError::MatchNotFound(match_id))?;

        group_match.record(Score::new(home_goals, away_goals));

        debug!(
            "group match {} (round {}): {} {} - {} {}",
            match_id,
            group_match.round,
            group_match.home_team_id,
            home_goals,
            away_goals,
            group_match.away_team_id
        );

        self.refresh_group();

        Ok(())
    }

    /// Plays every unplayed match of `round` with random scores. Returns
    /// how many matches were simulated.
    pub fn simulate_round(&mut self, round: u8) -> Result<usize, SessionError> {
        if round == 0 || round > self.max_round() {
            return Err(SessionError::RoundNotFound(round));
        }

        let max_goals = self.settings.max_random_goals;
        let mut simulated = 0;

        for group_match in self
            .state
            .group_matches
            .iter_mut()
            .filter(|m| m.round == round && !m.is_played())
        {
            group_match.record(self.scores.generate(max_goals));
            simulated += 1;
        }

        self.refresh_group();

        self.notifier.notify(Notification::info(format!(
            "Round {} simulated ({} matches)",
            round, simulated
        )));

        Ok(simulated)
    }

    pub fn simulate_all_remaining(&mut self) -> usize {
        let max_goals = self.settings.max_random_goals;

        let simulated = Logging::estimate_result(
            || {
                let mut simulated = 0;

                for group_match in self
                    .state
                    .group_matches
                    .iter_mut()
                    .filter(|m| !m.is_played())
                {
                    group_match.record(self.scores.generate(max_goals));
                    simulated += 1;
                }

                simulated
            },
            "simulate remaining group matches",
        );

        self.refresh_group();
        self.state.current_round = self.max_round();

        self.notifier.notify(Notification::info(format!(
            "All remaining matches simulated ({} matches)",
            simulated
        )));

        simulated
    }

    fn refresh_group(&mut self) {
        self.state.table = LeagueTable::compute(&self.state.group_matches, &self.teams);
        self.state.current_round = Schedule::current_round(&self.state.group_matches);
    }

    // ========== STAGE TRANSITION ==========

    /// Seeds the quarterfinals from the final table. One way: only a reset
    /// returns the session to the group stage.
    pub fn advance_to_knockout(&mut self) -> Result<(), SessionError> {
        if let Err(error) = self.check_knockout_ready() {
            self.notifier.notify(Notification::warning(error.to_string()));
            return Err(error);
        }

        let qualifiers = self.state.table.top(KNOCKOUT_QUALIFIERS);

        self.state.knockout.seed_quarterfinals(&qualifiers);
        self.state.ties = self.state.knockout.ties();
        self.state.stage = CompetitionStage::Knockout;

        info!("🏆 Knockout stage started, qualifiers: {:?}", qualifiers);

        self.notifier
            .notify(Notification::info("Knockout stage started"));

        Ok(())
    }

    fn check_knockout_ready(&self) -> Result<(), SessionError> {
        if self.state.stage == CompetitionStage::Knockout {
            return Err(SessionError::AlreadyInKnockout);
        }

        let unplayed = self
            .state
            .group_matches
            .iter()
            .filter(|m| !m.is_played())
            .count();

        if unplayed > 0 {
            return Err(SessionError::GroupStageIncomplete { unplayed });
        }

        let available = self.state.table.rows.len();

        if available < KNOCKOUT_QUALIFIERS {
            return Err(SessionError::NotEnoughQualifiers {
                required: KNOCKOUT_QUALIFIERS,
                available,
            });
        }

        Ok(())
    }

    // ========== KNOCKOUT STAGE ==========

    pub fn record_knockout_result(
        &mut self,
        match_id: MatchId,
        home_goals: u8,
        away_goals: u8,
    ) -> Result<(), SessionError> {
        let previous_champion = self.state.knockout.champion();

        let knockout_match = self
            .state
            .knockout
            .by_id_mut(match_id)
            .ok_or(SessionError::MatchNotFound(match_id))?;

        // Legs only take results once both teams are seeded
        if !knockout_match.is_ready() {
            return Err(SessionError::MatchNotReady(match_id));
        }

        knockout_match.record(Score::new(home_goals, away_goals));

        debug!(
            "{} {} {:?} leg: {} - {}",
            knockout_match.stage, knockout_match.tie_number, knockout_match.leg, home_goals, away_goals
        );

        let second_leg = knockout_match.leg == Leg::Second;

        if second_leg {
            self.state.knockout.advance_winners();
        }

        self.refresh_knockout(previous_champion);

        Ok(())
    }

    /// Plays every pending leg of `stage` whose teams are known, then
    /// propagates the winners. Returns how many legs were simulated.
    pub fn simulate_knockout_stage(&mut self, stage: KnockoutStage) -> usize {
        let max_goals = self.settings.max_random_goals;
        let pending = self.state.knockout.pending_legs(stage);
        let previous_champion = self.state.knockout.champion();

        for match_id in &pending {
            if let Some(knockout_match) = self.state.knockout.by_id_mut(*match_id) {
                knockout_match.record(self.scores.generate(max_goals));
            }
        }

        self.state.knockout.advance_winners();
        self.refresh_knockout(previous_champion);

        if !pending.is_empty() {
            self.notifier.notify(Notification::info(format!(
                "{} simulated ({} legs)",
                stage,
                pending.len()
            )));
        }

        pending.len()
    }

    fn refresh_knockout(&mut self, previous_champion: Option<TeamId>) {
        self.state.ties = self.state.knockout.ties();

        let champion = self.state.knockout.champion();

        if champion.is_some() && champion != previous_champion {
            let name = self
                .team(champion)
                .map(|t| t.name.as_str())
                .unwrap_or("unknown");

            info!("🥇 Champion: {}", name);
        }
    }

    // ========== RESET ==========

    pub fn reset_all(&mut self) {
        for group_match in self.state.group_matches.iter_mut() {
            group_match.clear();
        }

        self.state.knockout = Bracket::skeleton();
        self.state.ties = self.state.knockout.ties();
        self.state.table = LeagueTable::compute(&self.state.group_matches, &self.teams);
        self.state.current_round = 1;
        self.state.stage = CompetitionStage::Group;

        self.notifier
            .notify(Notification::info("All results have been reset"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{FixedScoreGenerator, NotificationLevel, RecordingNotifier};

    fn teams(count: u32) -> TeamCollection {
        TeamCollection::new(
            (1..=count)
                .map(|id| Team::new(id, format!("Team {}", id), format!("T{:02}", id)))
                .collect(),
        )
        .unwrap()
    }

    fn session(count: u32, scores: Vec<Score>) -> (Session, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let session = Session::new(teams(count), LeagueSettings::default())
            .unwrap()
            .with_notifier(notifier.clone())
            .with_score_generator(FixedScoreGenerator::new(scores));

        (session, notifier)
    }

    fn knockout_leg(session: &Session, stage: KnockoutStage, tie_number: u8, leg: Leg) -> KnockoutMatch {
        session.state().knockout.leg(stage, tie_number, leg).unwrap().clone()
    }

    #[test]
    fn test_new_session_state() {
        let (session, _) = session(20, vec![Score::new(1, 0)]);

        assert_eq!(session.stage(), CompetitionStage::Group);
        assert_eq!(session.current_round(), 1);
        assert_eq!(session.max_round(), 19);
        assert_eq!(session.group_matches().len(), 190);
        assert_eq!(session.knockout_matches().len(), 14);
        assert_eq!(session.knockout_ties().len(), 7);
        assert_eq!(session.standings().rows.len(), 20);
        assert_eq!(session.fixtures().len(), 204);
        assert!(session.standings().rows.iter().all(|r| r.points == 0));
        assert_eq!(session.champion(), None);
    }

    #[test]
    fn test_odd_team_count_is_rejected() {
        let result = Session::new(teams(7), LeagueSettings::default());

        assert!(matches!(result, Err(SessionError::InvalidTeamCount(7))));
    }

    #[test]
    fn test_record_group_result_updates_table_and_round() {
        let (mut session, _) = session(4, vec![Score::new(1, 0)]);

        let first = session.round_matches(1)[0].clone();
        session.record_group_result(first.id, 3, 1).unwrap();

        let home = session.standings().get(first.home_team_id).unwrap();
        assert_eq!((home.points, home.goals_for, home.goals_against), (3, 3, 1));
        assert_eq!(session.standings().rows[0].team_id, first.home_team_id);
        assert_eq!(session.current_round(), 1);

        let second = session.round_matches(1)[1].id;
        session.record_group_result(second, 0, 0).unwrap();
        assert_eq!(session.current_round(), 2);
    }

    #[test]
    fn test_unknown_match_id_leaves_state_unchanged() {
        let (mut session, notifier) = session(4, vec![Score::new(1, 0)]);
        let before = session.state().clone();

        assert_eq!(
            session.record_group_result(999, 1, 1),
            Err(SessionError::MatchNotFound(999))
        );
        assert_eq!(
            session.record_knockout_result(999, 1, 1),
            Err(SessionError::MatchNotFound(999))
        );
        assert_eq!(session.state(), &before);
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn test_simulate_round_only_plays_unplayed_matches() {
        let (mut session, notifier) = session(20, vec![Score::new(2, 2)]);

        let kept = session.round_matches(1)[0].id;
        session.record_group_result(kept, 4, 0).unwrap();

        assert_eq!(session.simulate_round(1), Ok(9));
        assert!(session.round_matches(1).iter().all(|m| m.is_played()));
        assert_eq!(
            session.round_matches(1)[0].result,
            Some(Score::new(4, 0))
        );
        assert!(session.round_matches(2).iter().all(|m| !m.is_played()));
        assert_eq!(session.current_round(), 2);

        let last = notifier.notifications().pop().unwrap();
        assert_eq!(last.level, NotificationLevel::Info);
    }

    #[test]
    fn test_simulate_round_rejects_unknown_round() {
        let (mut session, _) = session(20, vec![Score::new(0, 0)]);

        assert_eq!(session.simulate_round(0), Err(SessionError::RoundNotFound(0)));
        assert_eq!(session.simulate_round(20), Err(SessionError::RoundNotFound(20)));
    }

    #[test]
    fn test_simulate_all_remaining() {
        let (mut session, _) = session(20, vec![Score::new(1, 0), Score::new(1, 1)]);
        session.simulate_round(1).unwrap();

        assert_eq!(session.simulate_all_remaining(), 180);
        assert!(session.group_matches().iter().all(|m| m.is_played()));
        assert_eq!(session.current_round(), 19);

        let total: u32 = session.standings().rows.iter().map(|r| r.points as u32).sum();
        assert_eq!(total, LeagueTable::points_awarded(session.group_matches()));
    }

    #[test]
    fn test_advance_to_knockout_requires_complete_group_stage() {
        let (mut session, notifier) = session(20, vec![Score::new(1, 0)]);
        for round in 1..=18 {
            session.simulate_round(round).unwrap();
        }

        assert_eq!(
            session.advance_to_knockout(),
            Err(SessionError::GroupStageIncomplete { unplayed: 10 })
        );
        assert_eq!(session.stage(), CompetitionStage::Group);
        assert_eq!(session.state().knockout, Bracket::skeleton());
        assert_eq!(notifier.warnings().len(), 1);
    }

    #[test]
    fn test_advance_to_knockout_requires_eight_teams() {
        let (mut session, notifier) = session(6, vec![Score::new(1, 0)]);
        session.simulate_all_remaining();

        assert_eq!(
            session.advance_to_knockout(),
            Err(SessionError::NotEnoughQualifiers {
                required: 8,
                available: 6
            })
        );
        assert_eq!(session.stage(), CompetitionStage::Group);
        assert_eq!(notifier.warnings().len(), 1);
    }

    #[test]
    fn test_advance_to_knockout_seeds_from_table() {
        let (mut session, notifier) = session(20, vec![Score::new(2, 1), Score::new(0, 0), Score::new(1, 3)]);
        session.simulate_all_remaining();
        let seeds = session.standings().top(8);

        session.advance_to_knockout().unwrap();
        assert_eq!(session.stage(), CompetitionStage::Knockout);

        for tie_number in 1..=4u8 {
            let higher = seeds[tie_number as usize - 1];
            let lower = seeds[8 - tie_number as usize];

            let first = knockout_leg(&session, KnockoutStage::Quarter, tie_number, Leg::First);
            assert_eq!((first.home_team_id, first.away_team_id), (Some(lower), Some(higher)));

            let second = knockout_leg(&session, KnockoutStage::Quarter, tie_number, Leg::Second);
            assert_eq!((second.home_team_id, second.away_team_id), (Some(higher), Some(lower)));
        }

        let before = session.state().clone();
        assert_eq!(session.advance_to_knockout(), Err(SessionError::AlreadyInKnockout));
        assert_eq!(session.state(), &before);
        assert_eq!(notifier.warnings().len(), 1);
    }

    #[test]
    fn test_knockout_results_propagate_to_final() {
        let (mut session, _) = session(20, vec![Score::new(1, 0)]);
        session.simulate_all_remaining();
        session.advance_to_knockout().unwrap();
        let seeds = session.standings().top(8);

        // Higher seed wins every quarterfinal 0-2 away, 1-0 at home
        for tie_number in 1..=4 {
            let first = knockout_leg(&session, KnockoutStage::Quarter, tie_number, Leg::First);
            let second = knockout_leg(&session, KnockoutStage::Quarter, tie_number, Leg::Second);
            session.record_knockout_result(first.id, 0, 2).unwrap();
            session.record_knockout_result(second.id, 1, 0).unwrap();
        }

        let semi = knockout_leg(&session, KnockoutStage::Semi, 1, Leg::First);
        assert_eq!((semi.home_team_id, semi.away_team_id), (Some(seeds[0]), Some(seeds[1])));
        let semi = knockout_leg(&session, KnockoutStage::Semi, 2, Leg::Second);
        assert_eq!((semi.home_team_id, semi.away_team_id), (Some(seeds[3]), Some(seeds[2])));

        let resolved = session.knockout_ties().iter().filter(|t| t.is_resolved()).count();
        assert_eq!(resolved, 4);

        // First-leg hosts win both semifinals
        for tie_number in 1..=2 {
            let first = knockout_leg(&session, KnockoutStage::Semi, tie_number, Leg::First);
            let second = knockout_leg(&session, KnockoutStage::Semi, tie_number, Leg::Second);
            session.record_knockout_result(first.id, 3, 0).unwrap();
            session.record_knockout_result(second.id, 1, 1).unwrap();
        }

        let final_first = knockout_leg(&session, KnockoutStage::Final, 1, Leg::First);
        assert_eq!(
            (final_first.home_team_id, final_first.away_team_id),
            (Some(seeds[0]), Some(seeds[2]))
        );

        let mut promoted = session.promoted_teams();
        promoted.sort();
        let mut expected = seeds[..4].to_vec();
        expected.sort();
        assert_eq!(promoted, expected);

        let final_second = knockout_leg(&session, KnockoutStage::Final, 1, Leg::Second);
        session.record_knockout_result(final_first.id, 0, 1).unwrap();
        session.record_knockout_result(final_second.id, 0, 0).unwrap();

        assert_eq!(session.champion(), Some(seeds[2]));
        assert_eq!(session.stage(), CompetitionStage::Knockout);
    }

    #[test]
    fn test_unseeded_knockout_leg_rejects_results() {
        let (mut session, _) = session(20, vec![Score::new(1, 0)]);
        let first = knockout_leg(&session, KnockoutStage::Quarter, 1, Leg::First);
        let second = knockout_leg(&session, KnockoutStage::Quarter, 1, Leg::Second);
        let before = session.state().clone();

        assert_eq!(
            session.record_knockout_result(first.id, 3, 0),
            Err(SessionError::MatchNotReady(first.id))
        );
        assert_eq!(
            session.record_knockout_result(second.id, 0, 0),
            Err(SessionError::MatchNotReady(second.id))
        );
        assert_eq!(session.state(), &before);

        session.simulate_all_remaining();
        session.advance_to_knockout().unwrap();

        assert!(session.knockout_matches().iter().all(|m| !m.is_played()));
        assert!(session.knockout_ties().iter().all(|t| !t.is_resolved()));

        let semi = knockout_leg(&session, KnockoutStage::Semi, 1, Leg::First);
        assert_eq!(
            session.record_knockout_result(semi.id, 1, 0),
            Err(SessionError::MatchNotReady(semi.id))
        );

        session.record_knockout_result(first.id, 3, 0).unwrap();
        session.record_knockout_result(second.id, 0, 0).unwrap();

        let winner = session.knockout_ties()[0].winner_id;
        assert!(winner.is_some());
        assert_eq!(
            knockout_leg(&session, KnockoutStage::Semi, 1, Leg::First).home_team_id,
            winner
        );
    }

    #[test]
    fn test_first_leg_result_does_not_advance() {
        let (mut session, _) = session(20, vec![Score::new(1, 0)]);
        session.simulate_all_remaining();
        session.advance_to_knockout().unwrap();

        let first = knockout_leg(&session, KnockoutStage::Quarter, 1, Leg::First);
        let second = knockout_leg(&session, KnockoutStage::Quarter, 1, Leg::Second);
        session.record_knockout_result(second.id, 2, 0).unwrap();
        session.record_knockout_result(first.id, 0, 0).unwrap();

        assert!(session.knockout_ties()[0].is_resolved());
        assert!(!knockout_leg(&session, KnockoutStage::Semi, 1, Leg::First).is_ready());
        assert_eq!(
            knockout_leg(&session, KnockoutStage::Semi, 1, Leg::First).home_team_id,
            None
        );
    }

    #[test]
    fn test_simulate_knockout_stages_crowns_champion() {
        let (mut session, _) = session(20, vec![Score::new(2, 1), Score::new(0, 1)]);
        session.simulate_all_remaining();
        session.advance_to_knockout().unwrap();

        // Nothing to play before the quarterfinals resolve
        assert_eq!(session.simulate_knockout_stage(KnockoutStage::Semi), 0);

        assert_eq!(session.simulate_knockout_stage(KnockoutStage::Quarter), 8);
        assert_eq!(session.simulate_knockout_stage(KnockoutStage::Semi), 4);
        assert_eq!(session.simulate_knockout_stage(KnockoutStage::Final), 2);

        assert!(session.champion().is_some());
        assert_eq!(session.promoted_teams().len(), 4);
        assert!(session.knockout_ties().iter().all(|t| t.is_resolved()));
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let (mut session, _) = session(20, vec![Score::new(3, 1)]);
        let fresh = Session::new(teams(20), LeagueSettings::default()).unwrap();

        session.simulate_all_remaining();
        session.advance_to_knockout().unwrap();
        session.simulate_knockout_stage(KnockoutStage::Quarter);

        session.reset_all();

        assert_eq!(session.state(), fresh.state());
        assert!(session.group_matches().iter().all(|m| m.result.is_none()));
        assert!(session.knockout_matches().iter().all(|m| !m.is_ready() && !m.is_played()));
        assert_eq!(session.stage(), CompetitionStage::Group);
        assert_eq!(session.current_round(), 1);
    }

    #[test]
    fn test_team_lookup() {
        let (session, _) = session(4, vec![Score::new(0, 0)]);

        assert_eq!(session.team(Some(3)).map(|t| t.short_code.as_str()), Some("T03"));
        assert!(session.team(None).is_none());
    }
}
