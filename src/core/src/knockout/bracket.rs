use crate::knockout::KnockoutTie;
use crate::r#match::{KnockoutMatch, KnockoutStage, Leg, MatchId};
use crate::team::TeamId;
use log::debug;
use serde::{Deserialize, Serialize};

/// Table positions that go through to the quarterfinals.
pub const KNOCKOUT_QUALIFIERS: usize = 8;

/// Quarterfinal, semifinal and final fixtures, two legs per tie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub matches: Vec<KnockoutMatch>,
}

impl Default for Bracket {
    fn default() -> Self {
        Self::skeleton()
    }
}

impl Bracket {
    /// Empty bracket: every stage's ties in order, first leg before second,
    /// ids sequential from 1, no teams and no results.
    pub fn skeleton() -> Self {
        let mut matches = Vec::with_capacity(14);
        let mut id: MatchId = 1;

        for stage in KnockoutStage::ALL {
            for tie_number in 1..=stage.ties() {
                for leg in [Leg::First, Leg::Second] {
                    matches.push(KnockoutMatch::new(id, stage, tie_number, leg));
                    id += 1;
                }
            }
        }

        Bracket { matches }
    }

    pub fn leg(&self, stage: KnockoutStage, tie_number: u8, leg: Leg) -> Option<&KnockoutMatch> {
        self.matches
            .iter()
            .find(|m| m.is_leg_of(stage, tie_number) && m.leg == leg)
    }

    fn leg_mut(&mut self, stage: KnockoutStage, tie_number: u8, leg: Leg) -> Option<&mut KnockoutMatch> {
        self.matches
            .iter_mut()
            .find(|m| m.is_leg_of(stage, tie_number) && m.leg == leg)
    }

    pub fn by_id(&self, id: MatchId) -> Option<&KnockoutMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn by_id_mut(&mut self, id: MatchId) -> Option<&mut KnockoutMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Seeds the quarterfinals from the qualifiers, best first: 1v8, 2v7,
    /// 3v6, 4v5. The lower seed hosts the first leg.
    pub fn seed_quarterfinals(&mut self, qualifiers: &[TeamId]) {
        let ties = KnockoutStage::Quarter.ties() as usize;

        for idx in 0..ties.min(qualifiers.len() / 2) {
            let higher_seed = qualifiers[idx];
            let lower_seed = qualifiers[qualifiers.len() - 1 - idx];
            let tie_number = (idx + 1) as u8;

            debug!(
                "quarterfinal {}: seed {} vs seed {}",
                tie_number,
                idx + 1,
                qualifiers.len() - idx
            );

            if let Some(first) = self.leg_mut(KnockoutStage::Quarter, tie_number, Leg::First) {
                first.home_team_id = Some(lower_seed);
                first.away_team_id = Some(higher_seed);
            }

            if let Some(second) = self.leg_mut(KnockoutStage::Quarter, tie_number, Leg::Second) {
                second.home_team_id = Some(higher_seed);
                second.away_team_id = Some(lower_seed);
            }
        }
    }

    pub fn tie(&self, stage: KnockoutStage, tie_number: u8) -> Option<KnockoutTie> {
        let first = self.leg(stage, tie_number, Leg::First)?;
        let second = self.leg(stage, tie_number, Leg::Second)?;

        Some(KnockoutTie::compute(first, second))
    }

    pub fn stage_ties(&self, stage: KnockoutStage) -> Vec<KnockoutTie> {
        (1..=stage.ties())
            .filter_map(|tie_number| self.tie(stage, tie_number))
            .collect()
    }

    pub fn ties(&self) -> Vec<KnockoutTie> {
        KnockoutStage::ALL
            .iter()
            .flat_map(|stage| self.stage_ties(*stage))
            .collect()
    }

    pub fn is_stage_complete(&self, stage: KnockoutStage) -> bool {
        self.matches
            .iter()
            .filter(|m| m.stage == stage)
            .all(|m| m.is_played())
    }

    /// Moves resolved winners into the next stage. Each quarterfinal tie is
    /// projected as soon as it resolves; the final is only filled once every
    /// semifinal leg has been played. Returns how many legs changed, so a
    /// second call over the same results returns 0.
    pub fn advance_winners(&mut self) -> usize {
        let mut changed = 0;

        for tie in self.stage_ties(KnockoutStage::Quarter) {
            changed += self.project(&tie);
        }

        if self.is_stage_complete(KnockoutStage::Semi) {
            for tie in self.stage_ties(KnockoutStage::Semi) {
                changed += self.project(&tie);
            }
        }

        changed
    }

    // Odd ties take the home slot of the next first leg, even ties the away slot
    fn project(&mut self, tie: &KnockoutTie) -> usize {
        let (Some(winner), Some(next_stage)) = (tie.winner_id, tie.stage.next()) else {
            return 0;
        };

        let next_tie = tie.tie_number.div_ceil(2);
        let odd = tie.tie_number % 2 == 1;

        let mut changed = 0;

        if let Some(first) = self.leg_mut(next_stage, next_tie, Leg::First) {
            let slot = if odd { &mut first.home_team_id } else { &mut first.away_team_id };
            changed += Self::place(slot, winner);
        }

        if let Some(second) = self.leg_mut(next_stage, next_tie, Leg::Second) {
            let slot = if odd { &mut second.away_team_id } else { &mut second.home_team_id };
            changed += Self::place(slot, winner);
        }

        if changed > 0 {
            debug!(
                "{} {} winner {} moves to {} {}",
                tie.stage, tie.tie_number, winner, next_stage, next_tie
            );
        }

        changed
    }

    fn place(slot: &mut Option<TeamId>, team_id: TeamId) -> usize {
        if *slot == Some(team_id) {
            return 0;
        }

        *slot = Some(team_id);
        1
    }

    /// Finalists plus the two beaten semifinalists.
    pub fn promoted_teams(&self) -> Vec<TeamId> {
        let mut promoted = Vec::with_capacity(4);

        if let Some(final_tie) = self.tie(KnockoutStage::Final, 1) {
            promoted.extend(final_tie.home_team_id);
            promoted.extend(final_tie.away_team_id);
        }

        for semi in self.stage_ties(KnockoutStage::Semi) {
            promoted.extend(semi.loser_id());
        }

        promoted
    }

    pub fn champion(&self) -> Option<TeamId> {
        self.tie(KnockoutStage::Final, 1)?.winner_id
    }

    /// Unplayed legs of a stage whose teams are both known.
    pub fn pending_legs(&self, stage: KnockoutStage) -> Vec<MatchId> {
        self.matches
            .iter()
            .filter(|m| m.stage == stage && m.is_ready() && !m.is_played())
            .map(|m| m.id)
            .collect()
    }
}
