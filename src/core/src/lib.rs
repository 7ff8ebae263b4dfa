pub mod error;
pub mod knockout;
pub mod league;
pub mod r#match;
pub mod session;
pub mod team;
pub mod utils;

pub use error::SessionError;
pub use knockout::{Bracket, KnockoutTie, KNOCKOUT_QUALIFIERS};
pub use league::{LeagueSettings, LeagueTable, LeagueTableRow, Schedule, TableZone};
pub use r#match::{
    Fixture, GroupMatch, KnockoutMatch, KnockoutStage, Leg, MatchId, MatchOutcome, Score,
};
pub use session::{
    CompetitionStage, LogNotifier, Notification, NotificationLevel, Notifier,
    RandomScoreGenerator, ScoreGenerator, Session, SessionState,
};
pub use team::{Team, TeamBuilder, TeamCollection, TeamId};
