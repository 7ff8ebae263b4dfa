use color_eyre::eyre::eyre;
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use league_core::utils::TimeEstimation;
use league_core::{KnockoutStage, LeagueSettings, Session};
use log::info;
use std::env;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let is_round_mode = env::var("MODE") == Ok(String::from("ROUND"));

    let settings: LeagueSettings = match env::var("LEAGUE_SETTINGS") {
        Ok(json) => serde_json::from_str(&json)?,
        Err(_) => LeagueSettings::default(),
    };

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("database loaded: {} ms", estimated);

    let teams = DatabaseGenerator::generate(&database).map_err(|e| eyre!(e))?;

    let mut session = Session::new(teams, settings)?;

    if is_round_mode {
        info!("round by round mode");

        for round in 1..=session.max_round() {
            session.simulate_round(round)?;
            log_table(&session);
        }
    } else {
        session.simulate_all_remaining();
        log_table(&session);
    }

    session.advance_to_knockout()?;

    for stage in KnockoutStage::ALL {
        session.simulate_knockout_stage(stage);

        for tie in session.state().knockout.stage_ties(stage) {
            info!(
                "{} {}: {} {} - {} {}",
                stage,
                tie.tie_number,
                team_code(&session, tie.home_team_id),
                tie.aggregate_home,
                tie.aggregate_away,
                team_code(&session, tie.away_team_id)
            );
        }
    }

    let promoted: Vec<&str> = session
        .promoted_teams()
        .into_iter()
        .map(|id| team_code(&session, Some(id)))
        .collect();

    info!("⬆️ promoted: {}", promoted.join(", "));

    match session.team(session.champion()) {
        Some(champion) => info!("🏆 champion: {}", champion),
        None => info!("no champion decided"),
    }

    Ok(())
}

fn team_code(session: &Session, id: Option<u32>) -> &str {
    session
        .team(id)
        .map(|t| t.short_code.as_str())
        .unwrap_or("TBD")
}

fn log_table(session: &Session) {
    let total = session.teams().len();

    info!("⚽ table after round {}", session.current_round());

    for row in &session.standings().rows {
        info!(
            "{:>2}. {:<4} {:>2} pts  P{:<2} W{:<2} D{:<2} L{:<2} GF{:<3} GA{:<3} {:?}",
            row.rank,
            team_code(session, Some(row.team_id)),
            row.points,
            row.played,
            row.wins,
            row.draws,
            row.losses,
            row.goals_for,
            row.goals_against,
            row.zone(session.settings(), total)
        );
    }
}
