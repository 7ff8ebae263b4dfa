use crate::r#match::Score;

/// Source of scores for simulated matches.
pub trait ScoreGenerator {
    fn generate(&mut self, max_goals: u8) -> Score;
}

/// Independent uniform goals in `0..=max_goals` for each side.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomScoreGenerator;

impl ScoreGenerator for RandomScoreGenerator {
    fn generate(&mut self, max_goals: u8) -> Score {
        Score::new(
            rand::random_range(0..=max_goals),
            rand::random_range(0..=max_goals),
        )
    }
}

#[cfg(test)]
pub use fixed::FixedScoreGenerator;
