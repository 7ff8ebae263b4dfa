mod fixture;
mod group;
mod knockout;
mod score;

pub use fixture::*;
pub use group::*;
pub use knockout::*;
pub use score::*;

pub type MatchId = u32;
