mod builder;
mod collection;
mod team;

pub use builder::*;
pub use collection::*;
pub use team::*;
