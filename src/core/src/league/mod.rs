mod schedule;
mod settings;
mod table;

pub use schedule::*;
pub use settings::*;
pub use table::*;
