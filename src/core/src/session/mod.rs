mod notification;
mod scores;
mod session;
mod state;

pub use notification::*;
pub use scores::*;
pub use session::*;
pub use state::*;
