mod bracket;
mod tie;

pub use bracket::*;
pub use tie::*;
