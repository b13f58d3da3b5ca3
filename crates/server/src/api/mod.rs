mod lookup;
mod search;

pub use lookup::*;
pub use search::*;
