mod airport;
mod leg;

pub use airport::*;
pub use leg::*;
