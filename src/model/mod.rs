mod player;
mod profile;
mod stats;
mod team;
mod transfer;

pub use player::*;
pub use profile::*;
pub use stats::*;
pub use team::*;
pub use transfer::*;
