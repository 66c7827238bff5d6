mod crew;
pub mod fs;
mod path;
pub mod sweeper;
pub mod target;

pub use crew::*;
pub use path::*;
pub use sweeper::{Sweeper, SweeperError};
pub use target::SweepableTarget;
