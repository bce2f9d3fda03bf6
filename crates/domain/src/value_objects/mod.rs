//! Value objects - immutable values without identity

mod item_delta;
mod item_use;
mod names;
mod stats;

pub use item_delta::ItemDelta;
pub use item_use::{UseEffect, UsePlan, UseRejection, DEFAULT_DAMAGE};
pub use names::{ItemName, Username};
pub use stats::Stats;
