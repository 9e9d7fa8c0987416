pub mod initiative;
pub mod stats;

pub use initiative::{InitiativeSnapshot, InitiativeStatus};
pub use stats::{derive_stats, CategoryCount, PortfolioStats, StatsFilter};
