pub mod builders;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use builders::ManualStateBuilder;
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder, AWAY_PLAYERS, AWAY_TEAM, HOME_PLAYERS, HOME_TEAM};
