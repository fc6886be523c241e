// Public API
pub use handlers::get_scoreboard;
pub use view::{BatsmanCard, BowlerCard, ChaseSummary, LiveScoreboard, Partnership};

// Internal modules
mod handlers;
mod view;
