//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth primitives.

pub mod games;
pub mod leaderboard;
pub mod user;

pub use games::GameService;
pub use leaderboard::LeaderboardService;
pub use user::UserService;
