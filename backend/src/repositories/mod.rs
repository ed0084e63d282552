//! Database repositories
//!
//! Every operation takes a unit-of-work handle implementing
//! [`sqlx::Acquire`]. Pass `&PgPool` to run on a pooled connection that is
//! returned when the call finishes, on success or failure. Pass
//! `&mut Transaction` to join a transaction the caller commits or rolls back.

mod error;

pub mod active_game;
pub mod leaderboard;
pub mod user;

pub use active_game::{ActiveGameRecord, ActiveGameRepository};
pub use error::{StoreError, StoreResult};
pub use leaderboard::{LeaderboardRecord, LeaderboardRepository};
pub use user::{UserRecord, UserRepository};
