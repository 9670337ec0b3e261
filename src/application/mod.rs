//! Application layer - Use cases and orchestration

pub mod menu;
pub mod session;

pub use menu::{DashboardChoice, Screen, WelcomeChoice};
pub use session::{Session, WrittenEntry, MOOD_WINDOW_DAYS};
