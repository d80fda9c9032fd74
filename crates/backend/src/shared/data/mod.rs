pub mod app_state;
pub mod crud;

pub use app_state::{AppState, CommitDelay};
