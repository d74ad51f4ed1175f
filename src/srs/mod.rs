pub mod config;
pub mod scheduler;
pub mod session;
pub mod state;

pub use config::SrsConfig;
pub use session::{
    Statistics,
    StudySession,
};
pub use state::SrsState;
