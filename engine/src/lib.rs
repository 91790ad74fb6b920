pub mod config;
pub mod isolation;
pub mod logger;
pub mod session_rng;

pub use session_rng::SessionRng;
