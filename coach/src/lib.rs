pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod gpx_export;
pub mod map_adapter;
pub mod route_book;
pub mod route_synth;
pub mod routine;
pub mod session;

pub use classifier::classify;
pub use config::CoachConfig;
pub use error::CoachError;
pub use route_synth::{estimate_minutes, synthesize_route};
pub use routine::synthesize_routine;
pub use session::{CoachPlan, PlannerSession};
