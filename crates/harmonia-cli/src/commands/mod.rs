//! Command implementations.

pub mod config;
pub mod frequency;
pub mod interval;
pub mod note;
pub mod pitch;

pub use self::config::execute_config;
pub use self::frequency::execute_freq;
pub use self::interval::execute_interval;
pub use self::note::{execute_naturals, execute_note};
pub use self::pitch::execute_pitch;
