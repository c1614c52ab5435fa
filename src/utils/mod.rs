pub mod area;
pub mod constants;
pub mod progress;

pub use area::normalize_area;
pub use constants::*;
pub use progress::ProgressReporter;
