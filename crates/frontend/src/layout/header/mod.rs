pub mod header;
pub mod progress_tracker;

pub use header::Header;
pub use progress_tracker::{ProgressTracker, SELECT_SKIP_STEP};
