//! Change tracking for block writes.
//!
//! Brush activations write through a [`RecordingGrid`], and the resulting
//! [`EditBatch`] is handed to an [`EditHistory`] once the activation ends,
//! whether it completed or failed part-way.

pub mod delta;
pub mod recorder;
pub mod history;

pub use delta::{EditBatch, EditDelta};
pub use recorder::RecordingGrid;
pub use history::EditHistory;
