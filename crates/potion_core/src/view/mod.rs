//! Presentation projections handed to the UI layer.
//!
//! The core renders nothing itself; these types carry exactly what the
//! potion display, collection modal and task list need.

pub mod labels;
pub mod potion_view;
pub mod task_view;
