//! Ephemeral mood selection for the next brew.

use crate::model::mood::{MoodKind, MoodSelection};
use log::debug;

/// Holds at most one mood selection; never persisted.
#[derive(Debug, Default)]
pub struct MoodCapture {
    selection: Option<MoodSelection>,
}

impl MoodCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous selection, freezing the palette color now.
    pub fn select(&mut self, mood: MoodKind) -> &MoodSelection {
        debug!(
            "event=mood_select module=service status=ok mood={}",
            mood.as_str()
        );
        self.selection.insert(MoodSelection::new(mood))
    }

    pub fn clear(&mut self) {
        self.selection = None;
    }

    pub fn current(&self) -> Option<&MoodSelection> {
        self.selection.as_ref()
    }
}
