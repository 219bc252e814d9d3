//! Boundary to the UI layer that displays markup and raises user events.

use crate::views::View;
use maud::Markup;

/// Regions of the page the controller writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Shared tab content.
    Content,
    /// About side box.
    About,
}

/// Icon and tooltip of the mute button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuteIndicator {
    pub icon: &'static str,
    pub title: &'static str,
}

impl MuteIndicator {
    pub const SOUND_ON: MuteIndicator = MuteIndicator {
        icon: "bi-volume-up",
        title: "Mute",
    };

    pub const SOUND_OFF: MuteIndicator = MuteIndicator {
        icon: "bi-volume-mute",
        title: "Unmute",
    };

    pub fn for_muted(muted: bool) -> Self {
        if muted {
            Self::SOUND_OFF
        } else {
            Self::SOUND_ON
        }
    }
}

/// User interactions the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A tab was selected.
    SelectTab(View),
    /// The mute button was pressed.
    ToggleMute,
    /// Any click anywhere in the document.
    DocumentClick,
}

/// Display side of the UI layer.
pub trait Surface: Send {
    /// Replace everything in `region` with `markup`.
    fn render(&mut self, region: Region, markup: &Markup);

    /// Show the mute button state.
    fn set_mute_indicator(&mut self, indicator: MuteIndicator);
}
