use crate::core::grouping::ordered_entries;
use crate::core::paginate::paginate;
use crate::core::render::render;
use crate::core::roster::{parse_roster, split_lines};
use crate::domain::model::{DisplayMode, PrintSheet, RosterEntry, StoreSnapshot};

/// Display lifecycle of the preview area:
///
/// `Empty → Populated(flat) ⇄ Populated(grouped)`, with pagination as a
/// read-only projection out of whichever Populated state is current, and
/// `clear` returning to Empty from any state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Preview {
    #[default]
    Empty,
    Populated {
        roster: Vec<RosterEntry>,
        mode: DisplayMode,
    },
}

impl Preview {
    pub fn new() -> Self {
        Self::Empty
    }

    /// Parse raw input text and populate the preview in flat mode. Input
    /// that yields no entries leaves the preview empty.
    pub fn load_text(&mut self, text: &str) {
        self.load_entries(parse_roster(&split_lines(text)));
    }

    pub fn load_entries(&mut self, roster: Vec<RosterEntry>) {
        *self = if roster.is_empty() {
            Self::Empty
        } else {
            Self::Populated {
                roster,
                mode: DisplayMode::Flat,
            }
        };
    }

    /// Toggle flat/grouped display. No effect while empty.
    pub fn set_mode(&mut self, new_mode: DisplayMode) {
        if let Self::Populated { mode, .. } = self {
            *mode = new_mode;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Entries in emission order for the current mode.
    pub fn entries(&self) -> Vec<RosterEntry> {
        match self {
            Self::Empty => Vec::new(),
            Self::Populated { roster, mode } => ordered_entries(roster, *mode),
        }
    }

    /// Read-only projection to print-ready pages. Does not change state; an
    /// empty preview projects to zero pages.
    pub fn project(&self, snapshot: &StoreSnapshot, capacity: usize) -> PrintSheet {
        match self {
            Self::Empty => {
                let pass = render(&[], &snapshot.issued, DisplayMode::Flat, &snapshot.region, &snapshot.media);
                PrintSheet {
                    pages: Vec::new(),
                    branding: pass.branding,
                }
            }
            Self::Populated { roster, mode } => {
                let pass = render(roster, &snapshot.issued, *mode, &snapshot.region, &snapshot.media);
                PrintSheet {
                    pages: paginate(&pass.units, capacity),
                    branding: pass.branding,
                }
            }
        }
    }
}
