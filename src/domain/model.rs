use serde::{Deserialize, Serialize};

/// One roster line: a person and how many tickets they requested.
/// Entries are not required to be unique by (name, grade).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub grade: String,
    pub requested: u32,
}

/// A ticket the external store has already assigned a serial number to.
/// Read-only input; the engine never creates or mutates these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedTicket {
    pub serial: String,
    pub name: String,
    pub grade: String,
    pub region: String,
}

/// Shown on a card when no issued serial is available for a slot.
pub const SERIAL_PLACEHOLDER: &str = "————";

/// Serial printed on a card: the issued number, or the dash placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Serial {
    Issued(String),
    Placeholder,
}

impl Serial {
    pub fn is_issued(&self) -> bool {
        matches!(self, Serial::Issued(_))
    }
}

impl std::fmt::Display for Serial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Serial::Issued(no) => f.write_str(no),
            Serial::Placeholder => f.write_str(SERIAL_PLACEHOLDER),
        }
    }
}

/// Preview/print ordering. Flat keeps roster order; ByGrade partitions the
/// roster by grade (grades in lexicographic order, entries stable within).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    Flat,
    ByGrade,
}

/// Optional branding images held by the store, uniform across a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaToggles {
    pub emblem_image: Option<String>,
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emblem {
    Custom(String),
    DefaultGlyph,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backdrop {
    Custom(String),
    DefaultGradient,
}

/// Resolved presentation choice for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub emblem: Emblem,
    pub backdrop: Backdrop,
}

impl From<&MediaToggles> for Branding {
    fn from(toggles: &MediaToggles) -> Self {
        Self {
            emblem: match &toggles.emblem_image {
                Some(src) => Emblem::Custom(src.clone()),
                None => Emblem::DefaultGlyph,
            },
            backdrop: match &toggles.background_image {
                Some(src) => Backdrop::Custom(src.clone()),
                None => Backdrop::DefaultGradient,
            },
        }
    }
}

/// One printable card. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedUnit {
    pub name: String,
    pub grade: String,
    pub region: String,
    pub serial: Serial,
}

/// Output of one render pass: the card sequence plus the pass-wide branding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPass {
    pub units: Vec<RenderedUnit>,
    pub branding: Branding,
}

/// A fixed-capacity grouping of cards for print layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub units: Vec<RenderedUnit>,
}

/// Print-ready projection of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintSheet {
    pub pages: Vec<Page>,
    pub branding: Branding,
}

/// One consistent read of the external ticket store, passed explicitly into
/// the compose step instead of being held as ambient state.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub issued: Vec<IssuedTicket>,
    pub region: String,
    pub media: MediaToggles,
}

/// Output document format for the emitted print sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmitFormat {
    Html,
    Json,
}
