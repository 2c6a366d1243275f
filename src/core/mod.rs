pub mod engine;
pub mod grouping;
pub mod layout;
pub mod matching;
pub mod paginate;
pub mod pipeline;
pub mod preview;
pub mod render;
pub mod roster;

pub use crate::domain::model::{
    Backdrop, Branding, DisplayMode, EmitFormat, Emblem, IssuedTicket, MediaToggles, Page,
    PrintSheet, RenderPass, RenderedUnit, RosterEntry, Serial, StoreSnapshot,
};
pub use crate::domain::ports::{ConfigProvider, PrintPipeline, Storage, TicketStore};
pub use crate::utils::error::Result;
