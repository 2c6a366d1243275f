use crate::domain::model::{
    DisplayMode, EmitFormat, IssuedTicket, MediaToggles, PrintSheet, RosterEntry, StoreSnapshot,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// The external persistence collaborator. It owns serial allocation and the
/// persisted ticket/region/media data; the engine only reads from it (plus
/// the explicit write operations the UI exposes).
#[async_trait]
pub trait TicketStore: Send + Sync {
    async fn fetch_issued(&self) -> Result<Vec<IssuedTicket>>;
    async fn current_region(&self) -> Result<String>;
    async fn update_region(&self, region: &str) -> Result<String>;
    async fn media_toggles(&self) -> Result<MediaToggles>;
    /// Ask the store to (re)populate issued tickets. Awaited so callers can
    /// distinguish "request sent" from "request failed"; observing the new
    /// data still requires a re-fetch.
    async fn request_generation(&self) -> Result<()>;
    async fn save_roster(&self, lines: &[String]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn store_url(&self) -> &str;
    fn roster_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn display_mode(&self) -> DisplayMode;
    fn emit_format(&self) -> EmitFormat;
    fn page_capacity(&self) -> usize;
    fn generate(&self) -> bool;
    fn save_roster(&self) -> bool;
    fn region_override(&self) -> Option<&str>;
}

#[async_trait]
pub trait PrintPipeline: Send + Sync {
    async fn load_roster(&self) -> Result<Vec<RosterEntry>>;
    async fn fetch(&self) -> Result<StoreSnapshot>;
    fn compose(&self, roster: &[RosterEntry], snapshot: &StoreSnapshot) -> PrintSheet;
    async fn emit(&self, sheet: &PrintSheet) -> Result<String>;
}
