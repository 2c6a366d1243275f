use crate::core::layout;
use crate::core::preview::Preview;
use crate::core::roster::{parse_roster, split_lines};
use crate::domain::model::{EmitFormat, PrintSheet, RosterEntry, StoreSnapshot};
use crate::domain::ports::{ConfigProvider, PrintPipeline, Storage, TicketStore};
use crate::utils::error::Result;

/// The concrete print pipeline: roster file in, print-ready sheet out.
/// Everything between `fetch` and `emit` is pure and synchronous.
pub struct CardPipeline<S: Storage, T: TicketStore, C: ConfigProvider> {
    storage: S,
    store: T,
    config: C,
}

impl<S: Storage, T: TicketStore, C: ConfigProvider> CardPipeline<S, T, C> {
    pub fn new(storage: S, store: T, config: C) -> Self {
        Self {
            storage,
            store,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, T: TicketStore, C: ConfigProvider> PrintPipeline for CardPipeline<S, T, C> {
    async fn load_roster(&self) -> Result<Vec<RosterEntry>> {
        tracing::debug!("Reading roster from: {}", self.config.roster_path());
        let raw = self.storage.read_file(self.config.roster_path()).await?;
        let text = String::from_utf8_lossy(&raw);
        let lines = split_lines(&text);
        let roster = parse_roster(&lines);

        if self.config.save_roster() && !lines.is_empty() {
            tracing::debug!("Persisting {} roster lines to the store", lines.len());
            self.store.save_roster(&lines).await?;
        }

        Ok(roster)
    }

    async fn fetch(&self) -> Result<StoreSnapshot> {
        if let Some(region) = self.config.region_override() {
            let updated = self.store.update_region(region).await?;
            tracing::info!("Region updated to: {}", updated);
        }

        if self.config.generate() {
            // Awaited so a failed generation surfaces here; the snapshot
            // reads below observe whatever the store produced.
            tracing::info!("Requesting serial generation on the store");
            self.store.request_generation().await?;
        }

        let issued = self.store.fetch_issued().await?;
        let region = self.store.current_region().await?;
        let media = self.store.media_toggles().await?;

        tracing::debug!(
            "Store snapshot: {} issued tickets, region {}",
            issued.len(),
            region
        );
        Ok(StoreSnapshot {
            issued,
            region,
            media,
        })
    }

    fn compose(&self, roster: &[RosterEntry], snapshot: &StoreSnapshot) -> PrintSheet {
        let mut preview = Preview::new();
        preview.load_entries(roster.to_vec());
        preview.set_mode(self.config.display_mode());
        preview.project(snapshot, self.config.page_capacity())
    }

    async fn emit(&self, sheet: &PrintSheet) -> Result<String> {
        let (file_name, bytes) = match self.config.emit_format() {
            EmitFormat::Html => (
                "print_sheet.html",
                layout::document(&sheet.pages, &sheet.branding).into_bytes(),
            ),
            EmitFormat::Json => (
                "print_sheet.json",
                serde_json::to_vec_pretty(&sheet.pages)?,
            ),
        };

        let output_path = format!("{}/{}", self.config.output_path(), file_name);
        tracing::debug!("Writing print sheet ({} bytes) to {}", bytes.len(), output_path);
        self.storage.write_file(&output_path, &bytes).await?;
        Ok(output_path)
    }
}
