use crate::domain::ports::PrintPipeline;
use crate::utils::error::Result;

/// Orchestrates one print run: load → fetch → compose → emit.
pub struct PressEngine<P: PrintPipeline> {
    pipeline: P,
}

impl<P: PrintPipeline> PressEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting print run...");

        tracing::info!("Loading roster...");
        let roster = self.pipeline.load_roster().await?;
        let slots: u32 = roster.iter().map(|entry| entry.requested).sum();
        tracing::info!("Loaded {} entries ({} ticket slots)", roster.len(), slots);

        tracing::info!("Fetching ticket store snapshot...");
        let snapshot = self.pipeline.fetch().await?;
        tracing::info!(
            "Fetched {} issued tickets, region: {}",
            snapshot.issued.len(),
            snapshot.region
        );

        let sheet = self.pipeline.compose(&roster, &snapshot);
        tracing::info!("Composed {} pages", sheet.pages.len());

        let output_path = self.pipeline.emit(&sheet).await?;
        tracing::info!("Print sheet saved to: {}", output_path);

        Ok(output_path)
    }
}
