use crate::domain::model::{IssuedTicket, MediaToggles};
use crate::domain::ports::TicketStore;
use crate::utils::error::{PressError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// Region the store falls back to before one has been configured.
const DEFAULT_REGION: &str = "SK";

/// REST client for the external ticket store. Owns no engine logic: it maps
/// the store's wire rows onto domain types and turns every transport or
/// store-side failure into `CollaboratorUnavailable`.
#[derive(Debug, Clone)]
pub struct HttpTicketStore {
    client: Client,
    base_url: String,
}

// Wire shape of one persisted ticket row (`ticket_no` is the serial).
#[derive(Debug, Deserialize)]
struct TicketRow {
    name: String,
    grade: String,
    #[serde(default)]
    region: String,
    ticket_no: String,
}

#[derive(Debug, Deserialize, Default)]
struct RegionBody {
    region: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct MediaBody {
    logo: Option<String>,
    bg: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct AckBody {
    error: Option<String>,
}

impl HttpTicketStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(PressError::CollaboratorUnavailable(format!(
                "store returned HTTP {}",
                response.status()
            )))
        }
    }

    fn check_ack(body: AckBody) -> Result<()> {
        match body.error {
            Some(error) => Err(PressError::CollaboratorUnavailable(error)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TicketStore for HttpTicketStore {
    async fn fetch_issued(&self) -> Result<Vec<IssuedTicket>> {
        let response = self
            .client
            .get(self.endpoint("/api/tickets"))
            .send()
            .await?;
        let rows: Vec<TicketRow> = Self::check(response)?.json().await?;
        tracing::debug!("Fetched {} ticket rows from the store", rows.len());

        Ok(rows
            .into_iter()
            .map(|row| IssuedTicket {
                serial: row.ticket_no,
                name: row.name,
                grade: row.grade,
                region: row.region,
            })
            .collect())
    }

    async fn current_region(&self) -> Result<String> {
        let response = self.client.get(self.endpoint("/api/region")).send().await?;
        let body: RegionBody = Self::check(response)?.json().await?;
        Ok(body.region.unwrap_or_else(|| DEFAULT_REGION.to_string()))
    }

    async fn update_region(&self, region: &str) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint("/api/region"))
            .json(&json!({ "region": region }))
            .send()
            .await?;
        let body: RegionBody = Self::check(response)?.json().await?;
        if let Some(error) = body.error {
            return Err(PressError::CollaboratorUnavailable(error));
        }
        Ok(body.region.unwrap_or_else(|| region.to_string()))
    }

    async fn media_toggles(&self) -> Result<MediaToggles> {
        // Branding is cosmetic; an unreachable media endpoint degrades to
        // the defaults instead of failing the run.
        let body = match self.client.get(self.endpoint("/api/media")).send().await {
            Ok(response) if response.status().is_success() => {
                response.json::<MediaBody>().await.unwrap_or_default()
            }
            Ok(response) => {
                tracing::warn!("Media endpoint returned HTTP {}", response.status());
                MediaBody::default()
            }
            Err(err) => {
                tracing::warn!("Media endpoint unreachable: {}", err);
                MediaBody::default()
            }
        };

        Ok(MediaToggles {
            emblem_image: body.logo,
            background_image: body.bg,
        })
    }

    async fn request_generation(&self) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint("/api/tickets/generate"))
            .send()
            .await?;
        let body: AckBody = Self::check(response)?.json().await.unwrap_or_default();
        Self::check_ack(body)
    }

    async fn save_roster(&self, lines: &[String]) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint("/api/students/bulk"))
            .json(&json!({ "lines": lines }))
            .send()
            .await?;
        let body: AckBody = Self::check(response)?.json().await.unwrap_or_default();
        Self::check_ack(body)
    }
}
