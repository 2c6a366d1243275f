use crate::core::paginate::PAGE_CAPACITY;
use crate::domain::model::{DisplayMode, EmitFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "raffle-press")]
#[command(about = "Renders printable raffle-ticket cards from a roster and a ticket store")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:3000")]
    pub store_url: String,

    #[arg(long, default_value = "roster.txt", help = "Roster file, one 'name,grade,count' line per person")]
    pub roster_path: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Group cards by grade instead of roster order")]
    pub by_grade: bool,

    #[arg(long, value_enum, default_value_t = EmitFormat::Html)]
    pub format: EmitFormat,

    #[arg(long, default_value_t = PAGE_CAPACITY)]
    pub page_capacity: usize,

    #[arg(long, help = "Ask the store to (re)generate serial numbers before fetching")]
    pub generate: bool,

    #[arg(long, help = "Persist the parsed roster to the store")]
    pub save: bool,

    #[arg(long, help = "Update the store's region before rendering")]
    pub region: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn store_url(&self) -> &str {
        &self.store_url
    }

    fn roster_path(&self) -> &str {
        &self.roster_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn display_mode(&self) -> DisplayMode {
        if self.by_grade {
            DisplayMode::ByGrade
        } else {
            DisplayMode::Flat
        }
    }

    fn emit_format(&self) -> EmitFormat {
        self.format
    }

    fn page_capacity(&self) -> usize {
        self.page_capacity
    }

    fn generate(&self) -> bool {
        self.generate
    }

    fn save_roster(&self) -> bool {
        self.save
    }

    fn region_override(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("store_url", &self.store_url)?;
        validation::validate_path("roster_path", &self.roster_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_positive_number("page_capacity", self.page_capacity, 1)?;
        if let Some(region) = &self.region {
            validation::validate_non_empty_string("region", region)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            store_url: "http://localhost:3000".to_string(),
            roster_path: "roster.txt".to_string(),
            output_path: "./output".to_string(),
            by_grade: false,
            format: EmitFormat::Html,
            page_capacity: PAGE_CAPACITY,
            generate: false,
            save: false,
            region: None,
            verbose: false,
        }
    }

    #[test]
    fn defaults_validate() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn zero_page_capacity_is_rejected() {
        let config = CliConfig {
            page_capacity: 0,
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_region_override_is_rejected() {
        let config = CliConfig {
            region: Some("  ".to_string()),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn by_grade_flag_selects_grouped_mode() {
        let config = CliConfig {
            by_grade: true,
            ..base_config()
        };
        assert_eq!(config.display_mode(), DisplayMode::ByGrade);
        assert_eq!(base_config().display_mode(), DisplayMode::Flat);
    }
}
