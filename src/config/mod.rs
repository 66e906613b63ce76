use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Public "publish to web" CSV export of the technician sheet.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQKNrotGX1-ClNcQmZsgpsKiUZI0I6DI6odcHxP0xMoWMIp6D-88OhH6tD5OrTShWUo9jAAg-21VsuK/pub?gid=0&single=true&output=csv";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "suacam-directory")]
#[command(about = "Directory website for film and digital camera repair technicians")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_SHEET_URL)]
    pub sheet_url: String,

    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value = "3000")]
    pub port: u16,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn sheet_url(&self) -> &str {
        &self.sheet_url
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_sheet_url("sheet_url", &self.sheet_url)?;
        validation::validate_bind_host("host", &self.host)?;
        Ok(())
    }
}
