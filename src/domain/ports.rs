use crate::domain::model::Technician;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn sheet_url(&self) -> &str;
    fn host(&self) -> &str;
    fn port(&self) -> u16;
}

/// Read-only access to the published technician sheet. One best-effort
/// fetch per call; callers get the full record sequence or an error.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<Technician>>;
}
