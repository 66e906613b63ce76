use serde::{Deserialize, Serialize};

/// One row of the published technician sheet, mapped positionally from
/// columns 0-4. Missing columns come through as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technician {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub specialization: String,
    pub link: String,
}
