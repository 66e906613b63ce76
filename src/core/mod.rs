pub mod sheet;
pub mod view;

pub use crate::domain::model::Technician;
pub use crate::domain::ports::{ConfigProvider, SheetSource};
pub use crate::utils::error::Result;
