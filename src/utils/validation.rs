use crate::utils::error::{DirectoryError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// The proxy can only fetch the published sheet over plain HTTP(S).
pub fn validate_sheet_url(field_name: &str, url_str: &str) -> Result<()> {
    let url = Url::parse(url_str).map_err(|e| DirectoryError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason: format!("not a fetchable URL: {}", e),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!(
                "the sheet must be published over http or https, got '{}'",
                url.scheme()
            ),
        });
    }

    Ok(())
}

pub fn validate_bind_host(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "bind host cannot be blank".to_string(),
        });
    }
    Ok(())
}
