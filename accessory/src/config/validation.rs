//! Config value validation.

use octoprint_client::{OctoPrintError, parse_server};

pub fn validate_name(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("name must not be empty".into());
    }
    Ok(())
}

/// The server must be an absolute http(s) URL with a host, exactly as the
/// client will require when it is built.
pub fn validate_server(value: &str) -> Result<(), String> {
    parse_server(value).map(|_| ()).map_err(|e| match e {
        OctoPrintError::InvalidServer(_) => "must be an http:// or https:// URL with a host".into(),
        other => other.to_string(),
    })
}
