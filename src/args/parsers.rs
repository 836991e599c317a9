use super::types::PositiveU64;
use crate::error::ValidationError;

pub(super) fn parse_positive_u64(s: &str) -> Result<PositiveU64, ValidationError> {
    s.trim().parse::<PositiveU64>()
}

pub(super) fn parse_host(s: &str) -> Result<String, ValidationError> {
    let host = s.trim();
    if host.is_empty() {
        return Err(ValidationError::HostEmpty);
    }
    Ok(host.to_owned())
}
