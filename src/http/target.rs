use crate::error::{AppError, AppResult, HttpError, ValidationError};

/// Builds `http://<host>:<port><path>` and checks that it parses.
///
/// A missing leading `/` on the path is added; bare IPv6 hosts are bracketed.
///
/// # Errors
///
/// Returns an error when the host is empty or the composed URL is invalid.
pub fn compose_url(host: &str, port: u16, path: &str) -> AppResult<String> {
    let host = host.trim();
    if host.is_empty() {
        return Err(AppError::validation(ValidationError::HostEmpty));
    }
    let host = if host.contains(':') && !host.starts_with('[') {
        format!("[{}]", host)
    } else {
        host.to_owned()
    };
    let separator = if path.starts_with('/') { "" } else { "/" };
    let url = format!("http://{}:{}{}{}", host, port, separator, path);

    url::Url::parse(&url).map_err(|err| {
        AppError::http(HttpError::InvalidUrl {
            url: url.clone(),
            source: err,
        })
    })?;
    Ok(url)
}
