use std::time::Duration;

use url::Url;

use crate::error::ConfigLoadError;

/// Normalize a user supplied server address.
///
/// Many users type `localhost:5050`, which the HTTP client rejects, so a
/// missing scheme becomes `http://`. Surrounding whitespace and trailing
/// slashes are dropped so path joining never produces `//`.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let normalized = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    if normalized != raw {
        tracing::warn!(
            original = raw,
            normalized = %normalized,
            "normalized server base URL"
        );
    }

    normalized
}

/// Schemes are case-insensitive, so `HTTPS://` counts.
fn has_http_scheme(value: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        value
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Normalize and validate a server address.
pub fn parse_server_url(raw: &str) -> Result<Url, ConfigLoadError> {
    let normalized = normalize_base_url(raw);
    let url = Url::parse(&normalized).map_err(|source| {
        ConfigLoadError::InvalidUrl {
            value: raw.to_string(),
            source,
        }
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigLoadError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

/// Parse a human readable duration (`"30s"`, `"2m"`, `"1m 30s"`).
pub fn parse_timeout(raw: &str) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(raw.trim()).map_err(|source| {
        ConfigLoadError::InvalidTimeout {
            value: raw.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_scheme_and_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("localhost:5050/"),
            "http://localhost:5050"
        );
        assert_eq!(
            normalize_base_url("  https://books.example.org//  "),
            "https://books.example.org"
        );
        assert_eq!(
            normalize_base_url("http://10.0.0.2:5050"),
            "http://10.0.0.2:5050"
        );
    }

    #[test]
    fn uppercase_scheme_is_kept() {
        assert_eq!(
            normalize_base_url("HTTPS://books.example.org/"),
            "HTTPS://books.example.org"
        );
        let url = parse_server_url("Http://Books.Example.org:5050").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("books.example.org"));
        assert_eq!(url.port(), Some(5050));
    }

    #[test]
    fn parses_human_durations() {
        assert_eq!(parse_timeout("45s").unwrap(), Duration::from_secs(45));
        assert_eq!(parse_timeout("1m 30s").unwrap(), Duration::from_secs(90));
        assert!(matches!(
            parse_timeout("soon"),
            Err(ConfigLoadError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn rejects_garbage_urls() {
        assert!(parse_server_url("http://[::1").is_err());
        assert!(parse_server_url("localhost:5050").is_ok());
    }
}
