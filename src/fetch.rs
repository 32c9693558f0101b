//! Package download from a NuGet-style registry.

use thiserror::Error;
use url::Url;

/// Errors from the download step.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured registry URL cannot carry path segments
    /// (e.g. `data:` or `mailto:` URLs).
    #[error("registry URL cannot be a download base: {url}")]
    BadRegistry { url: Url },

    /// The request never produced a response (DNS, connect, TLS).
    #[error("failed to reach registry at {url}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// The registry answered with something other than 200.
    #[error("registry returned HTTP {status} for {url}")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },

    /// The response started but the body could not be read in full.
    #[error("failed to read response body from {url}")]
    Body {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}

/// Build the download URL: `<registry>/<package>/<version>`.
fn package_url(registry: &Url, package: &str, version: &str) -> Result<Url, FetchError> {
    let mut url = registry.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::BadRegistry {
            url: registry.clone(),
        })?
        .pop_if_empty()
        .push(package)
        .push(version);
    Ok(url)
}

/// Download a package archive, returning the raw response body.
///
/// Issues a single blocking GET; redirects are followed (the nuget.org v2
/// endpoint redirects to its CDN). Any status other than 200 is an error
/// and nothing is retried.
pub fn fetch_package(registry: &Url, package: &str, version: &str) -> Result<Vec<u8>, FetchError> {
    let url = package_url(registry, package, version)?;

    tracing::debug!("GET {url}");

    let response = reqwest::blocking::get(url.clone()).map_err(|source| FetchError::Transport {
        url: url.clone(),
        source,
    })?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        tracing::error!("failed to download {package} {version}: HTTP {status}");
        return Err(FetchError::Status { url, status });
    }

    let body = response.bytes().map_err(|source| FetchError::Body {
        url: url.clone(),
        source,
    })?;

    tracing::info!("downloaded {package} {version} ({} bytes)", body.len());

    Ok(body.to_vec())
}
