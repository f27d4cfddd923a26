//! Blocking HTTP GET over libcurl, collecting the whole body.

use std::time::Duration;

use crate::error::ProviderError;

/// Transport settings for API requests.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

/// Performs a GET and returns the response body.
///
/// Follows redirects. Runs in the current thread; call from `spawn_blocking`
/// if used from async code.
pub(super) fn get(url: &str, opts: &HttpOptions) -> Result<Vec<u8>, ProviderError> {
    let transport = |source| ProviderError::Transport {
        url: url.to_string(),
        source,
    };
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.get(true).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.max_redirections(5).map_err(transport)?;
    easy.useragent(&opts.user_agent).map_err(transport)?;
    easy.accept_encoding("").map_err(transport)?; // any encoding curl supports
    easy.connect_timeout(opts.connect_timeout).map_err(transport)?;
    easy.timeout(opts.timeout).map_err(transport)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let status = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&status) {
        return Err(ProviderError::Http {
            url: url.to_string(),
            status,
        });
    }

    tracing::trace!(url, status, bytes = body.len(), "GET complete");
    Ok(body)
}
