//! Address construction for the title-preload endpoint.

use url::Url;

/// Build `<endpoint>?url=<target>`, percent-encoding the target.
///
/// Existing query pairs on `endpoint` are kept.
pub fn preload_address(endpoint: &str, target: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(endpoint)?;
    url.query_pairs_mut().append_pair("url", target);
    Ok(url.into())
}
