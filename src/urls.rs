//! Image URL resolution against the host configuration.

use cardstock_hostconfig::HostConfig;
use url::Url;

/// Resolves an image reference into a URL.
///
/// Absolute references resolve on their own. Relative references are joined
/// against the host configuration's image base URL when one is set; without
/// a base, or when joining fails, the reference is unresolvable.
pub fn resolve_image_url(host_config: &HostConfig, reference: &str) -> Option<Url> {
    if let Ok(url) = Url::parse(reference) {
        return Some(url);
    }
    let base = host_config.image_base_url.as_deref()?;
    match Url::parse(base).and_then(|base| base.join(reference)) {
        Ok(url) => Some(url),
        Err(err) => {
            log::debug!("could not resolve image reference {reference:?}: {err}");
            None
        }
    }
}
