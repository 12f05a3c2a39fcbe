//! Anti-automation challenge detection.
//!
//! Both checks are read-only; neither attempts remediation.

use headless_chrome::Tab;

/// Phrase Indeed's bot-verification interstitial shows in the page body.
pub const VERIFICATION_PHRASE: &str = "verify you are not a bot";

const CHALLENGE_MARKERS_XPATH: &str =
    "//*[contains(text(), 'CAPTCHA') or contains(text(), 'verify you are not a bot')]";

/// True when the live document contains a challenge marker.
///
/// Lookup failures (document not ready, protocol errors) count as "no
/// challenge" and are never propagated.
pub fn rendered_challenge(tab: &Tab) -> bool {
    tab.find_elements_by_xpath(CHALLENGE_MARKERS_XPATH)
        .map(|elements| !elements.is_empty())
        .unwrap_or(false)
}

/// True when a raw response body contains the verification phrase,
/// case-insensitively.
pub fn body_has_challenge(body: &str) -> bool {
    body.to_lowercase().contains(VERIFICATION_PHRASE)
}
