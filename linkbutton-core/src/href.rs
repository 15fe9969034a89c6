//! Computed-href rules for parameterized links.

use crate::params::Params;

/// Compute the URL an anchor should carry for `href` plus the merge of
/// `base_params` and `params`, with `params` winning on key collisions.
///
/// When the merged set is empty, `href` is returned byte for byte. Otherwise
/// the encoded pairs are appended behind `?`, or behind `&` when `href`
/// already contains a query string. `href` itself is never parsed, validated,
/// or re-encoded.
#[must_use]
pub fn compute_href(href: &str, base_params: &Params, params: &Params) -> String {
    let merged = base_params.merged_with(params);
    if merged.is_empty() {
        return href.to_owned();
    }
    let separator = if href.contains('?') { '&' } else { '?' };
    format!("{href}{separator}{}", merged.to_query())
}
