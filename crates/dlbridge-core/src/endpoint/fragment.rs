//! aria2 option overrides carried in the endpoint fragment (`#dir=/tmp&continue`).

use std::collections::BTreeMap;

/// Value given to a fragment key that has no `=value` part.
pub const ENABLED: &str = "enabled";

/// Parses `a=1&b` style fragments. Keys and values are form-urlencoded;
/// empty pairs are skipped and a later duplicate key wins.
pub fn parse_fragment_options(fragment: &str) -> BTreeMap<String, String> {
    let mut options = BTreeMap::new();
    for pair in fragment.split('&').filter(|p| !p.is_empty()) {
        let Some((key, value)) = url::form_urlencoded::parse(pair.as_bytes()).next() else {
            continue;
        };
        let value = if pair.contains('=') {
            value.into_owned()
        } else {
            ENABLED.to_string()
        };
        options.insert(key.into_owned(), value);
    }
    options
}
