use crate::constants::{LOADER_SEPARATOR, NODE_MODULES};

/// Shortens a manifest identifier for display.
///
/// Drops the loader chain (everything up to the last `!`), replaces the first
/// occurrence of `cwd` with `.`, and collapses everything up to the last
/// `node_modules` segment into `~`. Applying it twice gives the same result.
pub fn normalize_identifier(raw: &str, cwd: &str) -> String {
    let resource = match raw.rfind(LOADER_SEPARATOR) {
        Some(idx) => &raw[idx + LOADER_SEPARATOR.len_utf8()..],
        None => raw,
    };

    let relative =
        if cwd.is_empty() { resource.to_string() } else { resource.replacen(cwd, ".", 1) };

    match relative.rfind(NODE_MODULES) {
        Some(idx) => format!("~{}", &relative[idx + NODE_MODULES.len()..]),
        None => relative,
    }
}
