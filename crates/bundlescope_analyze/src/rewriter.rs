use log::debug;

use bundlescope_core::CommentToken;

/// Returns `source` with every marker comment cut out.
///
/// The text around each marker is trimmed before the pieces are joined, so
/// the separators the bundler put around the comments go with them.
pub fn strip_markers(source: &str, markers: &[CommentToken<'_>]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut from = 0usize;

    for m in markers {
        out.push_str(source[from..m.start as usize].trim());
        from = m.end as usize;
    }
    out.push_str(source[from..].trim());

    debug!(
        "Stripped {} markers, bundle shrank from {} to {} bytes",
        markers.len(),
        source.len(),
        out.len()
    );
    out
}
