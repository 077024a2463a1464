use log::{debug, trace};

use bundlescope_core::{CommentToken, FUNCTION_KEYWORD, MARKER_FOLLOWERS};

use crate::error::AnalyzeError;

/// Keeps the comments that carry a module id.
///
/// A marker is a block comment whose trimmed content is a plain integer and
/// which is followed, after one separator character, by `,`, `[`, a digit or
/// the `function` keyword.
pub fn select_markers<'s>(source: &str, comments: &[CommentToken<'s>]) -> Vec<CommentToken<'s>> {
    let markers: Vec<CommentToken<'s>> = comments
        .iter()
        .filter(|c| c.is_block() && is_module_id(c.value) && followed_by_module(source, c.end))
        .copied()
        .collect();
    debug!("{} of {} comments are module ID markers", markers.len(), comments.len());
    markers
}

/// Like [`select_markers`] but an empty selection is an error.
pub fn find_markers<'s>(
    source: &str,
    comments: &[CommentToken<'s>],
) -> Result<Vec<CommentToken<'s>>, AnalyzeError> {
    let markers = select_markers(source, comments);
    if markers.is_empty() {
        return Err(AnalyzeError::NoMarkersFound);
    }
    Ok(markers)
}

fn is_module_id(value: &str) -> bool {
    let digits = value.trim();
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn followed_by_module(source: &str, end: u32) -> bool {
    let bytes = source.as_bytes();
    let at = end as usize + 1;
    let Some(&next) = bytes.get(at) else {
        return false;
    };

    if MARKER_FOLLOWERS.contains(&next) || next.is_ascii_digit() {
        return true;
    }
    let keyword = bytes.get(at..at + FUNCTION_KEYWORD.len()) == Some(FUNCTION_KEYWORD);
    if !keyword {
        trace!("Numeric comment ending at {} is not followed by a module", end);
    }
    keyword
}
