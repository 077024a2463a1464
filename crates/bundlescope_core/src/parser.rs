use anyhow::{Result, anyhow};
use log::{debug, trace, warn};
use oxc_allocator::Allocator;
use oxc_ast::Comment;
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use std::path::Path;

use crate::types::{CommentKind, CommentToken};

/// Parses `source` and returns every comment in source order.
///
/// Recoverable syntax errors are logged and the comments collected so far are
/// still returned. An unrecoverable parse is an error.
pub fn collect_comments(source: &str, source_type: SourceType) -> Result<Vec<CommentToken<'_>>> {
    let allocator = Allocator::default();
    let ParserReturn { program, errors, panicked, .. } =
        OxcParser::new(&allocator, source, source_type).parse();

    if panicked {
        let message = errors
            .first()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unrecoverable syntax error".to_string());
        return Err(anyhow!(message));
    }
    for e in &errors {
        warn!("Syntax error while scanning bundle: {}", e);
    }

    let comments: Vec<CommentToken<'_>> =
        program.comments.iter().map(|c| comment_token(source, c)).collect();

    debug!("Collected {} comments from {} bytes of source", comments.len(), source.len());
    Ok(comments)
}

fn comment_token<'s>(source: &'s str, comment: &Comment) -> CommentToken<'s> {
    let (start, end) = (comment.span.start, comment.span.end);
    // Both openers are two bytes; only block comments carry a closing `*/`
    let (kind, value_end) =
        if comment.is_line() { (CommentKind::Line, end) } else { (CommentKind::Block, end - 2) };
    let value = &source[start as usize + 2..value_end as usize];
    trace!("Comment {:?} at {}..{}: {:?}", kind, start, end, value);
    CommentToken { kind, value, start, end }
}

/// Bundles are classic scripts unless the extension says otherwise.
pub fn source_type_for(path: &Path) -> SourceType {
    let ext = path.extension().and_then(|e| e.to_str());

    if matches!(ext, Some("mjs") | Some("mts")) {
        SourceType::default().with_module(true)
    } else {
        SourceType::default().with_script(true)
    }
}
