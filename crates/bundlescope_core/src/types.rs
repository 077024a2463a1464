use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Block,
    Line,
}

/// A comment found in the bundle source.
///
/// `value` is the text between the delimiters; `start` and `end` are byte
/// offsets of the whole comment, delimiters included (`end` exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentToken<'s> {
    pub kind: CommentKind,
    pub value: &'s str,
    pub start: u32,
    pub end: u32,
}

impl CommentToken<'_> {
    pub fn is_block(&self) -> bool {
        self.kind == CommentKind::Block
    }
}

/// One entry of the `modules` array in the stats file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestModule {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    pub identifier: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub modules: Vec<ManifestModule>,
}
