//! Conventions shared between the bundler output and the stats manifest.
//!
//! The bundler wraps every module in a function preceded by a block comment
//! holding its numeric id, e.g. `/* 12 */ function(module, exports) { ... }`,
//! and closes the module array with `}]))`.

/// Separator between loader requests and the resource in a module identifier
pub const LOADER_SEPARATOR: char = '!';

/// Directory segment collapsed to `~` in normalized identifiers
pub const NODE_MODULES: &str = "node_modules";

/// Literal that closes the module array of the bundle wrapper
pub const BUNDLE_TERMINATOR: &str = "}]))";

/// Keyword accepted as the token following a module-ID comment
pub const FUNCTION_KEYWORD: &[u8] = b"function";

/// Single characters accepted as the token following a module-ID comment
/// (digits are accepted separately)
pub const MARKER_FOLLOWERS: &[u8] = b",[";
