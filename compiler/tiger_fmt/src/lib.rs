//! Tiger Fmt - Source renderer for resolved expression trees.
//!
//! Turns a tree back into parseable surface syntax. Output is deterministic:
//! binary operators are always parenthesized, blocks are laid out one
//! construct per line with a fixed indentation unit, and nothing depends on
//! line width.
//!
//! In verbose mode the renderer adds resolver diagnostics as `/* ... */`
//! comments (declaration sites, scope-depth differences, escape flags,
//! lowered function names). The comments are purely additive: removing them
//! yields the non-verbose output byte for byte.
//!
//! # Modules
//!
//! - [`context`]: configuration and the indentation engine
//! - [`escape`]: string literal escaping
//! - [`errors`]: render errors

pub mod context;
pub mod errors;
pub mod escape;
mod renderer;

pub use context::{RenderConfig, RenderContext, DEFAULT_INDENT_SIZE};
pub use errors::{RenderError, RenderResult};
pub use escape::escape_string;
pub use renderer::{render, render_to_string, Renderer};
