//! Render Context
//!
//! Configuration and the indentation engine. A [`RenderContext`] is created
//! per render call and holds the only mutable layout state: one nesting
//! level. Independent calls never share a context.
//!
//! # Block Discipline
//!
//! Renderers open a nested block with [`RenderContext::indent_newline`] and
//! close it with [`RenderContext::dedent_newline`] (or a bare
//! [`RenderContext::dedent`] when nothing follows on a new line). Pairing
//! them keeps every closing keyword aligned with the line that opened the
//! block.

/// Spaces per indentation level.
pub const DEFAULT_INDENT_SIZE: usize = 2;

/// Configuration for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Indentation size in spaces.
    /// Defaults to 2.
    pub indent_size: usize,

    /// Whether to add resolver diagnostics as comments.
    /// Defaults to `false`.
    pub verbose: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_size: DEFAULT_INDENT_SIZE,
            verbose: false,
        }
    }
}

impl RenderConfig {
    /// Create a new config with the specified indent size.
    pub fn with_indent_size(indent_size: usize) -> Self {
        Self {
            indent_size,
            ..Default::default()
        }
    }

    /// Create a new verbose config with the default indent size.
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            ..Default::default()
        }
    }
}

/// Rendering context: the output buffer and the current nesting level.
#[derive(Debug, Default)]
pub struct RenderContext {
    buf: String,
    indent_level: usize,
    config: RenderConfig,
}

impl RenderContext {
    /// Create a new render context with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new render context with a custom config.
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            buf: String::new(),
            indent_level: 0,
            config,
        }
    }

    /// Whether resolver diagnostics are rendered.
    #[inline]
    pub fn verbose(&self) -> bool {
        self.config.verbose
    }

    /// Get the current indentation level.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Get the current indentation width in spaces.
    pub fn indent_width(&self) -> usize {
        self.indent_level * self.config.indent_size
    }

    /// Emit a text fragment.
    pub fn emit(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Increment indentation level.
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrement indentation level.
    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Break the line and indent to the current level.
    pub fn newline(&mut self) {
        let width = self.indent_width();
        self.buf.push('\n');
        for _ in 0..width {
            self.buf.push(' ');
        }
    }

    /// Open a nested block: one level deeper, then a new line.
    pub fn indent_newline(&mut self) {
        self.indent();
        self.newline();
    }

    /// Close a nested block: one level shallower, then a new line.
    pub fn dedent_newline(&mut self) {
        self.dedent();
        self.newline();
    }

    /// Get the current output without consuming.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buf
    }
}
