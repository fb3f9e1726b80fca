/// Default limit on how deeply s-expressions may nest.
///
/// Parsing, building, evaluating, and dropping a tree all recurse once per
/// nesting level, so the limit bounds call-stack usage for every phase.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Highest nesting limit that can be configured.
///
/// Deeper limits would let accepted input exhaust the main thread's stack.
pub const MAX_DEPTH_CEILING: usize = 1024;

/// Settings shared by the parser, the evaluator, and the driver.
///
/// `Config` is created once (usually from command-line arguments) and passed
/// by reference into every evaluation. Nothing in it changes while an input
/// is being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Deepest permitted s-expression nesting. The program root counts as
    /// level zero, so `(+ 1 2)` has depth one.
    pub max_depth: usize,
    /// Whether the pipeline should also produce the syntax tree and value
    /// tree debug renderings.
    pub show_tree: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH,
               show_tree: false, }
    }
}

impl Config {
    /// Returns a copy of this configuration with a different nesting limit,
    /// clamped to [`MAX_DEPTH_CEILING`].
    ///
    /// # Example
    /// ```
    /// use rlisp::config::{Config, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
    ///
    /// let config = Config::default().with_max_depth(8);
    /// assert_eq!(config.max_depth, 8);
    /// assert_eq!(Config::default().max_depth, DEFAULT_MAX_DEPTH);
    ///
    /// let config = Config::default().with_max_depth(1_000_000);
    /// assert_eq!(config.max_depth, MAX_DEPTH_CEILING);
    /// ```
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = if max_depth > MAX_DEPTH_CEILING {
            MAX_DEPTH_CEILING
        } else {
            max_depth
        };
        self
    }

    /// Returns a copy of this configuration with tree rendering switched on or
    /// off.
    #[must_use]
    pub const fn with_show_tree(mut self, show_tree: bool) -> Self {
        self.show_tree = show_tree;
        self
    }
}
