/// Tag of the program root node.
pub const ROOT_TAG: &str = ">";
/// Tag of the start/end boundary markers wrapped around the program.
pub const REGEX_TAG: &str = "regex";
/// Tag of structural punctuation such as `(` and `)`.
pub const CHAR_TAG: &str = "char";
/// Tag of an integer literal.
pub const NUMBER_TAG: &str = "expr|number|regex";
/// Tag of an operator glyph such as `+`.
pub const SYMBOL_CHAR_TAG: &str = "expr|symbol|char";
/// Tag of a word symbol such as `foo`.
pub const SYMBOL_WORD_TAG: &str = "expr|symbol|regex";
/// Tag of a parenthesized s-expression.
pub const SEXPR_TAG: &str = "expr|sexpr|>";

/// A node of the generic, tag-annotated syntax tree.
///
/// The tree is deliberately untyped: every node carries the name of the
/// grammar rule that matched it (`tag`), the literal text it covers when it is
/// a leaf (`content`), and its children in source order. Containers also keep
/// their punctuation and boundary markers as children; consumers decide which
/// children are significant.
///
/// Tags are `|`-joined rule paths, e.g. `expr|number|regex` for a number
/// literal, so consumers classify nodes by substring rather than equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// Which grammar rule matched.
    pub tag:      String,
    /// Literal text for leaves, empty for containers.
    pub content:  String,
    /// Children in source order.
    pub children: Vec<Self>,
}

/// How a syntax node should be converted into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A leaf holding an integer literal.
    Number,
    /// A leaf holding an operator or other atom.
    Symbol,
    /// The program root or an s-expression.
    Container,
    /// Anything else; never produced by this crate's parser.
    Unknown,
}

impl SyntaxNode {
    /// Creates a leaf node.
    pub fn leaf(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self { tag:      tag.into(),
               content:  content.into(),
               children: Vec::new(), }
    }

    /// Creates an internal node that takes ownership of `children`.
    pub fn branch(tag: impl Into<String>, children: Vec<Self>) -> Self {
        Self { tag: tag.into(),
               content: String::new(),
               children }
    }

    /// Classifies the node purely from its tag.
    ///
    /// # Example
    /// ```
    /// use rlisp::ast::{NodeKind, SyntaxNode};
    ///
    /// assert_eq!(SyntaxNode::leaf("expr|number|regex", "4").kind(), NodeKind::Number);
    /// assert_eq!(SyntaxNode::leaf("expr|symbol|char", "+").kind(), NodeKind::Symbol);
    /// assert_eq!(SyntaxNode::branch(">", vec![]).kind(), NodeKind::Container);
    /// ```
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        if self.tag.contains("number") {
            NodeKind::Number
        } else if self.tag.contains("symbol") {
            NodeKind::Symbol
        } else if self.tag == ROOT_TAG || self.tag.contains("sexpr") {
            NodeKind::Container
        } else {
            NodeKind::Unknown
        }
    }

    /// Returns `true` for punctuation and boundary markers, which carry no
    /// value of their own.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        self.content == "(" || self.content == ")" || self.tag == REGEX_TAG
    }

    /// Iterates over the children that contribute to the value, in order.
    pub fn significant_children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter(|child| !child.is_structural())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_and_boundaries_are_skipped() {
        let sexpr = SyntaxNode::branch(SEXPR_TAG,
                                       vec![SyntaxNode::leaf(CHAR_TAG, "("),
                                            SyntaxNode::leaf(SYMBOL_CHAR_TAG, "*"),
                                            SyntaxNode::leaf(NUMBER_TAG, "2"),
                                            SyntaxNode::leaf(CHAR_TAG, ")")]);
        let root = SyntaxNode::branch(ROOT_TAG,
                                      vec![SyntaxNode::leaf(REGEX_TAG, ""),
                                           sexpr.clone(),
                                           SyntaxNode::leaf(REGEX_TAG, "")]);

        let top: Vec<_> = root.significant_children().collect();
        assert_eq!(top, vec![&sexpr]);

        let inner: Vec<_> = sexpr.significant_children().map(|n| n.content.as_str()).collect();
        assert_eq!(inner, vec!["*", "2"]);
    }

    #[test]
    fn number_tag_wins_over_regex_suffix() {
        let node = SyntaxNode::leaf(NUMBER_TAG, "12");
        assert_eq!(node.kind(), NodeKind::Number);
        assert!(!node.is_structural());
    }

    #[test]
    fn unknown_tags_are_reported() {
        assert_eq!(SyntaxNode::leaf("string", "x").kind(), NodeKind::Unknown);
    }
}
