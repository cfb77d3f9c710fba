/// Block-level elements parsed from the rst dialect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A line with no recognized directive, kept verbatim
    Text(String),
    CodeBlock {
        /// Set when the directive body opened with a `:linenos:` marker
        line_numbers: bool,
        /// Raw body lines, trailing newlines included; de-indented at emission
        lines: Vec<String>,
    },
    Image {
        /// Final path segment of the referenced image
        file: String,
    },
}
