use crate::block::Block;

const SOURCECODE_MARKER: &str = ".. sourcecode:: python3";
const INDEX_MARKER: &str = ".. index::";
const IMAGE_MARKER: &str = ".. image::";
const LINENOS_MARKER: &str = ":linenos:";

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("input ended inside a `{directive}` block starting at line {line}")]
    TruncatedInput {
        directive: &'static str,
        line: usize,
    },
}

/// Line classes recognized by substring match, tested in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    SourceCode,
    IndexBlock,
    Image,
    PlainLine,
}

fn classify(line: &str) -> Directive {
    if line.contains(SOURCECODE_MARKER) {
        Directive::SourceCode
    } else if line.contains(INDEX_MARKER) {
        Directive::IndexBlock
    } else if line.contains(IMAGE_MARKER) {
        Directive::Image
    } else {
        Directive::PlainLine
    }
}

/// Forward-only cursor over the input lines, trailing newlines kept
struct Lines<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.split_inclusive('\n').collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek();
        if line.is_some() {
            self.pos += 1;
        }
        line
    }

    /// 1-based number of the line currently at the front
    fn line_number(&self) -> usize {
        self.pos + 1
    }
}

/// Parse rst text into a list of blocks
pub fn parse(rst: &str) -> Result<Vec<Block>, ParseError> {
    let mut lines = Lines::new(rst);
    let mut blocks = Vec::new();

    while let Some(line) = lines.peek() {
        match classify(line) {
            Directive::SourceCode => blocks.push(parse_code(&mut lines)?),
            Directive::IndexBlock => skip_index(&mut lines)?,
            Directive::Image => {
                // Classification guarantees a line is present
                if let Some(line) = lines.advance() {
                    blocks.push(parse_image(line));
                }
            }
            Directive::PlainLine => {
                if let Some(line) = lines.advance() {
                    blocks.push(Block::Text(line.to_string()));
                }
            }
        }
    }

    Ok(blocks)
}

fn is_code_body(line: &str) -> bool {
    line.starts_with(' ') || line.trim().is_empty()
}

/// Consume a sourcecode directive and its indented body.
///
/// The body runs until the first non-blank line without leading
/// whitespace; that line is left for the next classification round.
fn parse_code(lines: &mut Lines) -> Result<Block, ParseError> {
    let start = lines.line_number();
    let truncated = || ParseError::TruncatedInput {
        directive: "sourcecode",
        line: start,
    };
    lines.advance();

    let mut line_numbers = false;
    match lines.peek() {
        Some(line) if line.contains(LINENOS_MARKER) => {
            lines.advance();
            line_numbers = true;
        }
        Some(_) => {}
        None => return Err(truncated()),
    }

    let mut body = Vec::new();
    loop {
        let line = lines.peek().ok_or_else(truncated)?;
        if !is_code_body(line) {
            break;
        }
        body.push(line.to_string());
        lines.advance();
    }

    Ok(Block::CodeBlock {
        line_numbers,
        lines: body,
    })
}

/// Consume an index directive and its indented body, emitting nothing
fn skip_index(lines: &mut Lines) -> Result<(), ParseError> {
    let start = lines.line_number();
    lines.advance();

    loop {
        match lines.peek() {
            Some(line) if line.starts_with(' ') => {
                lines.advance();
            }
            Some(_) => return Ok(()),
            None => {
                return Err(ParseError::TruncatedInput {
                    directive: "index",
                    line: start,
                });
            }
        }
    }
}

fn parse_image(line: &str) -> Block {
    let file = line.rsplit('/').next().unwrap_or(line).trim();
    Block::Image {
        file: file.to_string(),
    }
}
