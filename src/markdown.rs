use crate::block::Block;
use crate::config::Config;

const FENCE_OPEN: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~";
const FENCE_CLOSE: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";
const NUMBER_LINES_ATTR: &str = " .numberLines";

/// One level of code-block indentation in the source dialect
const INDENT_UNIT: &str = "        ";

/// Convert blocks to Markdown
pub fn blocks_to_markdown(blocks: &[Block], config: &Config) -> String {
    let mut out = String::new();

    for block in blocks {
        emit_block(block, config, &mut out);
    }

    out
}

fn emit_block(block: &Block, config: &Config, out: &mut String) {
    match block {
        Block::Text(line) => {
            out.push_str(line);
        }
        Block::CodeBlock {
            line_numbers,
            lines,
        } => {
            out.push('\n');
            out.push_str(FENCE_OPEN);
            out.push_str("{.");
            out.push_str(&config.code.language);
            if *line_numbers {
                out.push_str(NUMBER_LINES_ATTR);
            }
            out.push('}');
            for line in lines {
                // Lines indented less than one unit are kept as-is
                out.push_str(line.strip_prefix(INDENT_UNIT).unwrap_or(line));
            }
            out.push_str(FENCE_CLOSE);
            out.push('\n');
        }
        Block::Image { file } => {
            out.push_str("![](");
            out.push_str(&config.images.dir);
            out.push('/');
            out.push_str(file);
            out.push(')');
        }
    }
}
