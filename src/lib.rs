mod block;
mod config;
mod markdown;
mod parser;

pub use block::Block;
pub use config::{CodeConfig, Config, ImageConfig};
pub use parser::ParseError;

/// Parse rst text into a vector of blocks.
pub fn parse(rst: &str) -> Result<Vec<Block>, ParseError> {
    parser::parse(rst)
}

/// Convert rst to Markdown using default config.
pub fn rst_to_markdown(rst: &str) -> Result<String, ParseError> {
    rst_to_markdown_with_config(rst, &Config::default())
}

/// Convert rst to Markdown with custom config.
pub fn rst_to_markdown_with_config(rst: &str, config: &Config) -> Result<String, ParseError> {
    let blocks = parse(rst)?;
    Ok(markdown::blocks_to_markdown(&blocks, config))
}
