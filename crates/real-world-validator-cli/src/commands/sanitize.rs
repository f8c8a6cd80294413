use anyhow::Result;
use real_world_validator::{escape_html_str, sanitize_str, ValidatorConfig};

use super::read_input;

pub fn run(text: &str, html: bool, config: &ValidatorConfig) -> String {
    if html {
        escape_html_str(text)
    } else {
        sanitize_str(text, &config.sanitize)
    }
}

pub fn execute(text: Option<String>, html: bool, config: &ValidatorConfig) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_input(None)?,
    };
    println!("{}", run(&text, html, config));
    Ok(())
}
