use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use crate::{
    template::Template, tokenizer::comment::COMMENT_DELIMITER, tokenizer::token::TokenKind,
    Error, InternalResult,
};

/// Name of the template built into [`Config::default`].
pub const DEFAULT_TEMPLATE: &str = "mov64";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default = "default_templates")]
    pub templates: BTreeMap<String, Template>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default = "default_comment_delimiter")]
    pub comment_delimiter: char,

    /// Lowercase the whole line, quoted text included, before scanning.
    #[serde(default = "default_true")]
    pub fold_case: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            comment_delimiter: default_comment_delimiter(),
            fold_case: default_true(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            templates: default_templates(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        from_file(path)
    }

    pub fn template(&self, name: &str) -> InternalResult<&Template> {
        self.templates
            .get(name)
            .ok_or_else(|| Error::config(format!("Unknown template: {}", name)))
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_comment_delimiter() -> char {
    COMMENT_DELIMITER
}

fn default_true() -> bool {
    true
}

fn default_templates() -> BTreeMap<String, Template> {
    let mut templates = BTreeMap::new();
    templates.insert(
        DEFAULT_TEMPLATE.to_string(),
        Template::new()
            .expect(TokenKind::Identifier, "Expected an identifier")
            .expect(TokenKind::Register, "Expected a destination register")
            .expect(TokenKind::Register, "Expected a source register"),
    );
    templates
}
