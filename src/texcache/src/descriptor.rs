//! Texture list extraction from model descriptors.
//!
//! Two descriptor shapes are recognized:
//! - Standard: `{"textures": [...]}`
//! - Live2D Cubism 3.0+: `{"FileReferences": {"Textures": [...]}}`
//!
//! The standard shape is checked first, so a document carrying both yields the
//! top-level list.

use serde_json::Value;
use std::fmt;

/// Ordered texture references, copied verbatim from the descriptor
pub type TextureList = Vec<Value>;

const STANDARD_KEY: &str = "textures";
const FILE_REFERENCES_KEY: &str = "FileReferences";
const CUBISM_TEXTURES_KEY: &str = "Textures";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    Standard,
    Cubism3Plus,
    Unrecognized,
}

impl DescriptorFormat {
    /// Stable machine-readable label
    pub fn label(self) -> &'static str {
        match self {
            DescriptorFormat::Standard => "standard",
            DescriptorFormat::Cubism3Plus => "cubism-3-plus",
            DescriptorFormat::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for DescriptorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DescriptorFormat::Standard => "standard",
            DescriptorFormat::Cubism3Plus => "Live2D Cubism 3.0+",
            DescriptorFormat::Unrecognized => "unrecognized",
        };
        f.write_str(name)
    }
}

/// Result of running the extractor over one descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Standard(TextureList),
    Cubism3Plus(TextureList),
    Unrecognized,
}

impl Extraction {
    pub fn format(&self) -> DescriptorFormat {
        match self {
            Extraction::Standard(_) => DescriptorFormat::Standard,
            Extraction::Cubism3Plus(_) => DescriptorFormat::Cubism3Plus,
            Extraction::Unrecognized => DescriptorFormat::Unrecognized,
        }
    }

    pub fn textures(&self) -> Option<&[Value]> {
        match self {
            Extraction::Standard(list) | Extraction::Cubism3Plus(list) => Some(list),
            Extraction::Unrecognized => None,
        }
    }

    pub fn into_textures(self) -> Option<TextureList> {
        match self {
            Extraction::Standard(list) | Extraction::Cubism3Plus(list) => Some(list),
            Extraction::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Extraction::Unrecognized)
    }
}

/// Detect the descriptor shape and pull out its texture list
///
/// A key holding the wrong type does not match its shape; detection falls
/// through to the next rule instead of failing.
pub fn extract_textures(descriptor: &Value) -> Extraction {
    if let Some(list) = descriptor.get(STANDARD_KEY).and_then(Value::as_array) {
        return Extraction::Standard(list.clone());
    }

    if let Some(list) = descriptor
        .get(FILE_REFERENCES_KEY)
        .and_then(Value::as_object)
        .and_then(|refs| refs.get(CUBISM_TEXTURES_KEY))
        .and_then(Value::as_array)
    {
        return Extraction::Cubism3Plus(list.clone());
    }

    Extraction::Unrecognized
}
