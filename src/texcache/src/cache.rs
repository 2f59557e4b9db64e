//! Reading and writing `textures.cache` files.

use crate::descriptor::TextureList;
use crate::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the model descriptor the walk looks for
pub const DESCRIPTOR_FILE_NAME: &str = "index.json";

/// Name of the generated cache, written next to its descriptor
pub const CACHE_FILE_NAME: &str = "textures.cache";

const INDENT: &[u8] = b"    ";

/// Path of the cache file that belongs to a descriptor
pub fn cache_path_for(descriptor: &Path) -> PathBuf {
    descriptor
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(CACHE_FILE_NAME)
}

/// Render a texture list the way it is stored on disk
///
/// Four-space indent, no trailing newline. Non-ASCII text is written as-is.
pub fn render_cache(textures: &[Value]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    textures.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write (or overwrite) the cache for a descriptor, returning the cache path
pub fn write_cache(descriptor: &Path, textures: &[Value]) -> Result<PathBuf> {
    let cache_path = cache_path_for(descriptor);
    let contents = render_cache(textures)?;
    fs::write(&cache_path, contents)?;
    Ok(cache_path)
}

/// Read a cache file back into a texture list
pub fn read_cache(path: &Path) -> Result<TextureList> {
    let data = fs::read_to_string(path)?;
    let textures: TextureList = serde_json::from_str(&data)?;
    Ok(textures)
}
