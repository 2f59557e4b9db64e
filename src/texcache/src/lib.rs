//! # texcache
//!
//! Generates `textures.cache` files for Live2D model directories.
//!
//! Every `index.json` under a root directory is read, its texture list is
//! extracted (standard `textures` array or Cubism 3.0+ `FileReferences.Textures`),
//! and the list is written as a pretty-printed JSON array next to the
//! descriptor.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), texcache::Error> {
//! let summary = texcache::generate_caches(Path::new("models"), |outcome| {
//!     println!("{}", outcome.descriptor.display());
//! })?;
//! println!("{} written, {} skipped", summary.succeeded, summary.skipped);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod generate;
pub mod preview;

// Re-export commonly used items
#[doc(inline)]
pub use cache::{cache_path_for, read_cache, render_cache, write_cache, CACHE_FILE_NAME, DESCRIPTOR_FILE_NAME};
#[doc(inline)]
pub use descriptor::{extract_textures, DescriptorFormat, Extraction, TextureList};
#[doc(inline)]
pub use discovery::find_descriptors;
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use generate::{generate_caches, process_descriptor, FileOutcome, OutcomeStatus, RunSummary};
#[doc(inline)]
pub use preview::{scan, Candidate, PreviewReport};
