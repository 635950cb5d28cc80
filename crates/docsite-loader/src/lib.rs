//! Fragment acquisition for docsite-core
//!
//! The core resolver never touches the filesystem. This crate supplies the
//! fragments it merges:
//!
//! - **Files**: TOML, YAML and JSON fragments, format chosen by extension
//! - **Overrides**: `path=value` assignments collected into one layer
//! - **Ordering**: [`FragmentStack`] assigns priorities by declaration order
//!
//! # Example
//!
//! ```no_run
//! use docsite_core::Resolver;
//! use docsite_loader::FragmentStack;
//!
//! let mut stack = FragmentStack::with_theme_defaults();
//! stack.push_files(["docs/app.config.toml", "docs/nuxt.config.toml"])?;
//! stack.push_assignments(["colorMode.preference=dark"])?;
//!
//! let config = stack.resolve(&Resolver::new())?;
//! println!("{}", config.get_str("title")?);
//! # Ok::<(), docsite_loader::Error>(())
//! ```

pub mod assignment;
pub mod error;
pub mod format;
pub mod stack;

pub use assignment::{OVERRIDES_FRAGMENT, assignments_to_tree, parse_assignment};
pub use error::{Error, Result};
pub use format::FragmentFormat;
pub use stack::{FragmentStack, load_fragment_file};
