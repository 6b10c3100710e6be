//! Welcome to the documentation of quill. The crate reads blog posts out of a
//! flat text file, keeps them in an ordered [`store::PostStore`] and offers the
//! bits a post list or editor needs on top: sorting, previews, tag selection
//! and the fixed user directory.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let loaded = quill_core::loader::load_posts(Path::new("posts.txt"));
//! for post in loaded.store.iter() {
//!     println!("{}", post);
//! }
//! ```
mod error;
pub mod config;
pub mod draft;
pub mod listing;
pub mod loader;
pub mod post;
pub mod sql;
pub mod state;
pub mod store;
pub mod tags;
pub mod users;

pub use error::{QuillError, QuillResult};

pub mod constant {
    pub const CONFIG_DIR: &str = ".quill";
    pub const CONFIG_FILE: &str = "quill.toml";
    pub const CONFIG_ENV: &str = "QUILLCONF";
    pub const DEFAULT_POSTS_FILE: &str = ".example-posts.txt";
    pub const PREVIEW_LEN: usize = 100;
}
