//! Reads the flat posts file into a [`PostStore`].
//!
//! The file is a sequence of sections separated by `---` lines. Inside a
//! section, `key: value` directive lines set structured fields and every other
//! line is body text:
//!
//! ```text
//! title: Hello
//! date: 2020-01-01
//! user: U1
//! tags: rust, blog
//! published: true
//! Body text goes here.
//! ---
//! title: Next post
//! ```

use regex::Regex;
use std::path::Path;
use tracing::{debug, error, info};

use crate::{post::PostRecord, sql::insert_statement, store::PostStore, QuillResult};

const DELIMITER: &str = "---";

/// Everything a load produces: the posts plus the generated insert log.
#[derive(Debug, Default)]
pub struct LoadedPosts {
    pub store: PostStore,
    /// One `INSERT` statement per finalized record, newline separated.
    /// Write-only: nothing reads it back.
    pub sql: String,
}

/// Single forward pass over the lines of a posts document.
struct PostParser {
    directive: Regex,
    current: PostRecord,
    loaded: LoadedPosts,
}

impl PostParser {
    fn new() -> QuillResult<Self> {
        Ok(Self {
            directive: Regex::new(r"^(?<key>title|date|user|tags|published):(?<val>.*)$")?,
            current: PostRecord::new(),
            loaded: LoadedPosts::default(),
        })
    }

    fn feed(&mut self, line: &str) -> QuillResult<()> {
        let line = line.trim();
        if line.starts_with(DELIMITER) {
            return self.finalize();
        }

        if let Some(matches) = self.directive.captures(line) {
            let val = matches.name("val").map_or("", |val| val.as_str()).trim();
            match matches.name("key").map_or("", |key| key.as_str()) {
                "title" => self.current.set_title(val.into()),
                "date" => self.current.set_date(val.into()),
                "user" => self.current.set_user_id(val.into()),
                "tags" => self
                    .current
                    .set_tags(val.split(',').map(|tag| tag.trim().to_string()).collect()),
                "published" => self.current.set_published(val == "true"),
                _ => self.current.push_body(line),
            }
            return Ok(());
        }

        if line.is_empty() {
            self.current.push_body("\n");
        } else {
            self.current.push_body(line);
        }
        Ok(())
    }

    /// Seal the accumulator into the store and start a fresh record.
    fn finalize(&mut self) -> QuillResult<()> {
        let mut post = std::mem::take(&mut self.current);
        post.assign_id(self.loaded.store.next_id());
        debug!(id = post.id(), title = ?post.title(), "finalized post");

        self.loaded.sql.push_str(&insert_statement(&post));
        self.loaded.sql.push('\n');
        self.loaded.store.insert(post)
    }

    fn finish(mut self) -> QuillResult<LoadedPosts> {
        self.finalize()?;
        Ok(self.loaded)
    }
}

/// Parse the full text of a posts document.
///
/// The record still accumulating at end of input is always stored, so the
/// input does not need to end with a delimiter and empty input yields one
/// empty post `P1`. Unrecognised lines are body text; nothing is rejected.
pub fn parse_posts(text: &str) -> QuillResult<LoadedPosts> {
    let mut parser = PostParser::new()?;
    for line in text.lines() {
        parser.feed(line)?;
    }
    parser.finish()
}

/// Read and parse the posts file at `path`, propagating any failure.
pub fn try_load_posts(path: &Path) -> QuillResult<LoadedPosts> {
    let buf = std::fs::read_to_string(path)?;
    let loaded = parse_posts(&buf)?;
    info!(
        path = %path.display(),
        posts = loaded.store.len(),
        "loaded posts"
    );
    Ok(loaded)
}

/// Read and parse the posts file at `path`.
///
/// A file that cannot be read is logged and yields an empty result instead of
/// an error.
pub fn load_posts(path: &Path) -> LoadedPosts {
    match try_load_posts(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!(path = %path.display(), "unable to read posts: {e:#}");
            LoadedPosts::default()
        }
    }
}

/// The posts of [`load_posts`] without the insert log.
pub fn read_posts(path: &Path) -> PostStore {
    load_posts(path).store
}
