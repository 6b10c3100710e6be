mod error;

pub use error::CliError;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use quill_core::{
    config::QuillConfig,
    listing::{
        author_label, sorted_posts, truncate_text, Expansion, SortDirection, SortField, SortState,
    },
    loader::load_posts,
    post::PostRecord,
    state::PostsResponse,
    store::PostStore,
    users::{read_users, user_names_mapping},
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about=None)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    /// Path to config file; defaults to ~/.quill/quill.toml
    pub config: Option<PathBuf>,

    #[arg(short, long, value_name = "FILE")]
    /// Posts file to load; overrides `posts_file` from the config
    pub file: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::SetTrue)]
    /// Select if the output should be json
    pub json: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    /// Log debug output to stderr
    pub verbose: bool,

    #[command(subcommand)]
    pub command: QuillCommand,
}

#[derive(Subcommand, Clone, Debug)]
pub enum QuillCommand {
    /// List all posts with a short preview of their body
    Posts {
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,

        #[arg(short, long, action = ArgAction::SetTrue)]
        /// Sort descending instead of ascending
        desc: bool,

        #[arg(short, long, value_name = "ID")]
        /// Show the full body of this post
        expand: Option<String>,
    },

    /// Show a single post
    Post { id: String },

    /// List the user directory
    Users,

    /// Print the generated INSERT statements
    Sql,

    /// Count posts in the posts file
    Stats,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortArg {
    Likes,
    Date,
}

impl From<SortArg> for SortField {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Likes => SortField::Likes,
            SortArg::Date => SortField::Date,
        }
    }
}

/// Resolve the config for this invocation. `--file` wins over the config file.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<QuillConfig> {
    let path = cli.config.clone().unwrap_or_else(QuillConfig::default_path);
    let mut config = QuillConfig::load(&path)?;
    if let Some(file) = &cli.file {
        config.posts_file = file.clone();
    }
    debug!(posts_file = %config.posts_file.display(), "resolved config");
    Ok(config)
}

/// Run the command and write what it prints to `out`.
pub fn run(cli: &Cli, config: &QuillConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let output = render_command(cli, config)?;
    out.write_all(output.as_bytes()).map_err(CliError::from)?;
    out.flush().map_err(CliError::from)?;
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

/// Everything a command prints, as one string.
pub fn render_command(cli: &Cli, config: &QuillConfig) -> anyhow::Result<String> {
    let mut buf = String::new();
    match &cli.command {
        QuillCommand::Users => {
            let users = read_users();
            if cli.json {
                return Ok(to_json(users)?);
            }
            for user in users {
                buf.push_str(&format!("{:<4}{:<8}{}\n", user.id, user.login, user.name));
            }
        }
        QuillCommand::Posts { sort, desc, expand } => {
            let loaded = load_posts(&config.posts_file);
            let state = match sort {
                Some(field) => {
                    let direction = if *desc {
                        SortDirection::Desc
                    } else {
                        SortDirection::Asc
                    };
                    SortState::new((*field).into(), direction)
                }
                None => SortState::default(),
            };
            let posts = sorted_posts(&loaded.store, state);
            if cli.json {
                let response = PostsResponse {
                    posts,
                    users: read_users(),
                };
                return Ok(to_json(&response)?);
            }

            let mut expansion = Expansion::default();
            if let Some(id) = expand {
                if loaded.store.get(id).is_none() {
                    let msg = format!("Cannot expand {id}: no such post");
                    return Err(CliError::custom_error(msg).into());
                }
                expansion.toggle(id);
            }
            let names = user_names_mapping(&loaded.store);
            buf.push_str(&render_list(&posts, &names, &expansion, config));
        }
        QuillCommand::Post { id } => {
            let loaded = load_posts(&config.posts_file);
            let post = loaded.store.require(id)?;
            if cli.json {
                return Ok(to_json(post)?);
            }
            buf.push_str(&format!("{}\n", post));
        }
        QuillCommand::Sql => {
            buf.push_str(&load_posts(&config.posts_file).sql);
        }
        QuillCommand::Stats => {
            let store: PostStore = load_posts(&config.posts_file).store;
            let metadata = store.metadata();
            if cli.json {
                return Ok(to_json(&metadata)?);
            }
            buf.push_str(&format!("posts: {}\n", metadata.posts_count));
            buf.push_str(&format!("published: {}\n", metadata.published_count));
            buf.push_str(&format!(
                "latest: {}\n",
                metadata.latest_post_id.as_deref().unwrap_or("N/A")
            ));
        }
    }
    Ok(buf)
}

/// One block per post: a header line, then either the full body with tags and
/// publish status or a truncated preview.
pub fn render_list(
    posts: &[&PostRecord],
    names: &BTreeMap<String, String>,
    expansion: &Expansion,
    config: &QuillConfig,
) -> String {
    if posts.is_empty() {
        return String::from("No posts available.\n");
    }

    let mut buf = String::new();
    for post in posts {
        let mut header = format!(
            "[{}] {} | likes: {} | {}",
            post.id(),
            post.title().unwrap_or(""),
            post.likes().unwrap_or(0),
            post.date().unwrap_or("N/A"),
        );
        if let Some(author) = author_label(post, names, config.current_user.as_deref()) {
            header.push_str(&format!(" | {author}"));
        }
        buf.push_str(&header);
        buf.push('\n');

        if expansion.is_expanded(post.id()) {
            buf.push_str(post.body());
            buf.push('\n');
            if !post.tags().is_empty() {
                buf.push_str(&format!("Tags: {}\n", post.tags().join(", ")));
            }
            if let Some(published) = post.published() {
                buf.push_str(&format!("Published: {}\n", if published { "Yes" } else { "No" }));
            }
        } else {
            buf.push_str(&truncate_text(post.body(), config.preview_len));
            buf.push('\n');
        }
        buf.push('\n');
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};

    const POSTS: &str = "title: Hello\ndate: 2020-01-02\nuser: U1\ntags: a, b\npublished: true\n\
        Lorem ipsum dolor sit amet\n---\n\
        title: Second post\nuser: U0\nShort\n";

    fn generate_temp_file() -> PathBuf {
        let mut buffer = [0u16; 4];
        thread_rng().fill(&mut buffer);
        let name = buffer
            .into_iter()
            .map(|val| format!("{:05}", val))
            .collect::<Vec<String>>()
            .join("-");
        std::env::temp_dir().join(format!("quill-cli-{name}.txt"))
    }

    fn config_for(path: PathBuf) -> QuillConfig {
        QuillConfig {
            posts_file: path,
            preview_len: 5,
            current_user: Some("U0".into()),
            ..QuillConfig::default()
        }
    }

    fn run_with(args: &[&str], config: &QuillConfig) -> String {
        let cli = Cli::parse_from(std::iter::once("quill").chain(args.iter().copied()));
        let mut out = Vec::new();
        run(&cli, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_posts_with_previews_and_authors() {
        let path = generate_temp_file();
        std::fs::write(&path, POSTS).unwrap();
        let config = config_for(path.clone());

        let output = run_with(&["posts", "--sort", "likes", "--desc"], &config);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "[P2] Second post | likes: 11 | N/A | Me");
        assert_eq!(lines[1], "Short");
        assert_eq!(lines[3], "[P1] Hello | likes: 5 | 2020-01-02 | Nils Hartmann");
        assert_eq!(lines[4], "Lorem...");

        std::fs::remove_file(path).expect("Temp file cleanup failed");
    }

    #[test]
    fn expanded_post_shows_tags_and_status() {
        let path = generate_temp_file();
        std::fs::write(&path, POSTS).unwrap();
        let config = config_for(path.clone());

        let output = run_with(&["posts", "--expand", "P1"], &config);
        assert!(output.contains("Lorem ipsum dolor sit amet\nTags: a, b\nPublished: Yes\n"));

        std::fs::remove_file(path).expect("Temp file cleanup failed");
    }

    #[test]
    fn sql_and_stats_commands() {
        let path = generate_temp_file();
        std::fs::write(&path, POSTS).unwrap();
        let config = config_for(path.clone());

        let sql = run_with(&["sql"], &config);
        assert_eq!(sql.lines().count(), 2);

        let stats = run_with(&["--json", "stats"], &config);
        let value: serde_json::Value = serde_json::from_str(&stats).unwrap();
        assert_eq!(value["posts_count"], 2);
        assert_eq!(value["published_count"], 1);
        assert_eq!(value["latest_post_id"], "P2");

        std::fs::remove_file(path).expect("Temp file cleanup failed");
    }

    #[test]
    fn missing_posts_file_lists_nothing() {
        let config = config_for(generate_temp_file());
        let output = run_with(&["posts"], &config);
        assert_eq!(output, "No posts available.\n");
    }

    #[test]
    fn unknown_post_is_an_error() {
        let config = config_for(generate_temp_file());
        let cli = Cli::parse_from(["quill", "post", "P7"]);
        let mut out = Vec::new();
        assert!(run(&cli, &config, &mut out).is_err());
    }

    #[test]
    fn users_as_json() {
        let config = config_for(generate_temp_file());
        let output = run_with(&["--json", "users"], &config);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().map(|users| users.len()), Some(9));
        assert_eq!(value[0]["login"], "alex");
    }

    #[test]
    fn flags_override_config_file_and_posts_file() {
        let config_path = generate_temp_file().with_extension("toml");
        let cli = Cli::parse_from([
            "quill",
            "--config",
            config_path.to_str().unwrap(),
            "--file",
            "other.txt",
            "stats",
        ]);

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.posts_file, PathBuf::from("other.txt"));
        assert_eq!(config.filepath, config_path);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_an_output_error() {
        let config = config_for(generate_temp_file());
        let cli = Cli::parse_from(["quill", "users"]);

        let err = run(&cli, &config, &mut ClosedPipe).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::Output(_))));
        assert!(err.to_string().contains("unable to write output"));
    }
}
