//! Builds `INSERT` statements for loaded posts.
//!
//! The statements are only ever collected into a text log; nothing parses or
//! executes them.

use crate::post::PostRecord;

pub const POSTS_TABLE: &str = "posts";

pub trait DbInsertString {
    /// Converts the underlying data into the value list of an `INSERT`.
    /// Currently, only implemented for `PostRecord`.
    fn db_insert_string(&self) -> String;
}

impl DbInsertString for PostRecord {
    fn db_insert_string(&self) -> String {
        [self.user_id(), self.title(), self.date(), Some(self.body())]
            .into_iter()
            .map(sql_value)
            .collect::<Vec<String>>()
            .join(", ")
    }
}

/// Single quotes become double quotes and newlines are dropped. Applying it
/// to already escaped text changes nothing.
pub fn sql_escape(s: &str) -> String {
    s.replace('\'', "\"").replace('\n', "")
}

/// Escaped text wrapped in single quotes.
pub fn sql_string(s: &str) -> String {
    format!("'{}'", sql_escape(s))
}

fn sql_value(value: Option<&str>) -> String {
    value.map_or_else(|| String::from("NULL"), sql_string)
}

pub fn insert_statement(post: &PostRecord) -> String {
    format!(
        "INSERT INTO {POSTS_TABLE} (user_id, title, date, body) VALUES ({});",
        post.db_insert_string()
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn escapes_quotes_and_newlines() {
        assert_eq!(sql_string("it's\nhere"), "'it\"shere'");
        assert_eq!(sql_string(""), "''");
    }

    #[test]
    fn escaping_is_idempotent() {
        let samples = ["plain", "don't", "a\nb\n", "''\n''", "\"already\""];
        for sample in samples {
            let once = sql_escape(sample);
            assert_eq!(sql_escape(&once), once);
            assert!(!once.contains('\''));
            assert!(!once.contains('\n'));
        }
    }

    #[test]
    fn insert_statement_for_full_post() {
        let mut post = PostRecord::new();
        post.set_user_id("U1".into());
        post.set_title("Nils' post".into());
        post.set_date("2020-01-01".into());
        post.push_body("first\nsecond");

        assert_eq!(
            insert_statement(&post),
            concat!(
                "INSERT INTO posts (user_id, title, date, body) ",
                "VALUES ('U1', 'Nils\" post', '2020-01-01', 'firstsecond');"
            )
        );
    }

    #[test]
    fn absent_values_render_as_null() {
        let post = PostRecord::new();
        assert_eq!(
            insert_statement(&post),
            "INSERT INTO posts (user_id, title, date, body) VALUES (NULL, NULL, NULL, '');"
        );
    }
}
