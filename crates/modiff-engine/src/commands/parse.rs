//! Chat command parsing.

use modiff_core::errors::{ModiffError, Result};
use serde::Serialize;

/// Usage line shown with every usage error
pub const USAGE: &str = "Usage: diff <collection-slug> <revision-a> <revision-b>";

const COMMAND_WORD: &str = "diff";

/// A parsed `diff <collection-id> <revisionA> <revisionB>` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffCommand {
    pub collection_id: String,
    pub from_revision: u32,
    pub to_revision: u32,
}

impl DiffCommand {
    /// Parse one line of chat.
    ///
    /// Returns `Ok(None)` when the line is not a diff command at all (blank
    /// or chatter). The command word may carry a leading `/` or `!`.
    ///
    /// # Errors
    ///
    /// `ModiffError::Usage` when the line is a diff command with the wrong
    /// argument count or a revision that is not a non-negative integer.
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(None);
        };

        let verb = first.trim_start_matches(['/', '!']);
        if !verb.eq_ignore_ascii_case(COMMAND_WORD) {
            return Ok(None);
        }

        let args: Vec<&str> = words.collect();
        Self::from_args(&args).map(Some)
    }

    /// Build a command from its three arguments.
    ///
    /// # Errors
    ///
    /// `ModiffError::Usage` on a wrong argument count or a bad revision.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let [collection_id, rev_a, rev_b] = args else {
            return Err(ModiffError::usage(format!(
                "expected 3 arguments, got {}",
                args.len()
            )));
        };

        Ok(Self {
            collection_id: collection_id.as_ref().to_string(),
            from_revision: parse_revision(rev_a.as_ref())?,
            to_revision: parse_revision(rev_b.as_ref())?,
        })
    }
}

impl std::fmt::Display for DiffCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            COMMAND_WORD, self.collection_id, self.from_revision, self.to_revision
        )
    }
}

fn parse_revision(raw: &str) -> Result<u32> {
    raw.parse::<u32>().map_err(|_| {
        ModiffError::usage(format!(
            "revision must be a non-negative integer, got '{}'",
            raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_line() {
        let cmd = DiffCommand::parse_line("diff myslug 1 2").unwrap().unwrap();
        assert_eq!(
            cmd,
            DiffCommand {
                collection_id: "myslug".into(),
                from_revision: 1,
                to_revision: 2,
            }
        );
    }

    #[test]
    fn test_parse_prefixed_and_spaced() {
        let cmd = DiffCommand::parse_line("  /diff   abc-def   10 3 ").unwrap().unwrap();
        assert_eq!(cmd.collection_id, "abc-def");
        assert_eq!((cmd.from_revision, cmd.to_revision), (10, 3));
        assert!(DiffCommand::parse_line("!DIFF x 1 2").unwrap().is_some());
    }

    #[test]
    fn test_display_parses_back() {
        let cmd = DiffCommand::from_args(&["myslug", "4", "7"]).unwrap();
        assert_eq!(cmd.to_string(), "diff myslug 4 7");
        assert_eq!(DiffCommand::parse_line(&cmd.to_string()).unwrap(), Some(cmd));
    }

    #[test]
    fn test_non_commands_are_ignored() {
        assert_eq!(DiffCommand::parse_line("").unwrap(), None);
        assert_eq!(DiffCommand::parse_line("   ").unwrap(), None);
        assert_eq!(DiffCommand::parse_line("hello there").unwrap(), None);
        assert_eq!(DiffCommand::parse_line("diffs a 1 2").unwrap(), None);
    }

    #[test]
    fn test_non_integer_revision_is_usage_error() {
        let err = DiffCommand::parse_line("diff myslug abc 2").unwrap_err();
        assert!(matches!(err, ModiffError::Usage { .. }));
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_negative_revision_is_usage_error() {
        assert!(DiffCommand::parse_line("diff myslug -1 2").is_err());
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        for line in ["diff", "diff myslug", "diff myslug 1", "diff myslug 1 2 3"] {
            let err = DiffCommand::parse_line(line).unwrap_err();
            assert!(matches!(err, ModiffError::Usage { .. }), "{}", line);
        }
    }
}
