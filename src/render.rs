//! Abstract output lines. The core only ever appends these to the
//! scrollback; painting them (markdown, colors, layout) is the frontend's
//! job. `plain` is the text projection used by the native REPL and tests.

use serde::Serialize;

use crate::vfs::DirEntry;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedLine {
    /// The prompt+input echo shown before a command's result.
    Echo { prompt: String, input: String },
    Text { text: String },
    /// Raw file content, rendered preformatted.
    Pre { text: String },
    Error { text: String },
    /// A directory listing; directories get a `/` suffix when painted.
    Listing { entries: Vec<DirEntry> },
}

impl RenderedLine {
    pub fn text(s: impl Into<String>) -> Self {
        RenderedLine::Text { text: s.into() }
    }

    pub fn error(s: impl Into<String>) -> Self {
        RenderedLine::Error { text: s.into() }
    }
}

pub fn prompt_for(cwd: &str) -> String {
    format!("guest@system:{}$", cwd)
}

/// Flatten a line to plain text.
pub fn plain(line: &RenderedLine) -> String {
    match line {
        RenderedLine::Echo { prompt, input } => format!("{} {}", prompt, input),
        RenderedLine::Text { text } | RenderedLine::Pre { text } => text.clone(),
        RenderedLine::Error { text } => text.clone(),
        RenderedLine::Listing { entries } => entries
            .iter()
            .map(|e| {
                if e.is_dir {
                    format!("{}/", e.name)
                } else {
                    e.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("  "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_tracks_cwd() {
        assert_eq!(prompt_for("~"), "guest@system:~$");
        assert_eq!(prompt_for("~/projects"), "guest@system:~/projects$");
    }

    #[test]
    fn test_plain_listing_suffixes_dirs() {
        let line = RenderedLine::Listing {
            entries: vec![
                DirEntry { name: "projects".to_string(), is_dir: true },
                DirEntry { name: "about.md".to_string(), is_dir: false },
            ],
        };
        assert_eq!(plain(&line), "projects/  about.md");
    }
}
