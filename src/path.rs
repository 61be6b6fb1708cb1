//! Path arithmetic over the `~`-rooted virtual path language.
//!
//! Paths are plain strings: `~` for the root, otherwise `~/seg1/.../segN`
//! with non-empty segments. Resolution never touches the file system and
//! never fails; existence is the caller's problem.

pub const ROOT: &str = "~";

/// Resolve `target` against `base` into a normalized absolute path.
///
/// `.` and empty segments are skipped, `..` pops one segment and silently
/// clamps at the root. The result is always syntactically valid whether or
/// not it names an existing node.
pub fn resolve(base: &str, target: &str) -> String {
    if target == ROOT {
        return ROOT.to_string();
    }

    let (mut segments, rest) = if let Some(rest) = target.strip_prefix("~/") {
        (Vec::new(), rest)
    } else {
        (segments_of(base), target)
    };

    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                // popping past the root is a no-op, not an error
                segments.pop();
            }
            seg => segments.push(seg.to_string()),
        }
    }

    assemble(&segments)
}

/// Join a child name onto a directory path.
pub fn join(parent: &str, name: &str) -> String {
    if parent == ROOT {
        format!("~/{}", name)
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Parent of `path`, clamped at the root.
pub fn parent(path: &str) -> String {
    let mut segments = segments_of(path);
    segments.pop();
    assemble(&segments)
}

/// The inclusive ancestor chain of `path`, root first.
///
/// `ancestors("~/a/b")` is `["~", "~/a", "~/a/b"]`.
pub fn ancestors(path: &str) -> Vec<String> {
    let mut chain = vec![ROOT.to_string()];
    let mut acc = Vec::new();
    for segment in segments_of(path) {
        acc.push(segment);
        chain.push(assemble(&acc));
    }
    chain
}

/// True when `path` equals `prefix` or sits somewhere below it.
///
/// The test respects segment boundaries: `~/a/bc` is not within `~/a/b`.
pub fn is_within(path: &str, prefix: &str) -> bool {
    if prefix == ROOT {
        return true;
    }
    path == prefix || path.starts_with(&format!("{}/", prefix))
}

fn segments_of(path: &str) -> Vec<String> {
    match path.strip_prefix("~/") {
        Some(rest) => rest.split('/').map(str::to_string).collect(),
        None => Vec::new(),
    }
}

fn assemble(segments: &[String]) -> String {
    if segments.is_empty() {
        ROOT.to_string()
    } else {
        format!("~/{}", segments.join("/"))
    }
}
