//! Input-line editing: caret movement, insertion, deletion, and tab
//! completion against the current directory. All offsets stay on char
//! boundaries.

use crate::session::Session;
use crate::vfs::VirtualFileSystem;

pub fn insert_text(session: &mut Session, text: &str) {
    session.input.insert_str(session.caret, text);
    session.caret += text.len();
}

/// Delete the char before the caret, if any.
pub fn backspace(session: &mut Session) {
    let Some(ch) = session.input[..session.caret].chars().next_back() else {
        return;
    };
    let start = session.caret - ch.len_utf8();
    session.input.remove(start);
    session.caret = start;
}

/// Delete the char under the caret, if any.
pub fn delete_forward(session: &mut Session) {
    if session.caret < session.input.len() {
        session.input.remove(session.caret);
    }
}

pub fn caret_left(session: &mut Session) {
    if let Some(ch) = session.input[..session.caret].chars().next_back() {
        session.caret -= ch.len_utf8();
    }
}

pub fn caret_right(session: &mut Session) {
    if let Some(ch) = session.input[session.caret..].chars().next() {
        session.caret += ch.len_utf8();
    }
}

pub fn caret_home(session: &mut Session) {
    session.caret = 0;
}

pub fn caret_end(session: &mut Session) {
    session.caret = session.input.len();
}

/// Tab completion: the last space-delimited token of the buffer is the
/// prefix; on exactly one match among the current directory's children the
/// token is replaced (directories gain a trailing `/`) and the caret jumps
/// to the end. Zero or several matches do nothing — no common-prefix
/// extension.
pub fn complete(session: &mut Session, vfs: &VirtualFileSystem) {
    let trimmed = session.input.trim().to_string();
    let mut words: Vec<&str> = trimmed.split(' ').collect();
    let prefix = words.last().copied().unwrap_or("");

    let Ok(entries) = vfs.children_sorted(&session.cwd) else {
        return;
    };
    let mut matches = entries.iter().filter(|e| e.name.starts_with(prefix));
    let (Some(hit), None) = (matches.next(), matches.next()) else {
        return;
    };

    let completed = if hit.is_dir {
        format!("{}/", hit.name)
    } else {
        hit.name.clone()
    };
    words.pop();
    let mut line: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    line.push(completed);
    session.set_input(line.join(" "));
}
