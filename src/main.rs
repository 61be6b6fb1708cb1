use std::io::{self, Write};

use guestterm::command;
use guestterm::render::{self, RenderedLine};
use guestterm::session::Session;

fn main() {
    let vfs = guestterm::default_site();
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("{} ", render::prompt_for(&session.cwd));
        stdout.flush().unwrap();
        let mut input = String::new();
        if stdin.read_line(&mut input).is_err() || input.is_empty() {
            break;
        }
        let input = input.trim();
        if input == "exit" {
            break;
        }
        let seen = session.scrollback.len();
        command::submit(input, &mut session, &vfs);
        for line in &session.scrollback[seen.min(session.scrollback.len())..] {
            // the echo is already on screen from the prompt
            if !matches!(line, RenderedLine::Echo { .. }) {
                println!("{}", render::plain(line));
            }
        }
    }
}
