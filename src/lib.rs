//! Read-only terminal site, wasm edition: a fake shell over an immutable
//! virtual file system, plus the directory-tree panel that drives the same
//! interpreter.

pub mod boot;
pub mod command;
pub mod commands;
pub mod editor;
pub mod error;
pub mod events;
pub mod explorer;
pub mod path;
pub mod render;
pub mod session;
pub mod vfs;

use std::cell::RefCell;
use std::rc::Rc;

use futures::StreamExt;
use gloo_timers::future::IntervalStream;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use boot::{BootSequence, BootStage};
use explorer::{ExplorerState, NodeKind};
use render::RenderedLine;
use session::{OpenFile, Session};
use vfs::VirtualFileSystem;

// better errors in the browser console
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Content mounted when the frontend never supplies its own tree.
const DEFAULT_CONTENT: &[(&str, &str)] = &[
    ("about.md", "# About\n\nOperator console for a small virtual system.\n"),
    ("contact.md", "# Contact\n\n- mail: guest@system\n"),
    ("skills.txt", "rust / wasm / systems plumbing\n"),
    (
        "projects/guestterm.md",
        "# guestterm\n\nThe terminal you are reading this in.\n",
    ),
    ("projects/archive/crt.md", "# CRT shader\n\nScanlines, glow, flicker.\n"),
    (
        "notes/reading.txt",
        "- The UNIX Programming Environment\n- Crafting Interpreters\n",
    ),
];

pub fn default_site() -> VirtualFileSystem {
    VirtualFileSystem::from_files(DEFAULT_CONTENT.iter().copied())
}

struct Core {
    vfs: VirtualFileSystem,
    session: Session,
    explorer: ExplorerState,
    boot: BootSequence,
    boot_started: bool,
}

impl Core {
    fn new(vfs: VirtualFileSystem) -> Self {
        Self {
            vfs,
            session: Session::new(),
            explorer: ExplorerState::new(),
            boot: BootSequence::new(),
            boot_started: false,
        }
    }

    fn open_file_name(&self) -> Option<String> {
        self.session.open_file.as_ref().map(|o| o.name.clone())
    }

    /// Post-command bookkeeping shared by typed submits and tree clicks.
    fn notify_open_file(&self, before: Option<String>) {
        if self.open_file_name() != before {
            events::emit_open_file(self.session.open_file.as_ref());
        }
    }
}

#[derive(Deserialize)]
struct ContentFile {
    path: String,
    content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    stage: BootStage,
    status_line: Option<String>,
    cwd: &'a str,
    prompt: String,
    scrollback: &'a [RenderedLine],
    input: &'a str,
    caret: usize,
    open_file: Option<&'a OpenFile>,
}

/// The JS-facing terminal. Keys, clicks, and the boot tick all arrive as
/// discrete calls; each runs to completion before the next.
#[wasm_bindgen]
pub struct Terminal {
    core: Rc<RefCell<Core>>,
}

#[wasm_bindgen]
impl Terminal {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Terminal {
        Terminal {
            core: Rc::new(RefCell::new(Core::new(default_site()))),
        }
    }

    /// Frontend-compat handshake; nothing async happens today.
    pub async fn init_terminal(&self) -> JsValue {
        to_js(&serde_json::json!({
            "success": true,
            "message": "terminal initialized with read-only filesystem",
        }))
    }

    /// Replace the mounted tree with `[{path, content}, ...]` pairs and
    /// start a fresh session over it.
    pub fn load_content_tree(&self, files_json: &str) -> JsValue {
        match serde_json::from_str::<Vec<ContentFile>>(files_json) {
            Ok(files) => {
                let loaded = files.len();
                let mut core = self.core.borrow_mut();
                core.vfs =
                    VirtualFileSystem::from_files(files.into_iter().map(|f| (f.path, f.content)));
                core.session = Session::new();
                core.explorer = ExplorerState::new();
                web_sys::console::log_2(
                    &"[guestterm] mounted content tree,".into(),
                    &(loaded as u32).into(),
                );
                to_js(&serde_json::json!({ "success": true, "loaded": loaded }))
            }
            Err(e) => to_js(&serde_json::json!({
                "success": false,
                "error": format!("could not parse content tree: {}", e),
            })),
        }
    }

    /// Start the boot tick stream. The task holds only a weak handle, so
    /// dropping the terminal cancels the pending timer.
    pub fn power_on(&self) {
        {
            let mut core = self.core.borrow_mut();
            if core.boot_started {
                return;
            }
            core.boot_started = true;
        }
        let weak = Rc::downgrade(&self.core);
        spawn_local(async move {
            let mut ticks = IntervalStream::new(boot::TICK_MS);
            while ticks.next().await.is_some() {
                let Some(core) = weak.upgrade() else { break };
                let mut core = core.borrow_mut();
                let more = core.boot.tick();
                events::emit_boot_progress(
                    core.boot.stage(),
                    core.boot.progress(),
                    core.boot.status_line().as_deref(),
                );
                if !more {
                    break;
                }
            }
        });
    }

    /// Any key or click while the machine is still booting.
    pub fn boot_input(&self) {
        let mut core = self.core.borrow_mut();
        if core.boot.unlock() {
            core.session.scrollback = boot::welcome_banner();
        }
    }

    /// Submit the input buffer. Typed `cd`s re-derive the tree expansion
    /// from the new directory.
    pub fn submit(&self) {
        let mut core = self.core.borrow_mut();
        if !core.boot.is_ready() {
            return;
        }
        let before_cwd = core.session.cwd.clone();
        let before_open = core.open_file_name();
        {
            let core = &mut *core;
            command::submit_buffer(&mut core.session, &core.vfs);
        }
        if core.session.cwd != before_cwd {
            let cwd = core.session.cwd.clone();
            core.explorer.reveal(&cwd);
        }
        core.notify_open_file(before_open);
    }

    /// A tree-panel click: run the equivalent command and, for directories,
    /// toggle expansion.
    pub fn navigate(&self, p: &str, kind: &str) {
        let kind = match kind {
            "dir" => NodeKind::Dir,
            "file" => NodeKind::File,
            _ => return,
        };
        let mut core = self.core.borrow_mut();
        if !core.boot.is_ready() {
            return;
        }
        let before_open = core.open_file_name();
        {
            let core = &mut *core;
            explorer::navigate(p, kind, &mut core.session, &core.vfs, &mut core.explorer);
        }
        core.notify_open_file(before_open);
    }

    pub fn input_text(&self, text: &str) {
        let mut core = self.core.borrow_mut();
        editor::insert_text(&mut core.session, text);
    }

    pub fn backspace(&self) {
        editor::backspace(&mut self.core.borrow_mut().session);
    }

    pub fn delete_forward(&self) {
        editor::delete_forward(&mut self.core.borrow_mut().session);
    }

    pub fn caret_left(&self) {
        editor::caret_left(&mut self.core.borrow_mut().session);
    }

    pub fn caret_right(&self) {
        editor::caret_right(&mut self.core.borrow_mut().session);
    }

    pub fn caret_home(&self) {
        editor::caret_home(&mut self.core.borrow_mut().session);
    }

    pub fn caret_end(&self) {
        editor::caret_end(&mut self.core.borrow_mut().session);
    }

    /// The clear-screen shortcut: wipes the scrollback without going
    /// through command dispatch, so no echo and no history entry.
    pub fn clear_screen(&self) {
        self.core.borrow_mut().session.scrollback.clear();
    }

    pub fn history_prev(&self) {
        self.core.borrow_mut().session.history_prev();
    }

    pub fn history_next(&self) {
        self.core.borrow_mut().session.history_next();
    }

    pub fn complete(&self) {
        let core = &mut *self.core.borrow_mut();
        editor::complete(&mut core.session, &core.vfs);
    }

    /// The whole render model in one call.
    pub fn state(&self) -> JsValue {
        let core = self.core.borrow();
        let snapshot = Snapshot {
            stage: core.boot.stage(),
            status_line: core.boot.status_line(),
            cwd: &core.session.cwd,
            prompt: render::prompt_for(&core.session.cwd),
            scrollback: &core.session.scrollback,
            input: &core.session.input,
            caret: core.session.caret,
            open_file: core.session.open_file.as_ref(),
        };
        serde_wasm_bindgen::to_value(&snapshot).unwrap_or(JsValue::NULL)
    }

    /// The explorer tree, children present on expanded directories only.
    pub fn tree(&self) -> JsValue {
        let core = self.core.borrow();
        serde_wasm_bindgen::to_value(&explorer::tree(&core.vfs, &core.explorer))
            .unwrap_or(JsValue::NULL)
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(value: &serde_json::Value) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}
