//! Interactive session: input buffer, history, dispatch, queue draining.

use noct_types::InputEvent;

use crate::clock::TimeService;
use crate::line::Style;
use crate::markup;
use crate::registry::{CommandRegistry, Context};
use crate::screen::Screen;

/// Most-recent-first history depth.
const MAX_HISTORY: usize = 50;

/// One interactive terminal session.
pub struct Session {
    pub screen: Screen,
    registry: CommandRegistry,
    clock: Box<dyn TimeService>,
    /// Most recent first. Duplicates allowed.
    history: Vec<String>,
    /// -1 = live buffer, 0.. = history index being recalled.
    cursor: isize,
    buffer: String,
    user: String,
    host: String,
}

impl Session {
    pub fn new(
        registry: CommandRegistry,
        screen: Screen,
        clock: Box<dyn TimeService>,
        user: &str,
        host: &str,
    ) -> Self {
        Self {
            screen,
            registry,
            clock,
            history: Vec::new(),
            cursor: -1,
            buffer: String::new(),
            user: user.to_string(),
            host: host.to_string(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn prompt_user(&self) -> &str {
        &self.user
    }

    pub fn prompt_host(&self) -> &str {
        &self.host
    }

    /// Execute raw input, or queue it if playback is in flight.
    ///
    /// The echo line renders the user text escaped, so typed markup appears
    /// literally.
    pub fn execute(&mut self, raw: &str) {
        if self.screen.is_animating() {
            log::debug!("playback active, queueing: {raw}");
            self.screen.queue_command(raw);
            return;
        }
        self.echo_prompt(raw);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        match self.registry.resolve(trimmed) {
            Some((cmd, args)) => {
                log::debug!("dispatching {} ({} args)", cmd.name(), args.len());
                let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
                let mut ctx = Context {
                    screen: &mut self.screen,
                    registry: &self.registry,
                    clock: self.clock.as_ref(),
                };
                cmd.run(&arg_refs, &mut ctx);
            },
            None => {
                self.screen.write_line(
                    format!("command not found: {}", markup::escape(trimmed)),
                    Style::Error,
                );
                self.screen
                    .write_line("Type \"help\" for available commands.", Style::Dim);
            },
        }
    }

    /// Apply one input event.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Char(c) => self.buffer.push(c),
            InputEvent::Backspace => {
                self.buffer.pop();
            },
            InputEvent::Submit => self.submit(),
            // Recall and completion act on the visible prompt only; while
            // playback hides it they are dropped, never queued.
            InputEvent::HistoryPrev => {
                if !self.screen.is_animating() {
                    self.recall_prev();
                }
            },
            InputEvent::HistoryNext => {
                if !self.screen.is_animating() {
                    self.recall_next();
                }
            },
            InputEvent::Complete => {
                if !self.screen.is_animating() {
                    self.complete();
                }
            },
            InputEvent::Interrupt => {
                // ^C echoes immediately, even mid-playback.
                self.buffer.clear();
                self.cursor = -1;
                self.echo_prompt("^C");
            },
            InputEvent::ClearScreen => self.screen.clear(),
            InputEvent::Resize { cols, rows } => self.screen.set_size(cols, rows),
            InputEvent::Quit => {},
        }
    }

    /// Advance playback and drain the pending queue on completion.
    pub fn tick(&mut self, dt_ms: u64) {
        if self.screen.tick(dt_ms) {
            log::debug!(
                "playback complete, draining {} pending command(s)",
                self.screen.pending_len()
            );
            while !self.screen.is_animating() {
                let Some(next) = self.screen.pop_pending() else {
                    break;
                };
                self.execute(&next);
            }
        }
    }

    fn submit(&mut self) {
        let cmd = self.buffer.trim().to_string();
        self.buffer.clear();
        self.cursor = -1;
        if !cmd.is_empty() {
            self.history.insert(0, cmd.clone());
            self.history.truncate(MAX_HISTORY);
        }
        // Empty submissions still echo a bare prompt line.
        self.execute(&cmd);
    }

    fn recall_prev(&mut self) {
        if self.cursor < self.history.len() as isize - 1 {
            self.cursor += 1;
            self.buffer = self.history[self.cursor as usize].clone();
        }
    }

    fn recall_next(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.buffer = self.history[self.cursor as usize].clone();
        } else {
            self.cursor = -1;
            self.buffer.clear();
        }
    }

    fn complete(&mut self) {
        let partial = self.buffer.trim().to_lowercase();
        if partial.is_empty() {
            return;
        }
        let matches = self.registry.completions(&partial);
        match matches.len() {
            0 => {},
            1 => self.buffer = matches[0].clone(),
            _ => {
                self.echo_prompt(&partial);
                self.screen.write_line(matches.join("  "), Style::White);
            },
        }
    }

    fn echo_prompt(&mut self, text: &str) {
        let line = format!(
            "<g>{}</g><d>@</d><c>{}</c><d>:</d><a>~</a><d>$</d> <w>{}</w>",
            self.user,
            self.host,
            markup::escape(text),
        );
        self.screen.write_line(line, Style::Default);
    }
}
