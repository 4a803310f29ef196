//! Scrollback and the animated playback state machine.
//!
//! Output is appended either immediately ([`Screen::write_line`]) or through
//! a queued playback job ([`Screen::type_lines`]) that reveals lines in
//! strict sequence. The machine is tick-driven: the host loop calls
//! [`Screen::tick`] with elapsed milliseconds; there is no blocking sleep
//! anywhere, so the session stays responsive to the queueing contract.
//!
//! While any job is in flight the screen is animating: commands arriving
//! through the session are queued in `pending`, never dropped and never run
//! concurrently with the in-flight sequence.

use std::collections::VecDeque;

use unicode_segmentation::UnicodeSegmentation;

use crate::line::{OutputLine, Style};
use crate::markup;

/// Default per-line delay for animated playback.
pub const DEFAULT_LINE_DELAY_MS: u64 = 30;

/// Fixed interval of the character-by-character reveal.
pub const CHAR_INTERVAL_MS: u64 = 11;

/// One scrollback entry.
#[derive(Debug, Clone)]
pub struct Entry {
    pub line: OutputLine,
    /// `None` = fully revealed (render the markup form); `Some(n)` = line is
    /// mid-reveal, render the first `n` grapheme units of the stripped text.
    pub revealed: Option<usize>,
}

impl Entry {
    fn full(line: OutputLine) -> Self {
        Self {
            line,
            revealed: None,
        }
    }

    /// Plain-text prefix shown mid-reveal, if this entry is animating.
    pub fn plain_prefix(&self) -> Option<String> {
        self.revealed.map(|n| {
            markup::strip(&self.line.text)
                .graphemes(true)
                .take(n)
                .collect()
        })
    }
}

/// A queued playback job.
#[derive(Debug)]
enum Job {
    /// Play a line sequence (the `typeLines` discipline).
    Type {
        lines: Vec<OutputLine>,
        idx: usize,
        default_delay_ms: u64,
        char_interval_ms: u64,
        phase: LinePhase,
    },
    /// Suspend playback for a duration.
    Pause { remaining_ms: u64 },
    /// Rewrite the last line in place through a frame sequence
    /// (text, hold duration). Used by the boot ellipsis animation.
    Rewrite {
        frames: Vec<(String, u64)>,
        idx: usize,
        entry: Option<usize>,
        holding: Option<u64>,
        style: Style,
    },
}

#[derive(Debug)]
enum LinePhase {
    NextLine,
    Reveal {
        entry: usize,
        shown: usize,
        total: usize,
        wait_ms: u64,
    },
    Hold { remaining_ms: u64 },
}

enum JobStatus {
    Done,
    Yield,
}

/// Terminal scrollback + playback engine + pending-command queue.
pub struct Screen {
    entries: Vec<Entry>,
    jobs: VecDeque<Job>,
    active: Option<Job>,
    pending: VecDeque<String>,
    cols: u16,
    rows: u16,
}

impl Screen {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            entries: Vec::new(),
            jobs: VecDeque::new(),
            active: None,
            pending: VecDeque::new(),
            cols,
            rows,
        }
    }

    // -- Surface geometry --

    pub fn set_size(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    // -- Output API --

    /// Append one fully-revealed line instantly.
    pub fn write_line(&mut self, text: impl Into<String>, style: Style) {
        self.entries
            .push(Entry::full(OutputLine::instant(text, style)));
    }

    /// Queue an animated line sequence with the default pacing.
    pub fn type_lines(&mut self, lines: Vec<OutputLine>) {
        self.type_lines_with(lines, DEFAULT_LINE_DELAY_MS, CHAR_INTERVAL_MS);
    }

    /// Queue an animated line sequence with explicit pacing.
    pub fn type_lines_with(
        &mut self,
        lines: Vec<OutputLine>,
        default_delay_ms: u64,
        char_interval_ms: u64,
    ) {
        self.jobs.push_back(Job::Type {
            lines,
            idx: 0,
            default_delay_ms,
            char_interval_ms,
            phase: LinePhase::NextLine,
        });
    }

    /// Queue a playback suspension.
    pub fn pause(&mut self, ms: u64) {
        self.jobs.push_back(Job::Pause { remaining_ms: ms });
    }

    /// Queue an in-place rewrite of the last line through timed frames.
    pub fn rewrite_frames(&mut self, frames: Vec<(String, u64)>, style: Style) {
        self.jobs.push_back(Job::Rewrite {
            frames,
            idx: 0,
            entry: None,
            holding: None,
            style,
        });
    }

    /// Discard all scrollback. History, the animation gate, and the pending
    /// queue are untouched; an in-flight line re-enters the fresh scrollback
    /// on the next tick.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // -- Playback gate / pending queue --

    /// True while a line sequence is being played back.
    pub fn is_animating(&self) -> bool {
        self.active.is_some() || !self.jobs.is_empty()
    }

    /// Queue a raw command submitted while playback is in flight.
    pub fn queue_command(&mut self, raw: &str) {
        self.pending.push_back(raw.to_string());
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Dequeue the oldest pending command, if any.
    pub fn pop_pending(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    // -- Scrollback access --

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    // -- State machine --

    /// Advance playback by `dt_ms`. Returns `true` if playback was in flight
    /// and completed during this call (the caller then drains the pending
    /// queue).
    pub fn tick(&mut self, mut dt_ms: u64) -> bool {
        if !self.is_animating() {
            return false;
        }
        loop {
            let Some(mut job) = self.active.take() else {
                match self.jobs.pop_front() {
                    Some(next) => {
                        self.active = Some(next);
                        continue;
                    },
                    None => return true,
                }
            };
            match self.advance_job(&mut job, &mut dt_ms) {
                JobStatus::Done => {},
                JobStatus::Yield => {
                    self.active = Some(job);
                    return false;
                },
            }
        }
    }

    /// Run one job against the remaining time budget.
    fn advance_job(&mut self, job: &mut Job, dt: &mut u64) -> JobStatus {
        match job {
            Job::Pause { remaining_ms } => {
                if *dt < *remaining_ms {
                    *remaining_ms -= *dt;
                    *dt = 0;
                    JobStatus::Yield
                } else {
                    *dt -= *remaining_ms;
                    JobStatus::Done
                }
            },
            Job::Rewrite {
                frames,
                idx,
                entry,
                holding,
                style,
            } => loop {
                if let Some(rem) = holding {
                    if *dt < *rem {
                        *rem -= *dt;
                        *dt = 0;
                        return JobStatus::Yield;
                    }
                    *dt -= *rem;
                    *holding = None;
                } else if *idx >= frames.len() {
                    return JobStatus::Done;
                } else {
                    let (text, hold_ms) = frames[*idx].clone();
                    let target = match *entry {
                        Some(i) if i < self.entries.len() => i,
                        None if !self.entries.is_empty() => self.entries.len() - 1,
                        // Scrollback was cleared under us; start a new line.
                        _ => {
                            self.entries
                                .push(Entry::full(OutputLine::instant(String::new(), *style)));
                            self.entries.len() - 1
                        },
                    };
                    self.entries[target].line.text = text;
                    self.entries[target].revealed = None;
                    *entry = Some(target);
                    *idx += 1;
                    *holding = Some(hold_ms);
                }
            },
            Job::Type {
                lines,
                idx,
                default_delay_ms,
                char_interval_ms,
                phase,
            } => loop {
                match phase {
                    LinePhase::NextLine => {
                        let Some(line) = lines.get(*idx) else {
                            return JobStatus::Done;
                        };
                        let line = line.clone();
                        let delay = line.delay_ms.unwrap_or(*default_delay_ms);
                        if delay == 0 {
                            // Instant: full markup content, no pause.
                            self.entries.push(Entry::full(line));
                            *idx += 1;
                            continue;
                        }
                        if line.style.is_banner() {
                            // Whole line at once, then hold. Per-character
                            // reveal would corrupt multi-column art.
                            self.entries.push(Entry::full(line));
                            *phase = LinePhase::Hold { remaining_ms: delay };
                            continue;
                        }
                        let total = markup::strip(&line.text).graphemes(true).count();
                        if total == 0 {
                            self.entries.push(Entry::full(line));
                            *idx += 1;
                            continue;
                        }
                        self.entries.push(Entry {
                            line,
                            revealed: Some(0),
                        });
                        *phase = LinePhase::Reveal {
                            entry: self.entries.len() - 1,
                            shown: 0,
                            total,
                            wait_ms: *char_interval_ms,
                        };
                    },
                    LinePhase::Reveal {
                        entry,
                        shown,
                        total,
                        wait_ms,
                    } => {
                        if *dt < *wait_ms {
                            *wait_ms -= *dt;
                            *dt = 0;
                            return JobStatus::Yield;
                        }
                        *dt -= *wait_ms;
                        *wait_ms = *char_interval_ms;
                        *shown += 1;
                        // clear() may have dropped the in-flight entry;
                        // re-append it and keep revealing.
                        if *entry >= self.entries.len()
                            || self.entries[*entry].revealed.is_none()
                        {
                            self.entries.push(Entry {
                                line: lines[*idx].clone(),
                                revealed: Some(0),
                            });
                            *entry = self.entries.len() - 1;
                        }
                        if *shown >= *total {
                            // Swap in the markup-bearing content so the final
                            // state matches non-animated output exactly.
                            self.entries[*entry].revealed = None;
                            *idx += 1;
                            *phase = LinePhase::NextLine;
                        } else {
                            self.entries[*entry].revealed = Some(*shown);
                        }
                    },
                    LinePhase::Hold { remaining_ms } => {
                        if *dt < *remaining_ms {
                            *remaining_ms -= *dt;
                            *dt = 0;
                            return JobStatus::Yield;
                        }
                        *dt -= *remaining_ms;
                        *idx += 1;
                        *phase = LinePhase::NextLine;
                    },
                }
            },
        }
    }
}
