//! Single-line terminal spinner
//!
//! Renders a braille-frame animation on one terminal line from a background
//! thread while the caller keeps scanning and deleting. The caller owns the
//! line through the [`Spinner`] handle: [`Spinner::message`] swaps the text
//! mid-animation, [`Spinner::success`] and [`Spinner::error`] stop the
//! animation and leave exactly one final line behind.
//!
//! Every write goes through a single mutex, and the stop flag is checked
//! under that mutex before each frame draw, so a frame can never land after
//! the final line. When stdout is not a terminal the animation is disabled
//! and no control sequences are emitted; only the final line is printed.

use crate::theme::Theme;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;

/// Animation frames (braille-style dots)
pub const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const BASE_INTERVAL_MS: f64 = 100.0;

/// A spinner operation was called in the wrong lifecycle state.
///
/// These are precondition violations on the caller's side, not runtime
/// errors: the valid call sequence is `start`, any number of `message`,
/// then exactly one of `success` or `error`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpinnerError {
    #[error("spinner not started, call start() first")]
    NotStarted,
    #[error("spinner already started")]
    AlreadyStarted,
    #[error("spinner already finished")]
    AlreadyFinished,
}

pub struct SpinnerOptions {
    /// Text shown next to the first frame
    pub text: String,
    pub frames: &'static [&'static str],
    /// Animation speed multiplier; the frame interval is 100ms / speed
    pub speed: f64,
    pub success_icon: String,
    pub error_icon: String,
    /// Whether stdout is an interactive terminal; animation is disabled
    /// when it is not
    pub is_tty: bool,
}

impl Default for SpinnerOptions {
    fn default() -> Self {
        Self {
            text: String::new(),
            frames: FRAMES,
            speed: 1.0,
            success_icon: Theme::success_icon(),
            error_icon: Theme::error_icon(),
            is_tty: io::stdout().is_terminal(),
        }
    }
}

/// Text and frame cursor shared with the animation thread
struct RenderState {
    text: String,
    frame_index: usize,
}

struct Shared {
    state: Mutex<RenderState>,
    stopped: AtomicBool,
}

pub struct Spinner {
    shared: Arc<Shared>,
    frames: &'static [&'static str],
    interval: Duration,
    success_icon: String,
    error_icon: String,
    is_tty: bool,
    started: bool,
    finished: bool,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn new(options: SpinnerOptions) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(RenderState {
                    text: options.text,
                    frame_index: 0,
                }),
                stopped: AtomicBool::new(false),
            }),
            frames: options.frames,
            interval: interval_for_speed(options.speed),
            success_icon: options.success_icon,
            error_icon: options.error_icon,
            is_tty: options.is_tty,
            started: false,
            finished: false,
            handle: None,
        }
    }

    /// Begin the animation and return immediately.
    ///
    /// The animation runs on a background thread until [`Spinner::success`]
    /// or [`Spinner::error`] stops it. Valid exactly once, before any other
    /// operation.
    pub fn start(&mut self) -> Result<(), SpinnerError> {
        if self.finished {
            return Err(SpinnerError::AlreadyFinished);
        }
        if self.started {
            return Err(SpinnerError::AlreadyStarted);
        }
        self.started = true;

        if !self.is_tty {
            return Ok(());
        }

        let shared = Arc::clone(&self.shared);
        let frames = self.frames;
        let interval = self.interval;
        self.handle = Some(thread::spawn(move || loop {
            {
                let Ok(mut state) = shared.state.lock() else {
                    return;
                };
                // Observe the stop flag under the lock, before rendering
                if shared.stopped.load(Ordering::SeqCst) {
                    return;
                }
                let frame = frames[state.frame_index];
                state.frame_index = (state.frame_index + 1) % frames.len();
                render_line(&format!("{} {}", frame, state.text));
            }
            thread::sleep(interval);
        }));

        Ok(())
    }

    /// Replace the displayed text without disturbing the animation cadence.
    pub fn message(&self, text: impl Into<String>) -> Result<(), SpinnerError> {
        self.check_running()?;

        let mut state = self.lock_state();
        state.text = text.into();
        if self.is_tty {
            let frame = self.frames[state.frame_index];
            render_line(&format!("{} {}", frame, state.text));
        }

        Ok(())
    }

    /// Stop the animation and leave a final success line.
    pub fn success(&mut self, text: &str) -> Result<(), SpinnerError> {
        let icon = self.success_icon.clone();
        self.finish(&icon, text)
    }

    /// Stop the animation and leave a final error line.
    pub fn error(&mut self, text: &str) -> Result<(), SpinnerError> {
        let icon = self.error_icon.clone();
        self.finish(&icon, text)
    }

    fn finish(&mut self, icon: &str, text: &str) -> Result<(), SpinnerError> {
        self.check_running()?;
        self.finished = true;
        self.shared.stopped.store(true, Ordering::SeqCst);

        {
            // Hold the render lock so the final line can't interleave with
            // a frame the animation thread is mid-way through drawing
            let _state = self.lock_state();
            if self.is_tty {
                render_line(&format!("{icon} {text}\n"));
            } else {
                println!("{icon} {text}");
            }
        }

        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }

        Ok(())
    }

    fn check_running(&self) -> Result<(), SpinnerError> {
        if !self.started {
            return Err(SpinnerError::NotStarted);
        }
        if self.finished {
            return Err(SpinnerError::AlreadyFinished);
        }
        Ok(())
    }

    fn lock_state(&self) -> MutexGuard<'_, RenderState> {
        // Poisoning would require a panic inside render_line
        self.shared
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for Spinner {
    /// Stop the animation thread without writing a final line, so a spinner
    /// abandoned on an early-return path doesn't keep drawing.
    fn drop(&mut self) {
        self.shared.stopped.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn interval_for_speed(speed: f64) -> Duration {
    let speed = if speed > 0.0 { speed } else { 1.0 };
    Duration::from_millis((BASE_INTERVAL_MS / speed) as u64)
}

/// Clear the current terminal line, return the cursor to column zero, and
/// write in place.
fn render_line(line: &str) {
    let mut stdout = io::stdout().lock();
    let _ = write!(stdout, "\r\x1b[2K{line}");
    let _ = stdout.flush();
}
