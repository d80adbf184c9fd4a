//! Terminal output.
//!
//! - `log!` prints a line behind a colored `[module]` tag
//! - `debug!` does the same, but only with `--verbose`
//! - [`Progress`] keeps a live `[module] label(done/total)` counter at the
//!   bottom of the output while rayon workers tick it
//!
//! ```ignore
//! log!("build"; "wrote {}", path.display());
//!
//! let progress = Progress::new("assets", "copy", files.len());
//! files.par_iter().for_each(|_| progress.tick());
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::io::{StdoutLock, Write, stdout};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// A progress counter is on screen; log lines go above it.
static PROGRESS_ACTIVE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// `log!("module"; "format {}", args)`
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like `log!`, only printed with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

pub fn log(module: &str, message: &str) {
    let mut out = stdout().lock();
    if PROGRESS_ACTIVE.load(Ordering::SeqCst) {
        // Overwrite the counter; the next tick redraws it below
        clear_line(&mut out);
    }
    writeln!(out, "{} {}", tag(module), message).ok();
    out.flush().ok();
}

fn tag(module: &str) -> String {
    let tag = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "serve" => tag.bright_blue().bold().to_string(),
        "nav" => tag.bright_cyan().bold().to_string(),
        "error" => tag.bright_red().bold().to_string(),
        "warning" => tag.yellow().bold().to_string(),
        _ => tag.bright_yellow().bold().to_string(),
    }
}

fn clear_line(out: &mut StdoutLock<'_>) {
    execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
}

// ============================================================================
// Progress
// ============================================================================

/// Live counter for parallel work.
///
/// Ticks from worker threads never wait on each other: when another thread
/// is redrawing, the redraw is skipped and the next tick catches up.
pub struct Progress {
    module: &'static str,
    label: &'static str,
    total: usize,
    done: AtomicUsize,
    draw: Mutex<()>,
}

impl Progress {
    /// Nothing is drawn when `total` is zero.
    pub fn new(module: &'static str, label: &'static str, total: usize) -> Self {
        let progress = Self {
            module,
            label,
            total,
            done: AtomicUsize::new(0),
            draw: Mutex::new(()),
        };
        if total > 0 {
            PROGRESS_ACTIVE.store(true, Ordering::SeqCst);
            progress.redraw();
        }
        progress
    }

    pub fn tick(&self) {
        self.done.fetch_add(1, Ordering::Relaxed);
        if self.total > 0 && self.draw.try_lock().is_some() {
            self.redraw();
        }
    }

    fn line(&self) -> String {
        format!(
            "{}({}/{})",
            self.label,
            self.done.load(Ordering::Relaxed).min(self.total),
            self.total
        )
    }

    fn redraw(&self) {
        let mut out = stdout().lock();
        clear_line(&mut out);
        write!(out, "{} {}", tag(self.module), self.line()).ok();
        out.flush().ok();
    }

    /// Leave the final count on its own line.
    pub fn finish(self) {
        if self.total == 0 {
            return;
        }
        let _guard = self.draw.lock();
        self.redraw();
        writeln!(stdout()).ok();
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        PROGRESS_ACTIVE.store(false, Ordering::SeqCst);
    }
}
