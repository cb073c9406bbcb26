//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output that only shows in verbose mode
//!
//! # Example
//!
//! ```ignore
//! log!("group"; "created {} wrappers", count);
//! debug!("group"; "skipped <{}>", tag);
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use std::{
    io::{self, Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when verbose mode is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Print detail lines under a previous log message (stderr, no prefix).
pub fn detail_lines<I, S>(lines: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        eprintln!("{}", line.as_ref());
    }
}

/// Print a prefixed header on stderr followed by its lines on stdout.
///
/// Both streams stay locked for the whole report, so reports printed from
/// different threads never interleave.
pub fn report<I, S>(module: &str, header: &str, lines: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut err = stderr().lock();
    let mut out = stdout().lock();
    write_report(&mut err, &mut out, module, header, lines).ok();
    err.flush().ok();
    out.flush().ok();
}

/// Write a report to explicit streams: header to `err`, lines to `out`.
pub fn write_report<E, O, I, S>(
    err: &mut E,
    out: &mut O,
    module: &str,
    header: &str,
    lines: I,
) -> io::Result<()>
where
    E: Write,
    O: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase());
    writeln!(err, "{prefix} {header}")?;
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    Ok(())
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "group" => prefix.bright_blue().bold().to_string(),
        "checks" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }

    #[test]
    fn test_prefix_contains_module() {
        assert!(colorize_prefix("error", "error").contains("[error]"));
        assert!(colorize_prefix("Group", "group").contains("[Group]"));
    }

    #[test]
    fn test_write_report_splits_streams() {
        let (mut err, mut out) = (Vec::new(), Vec::new());
        write_report(&mut err, &mut out, "error", "bad file", ["- one", "- two"]).unwrap();

        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("[error]"));
        assert!(err.trim_end().ends_with("bad file"));
        assert_eq!(String::from_utf8(out).unwrap(), "- one\n- two\n");
    }
}
