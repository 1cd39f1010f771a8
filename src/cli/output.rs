/// Output formatting: text, JSON and table modes.
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{DependencyOutput, ErrorOutput, SummaryOutput};

/// Placeholder for an empty dependency section.
const EMPTY: &str = "<empty>";

/// Header name used when the manifest has no usable `name`.
const UNDEFINED_NAME: &str = "undefined";

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to the command.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, print timing spans and probed paths to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Report a manifest path the locator is about to read.
    pub fn probe(&self, path: &Path) {
        if self.debug {
            eprintln!("[debug] probe {}", path.display());
        }
    }
}

// --- Summary output ---

/// Write a manifest summary to stdout.
pub fn write_summary(summary: &SummaryOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(summary),
        OutputFormat::Compact => print_compact_json(summary),
        OutputFormat::Text => print!("{}", render_text(summary)),
        OutputFormat::Table => print!("{}", render_table(summary, ctx.no_header)),
    }
}

/// Render the plain-text summary.
///
/// Layout: header line, optional `- key: value` lines, a blank line, the
/// `Peers:` section, then `Dependencies:` when dependencies were requested.
#[must_use]
pub fn render_text(summary: &SummaryOutput) -> String {
    let mut out = render_identity(summary);
    render_section(&mut out, "Peers", &summary.peer_dependencies);
    if let Some(deps) = &summary.dependencies {
        render_section(&mut out, "Dependencies", deps);
    }
    out
}

/// Render identity lines followed by a single dependency table.
#[must_use]
pub fn render_table(summary: &SummaryOutput, no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !no_header {
        table.set_header(["SECTION", "NAME", "RANGE"]);
    }

    let mut sections = vec![("peer", summary.peer_dependencies.as_slice())];
    if let Some(deps) = &summary.dependencies {
        sections.push(("dependency", deps.as_slice()));
    }
    for (section, entries) in sections {
        if entries.is_empty() {
            table.add_row([section, EMPTY, ""]);
        }
        for entry in entries {
            table.add_row([section, entry.name.as_str(), entry.range.as_str()]);
        }
    }

    let mut out = render_identity(summary);
    let _ = writeln!(out, "{table}");
    out
}

fn render_identity(summary: &SummaryOutput) -> String {
    let mut out = String::new();
    let name = summary.name.as_deref().unwrap_or(UNDEFINED_NAME);
    let _ = writeln!(out, "{name} ({})", summary.path);
    for (label, value) in [
        ("version", &summary.version),
        ("type", &summary.module_type),
        ("repo", &summary.repository),
    ] {
        if let Some(v) = value {
            let _ = writeln!(out, "- {label}: {v}");
        }
    }
    out.push('\n');
    out
}

fn render_section(out: &mut String, title: &str, entries: &[DependencyOutput]) {
    let _ = writeln!(out, "{title}:");
    if entries.is_empty() {
        let _ = writeln!(out, "  {EMPTY}");
    }
    for entry in entries {
        let _ = writeln!(out, "  {}: {}", entry.name, entry.range);
    }
}

// --- Error output ---

/// Write a lookup error to stderr.
///
/// Text and table formats print the bare message on one line.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Compact => {
            let s = serde_json::to_string(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Text | OutputFormat::Table => {
            let _ = writeln!(out, "{}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
