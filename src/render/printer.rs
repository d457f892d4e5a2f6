//! Pretty-printing of library and user listings
//!
//! Log text from the service carries inline color markers (`<g>`, `<r>`,
//! `<b>`, `<y>` and matching closers) which are substituted for ANSI
//! escape codes here, or stripped in plain mode. Unknown tags pass
//! through untouched.

use std::io::{self, Write};

use regex::{Captures, Regex};
use serde_json::Value;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Renderer writing formatted listings to any [`Write`] sink
pub struct Printer<W> {
    out: W,
    color: bool,
    marker: Regex,
}

impl<W: Write> Printer<W> {
    /// Create a colorizing printer
    pub fn new(out: W) -> Self {
        Self::with_color(out, true)
    }

    /// Create a printer that strips color markers instead of mapping them
    pub fn plain(out: W) -> Self {
        Self::with_color(out, false)
    }

    fn with_color(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            marker: Regex::new("</?[A-Za-z]+>").expect("marker pattern is valid"),
        }
    }

    /// Render one library record in full: header, packages, log
    pub fn library_info(&mut self, library: &Value) -> io::Result<()> {
        writeln!(
            self.out,
            "{}{}{} (id: {})",
            self.style(BOLD),
            text(library, "name_version"),
            self.style(RESET),
            text(library, "id"),
        )?;
        writeln!(self.out, "Owner: {}", text(library, "owner"))?;
        writeln!(
            self.out,
            "Initial submit on: {}",
            text(library, "created_on")
        )?;
        writeln!(self.out)?;

        writeln!(self.out, "Packages:")?;
        if let Some(packages) = library.get("packages").and_then(Value::as_array) {
            for package in packages {
                let generated = text(package, "generated") == "true";
                writeln!(
                    self.out,
                    "  {}{}{} (id: {})",
                    if generated { self.style(BOLD) } else { "" },
                    text(package, "name"),
                    self.style(RESET),
                    text(package, "id"),
                )?;
            }
        }
        writeln!(self.out)?;

        writeln!(self.out, "Log:")?;
        let log = indent(&text(library, "log"));
        writeln!(self.out, "{}", self.colorize(&log))
    }

    /// Render one line per library, sorted by `name_version`
    pub fn library_list(&mut self, libraries: &[Value]) -> io::Result<()> {
        let mut sorted: Vec<&Value> = libraries.iter().collect();
        sorted.sort_by_key(|l| text(l, "name_version"));
        for library in sorted {
            writeln!(
                self.out,
                "{} (id: {})",
                text(library, "name_version"),
                text(library, "id"),
            )?;
        }
        Ok(())
    }

    /// Render one line per user, sorted by `username`
    pub fn user_list(&mut self, users: &[Value]) -> io::Result<()> {
        let mut sorted: Vec<&Value> = users.iter().collect();
        sorted.sort_by_key(|u| text(u, "username"));
        for user in sorted {
            writeln!(
                self.out,
                "{} (id: {}; {})",
                text(user, "username"),
                text(user, "id"),
                text(user, "rights"),
            )?;
        }
        Ok(())
    }

    /// Render a sorted bullet list of choice strings
    pub fn list_choices(&mut self, choices: &[String]) -> io::Result<()> {
        let mut sorted: Vec<&String> = choices.iter().collect();
        sorted.sort();
        for choice in sorted {
            writeln!(self.out, "- {choice}")?;
        }
        Ok(())
    }

    fn style(&self, code: &'static str) -> &'static str {
        if self.color {
            code
        } else {
            ""
        }
    }

    fn colorize(&self, log: &str) -> String {
        self.marker
            .replace_all(log, |caps: &Captures| {
                let replacement = match &caps[0] {
                    "<g>" => "\x1b[32m",
                    "<r>" => "\x1b[31m",
                    "<b>" => "\x1b[34m",
                    "<y>" => "\x1b[33m",
                    "</g>" | "</r>" | "</b>" | "</y>" => RESET,
                    other => return other.to_string(),
                };
                if self.color {
                    replacement.to_string()
                } else {
                    String::new()
                }
            })
            .into_owned()
    }
}

/// String form of a record field; numbers render as-is, missing as empty
fn text(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Indent every line by two spaces
fn indent(log: &str) -> String {
    log.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
