//! Output rendering.
//!
//! Renderers take a finished [`Trending`] map and write it out. This is the
//! only layer that knows about placeholder text for missing fields.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::content_type::ContentType;
use crate::error::Result;
use crate::result::Trending;

mod json;
mod table;
mod text;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// One colourised entry per record.
    #[default]
    Default,
    /// Bordered, left-aligned table.
    Table,
    /// The ordered map as pretty-printed JSON.
    Json,
}

impl Format {
    pub const ALL: [Self; 3] = [Self::Default, Self::Table, Self::Json];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Table => "table",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown format: {s} (expected default, table or json)"))
    }
}

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colours in the default format.
    ///
    /// Default: `true`
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Write `trending` to `out` in `format`.
pub fn render<W: Write>(
    trending: &Trending,
    format: Format,
    options: &RenderOptions,
    out: &mut W,
) -> Result<()> {
    match format {
        Format::Default => text::render(trending, options, out),
        Format::Table => table::render(trending, out),
        Format::Json => json::render(trending, out),
    }
}

/// Render into a `String`.
pub fn render_to_string(trending: &Trending, format: Format, options: &RenderOptions) -> Result<String> {
    let mut buf = Vec::new();
    render(trending, format, options, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Message shown instead of a listing when the page reports no results.
#[must_use]
pub fn empty_message(content_type: ContentType) -> String {
    format!("There were no trending {content_type} for your selection.")
}
