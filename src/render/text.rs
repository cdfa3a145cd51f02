use std::io::Write;

use crossterm::style::{style, Color, Stylize};

use super::RenderOptions;
use crate::error::Result;
use crate::result::{DeveloperRecord, RepositoryRecord, Trending, TrendingRecord};

const KEY_COLOR: Color = Color::DarkGreen;
const DETAIL_COLOR: Color = Color::DarkBlue;
const STARS_COLOR: Color = Color::DarkYellow;
const DESCRIPTION_COLOR: Color = Color::DarkRed;

const UNKNOWN_DESCRIPTION: &str = "<Unknown Description>";
const UNKNOWN_LANGUAGE: &str = "<Unknown Language>";
const UNKNOWN_REPOSITORY: &str = "<Unknown Repository>";
const UNKNOWN_STARS: &str = "<Unknown Stars>";
const UNKNOWN_USER: &str = "<Unknown>";

pub(super) fn render<W: Write>(trending: &Trending, options: &RenderOptions, out: &mut W) -> Result<()> {
    for record in trending {
        match record {
            TrendingRecord::Repository(r) => write_repository(r, options.color, out)?,
            TrendingRecord::Developer(d) => write_developer(d, options.color, out)?,
        }
    }
    Ok(())
}

fn write_repository<W: Write>(r: &RepositoryRecord, color: bool, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "➜ {} [{}, ★ {}]:  {}",
        paint(&r.full_name, KEY_COLOR, color),
        paint(or_unknown(r.language.as_deref(), UNKNOWN_LANGUAGE), DETAIL_COLOR, color),
        paint(or_unknown(r.stars.as_deref(), UNKNOWN_STARS), STARS_COLOR, color),
        paint(or_unknown(r.description.as_deref(), UNKNOWN_DESCRIPTION), DESCRIPTION_COLOR, color),
    )?;
    Ok(())
}

fn write_developer<W: Write>(d: &DeveloperRecord, color: bool, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "➜ {} ({})\n  {}: {}",
        paint(&d.name, KEY_COLOR, color),
        paint(or_unknown_if_empty(&d.user_id, UNKNOWN_USER), KEY_COLOR, color),
        paint(or_unknown(d.repository.as_deref(), UNKNOWN_REPOSITORY), DETAIL_COLOR, color),
        paint(or_unknown(d.description.as_deref(), UNKNOWN_DESCRIPTION), DESCRIPTION_COLOR, color),
    )?;
    Ok(())
}

fn or_unknown<'a>(value: Option<&'a str>, sentinel: &'a str) -> &'a str {
    value.unwrap_or(sentinel)
}

/// The login node can be present with no text in it.
fn or_unknown_if_empty<'a>(value: &'a str, sentinel: &'a str) -> &'a str {
    if value.is_empty() {
        sentinel
    } else {
        value
    }
}

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}
