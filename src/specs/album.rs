// src/specs/album.rs
//! Scraping *spec* for a VGMdb album page.
//!
//! Reads a [`Document`] and produces an [`AlbumRecord`]:
//! - cover art URL from the `#coverart` inline `background-image`
//! - title, Japanese first, then English, then `"Unknown"`
//! - catalog number and release date from the `#album_infobit_large` label table
//! - the Japanese tracklist panel, keyed by its tab's `rel`
//!
//! Missing fields degrade to absent/empty values. Only document failures
//! (bad selectors, unavailable page) come back as `Err`.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::*;
use crate::core::{sanitize::normalize_ws, Document};
use crate::diagnostics::Diagnostics;
use crate::error::PageError;
use crate::format::date::RawDate;

/// Built per click, dropped once the output exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlbumRecord {
    pub title: String,
    pub cover_art_url: Option<String>,
    pub catalog_number: Option<String>,
    pub release_date: Option<RawDate>,
    pub tracklist: Vec<TrackEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackEntry {
    pub number: Option<String>,
    pub name: Option<String>,
}

static CSS_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"url\(\s*["']?(.*?)["']?\s*\)"#).expect("static regex"));

pub fn extract(doc: &dyn Document, diag: &mut dyn Diagnostics) -> Result<AlbumRecord, PageError> {
    let record = AlbumRecord {
        title: album_title(doc)?,
        cover_art_url: cover_art_url(doc)?,
        catalog_number: non_empty(sibling_value(doc, LABEL_CATALOG)?),
        release_date: release_date(doc, diag)?,
        tracklist: tracklist(doc, diag)?,
    };
    logd!(
        "Extract: title={:?}, tracks={}, date={}",
        record.title,
        record.tracklist.len(),
        record.release_date.is_some()
    );
    Ok(record)
}

/// The album-tools anchor the two actions sit next to. Absent on non-album pages.
pub fn has_album_tools(doc: &dyn Document) -> Result<bool, PageError> {
    Ok(doc.select_first(ALBUM_TOOLS)?.is_some())
}

pub fn album_title(doc: &dyn Document) -> Result<String, PageError> {
    for sel in [TITLE_JA, TITLE_EN] {
        if let Some(el) = doc.select_first(sel)? {
            let t = el.text.trim();
            if !t.is_empty() {
                return Ok(s!(t));
            }
        }
    }
    Ok(s!(UNKNOWN_TITLE))
}

pub fn cover_art_url(doc: &dyn Document) -> Result<Option<String>, PageError> {
    let style = doc
        .select_first(COVER_ART)?
        .and_then(|el| el.attr("style").map(str::to_owned));
    Ok(style.as_deref().and_then(background_image_url))
}

/// URL inside `url(...)` of a `background-image` (or `background`) declaration.
pub fn background_image_url(style: &str) -> Option<String> {
    let decl = style.split(';').find_map(|d| {
        let (prop, value) = d.split_once(':')?;
        let prop = prop.trim();
        (prop.eq_ignore_ascii_case("background-image") || prop.eq_ignore_ascii_case("background"))
            .then_some(value)
    })?;
    let url = CSS_URL.captures(decl)?.get(1)?.as_str().trim();
    (!url.is_empty()).then(|| s!(url))
}

/// Value cell next to `label` in the info table; empty string when the label is missing.
pub fn sibling_value(doc: &dyn Document, label: &str) -> Result<String, PageError> {
    Ok(doc.label_value(INFO_TABLE_CELLS, label)?.unwrap_or_default())
}

pub fn release_date(doc: &dyn Document, diag: &mut dyn Diagnostics) -> Result<Option<RawDate>, PageError> {
    let raw = sibling_value(doc, LABEL_RELEASE_DATE)?;
    match RawDate::parse(&raw) {
        Ok(date) => Ok(date),
        Err(e) => {
            diag.warn(&format!("Release date {:?} ignored: {e}", normalize_ws(&raw)));
            Ok(None)
        }
    }
}

pub fn tracklist(doc: &dyn Document, diag: &mut dyn Diagnostics) -> Result<Vec<TrackEntry>, PageError> {
    let tab = doc
        .select_all(TRACKLIST_TABS)?
        .into_iter()
        .find(|a| a.text.trim().to_lowercase() == TRACKLIST_LANGUAGE);

    let Some(rel) = tab.as_ref().and_then(|a| a.attr("rel")) else {
        diag.warn("No Japanese tracklist found!");
        return Ok(Vec::new());
    };

    // Pages with a duplicated panel id only ever show the first one.
    let Some(rows) = doc.select_rows(&panel_selector(rel), TRACK_ROW, &[TRACK_NUMBER, TRACK_NAME])? else {
        diag.warn(&format!("Tracklist panel {rel:?} not found"));
        return Ok(Vec::new());
    };
    Ok(rows
        .into_iter()
        .map(|cells| {
            let mut cells = cells.into_iter().map(|c| c.map(|t| s!(t.trim())));
            TrackEntry {
                number: cells.next().flatten(),
                name: cells.next().flatten(),
            }
        })
        .collect())
}

/// One `"{number}\t{name}"` line per track.
pub fn tracklist_text(entries: &[TrackEntry]) -> String {
    entries
        .iter()
        .map(|t| {
            format!(
                "{}\t{}",
                t.number.as_deref().unwrap_or_default(),
                t.name.as_deref().unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// `rel` values are page data; match the id as an attribute so they never
// need to be valid CSS identifiers.
fn panel_selector(rel: &str) -> String {
    let escaped = rel.replace('\\', "\\\\").replace('"', "\\\"");
    format!(r#"{TRACKLIST_PANEL}[id="{escaped}"]"#)
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}
