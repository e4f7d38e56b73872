// src/core/document.rs
//
// Read-only view of a rendered album page. The extractor only talks to
// `Document`, so tests can hand it a parsed fixture or a fake.

use std::{fs, io, path::Path};

use scraper::{ElementRef, Html, Selector};

use crate::error::PageError;

/// Text and attributes of one matched element, detached from the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementSnapshot {
    /// Concatenated descendant text, untrimmed.
    pub text: String,
    pub attrs: Vec<(String, String)>,
}

impl ElementSnapshot {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub trait Document {
    /// All elements matching `selector`, in document order.
    fn select_all(&self, selector: &str) -> Result<Vec<ElementSnapshot>, PageError>;

    /// Rows under the first element matching `scope`: for every descendant
    /// matching `row_selector`, the text of the first descendant matching each
    /// of `cell_selectors` (`None` when that cell is missing). `Ok(None)` when
    /// nothing matches `scope`.
    fn select_rows(
        &self,
        scope: &str,
        row_selector: &str,
        cell_selectors: &[&str],
    ) -> Result<Option<Vec<Vec<Option<String>>>>, PageError>;

    /// Label/value lookup: first cell matching `cell_selector` whose trimmed
    /// text equals `label`; returns the trimmed text of its next sibling element.
    fn label_value(&self, cell_selector: &str, label: &str) -> Result<Option<String>, PageError>;

    fn select_first(&self, selector: &str) -> Result<Option<ElementSnapshot>, PageError> {
        Ok(self.select_all(selector)?.into_iter().next())
    }
}

/// `scraper`-backed page snapshot.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self { html: Html::parse_document(source) }
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        logd!("Page: read {} ({} bytes)", path.display(), text.len());
        Ok(Self::parse(&text))
    }
}

fn selector(s: &str) -> Result<Selector, PageError> {
    Selector::parse(s).map_err(|e| PageError::Selector {
        selector: s!(s),
        reason: e.to_string(),
    })
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

fn snapshot(el: ElementRef<'_>) -> ElementSnapshot {
    ElementSnapshot {
        text: text_of(el),
        attrs: el
            .value()
            .attrs()
            .map(|(k, v)| (s!(k), s!(v)))
            .collect(),
    }
}

impl Document for HtmlDocument {
    fn select_all(&self, sel: &str) -> Result<Vec<ElementSnapshot>, PageError> {
        let sel = selector(sel)?;
        Ok(self.html.select(&sel).map(snapshot).collect())
    }

    fn select_first(&self, sel: &str) -> Result<Option<ElementSnapshot>, PageError> {
        let sel = selector(sel)?;
        Ok(self.html.select(&sel).next().map(snapshot))
    }

    fn select_rows(
        &self,
        scope: &str,
        row_selector: &str,
        cell_selectors: &[&str],
    ) -> Result<Option<Vec<Vec<Option<String>>>>, PageError> {
        let scope_sel = selector(scope)?;
        let row_sel = selector(row_selector)?;
        let cell_sels = cell_selectors
            .iter()
            .map(|s| selector(s))
            .collect::<Result<Vec<_>, _>>()?;

        let Some(root) = self.html.select(&scope_sel).next() else {
            return Ok(None);
        };
        Ok(Some(
            root.select(&row_sel)
                .map(|row| {
                    cell_sels
                        .iter()
                        .map(|cs| row.select(cs).next().map(text_of))
                        .collect()
                })
                .collect(),
        ))
    }

    fn label_value(&self, cell_selector: &str, label: &str) -> Result<Option<String>, PageError> {
        let sel = selector(cell_selector)?;
        let Some(cell) = self.html.select(&sel).find(|td| text_of(*td).trim() == label) else {
            return Ok(None);
        };
        Ok(cell
            .next_siblings()
            .find_map(ElementRef::wrap)
            .map(|sib| s!(text_of(sib).trim())))
    }
}
