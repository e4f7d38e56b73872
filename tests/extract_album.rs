// tests/extract_album.rs
//
// Extractor against saved album pages.
use vgmdb_info::core::{Document, HtmlDocument};
use vgmdb_info::diagnostics::DiagnosticsLog;
use vgmdb_info::format::RawDate;
use vgmdb_info::specs::album::{self, tracklist_text, TrackEntry};

fn page(name: &str) -> HtmlDocument {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    HtmlDocument::from_path(std::path::Path::new(&path)).unwrap()
}

#[test]
fn full_page_yields_every_field() {
    let doc = page("album_full.html");
    let mut diag = DiagnosticsLog::new();
    let rec = album::extract(&doc, &mut diag).unwrap();

    assert_eq!(rec.title, "オクトパストラベラー オリジナル・サウンドトラック");
    assert_eq!(
        rec.cover_art_url.as_deref(),
        Some("https://media.vgm.io/albums/41/79141/79141-1531213394.jpg")
    );
    assert_eq!(rec.catalog_number.as_deref(), Some("SQEX-10627~30"));
    assert_eq!(
        rec.release_date,
        Some(RawDate { month: "Jul".into(), day: "18,".into(), year: "2018".into() })
    );
    assert_eq!(rec.tracklist.len(), 3);
    assert_eq!(
        rec.tracklist[0],
        TrackEntry { number: Some("1-01".into()), name: Some("オクトパストラベラー -メインテーマ-".into()) }
    );
    assert_eq!(diag.entries().len(), 0);
}

#[test]
fn japanese_panel_is_read_in_document_order() {
    let doc = page("album_full.html");
    let tracks = album::tracklist(&doc, &mut DiagnosticsLog::new()).unwrap();
    assert_eq!(
        tracklist_text(&tracks),
        "1-01\tオクトパストラベラー -メインテーマ-\n1-02\t世界の果てで\n1-03\tプリムロゼ、踊子"
    );
}

#[test]
fn missing_japanese_tab_warns_and_returns_empty() {
    let doc = page("album_english_only.html");
    let mut diag = DiagnosticsLog::new();
    let tracks = album::tracklist(&doc, &mut diag).unwrap();

    assert!(tracks.is_empty());
    assert_eq!(tracklist_text(&tracks), "");
    assert_eq!(diag.warnings().collect::<Vec<_>>(), vec!["No Japanese tracklist found!"]);
    assert_eq!(diag.errors().count(), 0);
}

#[test]
fn tab_without_panel_is_empty_not_an_error() {
    let doc = page("album_bare.html");
    let mut diag = DiagnosticsLog::new();
    assert!(album::tracklist(&doc, &mut diag).unwrap().is_empty());
    assert_eq!(diag.warnings().count(), 1);
}

#[test]
fn english_title_is_the_fallback() {
    let doc = page("album_english_only.html");
    assert_eq!(
        album::album_title(&doc).unwrap(),
        "Chrono Cross: Original Soundtrack / Remaster"
    );
}

#[test]
fn empty_japanese_title_falls_through() {
    let doc = HtmlDocument::parse(
        r#"<span class="albumtitle" lang="ja">  </span><span class="albumtitle" lang="en">Xenogears</span>"#,
    );
    assert_eq!(album::album_title(&doc).unwrap(), "Xenogears");
}

#[test]
fn no_title_at_all_is_unknown() {
    let doc = page("album_bare.html");
    assert_eq!(album::album_title(&doc).unwrap(), "Unknown");
}

#[test]
fn sibling_value_is_trimmed_next_cell_or_empty() {
    let doc = page("album_full.html");
    assert_eq!(album::sibling_value(&doc, "Publish Format").unwrap(), "Commercial");
    assert_eq!(album::sibling_value(&doc, "Release Date").unwrap(), "Jul 18, 2018");
    assert_eq!(album::sibling_value(&doc, "Composer").unwrap(), "");
    // exact match on the trimmed text only
    assert_eq!(album::sibling_value(&doc, "Catalog").unwrap(), "");
}

#[test]
fn cover_art_absent_without_background_image() {
    assert_eq!(album::cover_art_url(&page("album_english_only.html")).unwrap(), None);
    assert_eq!(
        album::cover_art_url(&page("album_bare.html")).unwrap().as_deref(),
        Some("https://media.vgm.io/albums/00/1/1.png")
    );
    assert_eq!(album::cover_art_url(&HtmlDocument::parse("<p>no cover</p>")).unwrap(), None);
}

#[test]
fn unparseable_date_degrades_with_warning() {
    let doc = HtmlDocument::parse(
        r#"<table id="album_infobit_large"><tr><td>Release Date</td><td>2019</td></tr></table>"#,
    );
    let mut diag = DiagnosticsLog::new();
    assert_eq!(album::release_date(&doc, &mut diag).unwrap(), None);
    assert_eq!(diag.warnings().count(), 1);
}

#[test]
fn date_warning_quotes_the_cell_on_one_line() {
    let doc = HtmlDocument::parse(
        "<table id=\"album_infobit_large\"><tr><td>Release Date</td><td>Spring\n\t  2019</td></tr></table>",
    );
    let mut diag = DiagnosticsLog::new();
    album::release_date(&doc, &mut diag).unwrap();
    let warning = diag.warnings().next().unwrap();
    assert!(warning.starts_with("Release date \"Spring 2019\" ignored"), "{warning}");
}

#[test]
fn duplicate_panel_ids_read_only_the_first_panel() {
    let doc = HtmlDocument::parse(
        r#"<a rel="tl1">Japanese</a>
           <span class="tl" id="tl1"><table>
             <tr class="rolebit"><td><span class="label">1</span></td><td width="100%">First</td></tr>
           </table></span>
           <span class="tl" id="tl1"><table>
             <tr class="rolebit"><td><span class="label">1</span></td><td width="100%">Copy</td></tr>
           </table></span>"#,
    );
    let tracks = album::tracklist(&doc, &mut DiagnosticsLog::new()).unwrap();
    assert_eq!(tracks, vec![TrackEntry { number: Some("1".into()), name: Some("First".into()) }]);
}

#[test]
fn album_tools_anchor_detection() {
    assert!(album::has_album_tools(&page("album_full.html")).unwrap());
    assert!(!album::has_album_tools(&HtmlDocument::parse("<span id=\"albumtools\"></span>")).unwrap());
}

#[test]
fn missing_cells_in_a_track_row_stay_absent() {
    let doc = HtmlDocument::parse(
        r#"<a rel="tl9">JAPANESE</a>
           <span class="tl" id="tl9"><table>
             <tr class="rolebit"><td width="100%">Untitled</td></tr>
             <tr class="other"><td><span class="label">99</span></td></tr>
           </table></span>"#,
    );
    let tracks = album::tracklist(&doc, &mut DiagnosticsLog::new()).unwrap();
    assert_eq!(tracks, vec![TrackEntry { number: None, name: Some("Untitled".into()) }]);
    assert!(doc.select_first("span.tl").unwrap().is_some());
}
