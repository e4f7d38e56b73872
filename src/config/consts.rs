// src/config/consts.rs

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const SETTINGS_FILE: &str = "settings.cfg";

// Page anchors
pub const ALBUM_TOOLS: &str = "span.label.smallfont > span#albumtools";
pub const COVER_ART: &str = "#coverart";
pub const TITLE_JA: &str = r#".albumtitle[lang="ja"]"#;
pub const TITLE_EN: &str = r#".albumtitle[lang="en"]"#;
pub const INFO_TABLE_CELLS: &str = "#album_infobit_large td";
pub const TRACKLIST_TABS: &str = r#"a[rel^="tl"]"#;
pub const TRACKLIST_PANEL: &str = "span.tl";
pub const TRACK_ROW: &str = "tr.rolebit";
pub const TRACK_NUMBER: &str = ".label";
pub const TRACK_NAME: &str = r#"td[width="100%"]"#;

// Info table labels
pub const LABEL_CATALOG: &str = "Catalog Number";
pub const LABEL_RELEASE_DATE: &str = "Release Date";

// Which tracklist tab to read
pub const TRACKLIST_LANGUAGE: &str = "japanese";

// Placeholders
pub const UNKNOWN_TITLE: &str = "Unknown";
pub const UNKNOWN_DATE: &str = "Unknown Date";

// User-facing text
pub const COPIED_MESSAGE: &str = "Copied to clipboard";
pub const ALERT_MESSAGE: &str = "Error occurred, please check the log!";

// Feedback timings (ms)
pub const FADE_MS: u64 = 500;
pub const TOOLTIP_HOLD_MS: u64 = 500;
pub const TOOLTIP_OFFSET: f32 = 5.0;
