// src/diagnostics.rs
/// Sink for the diagnostic messages the pipelines emit (missing tracklist tab,
/// unparseable date, caught pipeline errors).
/// Frontends decide where they go: the log file, the GUI log panel, a test.
pub trait Diagnostics {
    fn warn(&mut self, _msg: &str) {}

    fn error(&mut self, _msg: &str) {}
}

/// Drops everything.
pub struct NullDiagnostics;
impl Diagnostics for NullDiagnostics {}

/// Forwards to the `log` facade (file sink when installed).
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&mut self, msg: &str) {
        logw!("{msg}");
    }
    fn error(&mut self, msg: &str) {
        loge!("{msg}");
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Warn,
    Error,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub level: Level,
    pub message: String,
}

/// Keeps entries in memory (GUI log panel) and forwards them to the logger.
#[derive(Default, Debug)]
pub struct DiagnosticsLog {
    entries: Vec<Entry>,
}

impl DiagnosticsLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.by_level(Level::Warn)
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.by_level(Level::Error)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn by_level(&self, level: Level) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |e| e.level == level)
            .map(|e| e.message.as_str())
    }

    fn push(&mut self, level: Level, msg: &str) {
        self.entries.push(Entry { level, message: s!(msg) });
    }
}

impl Diagnostics for DiagnosticsLog {
    fn warn(&mut self, msg: &str) {
        logw!("{msg}");
        self.push(Level::Warn, msg);
    }
    fn error(&mut self, msg: &str) {
        loge!("{msg}");
        self.push(Level::Error, msg);
    }
}
