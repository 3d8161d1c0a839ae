use crate::kernel::effect::Effect;
use crate::kernel::session::Document;

/// Lifecycle of the embedded rendering surface.
///
/// The surface is instantiated and torn down outside the kernel; it signals
/// readiness asynchronously, after which the host may evaluate scripts in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgePhase {
    Detached,
    AwaitingReady,
    Ready,
}

/// Mediates between the authoritative session buffers and the rendering
/// surface's string protocol.
///
/// `last_pushed_content` tracks the content the surface is known to hold:
/// values the host pushed, and values the surface itself reported. Sync
/// passes skip anything that matches it (no redundant pushes, no clobbering
/// of in-progress edits), and incoming notifications that match it are
/// echoes of our own pushes and are dropped.
///
/// Nothing is queued while the surface initializes; [`EditorBridge::sync`]
/// derives pushes from current state, so the first thing a freshly ready
/// surface sees is the document active at that instant, however many tab
/// switches happened before.
#[derive(Debug)]
pub struct EditorBridge {
    phase: BridgePhase,
    last_pushed_content: Option<String>,
    last_pushed_language: Option<&'static str>,
}

impl Default for EditorBridge {
    fn default() -> Self {
        Self {
            phase: BridgePhase::Detached,
            last_pushed_content: None,
            last_pushed_language: None,
        }
    }
}

impl EditorBridge {
    pub fn phase(&self) -> BridgePhase {
        self.phase
    }

    /// Surface instantiated and page loaded; readiness signal pending.
    pub fn attach(&mut self) {
        self.phase = BridgePhase::AwaitingReady;
        self.last_pushed_content = None;
        self.last_pushed_language = None;
    }

    /// Readiness signal from the surface. Ignored unless one is awaited
    /// (a ready callback from a surface we already detached is stale).
    pub fn ready(&mut self) -> bool {
        if self.phase != BridgePhase::AwaitingReady {
            tracing::warn!(phase = ?self.phase, "unexpected surface ready signal");
            return false;
        }
        self.phase = BridgePhase::Ready;
        true
    }

    /// Surface destroyed. Push tracking dies with it; a replacement surface
    /// starts from a clean slate.
    pub fn detach(&mut self) {
        self.phase = BridgePhase::Detached;
        self.last_pushed_content = None;
        self.last_pushed_language = None;
    }

    /// True when a change notification merely reflects content the surface
    /// already holds (our own push acknowledged back to us).
    pub fn is_echo(&self, content: &str) -> bool {
        self.last_pushed_content.as_deref() == Some(content)
    }

    /// Records content the surface reported as its own. The surface holds
    /// this text already, so the next sync pass must not push it back.
    pub fn note_surface_content(&mut self, content: String) {
        self.last_pushed_content = Some(content);
    }

    /// Pushes the active document's content and language to the surface,
    /// skipping values that match what it already holds. No-op unless Ready.
    pub fn sync(&mut self, active: Option<&Document>) -> Vec<Effect> {
        if self.phase != BridgePhase::Ready {
            return Vec::new();
        }

        let (content, language) = match active {
            Some(doc) => (doc.content.as_str(), doc.language_id),
            None => ("", "plaintext"),
        };

        let mut effects = Vec::new();

        if self.last_pushed_content.as_deref() != Some(content) {
            effects.push(Effect::SurfaceEval(format!(
                "setContent('{}');",
                escape_payload(content)
            )));
            self.last_pushed_content = Some(content.to_string());
        }

        if self.last_pushed_language != Some(language) {
            effects.push(Effect::SurfaceEval(format!("setLanguage('{language}');")));
            self.last_pushed_language = Some(language);
        }

        effects
    }
}

/// Escapes content for embedding in a single-quoted script literal.
///
/// Single pass, so earlier replacements are never re-escaped: backslash,
/// quote, newline and tab become their two-character escape sequences;
/// carriage returns are dropped.
pub fn escape_payload(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for ch in content.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}
