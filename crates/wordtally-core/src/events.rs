//! Page interaction event log.
//!
//! Records view and click events as one-line entries of the form
//! `<timestamp>, <kind>, <object type>: <description>`, keeping only the
//! newest [`DEFAULT_EVENT_LOG_CAPACITY`] entries. Each entry is also emitted
//! through `tracing`.
//!
//! Clicked elements are described by a small [`Element`] model so that
//! recorded interactions can be classified and replayed outside a browser.

use std::collections::VecDeque;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EventError, EventResult};
use crate::stats::is_space;

/// Entries kept by a default event log.
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 15;

/// Characters of element text kept in a description.
const DESCRIPTION_MAX_CHARS: usize = 30;

/// Kind of page event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// The page (or part of it) became visible.
    View,
    /// An element was clicked.
    Click,
}

impl EventKind {
    /// Returns the event kind as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Click => "click",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A page element involved in an interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Element {
    /// Tag name (`A`, `BUTTON`, `div`, ...); compared case-insensitively.
    pub tag: String,
    /// CSS classes.
    pub classes: Vec<String>,
    /// `alt` attribute.
    pub alt: Option<String>,
    /// `title` attribute.
    pub title: Option<String>,
    /// Rendered text content.
    pub text: Option<String>,
    /// `id` attribute.
    pub id: Option<String>,
    /// Enclosing element.
    pub parent: Option<Box<Element>>,
}

impl Element {
    /// Create an element with the given tag and nothing else.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Add a CSS class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the rendered text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the `alt` attribute.
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Set the `title` attribute.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the `id` attribute.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Nest this element inside `parent`.
    pub fn with_parent(mut self, parent: Self) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Whether the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Enclosing elements, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(self.parent.as_deref(), |e| e.parent.as_deref())
    }
}

/// Classify an element for the event log.
pub fn element_type(element: &Element) -> String {
    let by_tag = match element.tag.to_ascii_uppercase().as_str() {
        "A" => Some("link"),
        "BUTTON" => Some("button"),
        "IMG" => Some("image"),
        "INPUT" => Some("input"),
        "SELECT" => Some("dropdown"),
        "TEXTAREA" => Some("textbox"),
        _ => None,
    };
    if let Some(kind) = by_tag {
        return kind.to_string();
    }

    for (class, kind) in [
        ("gallery-item", "gallery-item"),
        ("social-icon", "social-icon"),
        ("nav-links", "navigation"),
        ("hamburger", "menu-toggle"),
    ] {
        if element.has_class(class) {
            return kind.to_string();
        }
    }

    for ancestor in element.ancestors() {
        for class in ["gallery-item", "social-icon"] {
            if ancestor.has_class(class) {
                return class.to_string();
            }
        }
    }

    element.tag.to_lowercase()
}

/// Describe an element for the event log.
pub fn element_description(element: &Element) -> String {
    if let Some(alt) = non_empty(element.alt.as_deref()) {
        return alt.to_string();
    }
    if let Some(title) = non_empty(element.title.as_deref()) {
        return title.to_string();
    }
    if let Some(text) = element.text.as_deref()
        && let Some(snippet) = snippet(text)
    {
        return snippet;
    }
    if let Some(id) = non_empty(element.id.as_deref()) {
        return format!("id: {id}");
    }
    for ancestor in element.ancestors() {
        if let Some(text) = ancestor.text.as_deref()
            && let Some(snippet) = snippet(text)
        {
            return format!("parent text: {snippet}");
        }
    }
    format!("{} element", element.tag.to_lowercase())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Trimmed text cut to [`DESCRIPTION_MAX_CHARS`], with `...` when the
/// untrimmed text was longer. `None` for blank text.
fn snippet(text: &str) -> Option<String> {
    let trimmed = text.trim_matches(is_space);
    if trimmed.is_empty() {
        return None;
    }
    let mut out: String = trimmed.chars().take(DESCRIPTION_MAX_CHARS).collect();
    if text.chars().count() > DESCRIPTION_MAX_CHARS {
        out.push_str("...");
    }
    Some(out)
}

/// One logged event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventEntry {
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// Event kind.
    pub kind: EventKind,
    /// What was interacted with (`page`, `link`, `button`, ...).
    pub object_type: String,
    /// Short human-readable description.
    pub description: String,
}

impl std::fmt::Display for EventEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}: {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.kind,
            self.object_type,
            self.description
        )
    }
}

/// Bounded, newest-first event log.
#[derive(Debug, Clone)]
pub struct EventLog {
    capacity: usize,
    entries: VecDeque<EventEntry>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_EVENT_LOG_CAPACITY,
            entries: VecDeque::with_capacity(DEFAULT_EVENT_LOG_CAPACITY + 1),
        }
    }
}

impl EventLog {
    /// Create a log that keeps at most `capacity` entries.
    pub fn new(capacity: usize) -> EventResult<Self> {
        if capacity == 0 {
            return Err(EventError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            entries: VecDeque::with_capacity(capacity + 1),
        })
    }

    /// Maximum number of retained entries.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retained entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &EventEntry> {
        self.entries.iter()
    }

    /// Record an event stamped with the current time.
    pub fn record(
        &mut self,
        kind: EventKind,
        object_type: impl Into<String>,
        description: impl Into<String>,
    ) -> &EventEntry {
        self.record_at(Utc::now(), kind, object_type, description)
    }

    /// Record an event with an explicit timestamp.
    pub fn record_at(
        &mut self,
        timestamp: DateTime<Utc>,
        kind: EventKind,
        object_type: impl Into<String>,
        description: impl Into<String>,
    ) -> &EventEntry {
        let entry = EventEntry {
            timestamp,
            kind,
            object_type: object_type.into(),
            description: description.into(),
        };
        tracing::info!(
            kind = %entry.kind,
            object_type = %entry.object_type,
            description = %entry.description,
            "{entry}"
        );

        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
        &self.entries[0]
    }

    /// Record the initial page view.
    pub fn page_loaded(&mut self) -> &EventEntry {
        self.record(EventKind::View, "page", "Page loaded")
    }

    /// Record the page becoming visible again.
    pub fn page_visible(&mut self) -> &EventEntry {
        self.record(EventKind::View, "page", "Page became visible")
    }

    /// Record a click on `element`.
    pub fn click(&mut self, element: &Element) -> &EventEntry {
        self.record(
            EventKind::Click,
            element_type(element),
            element_description(element),
        )
    }

    /// Apply one recorded interaction. Returns the entry it produced, if any.
    pub fn apply(&mut self, interaction: &Interaction) -> Option<&EventEntry> {
        let timestamp = interaction.timestamp().unwrap_or_else(Utc::now);
        match interaction {
            Interaction::Load { .. } => {
                Some(self.record_at(timestamp, EventKind::View, "page", "Page loaded"))
            }
            Interaction::Visibility { visible: true, .. } => Some(self.record_at(
                timestamp,
                EventKind::View,
                "page",
                "Page became visible",
            )),
            Interaction::Visibility { visible: false, .. } => None,
            Interaction::Click { target, .. } => Some(self.record_at(
                timestamp,
                EventKind::Click,
                element_type(target),
                element_description(target),
            )),
        }
    }
}

/// A recorded page interaction, as read from a replay file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum Interaction {
    /// The page finished loading.
    Load {
        /// When it happened; defaults to replay time.
        #[serde(default)]
        at: Option<DateTime<Utc>>,
    },
    /// The page visibility changed. Only becoming visible is logged.
    Visibility {
        /// Whether the page is now visible.
        visible: bool,
        /// When it happened; defaults to replay time.
        #[serde(default)]
        at: Option<DateTime<Utc>>,
    },
    /// An element was clicked.
    Click {
        /// The clicked element.
        target: Element,
        /// When it happened; defaults to replay time.
        #[serde(default)]
        at: Option<DateTime<Utc>>,
    },
}

impl Interaction {
    /// The recorded time, if any.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Load { at } | Self::Visibility { at, .. } | Self::Click { at, .. } => *at,
        }
    }
}

/// Parse a JSON array of recorded interactions.
pub fn parse_interactions(json: &str) -> EventResult<Vec<Interaction>> {
    Ok(serde_json::from_str(json)?)
}

/// Replay `interactions` into a fresh log of `capacity` entries.
#[tracing::instrument(skip(interactions), fields(count = interactions.len()))]
pub fn replay(interactions: &[Interaction], capacity: usize) -> EventResult<EventLog> {
    let mut log = EventLog::new(capacity)?;
    for interaction in interactions {
        log.apply(interaction);
    }
    tracing::debug!(retained = log.len(), "replayed interactions");
    Ok(log)
}
