//! Appearance dictionaries (`/AP`) of widget annotations.
//!
//! Only the key sets matter here: the appearance kinds present (`/N`, `/D`,
//! `/R`) and, for checkbox-like fields, the state names under each kind. The
//! streams themselves are opaque.

use crate::Name;

/// The normal appearance key.
pub const NORMAL: &str = "N";
/// The down (mouse-pressed) appearance key.
pub const DOWN: &str = "D";

/// One entry of an appearance dictionary.
#[derive(Debug, Clone, PartialEq)]
pub enum AppearanceEntry {
    /// A state dictionary; the state names in stored order.
    States(Vec<Name>),
    /// A single appearance stream with no states.
    Stream,
    /// Any other object kind, e.g. a malformed entry.
    Other(String),
}

impl AppearanceEntry {
    /// The kind of object this entry is, for diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            Self::States(_) => "dictionary",
            Self::Stream => "stream",
            Self::Other(kind) => kind,
        }
    }

    /// The state names, if this entry is a state dictionary.
    pub fn states(&self) -> Option<&[Name]> {
        match self {
            Self::States(states) => Some(states),
            _ => None,
        }
    }

    /// The first state that is not `Off`.
    fn first_on_state(&self) -> Option<&Name> {
        self.states()?.iter().find(|state| !state.is_off())
    }
}

/// A field's appearance dictionary, reduced to its key sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppearanceDict {
    /// Appearance kinds present, in stored order.
    pub kinds: Vec<Name>,
    /// The `/N` entry.
    pub normal: Option<AppearanceEntry>,
    /// The `/D` entry.
    pub down: Option<AppearanceEntry>,
}

impl AppearanceDict {
    /// Create an empty appearance dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `/N` entry to a state dictionary with the given states.
    pub fn normal_states<'a>(mut self, states: impl IntoIterator<Item = &'a str>) -> Self {
        self.push_kind(NORMAL);
        self.normal = Some(AppearanceEntry::States(
            states.into_iter().map(Name::new).collect(),
        ));
        self
    }

    /// Set the `/D` entry to a state dictionary with the given states.
    pub fn down_states<'a>(mut self, states: impl IntoIterator<Item = &'a str>) -> Self {
        self.push_kind(DOWN);
        self.down = Some(AppearanceEntry::States(
            states.into_iter().map(Name::new).collect(),
        ));
        self
    }

    /// Set the `/N` entry to a single appearance stream.
    pub fn normal_stream(mut self) -> Self {
        self.push_kind(NORMAL);
        self.normal = Some(AppearanceEntry::Stream);
        self
    }

    fn push_kind(&mut self, kind: &str) {
        let kind = Name::new(kind);
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
    }

    /// Whether the dictionary has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// The state name meaning "checked": the first non-`Off` state under
    /// `/D`, else under `/N`.
    ///
    /// Some forms omit the normal states but keep a down state with the
    /// correct label, so `/D` is consulted first.
    pub fn on_state(&self) -> Option<Name> {
        self.down
            .as_ref()
            .and_then(AppearanceEntry::first_on_state)
            .or_else(|| self.normal.as_ref().and_then(AppearanceEntry::first_on_state))
            .cloned()
    }

    /// The state names to show in diagnostics: `/N` states, else `/D`
    /// states, else the appearance kinds themselves.
    pub fn display_states(&self) -> Vec<Name> {
        self.normal
            .as_ref()
            .and_then(AppearanceEntry::states)
            .or_else(|| self.down.as_ref().and_then(AppearanceEntry::states))
            .unwrap_or(self.kinds.as_slice())
            .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_records_kinds_in_order() {
        let ap = AppearanceDict::new()
            .down_states(["Off", "On"])
            .normal_states(["Off", "On"]);
        assert_eq!(ap.kinds, vec![Name::new("D"), Name::new("N")]);
        assert!(!ap.is_empty());
        assert!(AppearanceDict::new().is_empty());
    }

    #[test]
    fn on_state_prefers_down() {
        let ap = AppearanceDict::new()
            .normal_states(["Off", "Yes"])
            .down_states(["Off", "Pressed"]);
        assert_eq!(ap.on_state(), Some(Name::new("Pressed")));
    }

    #[test]
    fn on_state_falls_back_to_normal() {
        let ap = AppearanceDict::new()
            .down_states(["Off"])
            .normal_states(["Off", "1"]);
        assert_eq!(ap.on_state(), Some(Name::new("1")));
    }

    #[test]
    fn on_state_uses_stored_order() {
        let ap = AppearanceDict::new().normal_states(["B", "Off", "A"]);
        assert_eq!(ap.on_state(), Some(Name::new("B")));
    }

    #[test]
    fn on_state_none_for_streams_and_off_only() {
        assert_eq!(AppearanceDict::new().normal_stream().on_state(), None);
        assert_eq!(AppearanceDict::new().normal_states(["Off"]).on_state(), None);
    }

    #[test]
    fn display_states_prefers_normal() {
        let ap = AppearanceDict::new()
            .down_states(["Off", "Down"])
            .normal_states(["Off", "Yes"]);
        assert_eq!(ap.display_states(), vec![Name::off(), Name::yes()]);
    }

    #[test]
    fn display_states_falls_back_to_kinds() {
        let ap = AppearanceDict::new().normal_stream();
        assert_eq!(ap.display_states(), vec![Name::new("N")]);
    }

    #[test]
    fn entry_kind() {
        assert_eq!(AppearanceEntry::States(vec![]).kind(), "dictionary");
        assert_eq!(AppearanceEntry::Stream.kind(), "stream");
        assert_eq!(AppearanceEntry::Other("integer".into()).kind(), "integer");
    }
}
