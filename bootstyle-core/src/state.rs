// SPDX-License-Identifier: LGPL-3.0-only

//! Visual states and ordered state maps.
//!
//! A [StateSpec] is evaluated top-down by the host and the first matching
//! [StateExpr] wins, so entries must be listed most-specific-first:
//! `"focus pressed"` before `"pressed"`, and the empty expression last.

use std::fmt::{self, Display, Formatter};

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// One toolkit widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VisualState {
    /// Pointer over the widget.
    Hover,
    /// Mouse button held down.
    Pressed,
    /// Keyboard focus.
    Focus,
    /// Checked, selected or on.
    Selected,
    /// Not interactive.
    Disabled,
    /// Text input is read-only.
    Readonly,
    /// Content failed validation.
    Invalid,
    /// Tri-state or secondary look.
    Alternate,
}

impl VisualState {
    /// The toolkit state name.
    pub fn as_str(self) -> &'static str {
        match self {
            VisualState::Hover => "hover",
            VisualState::Pressed => "pressed",
            VisualState::Focus => "focus",
            VisualState::Selected => "selected",
            VisualState::Disabled => "disabled",
            VisualState::Readonly => "readonly",
            VisualState::Invalid => "invalid",
            VisualState::Alternate => "alternate",
        }
    }

    /// Parse a toolkit state name.
    pub fn from_name(name: &str) -> Option<Self> {
        let state = match name {
            "hover" => VisualState::Hover,
            "pressed" => VisualState::Pressed,
            "focus" => VisualState::Focus,
            "selected" => VisualState::Selected,
            "disabled" => VisualState::Disabled,
            "readonly" => VisualState::Readonly,
            "invalid" => VisualState::Invalid,
            "alternate" => VisualState::Alternate,
            _ => return None,
        };
        Some(state)
    }
}

/// A condition on one state: the state is set, or (negated) it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateAtom {
    /// The state tested.
    pub state: VisualState,
    /// `true` for `!state`.
    pub negated: bool,
}

/// A conjunction of state conditions, e.g. `"focus !selected"`.
///
/// The empty expression matches every state and stands for `normal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StateExpr(Vec<StateAtom>);

impl StateExpr {
    /// The empty expression.
    pub fn normal() -> Self {
        Self::default()
    }

    /// All of `states` set.
    pub fn all(states: impl IntoIterator<Item = VisualState>) -> Self {
        states.into_iter().fold(Self::normal(), Self::and)
    }

    /// `!state`.
    pub fn not(state: VisualState) -> Self {
        Self::normal().and_not(state)
    }

    /// Add a condition that `state` is set.
    pub fn and(self, state: VisualState) -> Self {
        self.with_atom(StateAtom { state, negated: false })
    }

    /// Add a condition that `state` is not set.
    pub fn and_not(self, state: VisualState) -> Self {
        self.with_atom(StateAtom { state, negated: true })
    }

    fn with_atom(mut self, atom: StateAtom) -> Self {
        if !self.0.contains(&atom) {
            self.0.push(atom);
        }
        self
    }

    /// Parse `"focus !selected"`. Unknown state names yield `None`.
    pub fn parse(text: &str) -> Option<Self> {
        text.split_whitespace().try_fold(Self::normal(), |expr, word| {
            match word.strip_prefix('!') {
                Some(name) => VisualState::from_name(name).map(|state| expr.and_not(state)),
                None => VisualState::from_name(word).map(|state| expr.and(state)),
            }
        })
    }

    /// The conditions in order.
    pub fn atoms(&self) -> &[StateAtom] {
        &self.0
    }

    /// Whether this is the empty expression.
    pub fn is_normal(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the expression holds for a widget in exactly `active` states.
    pub fn matches(&self, active: &[VisualState]) -> bool {
        self.0
            .iter()
            .all(|atom| active.contains(&atom.state) != atom.negated)
    }

    /// Whether every condition of `self` also appears in `other`, and `other` has more.
    pub fn is_strict_subset_of(&self, other: &StateExpr) -> bool {
        self.0.len() < other.0.len() && self.0.iter().all(|atom| other.0.contains(atom))
    }
}

impl Display for StateExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, atom) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if atom.negated {
                f.write_str("!")?;
            }
            f.write_str(atom.state.as_str())?;
        }
        Ok(())
    }
}

impl From<VisualState> for StateExpr {
    fn from(state: VisualState) -> Self {
        Self::normal().and(state)
    }
}

impl<const N: usize> From<[VisualState; N]> for StateExpr {
    fn from(states: [VisualState; N]) -> Self {
        Self::all(states)
    }
}

impl Serialize for StateExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered `(state expression, value)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpec<T> {
    entries: Vec<(StateExpr, T)>,
}

impl<T> StateSpec<T> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append an entry.
    pub fn push(&mut self, expr: impl Into<StateExpr>, value: T) {
        self.entries.push((expr.into(), value));
    }

    /// Builder-style [push](Self::push).
    pub fn with(mut self, expr: impl Into<StateExpr>, value: T) -> Self {
        self.push(expr, value);
        self
    }

    /// Append the `normal` fallback.
    pub fn otherwise(self, value: T) -> Self {
        self.with(StateExpr::normal(), value)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateExpr, &T)> {
        self.entries.iter().map(|(expr, value)| (expr, value))
    }

    /// The value for the `normal` state, if the map has one.
    pub fn normal(&self) -> Option<&T> {
        self.entries
            .iter()
            .find(|(expr, _)| expr.is_normal())
            .map(|(_, value)| value)
    }

    /// The value the host would pick for a widget in exactly `active` states.
    pub fn resolve(&self, active: &[VisualState]) -> Option<&T> {
        self.entries
            .iter()
            .find(|(expr, _)| expr.matches(active))
            .map(|(_, value)| value)
    }

    /// Transform every value, keeping the order.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> StateSpec<U> {
        StateSpec {
            entries: self.entries.iter().map(|(expr, value)| (expr.clone(), f(value))).collect(),
        }
    }

    /// Fallible [map](Self::map).
    pub fn try_map<U, E>(&self, mut f: impl FnMut(&T) -> Result<U, E>) -> Result<StateSpec<U>, E> {
        let mut entries = Vec::with_capacity(self.entries.len());
        for (expr, value) in &self.entries {
            entries.push((expr.clone(), f(value)?));
        }
        Ok(StateSpec { entries })
    }

    /// Find the first pair where an earlier entry shadows a later, more specific one.
    ///
    /// Returns `(general, specific)`.
    pub fn ordering_violation(&self) -> Option<(&StateExpr, &StateExpr)> {
        self.entries.iter().enumerate().find_map(|(i, (general, _))| {
            self.entries[i + 1..]
                .iter()
                .find(|(specific, _)| general.is_strict_subset_of(specific))
                .map(|(specific, _)| (general, specific))
        })
    }

    /// Whether no entry shadows a later one.
    pub fn is_well_ordered(&self) -> bool {
        self.ordering_violation().is_none()
    }
}

impl<T> Default for StateSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Serialize for StateSpec<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use VisualState::*;

    #[test]
    fn parses_and_displays() {
        let expr = StateExpr::parse("focus !selected").unwrap();
        assert_eq!(expr, StateExpr::from(Focus).and_not(Selected));
        assert_eq!(expr.to_string(), "focus !selected");
        assert!(StateExpr::parse("").unwrap().is_normal());
        assert!(StateExpr::parse("sleepy").is_none());
    }

    #[test]
    fn first_match_wins() {
        let spec = StateSpec::new()
            .with(Disabled, "grey")
            .with([Focus, Pressed], "dark")
            .with(Pressed, "mid")
            .otherwise("base");
        assert_eq!(spec.resolve(&[Pressed]), Some(&"mid"));
        assert_eq!(spec.resolve(&[Pressed, Focus]), Some(&"dark"));
        assert_eq!(spec.resolve(&[Disabled, Pressed]), Some(&"grey"));
        assert_eq!(spec.resolve(&[]), Some(&"base"));
        assert!(spec.is_well_ordered());
    }

    #[test]
    fn detects_shadowed_entries() {
        let spec = StateSpec::new().with(Pressed, 1).with([Focus, Pressed], 2).otherwise(0);
        let (general, specific) = spec.ordering_violation().unwrap();
        assert_eq!(general.to_string(), "pressed");
        assert_eq!(specific.to_string(), "focus pressed");

        let spec = StateSpec::new().otherwise(0).with(Hover, 1);
        assert!(!spec.is_well_ordered());
    }

    #[test]
    fn negations_are_distinct_conditions() {
        let spec = StateSpec::new()
            .with(StateExpr::not(Selected), 1)
            .with(Selected, 2)
            .otherwise(0);
        assert!(spec.is_well_ordered());
        assert_eq!(spec.resolve(&[Selected]), Some(&2));
    }
}
