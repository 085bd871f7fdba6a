// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction state machine.
//!
//! Transitions are pure: `(state, event) → (state, effects)`. The controller
//! owns the retained scenes and animations and is the only thing that applies
//! effects, so every interaction rule is testable without a renderer.

use kurbo::Point;

use ffradial_data::SortMode;

/// What the pointer and the sort buttons can do.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// The pointer entered a bar.
    PointerEnter {
        /// The bar's state abbreviation.
        abbrev: String,
        /// Pointer position in scene coordinates.
        pointer: Point,
    },
    /// The pointer moved within the hovered bar.
    PointerMove {
        /// Pointer position in scene coordinates.
        pointer: Point,
    },
    /// The pointer left the hovered bar.
    PointerLeave,
    /// A sort button was clicked. Re-clicking the active one re-sorts too.
    SortClicked(SortMode),
}

/// The current interaction state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// The active sort order.
    pub sort_mode: SortMode,
    /// The hovered state's abbreviation, if any.
    pub hovered: Option<String>,
}

/// Side effects the controller must apply after a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Draw the pie and tooltip for this state, and dim the bars.
    BeginHover {
        /// The hovered state's abbreviation.
        abbrev: String,
        /// Pointer position for the tooltip.
        pointer: Point,
    },
    /// Reposition the tooltip; nothing else changes.
    MoveTooltip {
        /// The new pointer position.
        pointer: Point,
    },
    /// Clear the pie, fade the tooltip out, restore bar opacity.
    EndHover,
    /// Re-sort the data and animate bars to the new layout.
    Resort(SortMode),
}

/// Applies an event to a state, returning the new state and its effects.
pub fn transition(state: &ViewState, event: Event) -> (ViewState, Vec<Effect>) {
    let mut next = state.clone();
    let effects = match event {
        Event::PointerEnter { abbrev, pointer } => {
            next.hovered = Some(abbrev.clone());
            vec![Effect::BeginHover { abbrev, pointer }]
        }
        Event::PointerMove { pointer } => {
            if next.hovered.is_some() {
                vec![Effect::MoveTooltip { pointer }]
            } else {
                // A move with nothing hovered is a stale event; ignore it.
                Vec::new()
            }
        }
        Event::PointerLeave => {
            if next.hovered.take().is_some() {
                vec![Effect::EndHover]
            } else {
                Vec::new()
            }
        }
        Event::SortClicked(mode) => {
            next.sort_mode = mode;
            vec![Effect::Resort(mode)]
        }
    };
    (next, effects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(abbrev: &str) -> Event {
        Event::PointerEnter {
            abbrev: abbrev.to_string(),
            pointer: Point::new(10.0, 10.0),
        }
    }

    #[test]
    fn enter_then_leave_returns_to_the_initial_state() {
        let initial = ViewState::default();
        let (hovering, effects) = transition(&initial, enter("WY"));
        assert_eq!(hovering.hovered.as_deref(), Some("WY"));
        assert!(matches!(&effects[..], [Effect::BeginHover { abbrev, .. }] if abbrev == "WY"));

        let (idle, effects) = transition(&hovering, Event::PointerLeave);
        assert_eq!(idle, initial);
        assert_eq!(effects, vec![Effect::EndHover]);
    }

    #[test]
    fn moving_while_hovering_only_moves_the_tooltip() {
        let (hovering, _) = transition(&ViewState::default(), enter("AL"));
        let (state, effects) = transition(
            &hovering,
            Event::PointerMove {
                pointer: Point::new(42.0, 7.0),
            },
        );
        assert_eq!(state, hovering);
        assert_eq!(
            effects,
            vec![Effect::MoveTooltip {
                pointer: Point::new(42.0, 7.0)
            }]
        );
    }

    #[test]
    fn stale_pointer_events_are_ignored_when_idle() {
        let idle = ViewState::default();
        let (state, effects) = transition(
            &idle,
            Event::PointerMove {
                pointer: Point::ORIGIN,
            },
        );
        assert_eq!(state, idle);
        assert!(effects.is_empty());

        let (state, effects) = transition(&idle, Event::PointerLeave);
        assert_eq!(state, idle);
        assert!(effects.is_empty());
    }

    #[test]
    fn hovering_a_second_bar_switches_without_an_explicit_leave() {
        let (first, _) = transition(&ViewState::default(), enter("AL"));
        let (second, effects) = transition(&first, enter("WY"));
        assert_eq!(second.hovered.as_deref(), Some("WY"));
        assert!(matches!(&effects[..], [Effect::BeginHover { abbrev, .. }] if abbrev == "WY"));
    }

    #[test]
    fn sorting_keeps_the_hover() {
        let (hovering, _) = transition(&ViewState::default(), enter("AL"));
        let (state, effects) =
            transition(&hovering, Event::SortClicked(SortMode::ByTotalPerCapita));
        assert_eq!(state.hovered.as_deref(), Some("AL"));
        assert_eq!(state.sort_mode, SortMode::ByTotalPerCapita);
        assert_eq!(effects, vec![Effect::Resort(SortMode::ByTotalPerCapita)]);
    }

    #[test]
    fn reclicking_the_active_sort_still_resorts() {
        let state = ViewState::default();
        let (next, effects) = transition(&state, Event::SortClicked(SortMode::ByState));
        assert_eq!(next.sort_mode, SortMode::ByState);
        assert_eq!(effects, vec![Effect::Resort(SortMode::ByState)]);
    }
}
