// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolkit-neutral pointer events.

use kurbo::Point;

/// A single pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary (usually left) button.
    Primary,
    /// The secondary (usually right) button.
    Secondary,
    /// The middle button or wheel press.
    Middle,
}

bitflags::bitflags! {
    /// Set of pointer buttons currently held down.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Primary button held.
        const PRIMARY   = 0b0000_0001;
        /// Secondary button held.
        const SECONDARY = 0b0000_0010;
        /// Middle button held.
        const MIDDLE    = 0b0000_0100;
    }
}

impl From<PointerButton> for PointerButtons {
    fn from(button: PointerButton) -> Self {
        match button {
            PointerButton::Primary => Self::PRIMARY,
            PointerButton::Secondary => Self::SECONDARY,
            PointerButton::Middle => Self::MIDDLE,
        }
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// The platform shortcut key (Ctrl, or Cmd on macOS). Used for additive selection.
        const SHORTCUT = 0b0000_0001;
        /// Shift.
        const SHIFT    = 0b0000_0010;
        /// Alt / Option.
        const ALT      = 0b0000_0100;
    }
}

/// A pointer event as seen by the interaction core.
///
/// `consumed` models bubbling: per-item handlers run first and mark the event
/// consumed so that a view-level handler (for example the rubber band) ignores it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer location in scene coordinates.
    pub scene_position: Point,
    /// Button that triggered this event, if any (none for plain moves).
    pub button: Option<PointerButton>,
    /// Buttons held while this event was dispatched.
    pub buttons: PointerButtons,
    /// Keyboard modifiers.
    pub modifiers: Modifiers,
    /// Set once a handler has claimed the event.
    pub consumed: bool,
}

impl PointerEvent {
    /// A primary-button press at `scene_position`.
    #[must_use]
    pub fn primary_press(scene_position: Point) -> Self {
        Self {
            scene_position,
            button: Some(PointerButton::Primary),
            buttons: PointerButtons::PRIMARY,
            modifiers: Modifiers::empty(),
            consumed: false,
        }
    }

    /// A drag with the primary button held at `scene_position`.
    #[must_use]
    pub fn primary_drag(scene_position: Point) -> Self {
        Self {
            scene_position,
            button: Some(PointerButton::Primary),
            buttons: PointerButtons::PRIMARY,
            modifiers: Modifiers::empty(),
            consumed: false,
        }
    }

    /// A primary-button release at `scene_position`.
    #[must_use]
    pub fn primary_release(scene_position: Point) -> Self {
        Self {
            scene_position,
            button: Some(PointerButton::Primary),
            buttons: PointerButtons::empty(),
            modifiers: Modifiers::empty(),
            consumed: false,
        }
    }

    /// A move with no buttons held.
    #[must_use]
    pub fn hover(scene_position: Point) -> Self {
        Self {
            scene_position,
            button: None,
            buttons: PointerButtons::empty(),
            modifiers: Modifiers::empty(),
            consumed: false,
        }
    }

    /// Returns this event with `modifiers` added.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    /// Returns `true` if the primary button triggered this event.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.button == Some(PointerButton::Primary)
    }

    /// Returns `true` while the primary button is held.
    #[must_use]
    pub fn is_primary_down(&self) -> bool {
        self.buttons.contains(PointerButtons::PRIMARY)
    }

    /// Returns `true` if the additive-selection modifier is held.
    #[must_use]
    pub fn is_shortcut_down(&self) -> bool {
        self.modifiers.contains(Modifiers::SHORTCUT)
    }

    /// Marks this event as handled.
    pub fn consume(&mut self) {
        self.consumed = true;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    #[test]
    fn press_drag_release_button_state() {
        let p = Point::new(1.0, 2.0);
        assert!(PointerEvent::primary_press(p).is_primary_down());
        assert!(PointerEvent::primary_drag(p).is_primary_down());
        let release = PointerEvent::primary_release(p);
        assert!(release.is_primary());
        assert!(!release.is_primary_down());
        let hover = PointerEvent::hover(p);
        assert!(!hover.is_primary());
        assert!(!hover.is_primary_down());
    }

    #[test]
    fn shortcut_and_consume() {
        let mut ev = PointerEvent::primary_press(Point::ZERO).with_modifiers(Modifiers::SHORTCUT);
        assert!(ev.is_shortcut_down());
        assert!(!ev.consumed);
        ev.consume();
        assert!(ev.consumed);
    }

    #[test]
    fn button_to_flags() {
        assert_eq!(
            PointerButtons::from(PointerButton::Secondary),
            PointerButtons::SECONDARY
        );
    }
}
