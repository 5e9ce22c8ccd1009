//! Pointer events and their classification into editor actions.

use bevy::math::Vec3;

/// Modifier keys held while a pointer event happened
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
    };

    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
        alt: false,
    };

    /// True when no modifier key is held
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.shift && !self.alt
    }
}

/// Phase of a pointer interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPhase {
    Down,
    Drag,
    Up,
}

/// Pointer button that produced the event
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// A pointer event already projected onto the ground plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: EventPhase,
    pub button: PointerButton,
    pub modifiers: Modifiers,
    /// Raw world-space point on the ground plane, before snapping
    pub world_point: Vec3,
}

impl PointerEvent {
    pub fn new(phase: EventPhase, modifiers: Modifiers, world_point: Vec3) -> Self {
        Self {
            phase,
            button: PointerButton::Primary,
            modifiers,
            world_point,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn action(&self) -> RequestedAction {
        classify_event(self.modifiers, self.phase, self.button)
    }
}

/// Action requested by a pointer event
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RequestedAction {
    CreateRequested,
    DeleteRequested,
    SelectRequested,
    DragRequested,
    ReleaseRequested,
    #[default]
    None,
}

impl RequestedAction {
    pub fn display_name(&self) -> &'static str {
        match self {
            RequestedAction::CreateRequested => "Create",
            RequestedAction::DeleteRequested => "Delete",
            RequestedAction::SelectRequested => "Select",
            RequestedAction::DragRequested => "Drag",
            RequestedAction::ReleaseRequested => "Release",
            RequestedAction::None => "None",
        }
    }
}

/// Map modifiers and event phase to the requested action.
///
/// Rules are checked in order and the first match wins:
/// Ctrl+Down creates, Shift+Down deletes, a plain Down selects, an
/// unmodified Drag drags and any Up releases. Only the primary button counts.
pub fn classify_event(modifiers: Modifiers, phase: EventPhase, button: PointerButton) -> RequestedAction {
    if button != PointerButton::Primary {
        return RequestedAction::None;
    }

    match phase {
        EventPhase::Down if modifiers.ctrl => RequestedAction::CreateRequested,
        EventPhase::Down if modifiers.shift => RequestedAction::DeleteRequested,
        EventPhase::Down if modifiers.is_empty() => RequestedAction::SelectRequested,
        EventPhase::Drag if modifiers.is_empty() => RequestedAction::DragRequested,
        EventPhase::Up => RequestedAction::ReleaseRequested,
        _ => RequestedAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_click_creates_and_wins_over_shift() {
        let both = Modifiers {
            ctrl: true,
            shift: true,
            alt: false,
        };
        assert_eq!(
            classify_event(Modifiers::CTRL, EventPhase::Down, PointerButton::Primary),
            RequestedAction::CreateRequested
        );
        assert_eq!(
            classify_event(both, EventPhase::Down, PointerButton::Primary),
            RequestedAction::CreateRequested
        );
    }

    #[test]
    fn shift_click_deletes() {
        assert_eq!(
            classify_event(Modifiers::SHIFT, EventPhase::Down, PointerButton::Primary),
            RequestedAction::DeleteRequested
        );
    }

    #[test]
    fn plain_click_selects_but_alt_click_does_nothing() {
        let alt = Modifiers {
            alt: true,
            ..Modifiers::NONE
        };
        assert_eq!(
            classify_event(Modifiers::NONE, EventPhase::Down, PointerButton::Primary),
            RequestedAction::SelectRequested
        );
        assert_eq!(
            classify_event(alt, EventPhase::Down, PointerButton::Primary),
            RequestedAction::None
        );
    }

    #[test]
    fn drag_requires_no_modifiers() {
        assert_eq!(
            classify_event(Modifiers::NONE, EventPhase::Drag, PointerButton::Primary),
            RequestedAction::DragRequested
        );
        assert_eq!(
            classify_event(Modifiers::CTRL, EventPhase::Drag, PointerButton::Primary),
            RequestedAction::None
        );
    }

    #[test]
    fn mouse_up_releases_regardless_of_modifiers() {
        assert_eq!(
            classify_event(Modifiers::SHIFT, EventPhase::Up, PointerButton::Primary),
            RequestedAction::ReleaseRequested
        );
    }

    #[test]
    fn secondary_button_is_ignored() {
        for phase in [EventPhase::Down, EventPhase::Drag, EventPhase::Up] {
            assert_eq!(
                classify_event(Modifiers::CTRL, phase, PointerButton::Secondary),
                RequestedAction::None
            );
        }
    }
}
