//! Display composition
//!
//! Turns a render surface, the persisted configuration, and the current
//! toggle state into the ordered list of buttons that surface draws. The
//! output is rebuilt on every redraw and rendered verbatim by the frontend.

use crate::config::SwitcherConfig;
use crate::orientation::ViewOrientation;

/// A place the switcher can render buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Viewport header row.
    Header,
    /// Sidebar panel.
    Sidebar,
    /// Viewport right-click menu.
    ContextMenu,
}

/// Snapshot of the toggles the composer reflects.
///
/// `None` means the state source is unavailable: no active object for the
/// wireframe flag, no viewport overlay for face orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub wireframe: Option<bool>,
    pub face_orientation: Option<bool>,
}

/// An action a button invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    /// Orient the view camera to a canonical axis.
    Orient(ViewOrientation),
    /// Look through the scene camera.
    CameraView,
    /// Frame the current selection.
    FocusSelection,
    /// Flip wireframe display on the active object.
    ToggleWire,
    /// Flip the face-orientation overlay.
    ToggleFaceOrientation,
}

impl ViewAction {
    /// Fixed button label.
    pub fn label(&self) -> &'static str {
        match self {
            ViewAction::Orient(orientation) => orientation.label(),
            ViewAction::CameraView => "Camera View",
            ViewAction::FocusSelection => "Focus on Selection",
            ViewAction::ToggleWire => "Wireframe",
            ViewAction::ToggleFaceOrientation => "Face Orientation",
        }
    }
}

/// One button to draw. Ephemeral; recomputed every redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonDescriptor {
    pub action: ViewAction,
    /// Text label; empty in icon mode.
    pub label: &'static str,
    /// Icon glyph; absent in text mode.
    pub icon: Option<&'static str>,
}

/// Orientations the compact header row carries.
const HEADER_ORIENTATIONS: [ViewOrientation; 4] = [
    ViewOrientation::Front,
    ViewOrientation::Right,
    ViewOrientation::Left,
    ViewOrientation::Top,
];

fn icon_for(action: ViewAction, state: &ToggleState) -> &'static str {
    match action {
        ViewAction::Orient(ViewOrientation::Front) => "\u{2b07}",
        ViewAction::Orient(ViewOrientation::Back) => "\u{2b06}",
        ViewAction::Orient(ViewOrientation::Right) => "\u{27a1}",
        ViewAction::Orient(ViewOrientation::Left) => "\u{2b05}",
        ViewAction::Orient(ViewOrientation::Top) => "\u{25b2}",
        ViewAction::Orient(ViewOrientation::Bottom) => "\u{25bc}",
        ViewAction::CameraView => "\u{1f4f7}",
        ViewAction::FocusSelection => "\u{1f50d}",
        // Toggle icons show the state the display is currently in; an
        // unavailable state renders the off affordance.
        ViewAction::ToggleWire => {
            if state.wireframe.unwrap_or(false) {
                "\u{25a6}"
            } else {
                "\u{25a0}"
            }
        }
        ViewAction::ToggleFaceOrientation => {
            if state.face_orientation.unwrap_or(false) {
                "\u{25c6}"
            } else {
                "\u{25c7}"
            }
        }
    }
}

fn actions_for(surface: Surface, state: &ToggleState) -> Vec<ViewAction> {
    let orientations: &[ViewOrientation] = match surface {
        Surface::Header => &HEADER_ORIENTATIONS,
        Surface::Sidebar | Surface::ContextMenu => &ViewOrientation::ALL,
    };

    let mut actions: Vec<ViewAction> =
        orientations.iter().copied().map(ViewAction::Orient).collect();
    actions.push(ViewAction::CameraView);
    actions.push(ViewAction::FocusSelection);
    actions.push(ViewAction::ToggleWire);
    // The face toggle needs a viewport overlay to act on.
    if state.face_orientation.is_some() {
        actions.push(ViewAction::ToggleFaceOrientation);
    }
    actions
}

/// Compose the ordered button list for `surface`.
///
/// Returns an empty list when the display-location preference hides the
/// surface; the context menu is never hidden. Total over its inputs.
pub fn compose(
    surface: Surface,
    config: &SwitcherConfig,
    state: &ToggleState,
) -> Vec<ButtonDescriptor> {
    let visible = match surface {
        Surface::Header => config.display_location.shows_header(),
        Surface::Sidebar => config.display_location.shows_sidebar(),
        Surface::ContextMenu => true,
    };
    if !visible {
        return Vec::new();
    }

    actions_for(surface, state)
        .into_iter()
        .map(|action| {
            if config.use_icons {
                ButtonDescriptor {
                    action,
                    label: "",
                    icon: Some(icon_for(action, state)),
                }
            } else {
                ButtonDescriptor {
                    action,
                    label: action.label(),
                    icon: None,
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayLocation;

    fn config(use_icons: bool, display_location: DisplayLocation) -> SwitcherConfig {
        SwitcherConfig {
            use_icons,
            display_location,
        }
    }

    fn full_state() -> ToggleState {
        ToggleState {
            wireframe: Some(false),
            face_orientation: Some(false),
        }
    }

    fn orientation_sequence(buttons: &[ButtonDescriptor]) -> Vec<ViewOrientation> {
        buttons
            .iter()
            .filter_map(|b| match b.action {
                ViewAction::Orient(o) => Some(o),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_header_suppressed_by_sidebar_location() {
        let cfg = config(true, DisplayLocation::Sidebar);
        assert!(compose(Surface::Header, &cfg, &full_state()).is_empty());
    }

    #[test]
    fn test_sidebar_suppressed_by_header_location() {
        let cfg = config(true, DisplayLocation::Header);
        assert!(compose(Surface::Sidebar, &cfg, &full_state()).is_empty());
    }

    #[test]
    fn test_both_location_shows_header_and_sidebar() {
        let cfg = config(true, DisplayLocation::Both);
        assert!(!compose(Surface::Header, &cfg, &full_state()).is_empty());
        assert!(!compose(Surface::Sidebar, &cfg, &full_state()).is_empty());
    }

    #[test]
    fn test_context_menu_ignores_display_location() {
        for location in DisplayLocation::ALL {
            let cfg = config(true, location);
            assert!(!compose(Surface::ContextMenu, &cfg, &full_state()).is_empty());
        }
    }

    #[test]
    fn test_orientation_order_never_permuted() {
        for use_icons in [true, false] {
            let cfg = config(use_icons, DisplayLocation::Both);
            for surface in [Surface::Header, Surface::Sidebar, Surface::ContextMenu] {
                let sequence = orientation_sequence(&compose(surface, &cfg, &full_state()));
                let expected: Vec<ViewOrientation> = ViewOrientation::ALL
                    .iter()
                    .copied()
                    .filter(|o| sequence.contains(o))
                    .collect();
                assert_eq!(sequence, expected);
            }
        }
    }

    #[test]
    fn test_sidebar_lists_all_orientations() {
        let cfg = config(false, DisplayLocation::Sidebar);
        let sequence = orientation_sequence(&compose(Surface::Sidebar, &cfg, &full_state()));
        assert_eq!(sequence, ViewOrientation::ALL.to_vec());
    }

    #[test]
    fn test_header_icon_mode_without_state() {
        let cfg = config(true, DisplayLocation::Header);
        let buttons = compose(Surface::Header, &cfg, &ToggleState::default());

        // Four orientations, camera, focus, wire toggle. No face toggle
        // without a viewport overlay.
        assert_eq!(buttons.len(), 7);
        assert_eq!(orientation_sequence(&buttons).len(), 4);
        assert!(buttons.iter().all(|b| b.label.is_empty() && b.icon.is_some()));
        assert!(
            buttons
                .iter()
                .all(|b| b.action != ViewAction::ToggleFaceOrientation)
        );

        let last = buttons.last().unwrap();
        assert_eq!(last.action, ViewAction::ToggleWire);
        let off = ToggleState {
            wireframe: Some(false),
            face_orientation: None,
        };
        assert_eq!(last.icon, Some(icon_for(ViewAction::ToggleWire, &off)));
    }

    #[test]
    fn test_sidebar_text_mode_includes_both_toggles() {
        let cfg = config(false, DisplayLocation::Sidebar);
        let buttons = compose(Surface::Sidebar, &cfg, &full_state());

        assert_eq!(buttons.len(), 10);
        assert!(buttons.iter().all(|b| b.icon.is_none() && !b.label.is_empty()));
        assert_eq!(buttons[8].action, ViewAction::ToggleWire);
        assert_eq!(buttons[9].action, ViewAction::ToggleFaceOrientation);
    }

    #[test]
    fn test_icon_mode_flip_preserves_actions() {
        let state = full_state();
        for surface in [Surface::Header, Surface::Sidebar, Surface::ContextMenu] {
            let with_icons = compose(surface, &config(true, DisplayLocation::Both), &state);
            let with_text = compose(surface, &config(false, DisplayLocation::Both), &state);

            let icon_actions: Vec<ViewAction> = with_icons.iter().map(|b| b.action).collect();
            let text_actions: Vec<ViewAction> = with_text.iter().map(|b| b.action).collect();
            assert_eq!(icon_actions, text_actions);

            assert!(with_icons.iter().all(|b| b.icon.is_some() && b.label.is_empty()));
            assert!(with_text.iter().all(|b| b.icon.is_none() && !b.label.is_empty()));
        }
    }

    #[test]
    fn test_wire_icon_tracks_current_state() {
        let on = ToggleState {
            wireframe: Some(true),
            face_orientation: Some(false),
        };
        let off = ToggleState {
            wireframe: Some(false),
            face_orientation: Some(false),
        };
        assert_ne!(
            icon_for(ViewAction::ToggleWire, &on),
            icon_for(ViewAction::ToggleWire, &off)
        );
        // Missing state renders the off affordance.
        assert_eq!(
            icon_for(ViewAction::ToggleWire, &ToggleState::default()),
            icon_for(ViewAction::ToggleWire, &off)
        );
    }

    #[test]
    fn test_face_icon_tracks_current_state() {
        let on = ToggleState {
            wireframe: None,
            face_orientation: Some(true),
        };
        let off = ToggleState {
            wireframe: None,
            face_orientation: Some(false),
        };
        assert_ne!(
            icon_for(ViewAction::ToggleFaceOrientation, &on),
            icon_for(ViewAction::ToggleFaceOrientation, &off)
        );
    }
}
