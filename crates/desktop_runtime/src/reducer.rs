//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::ApplicationId;
use thiserror::Error;

use crate::{
    config::DesktopConfig,
    model::{
        DesktopState, DragSession, InteractionMode, Point, ResizeSession, WindowDescriptor,
        WindowGeometry, WindowId,
    },
    voice::{parse_voice_command, VoiceIntent},
    window_manager::{
        cascade_position, drag_offset, dragged_position, maximize, raise_and_activate,
        resized_size, restore, transfer_focus,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open the app's window, or re-activate the one already open.
    OpenApp {
        /// App to open.
        app_id: ApplicationId,
    },
    /// Close a window by id. If it was active, focus moves to the most recently created window
    /// that is not minimized.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Make a window active and raise it.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Taskbar click on an open app: restore, hide, or bring to front.
    LauncherClick {
        /// App whose taskbar button was clicked.
        app_id: ApplicationId,
    },
    /// Maximize into `viewport`, or restore the saved geometry when already maximized.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
        /// Desktop area to fill.
        viewport: WindowGeometry,
    },
    /// Title-bar press.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at press time.
        pointer: Point,
    },
    /// Pointer move during a drag.
    UpdateMove {
        /// Current pointer position.
        pointer: Point,
    },
    /// Pointer release ending a drag.
    EndMove,
    /// Resize-handle press.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
    },
    /// Pointer move during a resize.
    UpdateResize {
        /// Current pointer position.
        pointer: Point,
    },
    /// Pointer release ending a resize.
    EndResize,
    /// The browser viewport changed size.
    ViewportResized {
        /// New desktop area.
        viewport: WindowGeometry,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Final transcript from the voice assistant.
    VoiceCommand {
        /// Recognized speech.
        transcript: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// A drag or resize started: register global pointer-move/up listeners.
    CapturePointer,
    /// The gesture ended: remove the global pointer listeners.
    ReleasePointer,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected actions. The state is left untouched whenever one of these is returned.
pub enum ReducerError {
    /// `OpenApp` named an app missing from the registry.
    #[error("unknown app `{0}`")]
    UnknownApp(ApplicationId),
    /// A drag or resize was started while another gesture was active.
    #[error("a pointer gesture is already in progress")]
    GestureInProgress,
    /// The voice transcript did not name a known app.
    #[error("unrecognized voice command `{0}`")]
    UnrecognizedVoiceCommand(String),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Actions naming a window that no longer exists are accepted and change nothing; UI events can
/// arrive after the window they target was closed.
///
/// # Errors
///
/// See [`ReducerError`].
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionMode,
    config: &DesktopConfig,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } => {
            open_app(state, config, app_id)?;
        }
        DesktopAction::CloseWindow { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() == before_len {
                return Ok(effects);
            }
            state.z_order.retain(|id| *id != window_id);
            end_gesture_on(interaction, &window_id, &mut effects);
            if state.is_active(&window_id) {
                transfer_focus(state, None);
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            minimize_window(state, interaction, &window_id, &mut effects);
        }
        DesktopAction::FocusWindow { window_id } => {
            let focusable = state
                .window(&window_id)
                .map(|w| !w.is_minimized)
                .unwrap_or(false);
            if focusable {
                raise_and_activate(state, &window_id);
                state.start_menu_open = false;
            }
        }
        DesktopAction::LauncherClick { app_id } => {
            let Some(window) = state.window_for_app(&app_id) else {
                return Ok(effects);
            };
            let window_id = window.id.clone();
            if window.is_minimized {
                if let Some(window) = state.window_mut(&window_id) {
                    window.is_minimized = false;
                }
                raise_and_activate(state, &window_id);
            } else if state.is_active(&window_id) {
                minimize_window(state, interaction, &window_id, &mut effects);
            } else {
                raise_and_activate(state, &window_id);
            }
        }
        DesktopAction::ToggleMaximize {
            window_id,
            viewport,
        } => {
            let Some(window) = state.window_mut(&window_id) else {
                return Ok(effects);
            };
            if window.is_minimized {
                return Ok(effects);
            }
            if !restore(window) {
                maximize(window, viewport);
            }
            end_gesture_on(interaction, &window_id, &mut effects);
            raise_and_activate(state, &window_id);
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            if !interaction.is_idle() {
                return Err(ReducerError::GestureInProgress);
            }
            let Some(window) = state.window(&window_id).filter(|w| !w.is_minimized) else {
                return Ok(effects);
            };
            let draggable = !window.is_maximized;
            let offset = drag_offset(pointer, window.position);
            raise_and_activate(state, &window_id);
            if draggable {
                *interaction = InteractionMode::Dragging(DragSession { window_id, offset });
                effects.push(RuntimeEffect::CapturePointer);
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let InteractionMode::Dragging(session) = interaction {
                match state.window_mut(&session.window_id) {
                    Some(window) => {
                        if !window.is_maximized {
                            window.position = dragged_position(pointer, session.offset);
                        }
                    }
                    None => {
                        *interaction = InteractionMode::Idle;
                        effects.push(RuntimeEffect::ReleasePointer);
                    }
                }
            }
        }
        DesktopAction::EndMove => {
            if matches!(interaction, InteractionMode::Dragging(_)) {
                *interaction = InteractionMode::Idle;
                effects.push(RuntimeEffect::ReleasePointer);
            }
        }
        DesktopAction::BeginResize { window_id } => {
            if !interaction.is_idle() {
                return Err(ReducerError::GestureInProgress);
            }
            let Some(window) = state.window(&window_id).filter(|w| !w.is_minimized) else {
                return Ok(effects);
            };
            let resizable = !window.is_maximized;
            raise_and_activate(state, &window_id);
            if resizable {
                *interaction = InteractionMode::Resizing(ResizeSession { window_id });
                effects.push(RuntimeEffect::CapturePointer);
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let InteractionMode::Resizing(session) = interaction {
                match state.window_mut(&session.window_id) {
                    Some(window) => {
                        if !window.is_maximized {
                            window.size = resized_size(pointer, window.position, window.min_size);
                        }
                    }
                    None => {
                        *interaction = InteractionMode::Idle;
                        effects.push(RuntimeEffect::ReleasePointer);
                    }
                }
            }
        }
        DesktopAction::EndResize => {
            if matches!(interaction, InteractionMode::Resizing(_)) {
                *interaction = InteractionMode::Idle;
                effects.push(RuntimeEffect::ReleasePointer);
            }
        }
        DesktopAction::ViewportResized { viewport } => {
            for window in state.windows.iter_mut().filter(|w| w.is_maximized) {
                window.set_geometry(viewport);
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::VoiceCommand { transcript } => {
            match parse_voice_command(&transcript, &config.apps) {
                Some(VoiceIntent::OpenApp(app_id)) => {
                    return reduce_desktop(
                        state,
                        interaction,
                        config,
                        DesktopAction::OpenApp { app_id },
                    );
                }
                None => return Err(ReducerError::UnrecognizedVoiceCommand(transcript)),
            }
        }
    }

    Ok(effects)
}

/// Opens `app_id`, or restores and focuses its existing window, and returns that window's id.
///
/// This is the [`DesktopAction::OpenApp`] transition for callers that need the id.
///
/// # Errors
///
/// [`ReducerError::UnknownApp`] when the registry has no such app; the state is untouched.
pub fn open_app(
    state: &mut DesktopState,
    config: &DesktopConfig,
    app_id: ApplicationId,
) -> Result<WindowId, ReducerError> {
    let descriptor = config
        .apps
        .get(&app_id)
        .ok_or_else(|| ReducerError::UnknownApp(app_id.clone()))?;

    let existing = state.window_for_app(&app_id).map(|w| w.id.clone());
    let window_id = match existing {
        Some(window_id) => {
            if let Some(window) = state.window_mut(&window_id) {
                window.is_minimized = false;
            }
            window_id
        }
        None => {
            let window_id = WindowId::new(app_id.clone(), next_window_serial(state));
            let position = cascade_position(&config.window_manager, state.windows.len());
            state.windows.push(WindowDescriptor {
                id: window_id.clone(),
                app_id,
                title: descriptor.title.clone(),
                icon_id: descriptor.icon_id.clone(),
                position,
                size: descriptor.default_size,
                min_size: descriptor.min_size,
                is_minimized: false,
                is_maximized: false,
                saved_geometry: None,
            });
            window_id
        }
    };
    raise_and_activate(state, &window_id);
    state.start_menu_open = false;
    Ok(window_id)
}

fn next_window_serial(state: &mut DesktopState) -> u64 {
    let serial = state.next_window_serial;
    state.next_window_serial = state.next_window_serial.saturating_add(1);
    serial
}

fn minimize_window(
    state: &mut DesktopState,
    interaction: &mut InteractionMode,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) {
    let Some(window) = state.window_mut(window_id) else {
        return;
    };
    if window.is_minimized {
        return;
    }
    window.is_minimized = true;
    end_gesture_on(interaction, window_id, effects);
    if state.is_active(window_id) {
        transfer_focus(state, Some(window_id));
    }
}

fn end_gesture_on(
    interaction: &mut InteractionMode,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) {
    if interaction.window_id() == Some(window_id) {
        *interaction = InteractionMode::Idle;
        effects.push(RuntimeEffect::ReleasePointer);
    }
}
