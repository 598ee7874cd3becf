use desktop_app_contract::ApplicationId;
use desktop_runtime::{
    open_app, reduce_desktop, window_manager::viewport_rect, DesktopAction, DesktopConfig,
    DesktopState,
    InteractionMode, Point, ReducerError, RuntimeEffect, Size, WindowGeometry, WindowId,
};

struct Desktop {
    config: DesktopConfig,
    state: DesktopState,
    interaction: InteractionMode,
}

impl Desktop {
    fn new() -> Self {
        Self {
            config: DesktopConfig::builtin().expect("builtin catalog"),
            state: DesktopState::default(),
            interaction: InteractionMode::default(),
        }
    }

    fn apply(&mut self, action: DesktopAction) -> Result<Vec<RuntimeEffect>, ReducerError> {
        reduce_desktop(&mut self.state, &mut self.interaction, &self.config, action)
    }

    fn open(&mut self, app: &str) -> WindowId {
        open_app(&mut self.state, &self.config, ApplicationId::trusted(app)).expect("open app")
    }

    fn launcher_click(&mut self, app: &str) {
        self.apply(DesktopAction::LauncherClick {
            app_id: ApplicationId::trusted(app),
        })
        .expect("launcher click");
    }

    fn close(&mut self, window_id: &WindowId) {
        self.apply(DesktopAction::CloseWindow {
            window_id: window_id.clone(),
        })
        .expect("close");
    }
}

#[test]
fn notes_and_calculator_walkthrough() {
    let mut desktop = Desktop::new();

    let notes = desktop.open("notes");
    assert_eq!(desktop.state.windows.len(), 1);
    assert_eq!(desktop.state.active_window_id.as_ref(), Some(&notes));
    let notes_window = desktop.state.window(&notes).expect("notes window");
    assert_eq!(notes_window.position, Point::new(100, 50));
    assert_eq!(notes_window.size, Size::new(600, 400));

    let calculator = desktop.open("calculator");
    assert_eq!(desktop.state.windows.len(), 2);
    assert_eq!(desktop.state.active_window_id.as_ref(), Some(&calculator));
    let calculator_window = desktop.state.window(&calculator).expect("calculator window");
    assert_eq!(calculator_window.position, Point::new(130, 80));
    assert_eq!(calculator_window.size, Size::new(320, 450));

    desktop.launcher_click("calculator");
    assert!(desktop.state.window(&calculator).expect("calculator").is_minimized);
    assert_eq!(desktop.state.active_window_id.as_ref(), Some(&notes));
    assert_eq!(desktop.state.z_order.last(), Some(&notes));

    desktop.launcher_click("calculator");
    assert!(!desktop.state.window(&calculator).expect("calculator").is_minimized);
    assert_eq!(desktop.state.active_window_id.as_ref(), Some(&calculator));
}

#[test]
fn reopening_an_app_keeps_a_single_window() {
    let mut desktop = Desktop::new();
    let first = desktop.open("files");
    let second = desktop.open("files");
    assert_eq!(first, second);
    assert_eq!(desktop.state.windows.len(), 1);
}

#[test]
fn reopened_windows_get_fresh_increasing_ids() {
    let mut desktop = Desktop::new();
    let mut previous: Option<WindowId> = None;
    for _ in 0..5 {
        let id = desktop.open("notes");
        if let Some(previous) = &previous {
            assert!(id.serial() > previous.serial());
        }
        desktop.close(&id);
        previous = Some(id);
    }
}

#[test]
fn closing_active_windows_walks_focus_back() {
    let mut desktop = Desktop::new();
    let a = desktop.open("files");
    let b = desktop.open("notes");
    let c = desktop.open("calculator");

    desktop.close(&c);
    assert_eq!(desktop.state.active_window_id.as_ref(), Some(&b));
    assert_eq!(desktop.state.z_order.last(), Some(&b));
    desktop.close(&b);
    assert_eq!(desktop.state.active_window_id.as_ref(), Some(&a));
    assert_eq!(desktop.state.z_order.last(), Some(&a));
    desktop.close(&a);
    assert_eq!(desktop.state.active_window_id, None);
}

#[test]
fn minimizing_everything_leaves_no_active_window() {
    let mut desktop = Desktop::new();
    let notes = desktop.open("notes");
    let settings = desktop.open("settings");

    desktop
        .apply(DesktopAction::MinimizeWindow {
            window_id: settings.clone(),
        })
        .expect("minimize settings");
    assert_eq!(desktop.state.active_window_id.as_ref(), Some(&notes));
    assert_eq!(desktop.state.z_order.last(), Some(&notes));

    desktop
        .apply(DesktopAction::MinimizeWindow { window_id: notes })
        .expect("minimize notes");
    assert_eq!(desktop.state.active_window_id, None);
}

#[test]
fn drag_and_resize_respect_bounds() {
    let mut desktop = Desktop::new();
    let notes = desktop.open("notes");

    let effects = desktop
        .apply(DesktopAction::BeginMove {
            window_id: notes.clone(),
            pointer: Point::new(150, 60),
        })
        .expect("begin move");
    assert_eq!(effects, vec![RuntimeEffect::CapturePointer]);
    desktop
        .apply(DesktopAction::UpdateMove {
            pointer: Point::new(-400, -500),
        })
        .expect("update move");
    let position = desktop.state.window(&notes).expect("notes").position;
    assert_eq!(position.y, 0);
    assert_eq!(position.x, -450);
    let effects = desktop.apply(DesktopAction::EndMove).expect("end move");
    assert_eq!(effects, vec![RuntimeEffect::ReleasePointer]);

    desktop
        .apply(DesktopAction::BeginResize {
            window_id: notes.clone(),
        })
        .expect("begin resize");
    desktop
        .apply(DesktopAction::UpdateResize {
            pointer: Point::new(0, 0),
        })
        .expect("update resize");
    let window = desktop.state.window(&notes).expect("notes");
    assert!(window.size.width >= window.min_size.width);
    assert!(window.size.height >= window.min_size.height);
    desktop.apply(DesktopAction::EndResize).expect("end resize");
    assert!(desktop.interaction.is_idle());
}

#[test]
fn maximize_then_restore_returns_original_geometry() {
    let mut desktop = Desktop::new();
    let settings = desktop.open("settings");
    let before: WindowGeometry = desktop.state.window(&settings).expect("settings").geometry();
    let viewport = viewport_rect(1280, 800, 48);

    for _ in 0..2 {
        desktop
            .apply(DesktopAction::ToggleMaximize {
                window_id: settings.clone(),
                viewport,
            })
            .expect("toggle maximize");
    }

    let window = desktop.state.window(&settings).expect("settings");
    assert!(!window.is_maximized);
    assert_eq!(window.geometry(), before);
}

#[test]
fn voice_command_opens_the_named_app() {
    let mut desktop = Desktop::new();
    desktop
        .apply(DesktopAction::VoiceCommand {
            transcript: "Open File Manager please".to_string(),
        })
        .expect("voice open");
    assert!(desktop
        .state
        .window_for_app(&ApplicationId::trusted("files"))
        .is_some());

    let err = desktop
        .apply(DesktopAction::VoiceCommand {
            transcript: "play some music".to_string(),
        })
        .expect_err("unrecognized");
    assert!(matches!(err, ReducerError::UnrecognizedVoiceCommand(_)));
}

#[test]
fn dragging_far_off_screen_never_overflows() {
    let mut desktop = Desktop::new();
    let notes = desktop.open("notes");
    desktop
        .apply(DesktopAction::BeginMove {
            window_id: notes.clone(),
            pointer: Point::new(150, 60),
        })
        .expect("begin move");
    desktop
        .apply(DesktopAction::UpdateMove {
            pointer: Point::new(i32::MIN, i32::MIN),
        })
        .expect("update move");
    assert_eq!(
        desktop.state.window(&notes).expect("notes").position,
        Point::new(i32::MIN, 0)
    );
    desktop.apply(DesktopAction::EndMove).expect("end move");
}
