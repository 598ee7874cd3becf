//! Explicit runtime effect-queue executor for reducer-emitted side effects.
//!
//! Drag and resize gestures register window-level pointer listeners only while they are active:
//! [`RuntimeEffect::CapturePointer`] installs them and [`RuntimeEffect::ReleasePointer`] removes
//! them again.

use leptos::*;

use crate::{
    components::pointer_from_pointer_event,
    model::InteractionMode,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, effect);
        }
    });
}

fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::CapturePointer => attach_pointer_listeners(runtime),
        RuntimeEffect::ReleasePointer => detach_pointer_listeners(runtime),
    }
}

fn attach_pointer_listeners(runtime: DesktopRuntimeContext) {
    detach_pointer_listeners(runtime);

    let on_move = window_event_listener(ev::pointermove, move |ev| {
        let pointer = pointer_from_pointer_event(&ev);
        let action = runtime.interaction.with_untracked(|mode| match mode {
            InteractionMode::Dragging(_) => Some(DesktopAction::UpdateMove { pointer }),
            InteractionMode::Resizing(_) => Some(DesktopAction::UpdateResize { pointer }),
            InteractionMode::Idle => None,
        });
        if let Some(action) = action {
            runtime.dispatch_action(action);
        }
    });
    let on_up = window_event_listener(ev::pointerup, move |_| end_pointer_interaction(runtime));
    let on_cancel =
        window_event_listener(ev::pointercancel, move |_| end_pointer_interaction(runtime));

    runtime
        .pointer_listeners
        .set_value(vec![on_move, on_up, on_cancel]);
}

/// Removes any listeners left by the current gesture.
pub(crate) fn detach_pointer_listeners(runtime: DesktopRuntimeContext) {
    let handles = runtime
        .pointer_listeners
        .try_update_value(std::mem::take)
        .unwrap_or_default();
    for handle in handles {
        handle.remove();
    }
}

fn end_pointer_interaction(runtime: DesktopRuntimeContext) {
    let action = runtime.interaction.with_untracked(|mode| match mode {
        InteractionMode::Dragging(_) => Some(DesktopAction::EndMove),
        InteractionMode::Resizing(_) => Some(DesktopAction::EndResize),
        InteractionMode::Idle => None,
    });
    match action {
        Some(action) => runtime.dispatch_action(action),
        // Listeners outlived their gesture; drop them directly.
        None => detach_pointer_listeners(runtime),
    }
}
