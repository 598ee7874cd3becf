use super::*;
use crate::reducer::DesktopAction;

/// Typed stand-in for the speech recognizer: the submitted text is handled as a final transcript.
#[component]
pub(super) fn VoiceOverlay(open: RwSignal<bool>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let transcript = create_rw_signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = transcript.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        runtime.dispatch_action(DesktopAction::VoiceCommand { transcript: text });
        transcript.set(String::new());
        open.set(false);
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <form class="voice-overlay" role="dialog" aria-label="Voice assistant" on:submit=submit>
                <label for="voice-transcript">"Say a command, e.g. \"open notes\""</label>
                <input
                    id="voice-transcript"
                    type="text"
                    autocomplete="off"
                    prop:value=move || transcript.get()
                    on:input=move |ev| transcript.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            open.set(false);
                        }
                    }
                />
                <button type="submit">"Go"</button>
            </form>
        </Show>
    }
}
