//! Maps recognized voice transcripts onto launcher intents.
//!
//! Speech recognition happens outside the window manager; this module only sees final
//! transcripts such as "Hey, open the calculator please".

use desktop_app_contract::ApplicationId;

use crate::apps::AppRegistry;

const OPEN_VERB: &str = "open ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceIntent {
    OpenApp(ApplicationId),
}

/// Returns the intent for `transcript`, matching app ids, titles and aliases after "open".
///
/// When several names match, the longest one wins so "open file manager" is not shadowed by a
/// shorter alias.
pub fn parse_voice_command(transcript: &str, registry: &AppRegistry) -> Option<VoiceIntent> {
    let lower = transcript.to_lowercase();
    let start = lower.find(OPEN_VERB)? + OPEN_VERB.len();
    let target = &lower[start..];

    registry
        .iter()
        .flat_map(|entry| {
            std::iter::once(entry.app_id.as_str().to_string())
                .chain(std::iter::once(entry.title.to_lowercase()))
                .chain(entry.voice_aliases.iter().cloned())
                .map(move |name| (entry, name))
        })
        .filter(|(_, name)| !name.is_empty() && target.contains(name.as_str()))
        .max_by_key(|(_, name)| name.len())
        .map(|(entry, _)| VoiceIntent::OpenApp(entry.app_id.clone()))
}
