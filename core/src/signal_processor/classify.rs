use std::borrow::Cow;

use memchr::memchr;

use super::{EpisodeEndCue, IssueSignal, SensedCue};
use crate::events::{ActorKind, AnimationChanged, ChatMessage, ChatMessageType};
use crate::game_data::animation_id;

static CHAT_SIGNALS: phf::Map<&'static str, IssueSignal> = phf::phf_map! {
    "You sense an issue somewhere in the room." =>
        IssueSignal::IssueSensed { cue: SensedCue::Unspecified },
    "You sense some strange fumes coming from holes in the floor." =>
        IssueSignal::IssueSensed { cue: SensedCue::Fumes },
    "You sense an issue with the roof supports." =>
        IssueSignal::IssueSensed { cue: SensedCue::Roof },
    "Apmeken's Sight guides your group into neutralising some dangerous fumes." =>
        IssueSignal::EpisodeEnded { cue: EpisodeEndCue::FumesNeutralised },
    "The fumes filling the room suddenly ignite!" =>
        IssueSignal::EpisodeEnded { cue: EpisodeEndCue::FumesIgnited },
    "Apmeken's Sight guides your group into repairing the roof supports." =>
        IssueSignal::EpisodeEnded { cue: EpisodeEndCue::RoofRepaired },
    "Damaged roof supports cause some debris to fall on you!" =>
        IssueSignal::EpisodeEnded { cue: EpisodeEndCue::DebrisFell },
};

/// Remove `<...>` formatting tags (colours, images) from a chat line.
///
/// Each `<` is closed by the nearest following `>`. A `<` with no closing
/// `>` is kept as text.
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    if memchr(b'<', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = memchr(b'<', rest.as_bytes()) {
        let Some(len) = memchr(b'>', &rest.as_bytes()[open..]) else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + len + 1..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Classify a chat line. Only game messages matching a known phrase exactly
/// produce a signal.
pub fn classify_chat(chat: &ChatMessage) -> Option<IssueSignal> {
    if chat.kind != ChatMessageType::GameMessage {
        return None;
    }
    let text = strip_markup(&chat.text);
    CHAT_SIGNALS.get(&*text).copied()
}

/// Classify an animation change. Requires a player actor with a known location.
pub fn classify_animation(event: &AnimationChanged) -> Option<IssueSignal> {
    let actor = &event.actor;
    if actor.kind != ActorKind::Player {
        return None;
    }
    let actor_location = actor.world_location?;

    match actor.animation {
        animation_id::PILLAR_HAMMER => Some(IssueSignal::PillarHammered { actor_location }),
        animation_id::VENT_POUR => Some(IssueSignal::VentPoured { actor_location }),
        _ => None,
    }
}
