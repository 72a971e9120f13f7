use serde::{Deserialize, Serialize};

use crate::location::WorldPoint;

/// Channel a chat message arrived on. Only game messages carry room cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatMessageType {
    GameMessage,
    PublicChat,
    PrivateChat,
    ClanChat,
    Broadcast,
    Other,
}

/// A chat line as delivered by the client, markup included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub kind: ChatMessageType,
    pub text: String,
}

impl ChatMessage {
    pub fn game(text: impl Into<String>) -> Self {
        Self {
            kind: ChatMessageType::GameMessage,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Player,
    Npc,
}

/// The acting entity of an animation change, sampled when the event fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub kind: ActorKind,
    pub animation: i32,
    /// `None` when the client could not resolve the actor's tile.
    #[serde(default)]
    pub world_location: Option<WorldPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationChanged {
    pub actor: Actor,
}

impl AnimationChanged {
    pub fn player(animation: i32, world_location: WorldPoint) -> Self {
        Self {
            actor: Actor {
                kind: ActorKind::Player,
                animation,
                world_location: Some(world_location),
            },
        }
    }
}

/// Events delivered by the host's event feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    ChatMessage(ChatMessage),
    AnimationChanged(AnimationChanged),
}
