pub mod bus;
pub mod event;

pub use bus::{ComponentId, EventBus};
pub use event::{Actor, ActorKind, AnimationChanged, ChatMessage, ChatMessageType, GameEvent};
