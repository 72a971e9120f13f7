use super::IssueSignal;
use crate::markers::Scene;

/// Consumers of issue signals. The scene is lent for the duration of the call.
pub trait SignalHandler<S: Scene> {
    fn handle_signal(&mut self, signal: &IssueSignal, scene: &mut S);
}
