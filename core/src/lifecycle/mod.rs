//! Component lifecycle: activation predicates, start-up/shut-down hooks and
//! event delivery to subscribed components.

mod apmeken;
mod component;
mod host;

pub use apmeken::ApmekenIssueHelper;
pub use component::PluginComponent;
pub use host::ComponentHost;
