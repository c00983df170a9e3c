//! Base trait for actions (user/system intents) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User intents (button clicks, text edits)
/// - System feedback (use-case completion, reactive snapshots)
/// - Navigation results forwarded by the rendering layer
///
/// Actions are processed by dispatchers to produce new states. Asynchronous
/// effects report back through the same action set, so a screen's whole
/// behavior is visible in one exhaustive match.
pub trait Action: Debug + Send + 'static {}
