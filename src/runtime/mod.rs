//! Screen runtime: binds a dispatcher to one screen lifetime.
//!
//! [`ScreenHandle`] owns the driver task that processes actions sequentially,
//! publishes state through a watch channel, and queues one-shot events in an
//! [`EventChannel`] until the rendering layer drains them. Dropping the
//! handle cancels the driver and every outstanding effect.

mod events;
mod screen;

pub use events::EventChannel;
pub use screen::ScreenHandle;
