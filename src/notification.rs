//! Toast notifications for buscaya
//!
//! A small toast manager: any part of the app can push a toast, toasts stack
//! top-centre and dismiss themselves after their lifetime.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{DEFAULT_TOAST_DURATION, NotificationState, Toast, ToastKind};
