pub mod navigation;
pub mod notification;
pub mod session;

pub use navigation::{NavigationDecision, NavigationRequest, RouteLocation};
pub use notification::{Notification, NotificationKind};
pub use session::Session;
