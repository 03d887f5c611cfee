mod dispatcher;

pub use dispatcher::{DispatchReport, NotificationDispatcher};
