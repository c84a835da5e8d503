pub mod notification_state;

pub use notification_state::NotificationStateMachine;
