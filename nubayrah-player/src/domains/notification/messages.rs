#[derive(Debug, Clone)]
pub enum NotificationMessage {
    /// User closed the banner
    Dismiss,
}

impl NotificationMessage {
    pub fn name(&self) -> &'static str {
        match self {
            NotificationMessage::Dismiss => "Notification::Dismiss",
        }
    }
}
