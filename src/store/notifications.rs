use std::rc::Rc;
use yew::prelude::*;

use crate::models::AiNotification;

/// The latest generated notifications, oldest first as the backend sends
/// them. Replaced wholesale on every successful fetch; a failed fetch keeps
/// whatever was already on screen.
#[derive(Clone, PartialEq, Default)]
pub struct NotificationsState {
    pub notifications: Vec<AiNotification>,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub enum NotificationsAction {
    FetchStarted,
    FetchSucceeded(Vec<AiNotification>),
    FetchFailed(String),
}

impl Reducible for NotificationsState {
    type Action = NotificationsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NotificationsAction::FetchStarted => {
                next.is_loading = true;
                next.error = None;
            }
            NotificationsAction::FetchSucceeded(notifications) => {
                next.notifications = notifications;
                next.is_loading = false;
                next.error = None;
            }
            NotificationsAction::FetchFailed(message) => {
                next.is_loading = false;
                next.error = Some(message);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str) -> AiNotification {
        AiNotification {
            title: title.to_string(),
            message: format!("{} body", title),
            severity: "INFO".to_string(),
            confidence: "MEDIUM".to_string(),
            mode: "RULE_BASED".to_string(),
        }
    }

    fn reduce(state: NotificationsState, action: NotificationsAction) -> NotificationsState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn success_replaces_the_list_wholesale() {
        let first = reduce(
            NotificationsState::default(),
            NotificationsAction::FetchSucceeded(vec![note("one"), note("two")]),
        );
        assert_eq!(first.notifications.len(), 2);

        let second = reduce(
            first,
            NotificationsAction::FetchSucceeded(vec![note("three")]),
        );
        assert_eq!(second.notifications.len(), 1);
        assert_eq!(second.notifications[0].title, "three");
    }

    #[test]
    fn failure_keeps_the_previous_list() {
        let loaded = reduce(
            NotificationsState::default(),
            NotificationsAction::FetchSucceeded(vec![note("one")]),
        );
        let failed = reduce(
            loaded,
            NotificationsAction::FetchFailed("Failed to fetch AI notifications".to_string()),
        );
        assert_eq!(failed.notifications.len(), 1);
        assert_eq!(
            failed.error.as_deref(),
            Some("Failed to fetch AI notifications")
        );
    }
}
