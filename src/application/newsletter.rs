use std::sync::Arc;

use thiserror::Error;

use crate::application::repos::{RepoError, SubscribersRepo};
use crate::domain::entities::SubscriberRecord;

#[derive(Debug, Error)]
pub enum NewsletterError {
    #[error("{0}")]
    ConstraintViolation(&'static str),
    #[error("email is already subscribed")]
    AlreadySubscribed,
    #[error(transparent)]
    Repo(RepoError),
}

/// Newsletter signups. No revalidation: the subscriber list never feeds a
/// rendered page.
#[derive(Clone)]
pub struct NewsletterService {
    subscribers: Arc<dyn SubscribersRepo>,
}

impl NewsletterService {
    pub fn new(subscribers: Arc<dyn SubscribersRepo>) -> Self {
        Self { subscribers }
    }

    pub async fn subscribe(
        &self,
        name: &str,
        email: &str,
    ) -> Result<SubscriberRecord, NewsletterError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(NewsletterError::ConstraintViolation("name"));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(NewsletterError::ConstraintViolation("email"));
        }

        match self.subscribers.insert_subscriber(name, email).await {
            Ok(record) => Ok(record),
            Err(RepoError::Duplicate { .. }) => Err(NewsletterError::AlreadySubscribed),
            Err(err) => Err(NewsletterError::Repo(err)),
        }
    }
}
