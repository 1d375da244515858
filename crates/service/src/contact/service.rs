use std::sync::Arc;

use sea_orm::{EntityTrait, QueryOrder};
use tracing::{info, instrument, warn};

use common::metrics::{CONTACTS_SUBMITTED_TOTAL, NOTIFICATION_FAILURES_TOTAL};
use models::{contacts, errors::ModelError};

use super::domain::ContactInput;
use super::notifier::Notifier;
use crate::errors::{db_err, ServiceError};
use crate::store::Store;

/// Stores submissions and forwards them to the notifier.
///
/// The row is written before the notifier runs and a notifier failure is
/// only logged, so a saved submission is never reported as failed.
#[derive(Clone)]
pub struct ContactService {
    store: Store,
    notifier: Arc<dyn Notifier>,
}

impl ContactService {
    pub fn new(store: Store, notifier: Arc<dyn Notifier>) -> Self { Self { store, notifier } }

    #[instrument(skip(self, input))]
    pub async fn submit(&self, input: ContactInput) -> Result<contacts::Model, ServiceError> {
        let name = input.name.unwrap_or_default();
        let email = input.email.unwrap_or_default();
        let message = input.message.unwrap_or_default();
        contacts::validate_required(&name, &email, &message).map_err(|e| match e {
            ModelError::Validation(m) => ServiceError::Validation(m),
            other => ServiceError::Model(other),
        })?;

        let db = self.store.db().await?;
        let saved = contacts::create(
            db,
            &name,
            &email,
            input.phone.as_deref(),
            input.company.as_deref(),
            &message,
        )
        .await?;
        CONTACTS_SUBMITTED_TOTAL.inc();
        info!(contact_id = %saved.id, "contact submission stored");

        if let Err(e) = self.notifier.notify(&saved).await {
            NOTIFICATION_FAILURES_TOTAL.inc();
            warn!(contact_id = %saved.id, err = %e, "contact notification failed; submission kept");
        }
        Ok(saved)
    }

    /// All submissions, newest first.
    pub async fn list(&self) -> Result<Vec<contacts::Model>, ServiceError> {
        let db = self.store.db().await?;
        contacts::Entity::find()
            .order_by_desc(contacts::Column::CreatedAt)
            .all(db)
            .await
            .map_err(db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::notifier::mock::{FailingNotifier, RecordingNotifier};
    use crate::test_support::memory_store;
    use std::time::Duration;

    fn input(name: &str, email: &str, message: &str) -> ContactInput {
        ContactInput {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn missing_name_is_rejected_and_nothing_stored() -> Result<(), anyhow::Error> {
        let recorder = Arc::new(RecordingNotifier::default());
        let svc = ContactService::new(memory_store(), recorder.clone());

        let err = svc.submit(input("", "a@b.com", "hi")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == contacts::REQUIRED_FIELDS_MESSAGE));

        let err = svc.submit(ContactInput { email: Some("a@b.com".into()), ..Default::default() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        assert!(svc.list().await?.is_empty());
        assert!(recorder.seen().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn valid_submission_is_stored_then_notified() -> Result<(), anyhow::Error> {
        let recorder = Arc::new(RecordingNotifier::default());
        let svc = ContactService::new(memory_store(), recorder.clone());

        let saved = svc.submit(input("Ada", "ada@example.com", "Hello")).await?;
        assert_eq!(saved.status, "new");
        assert_eq!(recorder.seen(), vec![saved.id.clone()]);

        let all = svc.list().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, saved.id);
        Ok(())
    }

    #[tokio::test]
    async fn notifier_failure_does_not_undo_the_submission() -> Result<(), anyhow::Error> {
        let svc = ContactService::new(memory_store(), Arc::new(FailingNotifier));

        let saved = svc.submit(input("Bob", "bob@example.com", "Call me")).await?;
        let all = svc.list().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, saved.id);
        assert_eq!(all[0].status, contacts::STATUS_NEW);
        Ok(())
    }

    #[tokio::test]
    async fn list_is_newest_first() -> Result<(), anyhow::Error> {
        let svc = ContactService::new(memory_store(), Arc::new(RecordingNotifier::default()));

        let mut ids = Vec::new();
        for n in ["first", "second", "third"] {
            ids.push(svc.submit(input(n, "x@example.com", "m")).await?.id);
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let listed = svc.list().await?;
        let listed_ids: Vec<_> = listed.iter().map(|c| c.id.clone()).collect();
        ids.reverse();
        assert_eq!(listed_ids, ids);
        assert!(listed.windows(2).all(|w| w[0].created_at > w[1].created_at));
        Ok(())
    }
}
