use tokio::sync::RwLock;
use tracing::debug;

use crate::api::models::Contact;

use super::seed::seed_contacts;

/// Append-only, ordered contact collection shared by all handlers
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: RwLock<Vec<Contact>>,
}

impl ContactStore {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: RwLock::new(contacts),
        }
    }

    /// Store holding only the seed records
    pub fn seeded() -> Self {
        Self::new(seed_contacts())
    }

    /// Snapshot of every contact in insertion order
    pub async fn all(&self) -> Vec<Contact> {
        self.contacts.read().await.clone()
    }

    /// Append a contact as-is and return the new length.
    ///
    /// Identifiers are not checked for uniqueness.
    pub async fn append(&self, contact: Contact) -> usize {
        let mut contacts = self.contacts.write().await;
        debug!(id = contact.id, "Appending contact");
        contacts.push(contact);
        contacts.len()
    }

    /// First contact whose id matches, scanning in insertion order
    pub async fn find(&self, id: i64) -> Option<Contact> {
        self.contacts
            .read()
            .await
            .iter()
            .find(|contact| contact.id == id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn contact(id: i64, name: &str) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            phone: "+620000".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let store = ContactStore::seeded();
        let all = store.all().await;

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "John Doe");
        assert_eq!(all[1].name, "Samantha Jane");
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let store = ContactStore::seeded();

        assert_eq!(store.append(contact(3, "Alice")).await, 3);
        assert_eq!(store.append(contact(4, "Bob")).await, 4);

        let ids: Vec<i64> = store.all().await.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_find_returns_first_match() {
        let store = ContactStore::seeded();
        store.append(contact(1, "Duplicate")).await;

        let found = store.find(1).await.unwrap();
        assert_eq!(found.name, "John Doe");
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_find_missing() {
        let store = ContactStore::default();
        assert!(store.is_empty().await);
        assert!(store.find(999).await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_all_kept() {
        let store = Arc::new(ContactStore::new(Vec::new()));

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.append(contact(i, "Worker")).await })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        let mut ids: Vec<i64> = store.all().await.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..32).collect::<Vec<_>>());
    }
}
