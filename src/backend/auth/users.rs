/**
 * User Records and the In-Memory User Store
 *
 * The persistence layer proper is an external collaborator; this store
 * is the in-process stand-in the handlers and middleware resolve
 * against. Lookups return fresh clones on every call - nothing is
 * cached between requests.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A stored user, including the credential secret
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// The resolved principal attached to authenticated requests
///
/// Same record as [`User`] minus the password hash. Built via
/// [`User::identity`] so the credential secret is excluded by
/// construction, not by filtering at each call site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl User {
    /// Create a new user record with a fresh ID
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// The identity view of this user, without the credential secret
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// In-memory user store keyed by user ID
///
/// Cheap to clone; all clones share the same map. Each lookup takes the
/// read lock independently, so concurrent requests never contend on
/// anything beyond the lock itself.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user
    ///
    /// Returns the stored record, or `None` if the email is already
    /// taken.
    pub async fn insert(&self, user: User) -> Option<User> {
        let mut users = self.inner.write().await;
        if users.values().any(|u| u.email == user.email) {
            return None;
        }
        users.insert(user.id, user.clone());
        Some(user)
    }

    /// Look up a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Look up a user by email
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned()
    }

    /// Remove a user by ID, returning the removed record
    pub async fn remove(&self, id: Uuid) -> Option<User> {
        self.inner.write().await.remove(&id)
    }
}
