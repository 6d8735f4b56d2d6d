use std::collections::BTreeMap;
use std::sync::Arc;

use itertools::Itertools as _;
use model::{ids::UserId, user::User};
use parking_lot::RwLock;

use crate::StoreError;

#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
}

impl UserStore {
    pub fn add(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write();
        if users.values().any(|u| u.username == user.username) {
            return Err(StoreError::DuplicateUsername(user.username));
        }
        users.insert(user.id, user);
        Ok(())
    }

    pub fn update(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write();
        if users
            .values()
            .any(|u| u.id != user.id && u.username == user.username)
        {
            return Err(StoreError::DuplicateUsername(user.username));
        }
        if !users.contains_key(&user.id) {
            return Err(StoreError::NotFound("user"));
        }
        users.insert(user.id, user);
        Ok(())
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.users.read().get(&id).cloned()
    }

    pub fn get_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    pub fn list(&self) -> Vec<User> {
        self.users
            .read()
            .values()
            .cloned()
            .sorted_by(|a, b| a.username.cmp(&b.username))
            .collect()
    }

    pub fn delete(&self, id: UserId) -> Option<User> {
        self.users.write().remove(&id)
    }
}
