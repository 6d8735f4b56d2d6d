use log::info;
use model::{
    errors::ValidationError,
    ids::UserId,
    user::{validate_phone, User},
};
use storage::{users::UserStore, StoreError};
use thiserror::Error;

use super::trainers::Trainers;

#[derive(Clone)]
pub struct Users {
    store: UserStore,
    trainers: Trainers,
}

impl Users {
    pub(crate) fn new(store: UserStore, trainers: Trainers) -> Self {
        Users { store, trainers }
    }

    pub fn create(&self, user: User) -> Result<User, UserError> {
        self.validate(&user)?;
        self.store.add(user.clone())?;
        // derived trainer record must exist whenever the user carries the
        // trainer role
        if user.is_trainer() {
            self.trainers.ensure_for(user.id);
        }
        info!("created user {} ({})", user.username, user.role);
        Ok(user)
    }

    pub fn update(&self, user: User) -> Result<(), UserError> {
        self.validate(&user)?;
        self.store.update(user.clone())?;
        if user.is_trainer() {
            self.trainers.ensure_for(user.id);
        }
        Ok(())
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.store.get(id)
    }

    pub fn get_by_username(&self, username: &str) -> Option<User> {
        self.store.get_by_username(username)
    }

    pub fn list(&self) -> Vec<User> {
        self.store.list()
    }

    fn validate(&self, user: &User) -> Result<(), ValidationError> {
        if let Some(phone) = &user.phone {
            validate_phone(phone)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Store(#[from] StoreError),
}
