use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, ids::UserId};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl User {
    pub fn new(username: String, first_name: String, last_name: String, role: Role) -> User {
        User {
            id: UserId::new(),
            username,
            first_name,
            last_name,
            role,
            phone: None,
            address: None,
        }
    }

    pub fn is_client(&self) -> bool {
        self.role == Role::Client
    }

    pub fn is_trainer(&self) -> bool {
        self.role == Role::Trainer
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Role {
    Client,
    Trainer,
    Admin,
}

/// Phone numbers follow the national mobile format: +76XXXXXXXXX or
/// +77XXXXXXXXX.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone
        .strip_prefix("+76")
        .or_else(|| phone.strip_prefix("+77"))
        .ok_or(ValidationError::InvalidPhone)?;
    if digits.len() == 9 && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}
