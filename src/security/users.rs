//! User store and principal types.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::UserConfig;

/// Verified identity of a request's caller.
///
/// Created only by the auth gate on a successful credential check,
/// request-scoped, never mutated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub roles: Vec<String>,
}

/// Username/secret pair decoded from the Authorization header.
/// Lives only for the duration of the auth gate.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub secret: String,
}

#[derive(Debug, Clone)]
struct UserRecord {
    password: String,
    roles: Vec<String>,
}

/// In-memory user store built from configuration at startup.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: HashMap<String, UserRecord>,
}

impl UserStore {
    /// Build the store from the configured user list.
    pub fn from_config(users: &[UserConfig]) -> Self {
        Self {
            users: users
                .iter()
                .map(|u| {
                    (
                        u.username.clone(),
                        UserRecord {
                            password: u.password.clone(),
                            roles: u.roles.clone(),
                        },
                    )
                })
                .collect(),
        }
    }

    /// Verify credentials; unknown user and wrong secret are
    /// indistinguishable to the caller.
    pub fn verify(&self, credentials: &Credentials) -> Option<Principal> {
        let record = self.users.get(&credentials.username)?;
        if record.password == credentials.secret {
            Some(Principal {
                username: credentials.username.clone(),
                roles: record.roles.clone(),
            })
        } else {
            None
        }
    }
}
