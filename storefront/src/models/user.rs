// storefront/src/models/user.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Admin,
  #[default]
  User,
}

impl Role {
  /// Only the exact string `"admin"` is an admin; every other role string,
  /// including other spellings of it, is a plain user.
  pub fn parse(raw: &str) -> Self {
    if raw == "admin" {
      Role::Admin
    } else {
      Role::User
    }
  }
}

/// The signed-in principal behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
  pub user_id: String,
  pub role: Role,
  pub name: Option<String>,
}

impl Session {
  pub fn is_admin(&self) -> bool {
    self.role == Role::Admin
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_exact_admin_role_is_admin() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("ADMIN"), Role::User);
    assert_eq!(Role::parse("Admin"), Role::User);
    assert_eq!(Role::parse(" admin "), Role::User);
    assert_eq!(Role::parse("user"), Role::User);
    assert_eq!(Role::parse("editor"), Role::User);
    assert_eq!(Role::parse(""), Role::User);
  }
}
