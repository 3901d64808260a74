use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::auth::dto::RegisterRequest;
use crate::error::ApiError;

/// Customer record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String, // argon2 hash, never exposed in JSON
}

impl Customer {
    /// Find a customer by username. Usernames are not constrained unique in
    /// the schema; the first matching row wins.
    pub async fn find_by_username(
        db: &PgPool,
        username: &str,
    ) -> Result<Option<Customer>, ApiError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT user_id, username, email, password
            FROM customer
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(customer)
    }

    /// Create a new customer with an already-hashed password.
    pub async fn create(
        db: &PgPool,
        req: &RegisterRequest,
        password_hash: &str,
    ) -> Result<Customer, ApiError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customer (username, email, password)
            VALUES ($1, $2, $3)
            RETURNING user_id, username, email, password
            "#,
        )
        .bind(&req.username)
        .bind(&req.email)
        .bind(password_hash)
        .fetch_one(db)
        .await?;
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_never_serialized() {
        let customer = Customer {
            user_id: 1,
            username: "alice".into(),
            email: "a@x.com".into(),
            password: "$argon2id$v=19$...".into(),
        };
        let json = serde_json::to_string(&customer).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2id"));
        assert!(json.contains("alice"));
    }
}
