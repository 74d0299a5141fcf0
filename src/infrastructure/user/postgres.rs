//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::user::{User, UserRepository, UserRole};

/// PostgreSQL implementation of `UserRepository`
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str =
    "id, name, email, password_hash, lastname, location, role, created_at, updated_at";

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user by email: {}", e)))?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, lastname, location, role,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user.id())
        .bind(user.name())
        .bind(user.email())
        .bind(user.password_hash())
        .bind(user.lastname())
        .bind(user.location())
        .bind(user.role().as_str())
        .bind(user.created_at())
        .bind(user.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Failed to create user"))?;

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, email = $3, password_hash = $4, lastname = $5,
                location = $6, role = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(user.id())
        .bind(user.name())
        .bind(user.email())
        .bind(user.password_hash())
        .bind(user.lastname())
        .bind(user.location())
        .bind(user.role().as_str())
        .bind(user.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Failed to update user"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "No user with id : {}",
                user.id()
            )));
        }

        Ok(user.clone())
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let role: String = row.get("role");

    Ok(User::from_storage(
        row.get("id"),
        row.get("name"),
        row.get("email"),
        row.get("password_hash"),
        row.get("lastname"),
        row.get("location"),
        role.parse::<UserRole>().unwrap_or_default(),
        row.get("created_at"),
        row.get("updated_at"),
    ))
}

/// Map unique-constraint violations on the email column to `Duplicate`
fn map_unique_violation(e: sqlx::Error, context: &str) -> DomainError {
    let msg = e.to_string();

    if msg.contains("duplicate key") || msg.contains("unique constraint") {
        DomainError::duplicate("email")
    } else {
        DomainError::storage(format!("{}: {}", context, e))
    }
}
