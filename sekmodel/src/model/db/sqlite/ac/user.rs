use async_trait::async_trait;
use chrono::Utc;
use sekcore::{
    ac::{
        role::Role,
        traits::UserBackend,
        user::User,
    },
    error::BackendError,
};
use sqlx::{
    Row,
    sqlite::SqliteRow,
};
use std::str::FromStr;

use crate::{
    backend::db::SqliteBackend,
};

fn user_from_row(row: SqliteRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        role: Role::from_str(&row.get::<String, _>("role"))
            .unwrap_or(Role::default()),
        created_ts: row.get("created_ts"),
    }
}

async fn add_user_sqlite(
    backend: &SqliteBackend,
    name: &str,
    role: Role,
) -> Result<i64, BackendError> {
    let ts = Utc::now().timestamp();
    let role_str = <&'static str>::from(role);
    let id = sqlx::query(
        r#"
INSERT INTO 'user' (
    name,
    role,
    created_ts
)
VALUES ( ?1, ?2, ?3 )
        "#,
    )
    .bind(name)
    .bind(role_str)
    .bind(ts)
    .execute(&*backend.pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

async fn get_user_by_id_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<Option<User>, BackendError> {
    let recs = sqlx::query(
        r#"
SELECT
    id,
    name,
    role,
    created_ts
FROM
    'user'
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .map(user_from_row)
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(recs)
}

async fn get_user_by_name_sqlite(
    backend: &SqliteBackend,
    name: &str,
) -> Result<Option<User>, BackendError> {
    let recs = sqlx::query(
        r#"
SELECT
    id,
    name,
    role,
    created_ts
FROM
    'user'
WHERE
    name = ?1
        "#,
    )
    .bind(name)
    .map(user_from_row)
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(recs)
}

async fn remove_user_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<bool, BackendError> {
    // grants are removed in the same call rather than relying on the
    // connection having foreign_keys enabled
    sqlx::query(
        r#"
DELETE FROM
    user_permission
WHERE
    user_id = ?1
        "#,
    )
    .bind(id)
    .execute(&*backend.pool)
    .await?;
    Ok(sqlx::query(
        r#"
DELETE FROM
    'user'
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .execute(&*backend.pool)
    .await?
    .rows_affected() > 0)
}

#[async_trait]
impl UserBackend for SqliteBackend {
    async fn add_user(
        &self,
        name: &str,
        role: Role,
    ) -> Result<i64, BackendError> {
        add_user_sqlite(
            &self,
            name,
            role,
        ).await
    }

    async fn get_user_by_id(
        &self,
        id: i64,
    ) -> Result<Option<User>, BackendError> {
        get_user_by_id_sqlite(
            &self,
            id,
        ).await
    }

    async fn get_user_by_name(
        &self,
        name: &str,
    ) -> Result<Option<User>, BackendError> {
        get_user_by_name_sqlite(
            &self,
            name,
        ).await
    }

    async fn remove_user(
        &self,
        id: i64,
    ) -> Result<bool, BackendError> {
        remove_user_sqlite(
            &self,
            id,
        ).await
    }
}
