use async_trait::async_trait;
use sekcore::{
    ac::{
        action::Action,
        permission::Permission,
        traits::PermissionBackend,
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

fn permission_from_row(row: SqliteRow) -> Permission {
    Permission {
        id: row.get("id"),
        name: row.get("name"),
        resource: row.get("resource"),
        action: Action::from_str(&row.get::<String, _>("action"))
            .unwrap_or(Action::default()),
        description: row.get("description"),
    }
}

async fn add_permission_sqlite(
    backend: &SqliteBackend,
    name: &str,
    resource: &str,
    action: Action,
    description: Option<&str>,
) -> Result<i64, BackendError> {
    let action_str = <&'static str>::from(action);
    let id = sqlx::query(
        r#"
INSERT INTO permission (
    name,
    resource,
    action,
    description
)
VALUES ( ?1, ?2, ?3, ?4 )
        "#,
    )
    .bind(name)
    .bind(resource)
    .bind(action_str)
    .bind(description)
    .execute(&*backend.pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

async fn get_permission_by_name_sqlite(
    backend: &SqliteBackend,
    name: &str,
) -> Result<Option<Permission>, BackendError> {
    let recs = sqlx::query(
        r#"
SELECT
    id,
    name,
    resource,
    action,
    description
FROM
    permission
WHERE
    name = ?1
        "#,
    )
    .bind(name)
    .map(permission_from_row)
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(recs)
}

async fn list_permissions_sqlite(
    backend: &SqliteBackend,
) -> Result<Vec<Permission>, BackendError> {
    let recs = sqlx::query(
        r#"
SELECT
    id,
    name,
    resource,
    action,
    description
FROM
    permission
ORDER BY
    name
        "#,
    )
    .map(permission_from_row)
    .fetch_all(&*backend.pool)
    .await?;
    Ok(recs)
}

async fn remove_permission_sqlite(
    backend: &SqliteBackend,
    id: i64,
) -> Result<bool, BackendError> {
    sqlx::query(
        r#"
DELETE FROM
    user_permission
WHERE
    permission_id = ?1
        "#,
    )
    .bind(id)
    .execute(&*backend.pool)
    .await?;
    Ok(sqlx::query(
        r#"
DELETE FROM
    permission
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
impl PermissionBackend for SqliteBackend {
    async fn add_permission(
        &self,
        name: &str,
        resource: &str,
        action: Action,
        description: Option<&str>,
    ) -> Result<i64, BackendError> {
        add_permission_sqlite(
            &self,
            name,
            resource,
            action,
            description,
        ).await
    }

    async fn get_permission_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Permission>, BackendError> {
        get_permission_by_name_sqlite(
            &self,
            name,
        ).await
    }

    async fn list_permissions(
        &self,
    ) -> Result<Vec<Permission>, BackendError> {
        list_permissions_sqlite(
            &self,
        ).await
    }

    async fn remove_permission(
        &self,
        id: i64,
    ) -> Result<bool, BackendError> {
        remove_permission_sqlite(
            &self,
            id,
        ).await
    }
}
