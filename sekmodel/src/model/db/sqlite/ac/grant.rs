use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use sekcore::{
    ac::{
        action::Action,
        grant::PermissionGrant,
        permission::Permission,
        role::Role,
        traits::GrantBackend,
    },
    error::BackendError,
};
use sqlx::Row;
use std::{
    collections::HashMap,
    str::FromStr,
};

use crate::{
    backend::db::SqliteBackend,
};

async fn grant_permission_to_user_sqlite(
    backend: &SqliteBackend,
    user_id: i64,
    permission_id: i64,
) -> Result<bool, BackendError> {
    let ts = Utc::now().timestamp();
    match sqlx::query(
        r#"
INSERT INTO user_permission (
    user_id,
    permission_id,
    created_ts
)
VALUES ( ?1, ?2, ?3 )
        "#,
    )
    .bind(user_id)
    .bind(permission_id)
    .bind(ts)
    .execute(&*backend.pool)
    .await {
        Ok(_) => Ok(true),
        Err(e) => {
            match e.as_database_error() {
                Some(db_e) if db_e.is_unique_violation() => {
                    log::debug!("user {user_id} already granted permission {permission_id}");
                    Ok(false)
                }
                _ => Err(e)?,
            }
        }
    }
}

async fn revoke_permission_from_user_sqlite(
    backend: &SqliteBackend,
    user_id: i64,
    permission_id: i64,
) -> Result<bool, BackendError> {
    Ok(sqlx::query(
        r#"
DELETE FROM
    user_permission
WHERE
    user_id = ?1 AND
    permission_id = ?2
        "#,
    )
    .bind(user_id)
    .bind(permission_id)
    .execute(&*backend.pool)
    .await?
    .rows_affected() > 0)
}

async fn get_grant_for_user_permission_sqlite(
    backend: &SqliteBackend,
    user_id: i64,
    permission_id: i64,
) -> Result<Option<PermissionGrant>, BackendError> {
    let recs = sqlx::query(
        r#"
SELECT
    id,
    user_id,
    permission_id,
    created_ts
FROM
    user_permission
WHERE
    user_id = ?1 AND
    permission_id = ?2
        "#,
    )
    .bind(user_id)
    .bind(permission_id)
    .map(|row: sqlx::sqlite::SqliteRow| PermissionGrant {
        id: row.get("id"),
        user_id: row.get("user_id"),
        permission_id: row.get("permission_id"),
        created_ts: row.get("created_ts"),
    })
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(recs)
}

async fn get_grants_for_user_sqlite(
    backend: &SqliteBackend,
    user_id: i64,
) -> Result<Vec<Permission>, BackendError> {
    let recs = sqlx::query(
        r#"
SELECT
    permission.id AS id,
    permission.name AS name,
    permission.resource AS resource,
    permission.action AS action,
    permission.description AS description
FROM
    user_permission
JOIN
    permission ON user_permission.permission_id == permission.id
WHERE
    user_permission.user_id = ?1
        "#,
    )
    .bind(user_id)
    .map(|row: sqlx::sqlite::SqliteRow| Permission {
        id: row.get("id"),
        name: row.get("name"),
        resource: row.get("resource"),
        action: Action::from_str(&row.get::<String, _>("action"))
            .unwrap_or(Action::default()),
        description: row.get("description"),
    })
    .fetch_all(&*backend.pool)
    .await?;
    Ok(recs)
}

async fn get_grants_by_role_sqlite(
    backend: &SqliteBackend,
) -> Result<Vec<(Role, Vec<String>)>, BackendError> {
    let mut result = HashMap::<Role, Vec<String>>::new();
    let mut rows = sqlx::query(
        r#"
SELECT
    'user'.role AS role,
    permission.name AS name
FROM
    user_permission
JOIN
    'user' ON user_permission.user_id == 'user'.id
JOIN
    permission ON user_permission.permission_id == permission.id
        "#,
    )
    .fetch(&*backend.pool);
    while let Some(row) = rows.try_next().await? {
        let role = Role::from_str(&row.get::<String, _>("role"))
            .unwrap_or(Role::default());
        let name = row.get::<String, _>("name");
        result
            .entry(role)
            .and_modify(|names| names.push(name.clone()))
            .or_insert(vec![name]);
    }
    Ok(result
        .into_iter()
        .collect::<Vec<_>>())
}

#[async_trait]
impl GrantBackend for SqliteBackend {
    async fn grant_permission_to_user(
        &self,
        user_id: i64,
        permission_id: i64,
    ) -> Result<bool, BackendError> {
        grant_permission_to_user_sqlite(
            &self,
            user_id,
            permission_id,
        ).await
    }

    async fn revoke_permission_from_user(
        &self,
        user_id: i64,
        permission_id: i64,
    ) -> Result<bool, BackendError> {
        revoke_permission_from_user_sqlite(
            &self,
            user_id,
            permission_id,
        ).await
    }

    async fn get_grant_for_user_permission(
        &self,
        user_id: i64,
        permission_id: i64,
    ) -> Result<Option<PermissionGrant>, BackendError> {
        get_grant_for_user_permission_sqlite(
            &self,
            user_id,
            permission_id,
        ).await
    }

    async fn get_grants_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Permission>, BackendError> {
        get_grants_for_user_sqlite(
            &self,
            user_id,
        ).await
    }

    async fn get_grants_by_role(
        &self,
    ) -> Result<Vec<(Role, Vec<String>)>, BackendError> {
        get_grants_by_role_sqlite(
            &self,
        ).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use sekcore::ac::{
        action::Action,
        role::Role,
        traits::{
            GrantBackend,
            PermissionBackend,
            UserBackend,
        },
    };
    use crate::backend::db::{
        MigrationProfile,
        SqliteBackend,
    };

    async fn create_backend() -> anyhow::Result<SqliteBackend> {
        Ok(SqliteBackend::from_url("sqlite::memory:")
            .await?
            .run_migration_profile(MigrationProfile::Sekac)
            .await?)
    }

    #[async_std::test]
    async fn test_basic() -> anyhow::Result<()> {
        let backend = create_backend().await?;
        let user_id = UserBackend::add_user(&backend, "test_user", Role::Teacher).await?;
        let permission_id = PermissionBackend::add_permission(
            &backend, "siswa.create", "siswa", Action::Create, None).await?;

        assert!(GrantBackend::get_grant_for_user_permission(&backend, user_id, permission_id)
            .await?
            .is_none());
        assert!(GrantBackend::grant_permission_to_user(&backend, user_id, permission_id).await?);
        let grant = GrantBackend::get_grant_for_user_permission(&backend, user_id, permission_id)
            .await?
            .expect("grant is missing?");
        assert_eq!(grant.user_id, user_id);
        assert_eq!(grant.permission_id, permission_id);
        let grants = GrantBackend::get_grants_for_user(&backend, user_id).await?;
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].name, "siswa.create");

        assert!(GrantBackend::revoke_permission_from_user(&backend, user_id, permission_id).await?);
        assert!(GrantBackend::get_grants_for_user(&backend, user_id).await?.is_empty());
        assert!(!GrantBackend::revoke_permission_from_user(&backend, user_id, permission_id).await?);
        Ok(())
    }

    #[async_std::test]
    async fn test_double() -> anyhow::Result<()> {
        let backend = create_backend().await?;
        let user_id = UserBackend::add_user(&backend, "test_user", Role::Admin).await?;
        let permission_id = PermissionBackend::add_permission(
            &backend, "guru.view", "guru", Action::View, None).await?;

        assert!(GrantBackend::grant_permission_to_user(&backend, user_id, permission_id).await?);
        // second assignment is ignored rather than duplicated
        assert!(!GrantBackend::grant_permission_to_user(&backend, user_id, permission_id).await?);
        assert_eq!(GrantBackend::get_grants_for_user(&backend, user_id).await?.len(), 1);
        Ok(())
    }

    #[async_std::test]
    async fn test_unknown_user_empty() -> anyhow::Result<()> {
        let backend = create_backend().await?;
        // nonexistent principals resolve to no grants, not an error
        assert!(GrantBackend::get_grants_for_user(&backend, 42).await?.is_empty());
        Ok(())
    }

    #[async_std::test]
    async fn test_remove_user_cascades(
    ) -> anyhow::Result<()> {
        let backend = create_backend().await?;
        let user_id = UserBackend::add_user(&backend, "test_user", Role::Teacher).await?;
        let permission_id = PermissionBackend::add_permission(
            &backend, "siswa.view", "siswa", Action::View, None).await?;
        GrantBackend::grant_permission_to_user(&backend, user_id, permission_id).await?;

        UserBackend::remove_user(&backend, user_id).await?;
        assert!(GrantBackend::get_grants_for_user(&backend, user_id).await?.is_empty());
        Ok(())
    }

    #[async_std::test]
    async fn test_grants_by_role() -> anyhow::Result<()> {
        let backend = create_backend().await?;
        let admin = UserBackend::add_user(&backend, "admin", Role::Admin).await?;
        let guru = UserBackend::add_user(&backend, "guru", Role::Teacher).await?;
        let p1 = PermissionBackend::add_permission(
            &backend, "siswa.create", "siswa", Action::Create, None).await?;
        let p2 = PermissionBackend::add_permission(
            &backend, "siswa.view", "siswa", Action::View, None).await?;
        GrantBackend::grant_permission_to_user(&backend, admin, p1).await?;
        GrantBackend::grant_permission_to_user(&backend, admin, p2).await?;
        GrantBackend::grant_permission_to_user(&backend, guru, p2).await?;

        let mut report = GrantBackend::get_grants_by_role(&backend).await?;
        report.sort();
        report.iter_mut().for_each(|(_, names)| names.sort());
        assert_eq!(
            report,
            vec![
                (Role::Admin, vec![
                    "siswa.create".to_string(),
                    "siswa.view".to_string(),
                ]),
                (Role::Teacher, vec!["siswa.view".to_string()]),
            ],
        );
        Ok(())
    }
}
