use sekac::platform::{
    Builder,
    Platform,
};
use sekmodel::backend::db::{
    MigrationProfile,
    SqliteBackend,
};

pub async fn create_sqlite_backend() -> anyhow::Result<SqliteBackend> {
    Ok(SqliteBackend::from_url("sqlite::memory:")
        .await?
        .run_migration_profile(MigrationProfile::Sekac)
        .await?)
}

pub async fn create_sqlite_platform() -> anyhow::Result<Platform> {
    let platform = Builder::new()
        .ac_platform(create_sqlite_backend().await?)
        .build();
    Ok(platform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[async_std::test]
    async fn smoke_test_create_platform() -> anyhow::Result<()> {
        create_sqlite_platform().await?;
        Ok(())
    }
}
