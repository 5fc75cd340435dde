mod ac;

mod default_impl {
    use sekcore::platform::DefaultACPlatform;
    use crate::backend::db::SqliteBackend;

    impl DefaultACPlatform for SqliteBackend {}
}
