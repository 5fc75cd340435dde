pub fn is_send_sync<T: Send + Sync>() {}
