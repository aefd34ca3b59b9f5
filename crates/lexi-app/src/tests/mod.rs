mod fake_api;


use std::sync::Arc;
use std::time::Duration;

use crate::store::Store;
use self::fake_api::FakeApi;

fn test_store(api: Arc<FakeApi>) -> Store {
    Store::new(api, Duration::from_millis(3000))
}
