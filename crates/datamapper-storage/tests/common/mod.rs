//! Shared fixtures: a `test_users` table on an in-memory store.

#![allow(dead_code)]

use datamapper_core::{Binds, Row, SqlDatabase, TableSchema};
use datamapper_storage::RelationalStore;

pub struct TestUsers;

impl TableSchema for TestUsers {
    const TABLE: &'static str = "test_users";
    const PRIMARY_KEY: &'static str = "id";
}

pub const CREATE_TEST_USERS: &str = "
    CREATE TABLE test_users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL,
        password TEXT NOT NULL,
        first_name TEXT DEFAULT NULL,
        last_name TEXT DEFAULT NULL,
        group_id INTEGER DEFAULT NULL
    )";

pub fn open_store() -> RelationalStore {
    let store = RelationalStore::open_in_memory().unwrap();
    store.execute(CREATE_TEST_USERS, &Binds::new()).unwrap();
    store
}

pub fn user(email: &str, password: &str, group_id: i64) -> Row {
    Row::new()
        .with("email", email)
        .with("password", password)
        .with("group_id", group_id)
}

/// Three users in groups 1, 2 and 3, inserted with ids 1, 2 and 3.
pub fn three_users() -> Vec<Row> {
    vec![
        user("ivanov_test@test.local", "123456", 1),
        user("petrov_test@test.local", "qwerty", 2),
        user("sidorov_test@test.local", "qazqaz", 3),
    ]
}

pub fn seed_three_users(db: &dyn SqlDatabase) {
    db.bulk_insert("test_users", &three_users()).unwrap();
}
