//! Cost of the SQL rewriting passes and a round trip through the store.

use criterion::{criterion_group, criterion_main, Criterion};

use datamapper_core::{binds, BindValue, Binds, Row, SqlDatabase};
use datamapper_storage::{normalize, Conditions, RelationalStore};

fn bench_normalize(c: &mut Criterion) {
    let ids: Vec<i64> = (0..100).collect();
    let binds = binds! { "ids" => ids, "group" => 7 };
    let sql = "SELECT * FROM users WHERE id IN (:ids) AND group_id = :group";

    c.bench_function("normalize_list_100", |b| b.iter(|| normalize(sql, &binds)));

    let scalars = binds! { "a" => 1, "b" => "two", "c" => 3.0 };
    c.bench_function("normalize_scalars_only", |b| {
        b.iter(|| normalize("SELECT :a, :b, :c", &scalars))
    });
}

fn bench_conditions(c: &mut Criterion) {
    let conditions = Conditions::new()
        .param("group_id IN (?)", vec![1, 3, 5, 7])
        .params(
            "group_id >= ? OR password IN (?)",
            [BindValue::from(5), BindValue::from(vec!["123456", "qwerty"])],
        )
        .param("email LIKE ?", "ivanov%")
        .raw("deleted_at IS NULL");

    c.bench_function("conditions_build_4", |b| b.iter(|| conditions.build().unwrap()));
}

fn bench_store_round_trip(c: &mut Criterion) {
    let store = RelationalStore::open_in_memory().unwrap();
    store
        .execute(
            "CREATE TABLE items (id INTEGER PRIMARY KEY, name TEXT, group_id INTEGER)",
            &Binds::new(),
        )
        .unwrap();
    let rows: Vec<Row> = (0..200)
        .map(|i| {
            Row::new()
                .with("name", format!("item-{i}"))
                .with("group_id", i % 10)
        })
        .collect();
    store.bulk_insert("items", &rows).unwrap();

    let db: &dyn SqlDatabase = &store;
    let binds = binds! { "groups" => vec![1, 2, 3] };
    c.bench_function("store_query_where_in", |b| {
        b.iter(|| {
            db.query("SELECT * FROM items WHERE group_id IN (:groups)", &binds)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_normalize, bench_conditions, bench_store_round_trip);
criterion_main!(benches);
