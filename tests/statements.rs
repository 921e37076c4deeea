use std::sync::Arc;

use spanrs::drivers::{InMemoryTestDriver, InMemoryTestResponseBuilder};
use spanrs::{
    Assignment, DataType, DatabaseDriver, Db, DriverRegistry, Field, OrderByColumn, Record,
    Schema, SpanRsError, SpannerDialect, SqlValue, WhereClause,
};

async fn open(driver: &Arc<InMemoryTestDriver>) -> Db {
    let conn: Arc<dyn DatabaseDriver> = Arc::clone(driver) as Arc<dyn DatabaseDriver>;
    Db::open(SpannerDialect::with_conn(conn), &DriverRegistry::new())
        .await
        .unwrap()
}

fn users() -> Schema {
    Schema::new("users")
        .field("id", DataType::Int)
        .field("name", DataType::String)
        .field("active", DataType::Bool)
}

#[tokio::test]
async fn test_find_single_row() {
    let driver = Arc::new(
        InMemoryTestDriver::new().with_response(
            InMemoryTestResponseBuilder::new()
                .columns(&["id", "name"])
                .row(&["42", "Bob"])
                .build(),
        ),
    );
    let db = open(&driver).await;

    let row = db
        .table("users")
        .select(&["id", "name"])
        .where_(WhereClause::eq("name", "Bob"))
        .find()
        .await
        .unwrap()
        .single_row()
        .unwrap();

    driver.assert_last_query(
        "SELECT `id`,`name` FROM `users` WHERE `name` = @v0",
        &[SqlValue::Text("Bob".to_string())],
    );
    driver.assert_query_count(1);
    assert_eq!(row.get("id").unwrap(), "42");
    assert_eq!(row.get("name").unwrap(), "Bob");
}

#[tokio::test]
async fn test_find_follows_query_clause_order() {
    let driver = Arc::new(InMemoryTestDriver::new());
    let db = open(&driver).await;

    // Builder calls deliberately out of clause order.
    db.table("users")
        .limit(10)
        .offset(20)
        .order(OrderByColumn::desc("u.created_at"))
        .group("u.team")
        .where_(WhereClause::gt("u.age", 18))
        .where_(WhereClause::is_null("u.deleted_at"))
        .select(&["u.team"])
        .find()
        .await
        .unwrap();

    driver.assert_last_query(
        "SELECT `u`.`team` FROM `users` WHERE `u`.`age` > @v0 AND `u`.`deleted_at` IS NULL \
         GROUP BY `u`.`team` ORDER BY `u`.`created_at` DESC LIMIT 10 OFFSET 20",
        &[SqlValue::Int64(18)],
    );
}

#[tokio::test]
async fn test_find_without_columns_selects_star() {
    let driver = Arc::new(InMemoryTestDriver::new());
    let db = open(&driver).await;

    let result = db.table("users").offset(5).find().await.unwrap();

    assert!(result.is_empty());
    driver.assert_last_query("SELECT * FROM `users`", &[]);
}

#[tokio::test]
async fn test_create_fills_missing_columns_with_default() {
    let driver = Arc::new(InMemoryTestDriver::new());
    let db = open(&driver).await;

    db.create(
        &users(),
        &[
            Record::new().set("id", 1).set("name", "Alice").set("active", true),
            Record::new().set("id", 2).set("name", "Bob"),
        ],
    )
    .await
    .unwrap();

    driver.assert_last_query(
        "INSERT INTO `users` (`id`,`name`,`active`) VALUES (@v0,@v1,@v2),(@v3,@v4,DEFAULT)",
        &[
            SqlValue::Int64(1),
            SqlValue::Text("Alice".to_string()),
            SqlValue::Bool(true),
            SqlValue::Int64(2),
            SqlValue::Text("Bob".to_string()),
        ],
    );
}

#[tokio::test]
async fn test_create_nothing_skips_the_driver() {
    let driver = Arc::new(InMemoryTestDriver::new());
    let db = open(&driver).await;

    let result = db.create(&users(), &[]).await.unwrap();

    assert!(result.is_empty());
    driver.assert_query_count(0);
}

#[tokio::test]
async fn test_update_follows_update_clause_order() {
    let driver = Arc::new(InMemoryTestDriver::new());
    let db = open(&driver).await;

    db.table("users")
        .where_(WhereClause::in_list("id", [1, 2]))
        .update(vec![
            Assignment::new("name", "Carol"),
            Assignment::new("active", false),
        ])
        .await
        .unwrap();

    driver.assert_last_query(
        "UPDATE `users` SET `name`=@v0,`active`=@v1 WHERE `id` IN (@v2,@v3)",
        &[
            SqlValue::Text("Carol".to_string()),
            SqlValue::Bool(false),
            SqlValue::Int64(1),
            SqlValue::Int64(2),
        ],
    );
}

#[tokio::test]
async fn test_delete_follows_delete_clause_order() {
    let driver = Arc::new(InMemoryTestDriver::new());
    let db = open(&driver).await;

    db.table("users")
        .where_(WhereClause::neq("name", "root"))
        .delete()
        .await
        .unwrap();

    driver.assert_last_query(
        "DELETE FROM `users` WHERE `name` <> @v0",
        &[SqlValue::Text("root".to_string())],
    );
}

#[tokio::test]
async fn test_unconditional_update_and_delete_are_rejected() {
    let driver = Arc::new(InMemoryTestDriver::new());
    let db = open(&driver).await;

    let err = db
        .table("users")
        .update(vec![Assignment::new("name", "x")])
        .await
        .unwrap_err();
    assert!(matches!(err, SpanRsError::MissingWhereClause("UPDATE")));

    let err = db.table("users").delete().await.unwrap_err();
    assert!(matches!(err, SpanRsError::MissingWhereClause("DELETE")));

    driver.assert_query_count(0);
}

#[tokio::test]
async fn test_driver_errors_propagate() {
    let driver = Arc::new(InMemoryTestDriver::new().with_failure("Table not found: users"));
    let db = open(&driver).await;

    match db.table("users").find().await {
        Err(SpanRsError::QueryFailed(message)) => assert_eq!(message, "Table not found: users"),
        Err(other) => panic!("Expected QueryFailed error, got {other:?}"),
        Ok(_) => panic!("Expected QueryFailed error"),
    }
}

#[tokio::test]
async fn test_save_points_are_unsupported() {
    let driver = Arc::new(InMemoryTestDriver::new());
    let db = open(&driver).await;

    assert!(matches!(db.save_point("sp"), Err(SpanRsError::Unsupported(_))));
    assert!(matches!(db.rollback_to("sp"), Err(SpanRsError::Unsupported(_))));
    driver.assert_query_count(0);
}

#[tokio::test]
async fn test_data_type_of_through_runtime() {
    let driver = Arc::new(InMemoryTestDriver::new());
    let db = open(&driver).await;

    let types: Vec<String> = users().fields.iter().map(|f| db.data_type_of(f)).collect();
    assert_eq!(types, vec!["INT64", "STRING", "boolean"]);
    assert_eq!(db.data_type_of(&Field::new("doc", "JSON")), "JSON");
}

#[tokio::test]
#[should_panic(expected = "spanner driver does not support migrator now.")]
async fn test_migrator_aborts() {
    let driver = Arc::new(InMemoryTestDriver::new());
    let db = open(&driver).await;
    let _ = db.migrator();
}
