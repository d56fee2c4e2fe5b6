use diesel::prelude::*;

mod common;

#[test]
fn test_fixture_database_is_migrated_and_cleaned_up() {
    let filename = "test_fixture_database_lifecycle.db";

    {
        let test_db = common::TestDb::new(filename);
        let mut conn = test_db.pool().get().expect("connection from pool");

        // Migrations ran; the core tables answer queries.
        let floors: i64 = comanda::schema::floors::table
            .count()
            .get_result(&mut conn)
            .expect("floors table exists");
        assert_eq!(floors, 0);
    }

    // Dropping the fixture removes the database and its WAL companions.
    assert!(!std::path::Path::new(filename).exists());
    assert!(!std::path::Path::new(&format!("{filename}-shm")).exists());
    assert!(!std::path::Path::new(&format!("{filename}-wal")).exists());
}
