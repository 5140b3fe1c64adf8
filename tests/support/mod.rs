use sea_orm::{ConnectOptions, ConnectionTrait};
use sea_orm_migration::MigratorTrait;
use tailings_monitor::database::TailingsDb;
use tailings_monitor::migration::Migrator;

/// Fresh in-memory database with the full monitoring schema applied.
pub async fn tailings_db() -> TailingsDb {
    // A single connection keeps every query on the same in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);

    let db = TailingsDb::connect_to(options)
        .await
        .expect("Failed to connect to in-memory database");
    db.conn()
        .execute_unprepared("PRAGMA foreign_keys = ON;")
        .await
        .expect("Failed to enable foreign key enforcement");
    Migrator::up(db.conn(), None)
        .await
        .expect("Failed to run database migrations");
    db
}
