//! Shared test helpers: in-memory database and sample inputs.

use manufactory::model::{NewMaterial, NewOrder, NewPlant, NewProduct};
use manufactory::{apply_migrations, connect_pool};
use sqlx::SqlitePool;

/// Fresh in-memory database with the schema applied. One connection only:
/// every `sqlite::memory:` connection is its own database.
pub async fn test_pool() -> SqlitePool {
    let pool = connect_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    apply_migrations(&pool).await.expect("migrations");
    pool
}

pub fn green_valley() -> NewPlant {
    NewPlant {
        name: "Green Valley Plant".into(),
        location: Some("Springfield, IL".into()),
        capacity: Some(1000),
    }
}

pub fn herbal_tea() -> NewProduct {
    NewProduct {
        name: "Herbal Tea".into(),
        description: None,
        category: "Beverage".into(),
        price: 5.99,
    }
}

pub fn chamomile() -> NewMaterial {
    NewMaterial {
        name: "Chamomile".into(),
        description: Some("Dried chamomile flowers.".into()),
        unit: Some("grams".into()),
        cost: 2.50,
    }
}

pub fn alice_order() -> NewOrder {
    use chrono::TimeZone;
    NewOrder {
        order_date: chrono::Utc
            .with_ymd_and_hms(2023, 1, 15, 0, 0, 0)
            .single()
            .expect("valid date"),
        customer_name: "Alice Johnson".into(),
        status: "Completed".into(),
    }
}
