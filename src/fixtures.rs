//! Illustrative sample data. Applied only to an empty store, through the
//! repository layer so every integrity check runs.

use crate::error::AppError;
use crate::model::{
    NewMaterial, NewOrder, NewOrderProduct, NewPlant, NewPlantMaterial, NewPlantProduct,
    NewProduct, NewProductMaterial, NewStorageMaterial, NewStorageProduct,
};
use crate::repo;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::SqlitePool;

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn plant(name: &str, location: &str, capacity: i64) -> NewPlant {
    NewPlant {
        name: name.into(),
        location: Some(location.into()),
        capacity: Some(capacity),
    }
}

fn product(name: &str, description: &str, category: &str, price: f64) -> NewProduct {
    NewProduct {
        name: name.into(),
        description: Some(description.into()),
        category: category.into(),
        price,
    }
}

fn material(name: &str, description: &str, unit: &str, cost: f64) -> NewMaterial {
    NewMaterial {
        name: name.into(),
        description: Some(description.into()),
        unit: Some(unit.into()),
        cost,
    }
}

fn order(date: DateTime<Utc>, customer: &str, status: &str) -> NewOrder {
    NewOrder {
        order_date: date,
        customer_name: customer.into(),
        status: status.into(),
    }
}

/// Seed the sample catalog. A non-empty plants table means the store has
/// real data; seeding is skipped rather than merged.
pub async fn seed(pool: &SqlitePool) -> Result<(), AppError> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM plants")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::info!("fixtures skipped: store is not empty");
        return Ok(());
    }

    let mut plants = Vec::new();
    for input in [
        plant("Green Valley Plant", "Springfield, IL", 1000),
        plant("Herbal Remedies Factory", "Madison, WI", 1500),
        plant("Natural Extracts Co.", "Boulder, CO", 2000),
        plant("Pure Essence Plants", "Austin, TX", 1200),
        plant("Botanical Ingredients Inc.", "Seattle, WA", 1800),
    ] {
        plants.push(repo::plants::create(pool, &input).await?);
    }

    let mut products = Vec::new();
    for input in [
        product("Herbal Tea", "A soothing herbal tea blend.", "Beverage", 5.99),
        product(
            "Natural Shampoo",
            "Shampoo made from natural ingredients.",
            "Cosmetics",
            12.99,
        ),
        product(
            "Essential Oil",
            "Pure essential oil for aromatherapy.",
            "Aromatherapy",
            15.99,
        ),
        product(
            "Herbal Extract",
            "Concentrated herbal extract for health benefits.",
            "Supplements",
            20.99,
        ),
        product(
            "Organic Soap",
            "Handmade organic soap with natural ingredients.",
            "Cosmetics",
            7.49,
        ),
    ] {
        products.push(repo::products::create(pool, &input).await?);
    }

    let mut materials = Vec::new();
    for input in [
        material("Chamomile", "Dried chamomile flowers.", "grams", 2.50),
        material("Lavender", "Dried lavender flowers.", "grams", 3.00),
        material("Coconut Oil", "Organic coconut oil.", "liters", 10.00),
        material("Aloe Vera", "Fresh aloe vera gel.", "liters", 8.00),
        material("Olive Oil", "Extra virgin olive oil.", "liters", 12.00),
    ] {
        materials.push(repo::materials::create(pool, &input).await?);
    }

    let mut orders = Vec::new();
    for input in [
        order(day(2023, 1, 15), "Alice Johnson", "Completed"),
        order(day(2023, 2, 20), "Bob Smith", "Pending"),
        order(day(2023, 3, 5), "Charlie Brown", "Shipped"),
        order(day(2023, 4, 10), "Diana Prince", "Completed"),
        order(day(2023, 5, 25), "Ethan Hunt", "Cancelled"),
    ] {
        orders.push(repo::orders::create(pool, &input).await?);
    }

    for (plant_ix, product_ix, quantity) in [(0, 0, 200.0), (0, 1, 150.0), (1, 2, 300.0), (2, 3, 100.0), (3, 4, 250.0)] {
        repo::joins::plant_products::create(
            pool,
            &NewPlantProduct {
                plant_id: plants[plant_ix].id,
                product_id: products[product_ix].id,
                quantity,
            },
        )
        .await?;
    }

    for (product_ix, material_ix, quantity) in [(0, 0, 50.0), (1, 2, 30.0), (2, 1, 20.0), (3, 3, 25.0), (4, 4, 10.0)] {
        repo::joins::product_materials::create(
            pool,
            &NewProductMaterial {
                product_id: products[product_ix].id,
                material_id: materials[material_ix].id,
                quantity,
            },
        )
        .await?;
    }

    for (plant_ix, material_ix, quantity) in [(0, 0, 100.0), (1, 1, 80.0), (2, 2, 150.0), (3, 3, 90.0), (4, 4, 120.0)] {
        repo::joins::plant_materials::create(
            pool,
            &NewPlantMaterial {
                plant_id: plants[plant_ix].id,
                material_id: materials[material_ix].id,
                quantity,
            },
        )
        .await?;
    }

    for (order_ix, product_ix, quantity) in [(0, 0, 2), (0, 2, 1), (1, 1, 3), (2, 3, 2), (3, 4, 5)] {
        repo::joins::order_products::create(
            pool,
            &NewOrderProduct {
                order_id: orders[order_ix].id,
                product_id: products[product_ix].id,
                quantity,
            },
        )
        .await?;
    }

    for (product_ix, quantity) in [(0, 500), (1, 300), (2, 400), (3, 200), (4, 600)] {
        repo::storage::storage_products::create(
            pool,
            &NewStorageProduct {
                product_id: products[product_ix].id,
                quantity,
            },
        )
        .await?;
    }

    for (material_ix, quantity) in [(0, 150), (1, 100), (2, 200), (3, 180), (4, 220)] {
        repo::storage::storage_materials::create(
            pool,
            &NewStorageMaterial {
                material_id: materials[material_ix].id,
                quantity,
            },
        )
        .await?;
    }

    tracing::info!("fixtures applied");
    Ok(())
}
