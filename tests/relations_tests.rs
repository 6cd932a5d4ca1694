//! Referential integrity: join and storage rows, delete policy, fixtures.

mod common;

use common::{alice_order, chamomile, green_valley, herbal_tea, test_pool};
use manufactory::error::AppError;
use manufactory::model::{
    NewOrderProduct, NewPlantProduct, NewProductMaterial, NewStorageMaterial, NewStorageProduct,
    PlantProductPatch,
};
use manufactory::{fixtures, repo};

#[tokio::test]
async fn join_row_links_existing_parents() {
    let pool = test_pool().await;
    let plant = repo::plants::create(&pool, &green_valley()).await.unwrap();
    let product = repo::products::create(&pool, &herbal_tea()).await.unwrap();

    let link = repo::joins::plant_products::create(
        &pool,
        &NewPlantProduct {
            plant_id: plant.id,
            product_id: product.id,
            quantity: 200.0,
        },
    )
    .await
    .unwrap();
    assert_eq!(link.plant_id, plant.id);
    assert_eq!(link.product_id, product.id);

    let fetched = repo::joins::plant_products::get(&pool, link.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched, link);
}

#[tokio::test]
async fn dangling_reference_is_rejected() {
    let pool = test_pool().await;
    let product = repo::products::create(&pool, &herbal_tea()).await.unwrap();

    let err = repo::joins::plant_products::create(
        &pool,
        &NewPlantProduct {
            plant_id: 99,
            product_id: product.id,
            quantity: 200.0,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Reference(_)), "got {:?}", err);

    let err = repo::storage::storage_products::create(
        &pool,
        &NewStorageProduct {
            product_id: 99,
            quantity: 10,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Reference(_)), "got {:?}", err);

    let err = repo::storage::storage_materials::create(
        &pool,
        &NewStorageMaterial {
            material_id: 99,
            quantity: 10,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Reference(_)), "got {:?}", err);

    let err = repo::joins::order_products::create(
        &pool,
        &NewOrderProduct {
            order_id: 99,
            product_id: product.id,
            quantity: 1,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Reference(_)), "got {:?}", err);
}

#[tokio::test]
async fn update_to_dangling_reference_is_rejected() {
    let pool = test_pool().await;
    let plant = repo::plants::create(&pool, &green_valley()).await.unwrap();
    let product = repo::products::create(&pool, &herbal_tea()).await.unwrap();
    let link = repo::joins::plant_products::create(
        &pool,
        &NewPlantProduct {
            plant_id: plant.id,
            product_id: product.id,
            quantity: 200.0,
        },
    )
    .await
    .unwrap();

    let err = repo::joins::plant_products::update(
        &pool,
        link.id,
        PlantProductPatch {
            plant_id: Some(99),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Reference(_)), "got {:?}", err);

    // the failed update left the row untouched
    let unchanged = repo::joins::plant_products::get(&pool, link.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, link);
}

#[tokio::test]
async fn delete_with_dependents_is_rejected_until_they_are_gone() {
    let pool = test_pool().await;
    let plant = repo::plants::create(&pool, &green_valley()).await.unwrap();
    let product = repo::products::create(&pool, &herbal_tea()).await.unwrap();
    let link = repo::joins::plant_products::create(
        &pool,
        &NewPlantProduct {
            plant_id: plant.id,
            product_id: product.id,
            quantity: 200.0,
        },
    )
    .await
    .unwrap();

    let err = repo::plants::delete(&pool, plant.id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);
    let err = repo::products::delete(&pool, product.id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);

    repo::joins::plant_products::delete(&pool, link.id)
        .await
        .unwrap();
    repo::plants::delete(&pool, plant.id).await.unwrap();
    repo::products::delete(&pool, product.id).await.unwrap();
}

#[tokio::test]
async fn delete_order_with_lines_is_rejected() {
    let pool = test_pool().await;
    let order = repo::orders::create(&pool, &alice_order()).await.unwrap();
    let product = repo::products::create(&pool, &herbal_tea()).await.unwrap();
    repo::joins::order_products::create(
        &pool,
        &NewOrderProduct {
            order_id: order.id,
            product_id: product.id,
            quantity: 2,
        },
    )
    .await
    .unwrap();

    let err = repo::orders::delete(&pool, order.id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);
}

#[tokio::test]
async fn delete_material_with_stock_is_rejected() {
    let pool = test_pool().await;
    let material = repo::materials::create(&pool, &chamomile()).await.unwrap();
    let stock = repo::storage::storage_materials::create(
        &pool,
        &NewStorageMaterial {
            material_id: material.id,
            quantity: 150,
        },
    )
    .await
    .unwrap();

    let err = repo::materials::delete(&pool, material.id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);

    repo::storage::storage_materials::delete(&pool, stock.id)
        .await
        .unwrap();
    repo::materials::delete(&pool, material.id).await.unwrap();
}

#[tokio::test]
async fn product_material_link_round_trips() {
    let pool = test_pool().await;
    let product = repo::products::create(&pool, &herbal_tea()).await.unwrap();
    let material = repo::materials::create(&pool, &chamomile()).await.unwrap();

    let link = repo::joins::product_materials::create(
        &pool,
        &NewProductMaterial {
            product_id: product.id,
            material_id: material.id,
            quantity: 50.0,
        },
    )
    .await
    .unwrap();
    let all = repo::joins::product_materials::list(&pool).await.unwrap();
    assert_eq!(all, vec![link]);
}

#[tokio::test]
async fn fixtures_populate_an_empty_store_once() {
    let pool = test_pool().await;
    fixtures::seed(&pool).await.unwrap();

    assert_eq!(repo::plants::list(&pool).await.unwrap().len(), 5);
    assert_eq!(repo::products::list(&pool).await.unwrap().len(), 5);
    assert_eq!(repo::materials::list(&pool).await.unwrap().len(), 5);
    assert_eq!(repo::orders::list(&pool).await.unwrap().len(), 5);
    assert_eq!(
        repo::joins::plant_products::list(&pool).await.unwrap().len(),
        5
    );
    assert_eq!(
        repo::storage::storage_products::list(&pool)
            .await
            .unwrap()
            .len(),
        5
    );

    // second run is a no-op, not a duplicate insert
    fixtures::seed(&pool).await.unwrap();
    assert_eq!(repo::plants::list(&pool).await.unwrap().len(), 5);
}
