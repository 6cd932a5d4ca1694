//! Canonical domain types: one row struct per table, a create input, and a
//! patch of optional fields per mutable entity.
//!
//! Patches merge explicitly, field by field: a field carried in the request
//! replaces the stored value, an omitted (or null) field keeps it. This is
//! the whole partial-update contract; there is no attribute reflection.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------- plants ----------

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub capacity: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlant {
    pub name: String,
    pub location: Option<String>,
    pub capacity: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i64>,
}

impl NewPlant {
    pub fn validate(&self) -> Result<(), AppError> {
        require_nonempty("name", &self.name)
    }
}

impl Plant {
    pub fn apply(&mut self, patch: PlantPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(location) = patch.location {
            self.location = Some(location);
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = Some(capacity);
        }
    }
}

impl PlantPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            require_nonempty("name", name)?;
        }
        Ok(())
    }
}

// ---------- products ----------

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
}

impl NewProduct {
    pub fn validate(&self) -> Result<(), AppError> {
        require_nonempty("name", &self.name)?;
        require_nonempty("category", &self.category)?;
        require_nonneg_f64("price", self.price)
    }
}

impl Product {
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

impl ProductPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            require_nonempty("name", name)?;
        }
        if let Some(category) = &self.category {
            require_nonempty("category", category)?;
        }
        if let Some(price) = self.price {
            require_nonneg_f64("price", price)?;
        }
        Ok(())
    }
}

// ---------- materials ----------

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMaterial {
    pub name: String,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub cost: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub cost: Option<f64>,
}

impl NewMaterial {
    pub fn validate(&self) -> Result<(), AppError> {
        require_nonempty("name", &self.name)?;
        require_nonneg_f64("cost", self.cost)
    }
}

impl Material {
    pub fn apply(&mut self, patch: MaterialPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(unit) = patch.unit {
            self.unit = Some(unit);
        }
        if let Some(cost) = patch.cost {
            self.cost = cost;
        }
    }
}

impl MaterialPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            require_nonempty("name", name)?;
        }
        if let Some(cost) = self.cost {
            require_nonneg_f64("cost", cost)?;
        }
        Ok(())
    }
}

// ---------- orders ----------

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_date: DateTime<Utc>,
    pub customer_name: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub order_date: DateTime<Utc>,
    pub customer_name: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderPatch {
    pub order_date: Option<DateTime<Utc>>,
    pub customer_name: Option<String>,
    pub status: Option<String>,
}

impl NewOrder {
    pub fn validate(&self) -> Result<(), AppError> {
        require_nonempty("customer_name", &self.customer_name)?;
        require_nonempty("status", &self.status)
    }
}

impl Order {
    pub fn apply(&mut self, patch: OrderPatch) {
        if let Some(order_date) = patch.order_date {
            self.order_date = order_date;
        }
        if let Some(customer_name) = patch.customer_name {
            self.customer_name = customer_name;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

impl OrderPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(customer_name) = &self.customer_name {
            require_nonempty("customer_name", customer_name)?;
        }
        if let Some(status) = &self.status {
            require_nonempty("status", status)?;
        }
        Ok(())
    }
}

// ---------- join rows ----------

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PlantProduct {
    pub id: i64,
    pub plant_id: i64,
    pub product_id: i64,
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlantProduct {
    pub plant_id: i64,
    pub product_id: i64,
    pub quantity: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantProductPatch {
    pub plant_id: Option<i64>,
    pub product_id: Option<i64>,
    pub quantity: Option<f64>,
}

impl NewPlantProduct {
    pub fn validate(&self) -> Result<(), AppError> {
        require_nonneg_f64("quantity", self.quantity)
    }
}

impl PlantProduct {
    pub fn apply(&mut self, patch: PlantProductPatch) {
        if let Some(plant_id) = patch.plant_id {
            self.plant_id = plant_id;
        }
        if let Some(product_id) = patch.product_id {
            self.product_id = product_id;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
    }
}

impl PlantProductPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(quantity) = self.quantity {
            require_nonneg_f64("quantity", quantity)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ProductMaterial {
    pub id: i64,
    pub product_id: i64,
    pub material_id: i64,
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductMaterial {
    pub product_id: i64,
    pub material_id: i64,
    pub quantity: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductMaterialPatch {
    pub product_id: Option<i64>,
    pub material_id: Option<i64>,
    pub quantity: Option<f64>,
}

impl NewProductMaterial {
    pub fn validate(&self) -> Result<(), AppError> {
        require_nonneg_f64("quantity", self.quantity)
    }
}

impl ProductMaterial {
    pub fn apply(&mut self, patch: ProductMaterialPatch) {
        if let Some(product_id) = patch.product_id {
            self.product_id = product_id;
        }
        if let Some(material_id) = patch.material_id {
            self.material_id = material_id;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
    }
}

impl ProductMaterialPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(quantity) = self.quantity {
            require_nonneg_f64("quantity", quantity)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PlantMaterial {
    pub id: i64,
    pub plant_id: i64,
    pub material_id: i64,
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlantMaterial {
    pub plant_id: i64,
    pub material_id: i64,
    pub quantity: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantMaterialPatch {
    pub plant_id: Option<i64>,
    pub material_id: Option<i64>,
    pub quantity: Option<f64>,
}

impl NewPlantMaterial {
    pub fn validate(&self) -> Result<(), AppError> {
        require_nonneg_f64("quantity", self.quantity)
    }
}

impl PlantMaterial {
    pub fn apply(&mut self, patch: PlantMaterialPatch) {
        if let Some(plant_id) = patch.plant_id {
            self.plant_id = plant_id;
        }
        if let Some(material_id) = patch.material_id {
            self.material_id = material_id;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
    }
}

impl PlantMaterialPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(quantity) = self.quantity {
            require_nonneg_f64("quantity", quantity)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct OrderProduct {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderProduct {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderProductPatch {
    pub order_id: Option<i64>,
    pub product_id: Option<i64>,
    pub quantity: Option<i64>,
}

impl NewOrderProduct {
    pub fn validate(&self) -> Result<(), AppError> {
        require_nonneg_i64("quantity", self.quantity)
    }
}

impl OrderProduct {
    pub fn apply(&mut self, patch: OrderProductPatch) {
        if let Some(order_id) = patch.order_id {
            self.order_id = order_id;
        }
        if let Some(product_id) = patch.product_id {
            self.product_id = product_id;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
    }
}

impl OrderProductPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(quantity) = self.quantity {
            require_nonneg_i64("quantity", quantity)?;
        }
        Ok(())
    }
}

// ---------- storage rows ----------

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct StorageProduct {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStorageProduct {
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageProductPatch {
    pub product_id: Option<i64>,
    pub quantity: Option<i64>,
}

impl NewStorageProduct {
    pub fn validate(&self) -> Result<(), AppError> {
        require_nonneg_i64("quantity", self.quantity)
    }
}

impl StorageProduct {
    pub fn apply(&mut self, patch: StorageProductPatch) {
        if let Some(product_id) = patch.product_id {
            self.product_id = product_id;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
    }
}

impl StorageProductPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(quantity) = self.quantity {
            require_nonneg_i64("quantity", quantity)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct StorageMaterial {
    pub id: i64,
    pub material_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStorageMaterial {
    pub material_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageMaterialPatch {
    pub material_id: Option<i64>,
    pub quantity: Option<i64>,
}

impl NewStorageMaterial {
    pub fn validate(&self) -> Result<(), AppError> {
        require_nonneg_i64("quantity", self.quantity)
    }
}

impl StorageMaterial {
    pub fn apply(&mut self, patch: StorageMaterialPatch) {
        if let Some(material_id) = patch.material_id {
            self.material_id = material_id;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
    }
}

impl StorageMaterialPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(quantity) = self.quantity {
            require_nonneg_i64("quantity", quantity)?;
        }
        Ok(())
    }
}

// ---------- field checks ----------

fn require_nonempty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn require_nonneg_f64(field: &str, value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::Validation(format!(
            "{} must be a non-negative number",
            field
        )));
    }
    Ok(())
}

fn require_nonneg_i64(field: &str, value: i64) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::Validation(format!(
            "{} must be a non-negative integer",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_merges_only_present_fields() {
        let mut plant = Plant {
            id: 1,
            name: "Green Valley Plant".into(),
            location: Some("Springfield, IL".into()),
            capacity: Some(1000),
        };
        plant.apply(PlantPatch {
            capacity: Some(1100),
            ..Default::default()
        });
        assert_eq!(plant.name, "Green Valley Plant");
        assert_eq!(plant.location.as_deref(), Some("Springfield, IL"));
        assert_eq!(plant.capacity, Some(1100));
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut product = Product {
            id: 7,
            name: "Herbal Tea".into(),
            description: None,
            category: "Beverage".into(),
            price: 5.99,
        };
        let before = product.clone();
        product.apply(ProductPatch::default());
        assert_eq!(product, before);
    }

    #[test]
    fn empty_name_rejected() {
        let input = NewPlant {
            name: "  ".into(),
            location: None,
            capacity: None,
        };
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn negative_quantity_rejected() {
        let input = NewStorageProduct {
            product_id: 1,
            quantity: -5,
        };
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }
}
