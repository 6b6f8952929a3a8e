//! Read-only product catalog, built once at startup and shared by reference.

use crate::error::{PosError, Result};
use crate::models::{Product, ProductId};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const HATAY_DONER: &str = "Hatay Usulü Dönerler";
pub const CLASSIC_DONER: &str = "Klasik Dönerler";
pub const TACOS: &str = "Takolar";
pub const PORTIONS: &str = "Porsiyonlar";
pub const MENUS: &str = "Menüler";
pub const DRINKS_AND_SNACKS: &str = "İçecekler & Atıştırmalık";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<String>,
    products: Vec<Product>,
}

impl Catalog {
    /// Every product must have a non-negative price and a listed category.
    pub fn new(categories: Vec<String>, products: Vec<Product>) -> Result<Self> {
        for product in &products {
            if product.price.is_nan() || product.price < 0.0 {
                return Err(PosError::InvalidCatalog(format!(
                    "price of {} must be non-negative, got {}",
                    product.name, product.price
                )));
            }
            if !categories.contains(&product.category) {
                return Err(PosError::InvalidCatalog(format!(
                    "{} has unknown category {}",
                    product.name, product.category
                )));
            }
        }

        Ok(Catalog {
            categories,
            products,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Catalog = serde_json::from_str(json)?;
        Catalog::new(raw.categories, raw.products)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let catalog = Catalog::from_json_str(&json)?;
        tracing::info!(
            path = %path.as_ref().display(),
            products = catalog.products.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn products_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Ids repeat across categories, so lookups are scoped to one.
    pub fn find(&self, category: &str, id: &ProductId) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.category == category && &p.id == id)
    }

    /// The counter's menu.
    pub fn shop_default() -> Self {
        let categories = [HATAY_DONER, CLASSIC_DONER, TACOS, PORTIONS, MENUS, DRINKS_AND_SNACKS]
            .iter()
            .map(|c| c.to_string())
            .collect();

        let mut products = vec![
            Product::new(1, "Hatay Usulü TAVUK Eko Döner", 120.0, HATAY_DONER),
            Product::new(2, "Hatay Usulü TAVUK Normal Döner", 140.0, HATAY_DONER),
            Product::new(3, "Hatay Usulü TAVUK Maksi Döner", 180.0, HATAY_DONER),
            Product::new(4, "Hatay Usulü ET Eko Döner", 220.0, HATAY_DONER),
            Product::new(5, "Hatay Usulü ET Normal Döner", 260.0, HATAY_DONER),
            Product::new(6, "Hatay Usulü ET Maksi Döner", 320.0, HATAY_DONER),
            Product::new("hud-lavas", "Ekstra Lavaş", 15.0, HATAY_DONER),
            Product::new(7, "Klasik TAVUK Eko Döner", 120.0, CLASSIC_DONER),
            Product::new(8, "Klasik TAVUK Normal Döner", 140.0, CLASSIC_DONER),
            Product::new(9, "Klasik ET Eko Döner", 220.0, CLASSIC_DONER),
            Product::new(10, "Klasik ET Normal Döner", 260.0, CLASSIC_DONER),
            Product::new("hud-lavas", "Ekstra Lavaş", 15.0, CLASSIC_DONER),
            Product::new(11, "TAVUK Tekli Tako", 90.0, TACOS),
            Product::new(12, "TAVUK İkili Tako", 160.0, TACOS),
            Product::new(13, "ET Tekli Tako", 150.0, TACOS),
            Product::new(14, "ET İkili Tako", 280.0, TACOS),
            Product::new(15, "Karışık Combo Tako", 220.0, TACOS),
            Product::new(16, "TAVUK Döner Porsiyon", 200.0, PORTIONS),
            Product::new(17, "Pilav Üstü TAVUK Döner Porsiyon", 220.0, PORTIONS),
            Product::new(18, "ET Döner Porsiyon", 350.0, PORTIONS),
            Product::new(19, "Pilav Üstü ET Döner Porsiyon", 370.0, PORTIONS),
            Product::new("hud-lavas", "Ekstra Lavaş", 15.0, PORTIONS),
            Product::new(20, "TAVUK Döner Menü", 200.0, MENUS),
            Product::new(21, "ET Döner Menü", 320.0, MENUS),
            Product::new("m-lavas", "Ekstra Lavaş", 15.0, MENUS),
            Product::new(22, "Ayran", 40.0, DRINKS_AND_SNACKS),
            Product::new(23, "Kutu İçecekler", 50.0, DRINKS_AND_SNACKS),
            Product::new(24, "Şalgam", 40.0, DRINKS_AND_SNACKS),
            Product::new(25, "Soda", 25.0, DRINKS_AND_SNACKS),
            Product::new(26, "Su", 15.0, DRINKS_AND_SNACKS),
            Product::new(27, "Külahta Patates Kızartması", 50.0, DRINKS_AND_SNACKS),
            Product::new(28, "Antep Usulü Katmer Tatlısı", 140.0, DRINKS_AND_SNACKS),
            Product::new(29, "1 LT Kola ", 75.0, DRINKS_AND_SNACKS),
            Product::new(30, "1 LT Ayaran", 75.0, DRINKS_AND_SNACKS),
            Product::new(31, "2,5 LT Kola", 95.0, DRINKS_AND_SNACKS),
            Product::new("drink-2", "Servis Patates", 70.0, DRINKS_AND_SNACKS),
        ];

        if let Some(fries) = products.last_mut() {
            fries.image = Some("https://via.placeholder.com/150".to_string());
        }

        Catalog {
            categories,
            products,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::shop_default()
    }
}
