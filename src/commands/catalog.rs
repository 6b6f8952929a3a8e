use crate::models::Product;
use crate::App;

pub fn get_categories(app: &App) -> Vec<String> {
    app.catalog().categories().to_vec()
}

pub fn get_products(app: &App, category: &str) -> Vec<Product> {
    app.catalog().products_in(category).cloned().collect()
}
