mod cart;
mod catalog;
mod commands;
mod config;
mod date_range;
mod db;
mod error;
mod logger;
mod models;
mod pricing;
mod rules;
mod session;
mod stats;
mod store;


pub use cart::Cart;
pub use catalog::{
    Catalog, CLASSIC_DONER, DRINKS_AND_SNACKS, HATAY_DONER, MENUS, PORTIONS, TACOS,
};
pub use commands::{catalog as catalog_commands, orders, reports};
pub use config::Config;
pub use date_range::{DateRange, RangeSelector};
pub use db::{Database, DatabaseExt};
pub use error::{PosError, Result};
pub use logger::init_logger;
pub use models::{
    CartItem, ChartRow, NewOrder, Order, OrderType, PriceBreakdown, Product, ProductId,
    ProductStat, SalesStats,
};
pub use pricing::{delivery_fee, price, subtotal};
pub use rules::{BreadRules, DeliveryRules, ShopRules, SurchargeRule};
pub use session::OrderSession;
pub use stats::{
    bread_total, chart_rows, delete_product_sales, filter_orders, orders_containing, sales_stats,
    ChartFilter,
};
pub use store::{MemoryOrderStore, OrderStore};

/// Process-wide state: the order database plus the read-only catalog and
/// rule tables every session borrows.
pub struct App {
    db: Database,
    catalog: Catalog,
    rules: ShopRules,
}

impl App {
    /// Open the database and catalog named by `config`.
    pub fn open(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::shop_default(),
        };

        let db = Database::open(&config.db_path)?;
        Self::with_parts(db, catalog, ShopRules::default())
    }

    /// Initialise logging from `config`, then open.
    pub fn run(config: &Config) -> Result<Self> {
        init_logger(&config.log_level, config.log_json);
        Self::open(config)
    }

    pub fn in_memory(catalog: Catalog, rules: ShopRules) -> Result<Self> {
        Self::with_parts(Database::open_in_memory()?, catalog, rules)
    }

    fn with_parts(db: Database, catalog: Catalog, rules: ShopRules) -> Result<Self> {
        db.initialize()?;
        tracing::info!(
            categories = catalog.categories().len(),
            products = catalog.products().len(),
            "POS ready"
        );

        Ok(App { db, catalog, rules })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &ShopRules {
        &self.rules
    }

    pub fn new_session(&self, order_type: OrderType) -> OrderSession<'_> {
        OrderSession::new(&self.catalog, &self.rules, order_type)
    }
}

impl DatabaseExt for App {
    fn db(&self) -> &Database {
        &self.db
    }
}
