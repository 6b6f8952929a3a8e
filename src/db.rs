use crate::error::{PosError, Result};
use crate::models::{CartItem, NewOrder, Order, OrderType, Product, ProductId};
use crate::store::OrderStore;
use chrono::{DateTime, Local, SecondsFormat};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::sync::Mutex;

pub struct Database {
    pub conn: Mutex<Connection>,
}

fn conversion_error<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

fn order_from_row(row: &Row<'_>) -> rusqlite::Result<Order> {
    let order_type: String = row.get(1)?;
    let created_at: String = row.get(3)?;

    let order_type = OrderType::parse(&order_type).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            Type::Text,
            format!("unknown order type: {}", order_type).into(),
        )
    })?;
    let date = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| conversion_error(3, e))?
        .with_timezone(&Local);

    Ok(Order {
        id: row.get(0)?,
        date,
        order_type,
        items: Vec::new(),
        total: row.get(2)?,
    })
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<CartItem> {
    let product_id: String = row.get(0)?;
    let id: ProductId = serde_json::from_str(&product_id).map_err(|e| conversion_error(0, e))?;

    Ok(CartItem {
        product: Product {
            id,
            name: row.get(1)?,
            price: row.get(2)?,
            category: row.get(3)?,
            description: row.get(4)?,
            image: row.get(5)?,
        },
        quantity: row.get(6)?,
    })
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        if let Some(dir) = path.as_ref().parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }

        let conn = Connection::open(path.as_ref())?;
        tracing::info!(path = %path.as_ref().display(), "Opened order database");

        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Database {
            conn: Mutex::new(Connection::open_in_memory()?),
        })
    }

    pub fn initialize(&self) -> Result<()> {
        let conn = self.conn.lock().map_err(|_| PosError::LockPoisoned)?;

        conn.execute_batch(
            "
            -- Completed orders
            CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                order_type TEXT NOT NULL,
                total REAL NOT NULL,
                created_at TEXT NOT NULL
            );

            -- Product snapshots per order, kept in cart order
            CREATE TABLE IF NOT EXISTS order_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                order_id INTEGER NOT NULL,
                position INTEGER NOT NULL,
                product_id TEXT NOT NULL,
                name TEXT NOT NULL,
                price REAL NOT NULL,
                category TEXT NOT NULL,
                quantity INTEGER NOT NULL,
                FOREIGN KEY (order_id) REFERENCES orders(id)
            );

            CREATE INDEX IF NOT EXISTS idx_order_items_order ON order_items(order_id);
            ",
        )?;

        // Pass the connection to avoid relocking
        Self::migrate_conn(&conn)?;

        Ok(())
    }

    fn migrate_conn(conn: &Connection) -> Result<()> {
        let columns: Vec<String> = conn
            .prepare("PRAGMA table_info(order_items)")?
            .query_map([], |row| row.get::<_, String>(1))?
            .filter_map(|r| r.ok())
            .collect();

        if !columns.contains(&"description".to_string()) {
            conn.execute("ALTER TABLE order_items ADD COLUMN description TEXT", [])?;
        }
        if !columns.contains(&"image".to_string()) {
            conn.execute("ALTER TABLE order_items ADD COLUMN image TEXT", [])?;
        }

        Ok(())
    }

    fn load_items(conn: &Connection, order_id: i64) -> Result<Vec<CartItem>> {
        let mut stmt = conn.prepare(
            "SELECT product_id, name, price, category, description, image, quantity
             FROM order_items
             WHERE order_id = ?1
             ORDER BY position ASC",
        )?;

        let items = stmt
            .query_map([order_id], item_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(items)
    }

    pub fn get_order(&self, id: i64) -> Result<Option<Order>> {
        let conn = self.conn.lock().map_err(|_| PosError::LockPoisoned)?;

        let order = conn.query_row(
            "SELECT id, order_type, total, created_at FROM orders WHERE id = ?1",
            [id],
            order_from_row,
        );

        let mut order = match order {
            Ok(order) => order,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        order.items = Self::load_items(&conn, id)?;

        Ok(Some(order))
    }
}

impl OrderStore for Database {
    fn create(&self, order: NewOrder) -> Result<Order> {
        let mut conn = self.conn.lock().map_err(|_| PosError::LockPoisoned)?;
        let created_at = Local::now().to_rfc3339_opts(SecondsFormat::Millis, false);

        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO orders (order_type, total, created_at) VALUES (?1, ?2, ?3)",
            params![
                order.order_type.as_str(),
                order.total,
                created_at
            ],
        )?;
        let order_id = tx.last_insert_rowid();

        for (position, item) in order.items.iter().enumerate() {
            tx.execute(
                "INSERT INTO order_items (order_id, position, product_id, name, price, category, description, image, quantity)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    order_id,
                    position as i64,
                    serde_json::to_string(&item.product.id)?,
                    item.product.name,
                    item.product.price,
                    item.product.category,
                    item.product.description,
                    item.product.image,
                    item.quantity,
                ],
            )?;
        }
        tx.commit()?;

        tracing::info!(
            order_id,
            order_type = order.order_type.as_str(),
            total = order.total,
            items = order.items.len(),
            "Order created"
        );

        // Millisecond precision, same as what list() reads back
        let date = DateTime::parse_from_rfc3339(&created_at)
            .map(|d| d.with_timezone(&Local))
            .unwrap_or_else(|_| Local::now());

        Ok(Order {
            id: order_id,
            date,
            order_type: order.order_type,
            items: order.items,
            total: order.total,
        })
    }

    fn list(&self) -> Result<Vec<Order>> {
        let conn = self.conn.lock().map_err(|_| PosError::LockPoisoned)?;

        let mut stmt = conn.prepare(
            "SELECT id, order_type, total, created_at
             FROM orders
             ORDER BY id ASC",
        )?;

        let orders = stmt
            .query_map([], order_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut result = Vec::with_capacity(orders.len());
        for mut order in orders {
            order.items = Self::load_items(&conn, order.id)?;
            result.push(order);
        }

        Ok(result)
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut conn = self.conn.lock().map_err(|_| PosError::LockPoisoned)?;

        let tx = conn.transaction()?;
        tx.execute("DELETE FROM order_items WHERE order_id = ?1", [id])?;
        let removed = tx.execute("DELETE FROM orders WHERE id = ?1", [id])?;
        tx.commit()?;

        if removed > 0 {
            tracing::info!(order_id = id, "Order deleted");
        } else {
            tracing::debug!(order_id = id, "Delete of unknown order ignored");
        }

        Ok(())
    }
}

pub trait DatabaseExt {
    fn db(&self) -> &Database;
}
