use thiserror::Error;

#[derive(Error, Debug)]
pub enum PosError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("cannot complete an order with an empty cart")]
    EmptyCart,

    #[error("order {0} not found")]
    OrderNotFound(i64),

    #[error("order store lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, PosError>;
