use async_trait::async_trait;
use common::{
    BirthdayReservation, Event, EventId, EventRegistration, NewEvent, NewOrder, NewOrderItem,
    NewProduct, NewRegistration, NewReservation, Order, OrderId, OrderItem, OrderItemId, Product,
    ProductId, RegistrationId, ReservationId,
};
use sqlx::{
    PgPool, Row,
    postgres::{PgPoolOptions, PgRow},
};

use crate::{
    Result, StoreError,
    store::{OrderRecord, Store},
};

const RESERVATION_COLUMNS: &str =
    "id, first_name, last_name, date, guests, hall, special_requests, created_at";
const PRODUCT_COLUMNS: &str = "id, name, price, category";
const ORDER_COLUMNS: &str = "id, user_name, date, status";
const ORDER_ITEM_COLUMNS: &str = "id, order_id, product_id, quantity";
const EVENT_COLUMNS: &str = "id, title, date, location, price";
const REGISTRATION_COLUMNS: &str = "id, event_id, first_name, last_name, tickets";

/// PostgreSQL-backed store implementation.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new PostgreSQL store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a new pool to the given database.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_reservation(row: PgRow) -> Result<BirthdayReservation> {
        Ok(BirthdayReservation {
            id: ReservationId::new(row.try_get("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            date: row.try_get("date")?,
            guests: row.try_get("guests")?,
            hall: row.try_get("hall")?,
            special_requests: row.try_get("special_requests")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn row_to_product(row: PgRow) -> Result<Product> {
        Ok(Product {
            id: ProductId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            category: row.try_get("category")?,
        })
    }

    fn row_to_order(row: PgRow) -> Result<Order> {
        Ok(Order {
            id: OrderId::new(row.try_get("id")?),
            user_name: row.try_get("user_name")?,
            date: row.try_get("date")?,
            status: row.try_get("status")?,
        })
    }

    fn row_to_order_item(row: PgRow) -> Result<OrderItem> {
        Ok(OrderItem {
            id: OrderItemId::new(row.try_get("id")?),
            order_id: OrderId::new(row.try_get("order_id")?),
            product_id: ProductId::new(row.try_get("product_id")?),
            quantity: row.try_get("quantity")?,
        })
    }

    fn row_to_event(row: PgRow) -> Result<Event> {
        Ok(Event {
            id: EventId::new(row.try_get("id")?),
            title: row.try_get("title")?,
            date: row.try_get("date")?,
            location: row.try_get("location")?,
            price: row.try_get("price")?,
        })
    }

    fn row_to_registration(row: PgRow) -> Result<EventRegistration> {
        Ok(EventRegistration {
            id: RegistrationId::new(row.try_get("id")?),
            event_id: EventId::new(row.try_get("event_id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            tickets: row.try_get("tickets")?,
        })
    }
}

/// Maps constraint failures onto store errors.
fn classify(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_foreign_key_violation()
    {
        return StoreError::ForeignKeyViolation {
            table: db_err.table().unwrap_or("unknown").to_string(),
            detail: db_err.message().to_string(),
        };
    }
    StoreError::Database(e)
}

#[async_trait]
impl Store for PostgresStore {
    async fn insert_reservation(&self, draft: NewReservation) -> Result<BirthdayReservation> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO birthday_reservations (first_name, last_name, date, guests, hall, special_requests)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {RESERVATION_COLUMNS}
            "#
        ))
        .bind(&draft.first_name)
        .bind(&draft.last_name)
        .bind(draft.date)
        .bind(draft.guests)
        .bind(&draft.hall)
        .bind(&draft.special_requests)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        Self::row_to_reservation(row)
    }

    async fn get_reservation(&self, id: ReservationId) -> Result<Option<BirthdayReservation>> {
        let row = sqlx::query(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM birthday_reservations WHERE id = $1"
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_reservation).transpose()
    }

    async fn list_reservations(&self) -> Result<Vec<BirthdayReservation>> {
        let rows = sqlx::query(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM birthday_reservations ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_reservation).collect()
    }

    async fn insert_product(&self, draft: NewProduct) -> Result<Product> {
        let row = sqlx::query(&format!(
            "INSERT INTO products (name, price, category) VALUES ($1, $2, $3) RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&draft.name)
        .bind(draft.price)
        .bind(&draft.category)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        Self::row_to_product(row)
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>> {
        let row = sqlx::query(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_product).transpose()
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_product).collect()
    }

    async fn insert_order(
        &self,
        draft: NewOrder,
        items: Vec<NewOrderItem>,
    ) -> Result<OrderRecord> {
        // Header and lines share one transaction; dropping `tx` on an early
        // return rolls both back.
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!(
            "INSERT INTO orders (user_name, status) VALUES ($1, $2) RETURNING {ORDER_COLUMNS}"
        ))
        .bind(&draft.user_name)
        .bind(&draft.status)
        .fetch_one(&mut *tx)
        .await
        .map_err(classify)?;
        let order = Self::row_to_order(row)?;

        let mut committed = Vec::with_capacity(items.len());
        for item in &items {
            let row = sqlx::query(&format!(
                r#"
                INSERT INTO order_items (order_id, product_id, quantity)
                VALUES ($1, $2, $3)
                RETURNING {ORDER_ITEM_COLUMNS}
                "#
            ))
            .bind(order.id.as_i64())
            .bind(item.product_id.as_i64())
            .bind(item.quantity)
            .fetch_one(&mut *tx)
            .await
            .map_err(classify)?;

            committed.push(Self::row_to_order_item(row)?);
        }

        tx.commit().await?;
        tracing::debug!(order_id = %order.id, items = committed.len(), "order committed");

        Ok(OrderRecord {
            order,
            items: committed,
        })
    }

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>> {
        let row = sqlx::query(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_order).transpose()
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_order).collect()
    }

    async fn list_order_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>> {
        let rows = sqlx::query(&format!(
            "SELECT {ORDER_ITEM_COLUMNS} FROM order_items WHERE order_id = $1 ORDER BY id ASC"
        ))
        .bind(order_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_order_item).collect()
    }

    async fn insert_event(&self, draft: NewEvent) -> Result<Event> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO events (title, date, location, price)
            VALUES ($1, $2, $3, $4)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(&draft.title)
        .bind(draft.date)
        .bind(&draft.location)
        .bind(draft.price)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        Self::row_to_event(row)
    }

    async fn get_event(&self, id: EventId) -> Result<Option<Event>> {
        let row = sqlx::query(&format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_event).transpose()
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        let rows = sqlx::query(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_event).collect()
    }

    async fn insert_registration(&self, draft: NewRegistration) -> Result<EventRegistration> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO event_registrations (event_id, first_name, last_name, tickets)
            VALUES ($1, $2, $3, $4)
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(draft.event_id.as_i64())
        .bind(&draft.first_name)
        .bind(&draft.last_name)
        .bind(draft.tickets)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        Self::row_to_registration(row)
    }

    async fn list_registrations(&self, event_id: EventId) -> Result<Vec<EventRegistration>> {
        let rows = sqlx::query(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM event_registrations WHERE event_id = $1 ORDER BY id ASC"
        ))
        .bind(event_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_registration).collect()
    }
}
