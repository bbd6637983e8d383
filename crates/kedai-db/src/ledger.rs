//! # Ledger
//!
//! The persisted business ledger: [`Books`] behind one async lock, written
//! through to the document store on every mutation.
//!
//! ## Mutation Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lock books (held until the end)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  clone ──► apply change to the clone                                   │
//! │       │         │                                                       │
//! │       │         └── rejected (e.g. not enough stock)? return, no write │
//! │       ▼                                                                 │
//! │  persist changed collections (one transaction)                         │
//! │       │                                                                 │
//! │       ├── write failed? return error, books untouched                  │
//! │       ▼                                                                 │
//! │  swap the clone in                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because the lock is held across the write, "append sale + decrement
//! stock" can never interleave with another mutation.

use chrono::{DateTime, TimeZone, Utc};
use kedai_core::report::Dashboard;
use kedai_core::{
    Books, Expense, FinancialSummary, NewExpense, NewProduct, NewSale, Period, Product,
    ProductPatch, Report, Sale,
};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::DbResult;
use crate::pool::Database;
use crate::repository::document::DocumentRepository;

/// Storage key of the products document.
pub const PRODUCTS_KEY: &str = "business_products";
/// Storage key of the sales document.
pub const SALES_KEY: &str = "business_sales";
/// Storage key of the expenses document.
pub const EXPENSES_KEY: &str = "business_expenses";

/// One of the three persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collection {
    Products,
    Sales,
    Expenses,
}

impl Collection {
    fn key(self) -> &'static str {
        match self {
            Collection::Products => PRODUCTS_KEY,
            Collection::Sales => SALES_KEY,
            Collection::Expenses => EXPENSES_KEY,
        }
    }

    fn encode(self, books: &Books) -> serde_json::Result<String> {
        match self {
            Collection::Products => serde_json::to_string(books.products()),
            Collection::Sales => serde_json::to_string(books.sales()),
            Collection::Expenses => serde_json::to_string(books.expenses()),
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// The business ledger. Construct once at startup and share by reference.
#[derive(Debug)]
pub struct Ledger {
    db: Database,
    books: Mutex<Books>,
}

impl Ledger {
    /// Loads the three collections from storage.
    ///
    /// A missing document starts empty. So does a document that fails to
    /// parse; that case is logged, not returned. Storage errors are
    /// returned.
    pub async fn open(db: Database) -> DbResult<Self> {
        let docs = db.documents();

        let products: Vec<Product> = load(&docs, Collection::Products).await?;
        let sales: Vec<Sale> = load(&docs, Collection::Sales).await?;
        let expenses: Vec<Expense> = load(&docs, Collection::Expenses).await?;

        info!(
            products = products.len(),
            sales = sales.len(),
            expenses = expenses.len(),
            "Ledger loaded"
        );

        Ok(Ledger {
            db,
            books: Mutex::new(Books::from_parts(products, sales, expenses)),
        })
    }

    /// Writes the given collections of `books` in one transaction.
    async fn persist(&self, books: &Books, collections: &[Collection]) -> DbResult<()> {
        let entries = collections
            .iter()
            .map(|c| c.encode(books).map(|json| (c.key(), json)))
            .collect::<serde_json::Result<Vec<_>>>()?;

        self.db.documents().put_many(&entries).await
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Adds a product with a fresh id. Values are stored as given.
    pub async fn add_product(&self, draft: NewProduct) -> DbResult<Product> {
        let mut books = self.books.lock().await;
        let mut next = books.clone();
        let product = next.add_product(new_id(), draft, Utc::now()).clone();

        self.persist(&next, &[Collection::Products]).await?;
        *books = next;

        info!(id = %product.id, name = %product.name, "Product added");
        Ok(product)
    }

    /// Merges `patch` into a product.
    ///
    /// Returns `Ok(None)` without writing anything when the id is unknown.
    pub async fn update_product(
        &self,
        id: &str,
        patch: ProductPatch,
    ) -> DbResult<Option<Product>> {
        let mut books = self.books.lock().await;
        let mut next = books.clone();
        let Some(product) = next.update_product(id, patch, Utc::now()).cloned() else {
            debug!(id = %id, "Update skipped, no such product");
            return Ok(None);
        };

        self.persist(&next, &[Collection::Products]).await?;
        *books = next;

        info!(id = %product.id, stock = product.stock, "Product updated");
        Ok(Some(product))
    }

    /// Sets a product's stock level directly.
    pub async fn update_stock(&self, id: &str, stock: i64) -> DbResult<Option<Product>> {
        self.update_product(id, ProductPatch::stock(stock)).await
    }

    /// Deletes a product. Its sales keep their snapshot.
    pub async fn delete_product(&self, id: &str) -> DbResult<bool> {
        let mut books = self.books.lock().await;
        let mut next = books.clone();
        if !next.delete_product(id) {
            debug!(id = %id, "Delete skipped, no such product");
            return Ok(false);
        }

        self.persist(&next, &[Collection::Products]).await?;
        *books = next;

        info!(id = %id, "Product deleted");
        Ok(true)
    }

    // =========================================================================
    // Sales
    // =========================================================================

    /// Records a sale and decrements stock as one unit.
    ///
    /// ## Errors
    /// - [`DbError::Domain`](crate::DbError::Domain) when the product is
    ///   unknown, the quantity is not positive, or stock is short. Nothing
    ///   is written.
    /// - Any storage error. Nothing changes in memory either.
    pub async fn add_sale(&self, draft: NewSale) -> DbResult<Sale> {
        let mut books = self.books.lock().await;
        let mut next = books.clone();
        let sale = next.record_sale(new_id(), draft, Utc::now())?.clone();

        self.persist(&next, &[Collection::Sales, Collection::Products])
            .await?;
        *books = next;

        info!(
            id = %sale.id,
            product_id = %sale.product_id,
            quantity = sale.quantity,
            total = %sale.total_amount,
            "Sale recorded"
        );
        Ok(sale)
    }

    // =========================================================================
    // Expenses
    // =========================================================================

    /// Adds an expense with a fresh id.
    pub async fn add_expense(&self, draft: NewExpense) -> DbResult<Expense> {
        let mut books = self.books.lock().await;
        let mut next = books.clone();
        let expense = next.add_expense(new_id(), draft, Utc::now()).clone();

        self.persist(&next, &[Collection::Expenses]).await?;
        *books = next;

        info!(id = %expense.id, amount = %expense.amount, "Expense added");
        Ok(expense)
    }

    /// Deletes an expense. Returns whether one was removed.
    pub async fn delete_expense(&self, id: &str) -> DbResult<bool> {
        let mut books = self.books.lock().await;
        let mut next = books.clone();
        if !next.delete_expense(id) {
            debug!(id = %id, "Delete skipped, no such expense");
            return Ok(false);
        }

        self.persist(&next, &[Collection::Expenses]).await?;
        *books = next;

        info!(id = %id, "Expense deleted");
        Ok(true)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Runs `f` against the current books.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let count = ledger.with_books(|books| books.products().len()).await;
    /// ```
    pub async fn with_books<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Books) -> R,
    {
        let books = self.books.lock().await;
        f(&books)
    }

    pub async fn financial_summary(&self) -> FinancialSummary {
        self.with_books(Books::financial_summary).await
    }

    pub async fn dashboard(&self) -> Dashboard {
        self.with_books(Dashboard::build).await
    }

    /// Full report for `period`, ending at `now`.
    pub async fn report<Tz: TimeZone>(&self, period: Period, now: &DateTime<Tz>) -> Report {
        self.with_books(|books| Report::build(books, period, now))
            .await
    }
}

/// Loads one collection, treating a corrupt document as empty.
async fn load<T: DeserializeOwned>(
    docs: &DocumentRepository,
    collection: Collection,
) -> DbResult<Vec<T>> {
    let key = collection.key();

    let Some(raw) = docs.get(key).await? else {
        debug!(key = %key, "No stored document, starting empty");
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(records) => Ok(records),
        Err(e) => {
            warn!(key = %key, error = %e, "Corrupt document, starting with an empty collection");
            Ok(Vec::new())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
