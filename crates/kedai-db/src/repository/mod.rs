//! # Repository Module
//!
//! Database repository implementations for Kedai.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Ledger                                                                │
//! │       │                                                                 │
//! │       │  db.documents().put_many(&[(PRODUCTS, ..), (SALES, ..)])      │
//! │       ▼                                                                 │
//! │  DocumentRepository                                                    │
//! │  ├── get(&self, key)                                                   │
//! │  ├── put(&self, key, value)                                            │
//! │  ├── put_many(&self, entries)   ← one transaction                      │
//! │  └── delete(&self, key)                                                │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  kv_store table                                                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`DocumentRepository`](document::DocumentRepository) - JSON documents by key

pub mod document;
