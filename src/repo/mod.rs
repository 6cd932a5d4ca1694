//! Per-entity CRUD repositories.
//!
//! Every function takes the pool handle; nothing here holds state between
//! calls. The uniform contract: `create` returns the persisted row with its
//! assigned id, `get` returns `None` for an absent id, `list` re-queries on
//! every call, `update` merges a patch inside a transaction, and `delete`
//! rejects when dependent join/storage rows still reference the row.

pub mod joins;
pub mod materials;
pub mod orders;
pub mod plants;
pub mod products;
pub mod storage;
