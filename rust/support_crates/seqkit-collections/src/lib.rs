//! Small container types: a LIFO [`Stack`], a handle-addressed doubly linked
//! [`List`] and a thread-safe object cache, [`SyncPool`].

pub mod list;
pub mod stack;
pub mod sync_pool;

pub use list::{Element, List};
pub use stack::Stack;
pub use sync_pool::{PooledRef, SyncPool};
