//! chained-hashmap: a string-keyed hash table built on djb2 hashing and
//! separate chaining, with an explicit caller-invoked doubling resize.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, fully hand-built associative container whose every
//!   layer can be reasoned about independently.
//! - Layers:
//!   - hash: the djb2 string hash and bucket selection. Pure functions,
//!     no state; tests pin exact output values.
//!   - Chain (private): one bucket's entries as an owned singly linked
//!     list. Owns append-or-overwrite, find, and splice-out, all
//!     iterative, plus an iterative Drop.
//!   - HashTable: public API. Owns the bucket vector and the entry
//!     count; maps keys to buckets via the hash layer and delegates
//!     chain surgery to Chain.
//!
//! Constraints
//! - Single-threaded, synchronous: every operation runs to completion
//!   before returning. No interior mutability anywhere.
//! - Keys and values are `String`; no generics. Entries are exclusively
//!   owned by their table (`Option<Box<Node>>` links, no `Rc`).
//! - Within one chain, keys are pairwise distinct and ordered
//!   oldest-first: new keys append at the tail, duplicate keys
//!   overwrite in place.
//! - Capacity changes only through `resize`, which always builds a
//!   fresh bucket vector and rehashes every entry under the doubled
//!   modulus. There is no automatic load-factor trigger; `load_factor`
//!   is exposed read-only so callers can decide.
//! - No recursion: chain traversal, splicing, and teardown are loops,
//!   so a pathological all-colliding workload cannot exhaust the stack.
//!
//! Failure semantics
//! - `get`/`remove` of an absent key return `TableError::KeyNotFound`;
//!   recoverable, never printed, and the table is left untouched.
//! - `HashTable::new(0)` returns `TableError::InvalidCapacity`.
//! - Allocation failure aborts per the global allocator; there is no
//!   recovery path.
//!
//! Notes and non-goals
//! - No public iteration API, no persistence, no concurrency support;
//!   callers wanting shared access wrap the table in their own lock.
//! - Dropping the table is the destroy operation: chains release their
//!   nodes iteratively, then the bucket vector itself.

mod chain;
mod chain_proptest;
mod error;
pub mod hash;
mod table;

// Public surface
pub use error::TableError;
pub use table::HashTable;
