//! Singly-linked list with slab-backed node storage.
//!
//! This crate provides one container: [`List`], a generic singly-linked
//! list with O(1) append and O(n) positional access. The design concern is
//! the node ownership model, and the key decision is to store nodes in an
//! arena instead of chaining heap allocations.
//!
//! # Design Philosophy
//!
//! A naive linked list owns each node through its predecessor:
//!
//! ```text
//! head -> Box<Node> -> Box<Node> -> Box<Node>
//! ```
//!
//! That shape forces either an unsafe raw tail pointer for O(1) append or
//! an O(n) walk per push, and deep chains can overflow the stack on drop.
//! This crate inverts the model:
//!
//! ```text
//! Slab<Node>   - owns every node, provides stable keys
//! List         - head key, tail key, cached length
//! ```
//!
//! Benefits:
//! - **No pointers**: links are slab keys; the tail back-reference is a
//!   plain key that can never dangle or claim ownership
//! - **O(1) append**: the cached tail key makes `push_back` constant time
//! - **Flat teardown**: dropping the list drops one arena, not a recursive
//!   chain of boxes
//! - **Slot reuse**: removed nodes free arena slots for later inserts
//!
//! # Quick Start
//!
//! ```
//! use slink::List;
//!
//! let mut list = List::from([1, 2, 3]);
//!
//! list.push_back(4);
//! list.insert(1, 9).unwrap();
//! assert_eq!(list.len(), 5);
//!
//! assert!(list.remove(&9));
//! assert_eq!(list.index_of(&3), Some(2));
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 2, 3, 4]);
//! ```
//!
//! # Operations
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `push_back` / `push_front` | O(1) | tail key makes append constant |
//! | `pop_front` | O(1) | |
//! | `pop_back` | O(n) | walks to re-seat the tail |
//! | `get` / `set` / `insert` / `remove_at` | O(n) | chain walk to position |
//! | `contains` / `index_of` / `remove` | O(n) | linear scan, first match |
//! | `copy_to` | O(n) | clones into a caller slice |
//! | `iter` / `iter_mut` / `drain` | O(1) lazy | O(n) to exhaust |
//!
//! # Concurrency
//!
//! The list is single-threaded and carries no internal synchronization.
//! `List<T>` is `Send`/`Sync` exactly when `T` is; callers needing shared
//! mutation must wrap it externally. Aliasing between iteration and
//! mutation is ruled out by the borrow checker.

#![warn(missing_docs)]

pub mod error;
pub mod list;

pub use error::{InsufficientCapacity, OutOfBounds};
pub use list::{Drain, IntoIter, Iter, IterMut, List};
