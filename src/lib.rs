//! Raffle - weighted random selection lists.
//!
//! # Quick Start
//!
//! ```
//! use raffle::list::WeightedList;
//!
//! // Build a drop table
//! let mut drops = WeightedList::new();
//! drops.push("common", 60).unwrap();
//! drops.push("rare", 9).unwrap();
//! drops.push("legendary", 1).unwrap();
//!
//! // Draw reproducibly from an explicit seed
//! let item = drops.draw_seeded(42).unwrap();
//! assert!(drops.contains(item));
//!
//! // Or from any generator you bring along
//! let mut rng = rand::thread_rng();
//! let item = drops.draw_with(&mut rng).unwrap();
//! assert!(drops.contains(item));
//! ```
//!
//! Each element is drawn with probability `weight / total_weight`, in
//! O(log n), by binary search over a cumulative weight index that every
//! mutation keeps in sync.
//!
//! The list has no internal synchronization: mutation requires `&mut`, so
//! single-threaded use is safe by construction and cross-thread sharing
//! needs an external `Mutex` or `RwLock` around the whole list.

pub mod index;
pub mod list;
