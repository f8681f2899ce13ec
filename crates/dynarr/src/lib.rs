//! Growable contiguous arrays with explicit capacity control.
//!
//! `dynarr` keeps the classic dynamic-array contract — items, count,
//! capacity — and never manages memory behind the caller's back: capacity
//! grows only when an append needs it (geometrically, ~1.5x, seeded by a
//! per-type constant), never shrinks on removal, and is given back only by
//! the explicit [`DynArr::shrink_to_fit`] and [`DynArr::free`] operations.
//! Removal operations offer a `_with` form that runs a caller-supplied
//! finalizer on each element, ascending, before it is dropped.
//!
//! # Architecture
//!
//! ```text
//! DynArr<T, INIT_CAP>     (array.rs)   element semantics, all operations
//! ├── RawBuf<T>           (raw.rs)     owned allocation; all unsafe alloc code
//! ├── growth policy       (growth.rs)  seed + repeated half-step, pure fn
//! ├── IntoIter            (iter.rs)    single forward consuming traversal
//! └── CapacityError       (error.rs)   recoverable try_* path
//! define_array!           (named.rs)   named per-element-type array types
//! ```
//!
//! Two instantiation surfaces share that core: the generic [`DynArr`] type,
//! and [`define_array!`] for a domain-named array type per element type
//! (with optional trailing user fields and a per-type growth seed).
//!
//! # Failure model
//!
//! The default operations have no partial-failure mode: out-of-range
//! removal indices panic, capacity overflow panics, and allocation failure
//! aborts the process via [`std::alloc::handle_alloc_error`]. The `try_*`
//! variants ([`DynArr::try_push`], [`DynArr::try_reserve`]) return
//! [`CapacityError`] instead and leave the array untouched on error.
//!
//! This crate contains `unsafe` code, bounded to the allocation plumbing in
//! `raw.rs` and the slot reads/writes/shifts in `array.rs` and `iter.rs`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod array;
mod error;
mod growth;
mod iter;
mod named;
mod raw;

pub use array::DynArr;
pub use error::CapacityError;
pub use growth::DEFAULT_INIT_CAP;
pub use iter::IntoIter;
