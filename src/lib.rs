#![doc = include_str!("../README.md")]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::multiple_unsafe_ops_per_block)]
#![warn(clippy::semicolon_outside_block)]
#![warn(elided_lifetimes_in_paths)]
#![warn(unreachable_pub)]
// TODO: #![warn(missing_docs)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod convert;
pub mod enumerate;
#[cfg(feature = "alloc")]
pub mod generate;
pub mod product;
pub mod seq;

pub use convert::{pour, to, Convert, FromSequence, SequenceExt};
pub use enumerate::{enumerate, Enumerate, EnumerateIter};
#[cfg(feature = "alloc")]
pub use generate::{generate, Generator, Yielder};
pub use product::{product, Product, ProductIter};
pub use seq::{Sequence, SizedSequence};
