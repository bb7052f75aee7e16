//! Feature alignment for the Staycast prediction pipeline.
//!
//! Maps an arbitrary, partially-specified [`RawRecord`](staycast_model::RawRecord)
//! onto the exact column set and order a [`SchemaSpec`](staycast_model::SchemaSpec)
//! demands:
//!
//! 1. categorical fields expand into one-hot indicator columns using the
//!    training-time naming convention (`{field}_{level}`);
//! 2. expanded names the schema does not expect are dropped;
//! 3. expected names the record never produced are filled with 0;
//! 4. the result reads out in exactly schema order.
//!
//! The transform is pure and stateless; concurrent calls sharing one schema
//! need no locking.

pub mod align;
pub mod expand;

pub use align::align;
pub use expand::{ONE_HOT_SEPARATOR, encoded_column_name, expand_record};
