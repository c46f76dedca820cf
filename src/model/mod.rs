//! Pure data structures (DTOs) for the catalog and the order store.

pub mod order;
pub mod restaurant;

pub use order::*;
pub use restaurant::*;
