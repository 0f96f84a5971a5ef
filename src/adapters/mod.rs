// Adapters layer: concrete oracles that cross the C ABI boundary.

pub mod native;

pub use native::{open_oracle, LinkedOracle, NativeOracle};
