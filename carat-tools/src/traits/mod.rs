pub mod executor;

pub use executor::DiamondExecutor;
