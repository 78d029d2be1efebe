// attest-core/src/infrastructure/adapters/mod.rs

pub mod datafusion;

pub use datafusion::DataFusionLoader;
