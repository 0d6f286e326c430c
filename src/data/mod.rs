/// Data layer: core types, loading, and summaries.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, header order, typed column views
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  summary  │  value counts, grouped min/mean/max, histogram
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod summary;

/// Columns the dashboard reads. Any other column in the input is ignored.
pub const WAREHOUSE_BLOCK: &str = "Warehouse_block";
pub const MODE_OF_SHIPMENT: &str = "Mode_of_Shipment";
pub const CUSTOMER_RATING: &str = "Customer_rating";
pub const WEIGHT_IN_GMS: &str = "Weight_in_gms";
