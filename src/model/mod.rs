//! Domain model: catalogs, scenarios and load results.

mod catalog;
mod load;
mod scenario;

pub use catalog::{Catalog, DemandType, Port};
pub(crate) use catalog::{default_demand_types, default_ports};
pub use load::LoadResult;
pub use scenario::Scenario;
