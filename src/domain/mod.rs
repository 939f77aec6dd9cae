pub mod backend;
pub mod filters;
pub mod listing;
pub mod property;

pub use backend::{BackendProperty, BackendRegion, BackendUser};
pub use filters::PropertyFilter;
pub use listing::{PropertyStatus, PropertyType};
pub use property::{adapt_properties, adapt_property, Property, PropertyOwner};
