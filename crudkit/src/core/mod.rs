// Generic data access engine
// One descriptor trait, instantiated once per entity

pub mod traits;

pub use traits::{CRUDResource, IntoNewActiveModel, MergeIntoActiveModel};
