pub mod resource;

pub use resource::{
    InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData, has_extension,
};
