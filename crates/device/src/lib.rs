pub mod properties;

pub use properties::{
    EmbosserFactoryProperties, EmbosserMetadata, FactoryMetadata, FactoryProperties,
};
