//! Schema layer for describing tools to external agents.

mod error;
mod model;
mod plain;

pub mod prelude {
    pub use crate::{
        FunctionDescriptor, ParameterSet, PlainData, Property, SchemaError, SchemaErrorKind,
        ToolDescriptor, to_plain_data,
    };
}

pub use error::{SchemaError, SchemaErrorKind};
pub use model::{
    FunctionDescriptor, FunctionKind, MAX_DESCRIPTION_LENGTH, ParameterSet, ParameterSetBuilder,
    ParametersKind, Property, ToolDescriptor,
};
pub use plain::{PlainData, prune_nulls, to_plain_data};
