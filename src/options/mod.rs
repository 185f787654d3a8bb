//! Option tables and their translation into ffmpeg arguments.
//!
//! Rendering rules, applied per option in declaration order:
//! - unset options contribute nothing
//! - `true` booleans render `-flag`
//! - `false` booleans render `-negative` when a dual name is declared, otherwise nothing
//! - other values render `-flag value`
//!
//! Mutually exclusive groups are resolved before rendering.

pub mod exclusion;
pub mod spec;
pub mod table;
pub mod value;

pub use exclusion::resolve_exclusions;
pub use spec::{DualNameFlag, MutualExclusionGroup, OptionSpec, SchemaError, TableSchema};
pub use table::{OptionError, OptionTable};
pub use value::{OptionValue, OptionValues, ValueType};
