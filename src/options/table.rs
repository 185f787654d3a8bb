//! Populated option tables and argument rendering.

use std::sync::OnceLock;

use super::exclusion::resolve_exclusions;
use super::spec::{OptionSpec, SchemaError, TableSchema};
use super::value::{OptionValue, OptionValues, ValueType};

/// Errors that can occur while populating an option table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptionError {
    #[error("Unknown option '{name}' for {table} options")]
    UnknownOption { table: &'static str, name: String },
    #[error("Option '{name}' expects {expected}, got {found}")]
    TypeMismatch {
        name: String,
        expected: ValueType,
        found: ValueType,
    },
    #[error("Missing required option '{name}'")]
    MissingRequired { name: String },
    #[error("Invalid option table: {0}")]
    Schema(#[from] SchemaError),
}

/// An option table populated with values for a single invocation.
///
/// Tables are immutable once built. The rendered argument list is computed on
/// first use and cached.
#[derive(Debug, Clone)]
pub struct OptionTable {
    schema: &'static TableSchema,
    values: Vec<Option<OptionValue>>,
    rendered: OnceLock<Vec<String>>,
}

impl OptionTable {
    /// Populate `schema` from caller-supplied values.
    ///
    /// Options the caller does not mention take their declared default.
    pub fn new(schema: &'static TableSchema, supplied: &OptionValues) -> Result<Self, OptionError> {
        schema.validate()?;
        if let Some(name) = supplied.names().find(|name| schema.option(name).is_none()) {
            return Err(OptionError::UnknownOption {
                table: schema.name,
                name: name.to_string(),
            });
        }

        let mut values = Vec::with_capacity(schema.options.len());
        for spec in schema.options {
            let value = match supplied.get(spec.name) {
                Some(Some(value)) => Some(checked(spec, value.clone())?),
                Some(None) => None,
                None => spec.default.clone(),
            };
            values.push(value);
        }

        log::debug!(
            "Built {} options table from {} supplied values",
            schema.name,
            supplied.len()
        );

        Ok(Self {
            schema,
            values,
            rendered: OnceLock::new(),
        })
    }

    /// Table holding only the declared defaults.
    pub fn with_defaults(schema: &'static TableSchema) -> Self {
        debug_assert_eq!(schema.validate(), Ok(()));
        Self {
            schema,
            values: schema.options.iter().map(|spec| spec.default.clone()).collect(),
            rendered: OnceLock::new(),
        }
    }

    pub fn schema(&self) -> &'static TableSchema {
        self.schema
    }

    /// Current value of a logical option.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        let index = self.schema.options.iter().position(|spec| spec.name == name)?;
        self.values[index].as_ref()
    }

    /// Options that have a value, in declaration order.
    pub fn present(&self) -> Vec<(&OptionSpec, &OptionValue)> {
        self.schema
            .options
            .iter()
            .zip(&self.values)
            .filter_map(|(spec, value)| value.as_ref().map(|value| (spec, value)))
            .collect()
    }

    /// Rendered command-line tokens for this table.
    pub fn arguments(&self) -> &[String] {
        self.rendered.get_or_init(|| self.render())
    }

    fn render(&self) -> Vec<String> {
        let mut present = self.present();
        resolve_exclusions(&mut present, self.schema.exclusions);

        let mut arguments = Vec::with_capacity(present.len() * 2);
        for (spec, value) in present {
            match value {
                OptionValue::Bool(true) => arguments.push(format!("-{}", spec.flag)),
                OptionValue::Bool(false) => {
                    if let Some(negative) = self.schema.negative_flag(spec.flag) {
                        arguments.push(format!("-{}", negative));
                    }
                }
                value => {
                    arguments.push(format!("-{}", spec.flag));
                    arguments.push(value.to_string());
                }
            }
        }
        arguments
    }
}

fn checked(spec: &OptionSpec, value: OptionValue) -> Result<OptionValue, OptionError> {
    let found = value.value_type();
    value
        .coerce(spec.value_type)
        .ok_or_else(|| OptionError::TypeMismatch {
            name: spec.name.to_string(),
            expected: spec.value_type,
            found,
        })
}
