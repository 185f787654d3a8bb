//! Static option table declarations.

use std::collections::HashSet;

use super::value::{OptionValue, ValueType};

/// Errors in a table declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Option name '{name}' is declared more than once in {table} options")]
    DuplicateName { table: &'static str, name: &'static str },
    #[error("Flag '-{flag}' can be rendered by more than one {table} option")]
    DuplicateFlag { table: &'static str, flag: &'static str },
}

/// One option of a table: logical name, ffmpeg flag, type and default.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    /// Name used by callers and configuration files.
    pub name: &'static str,
    /// Flag name without the leading dash.
    pub flag: &'static str,
    pub value_type: ValueType,
    /// Value used when the caller supplies nothing. `None` leaves the option unset.
    pub default: Option<OptionValue>,
}

impl OptionSpec {
    pub const fn new(name: &'static str, flag: &'static str, value_type: ValueType) -> Self {
        Self {
            name,
            flag,
            value_type,
            default: None,
        }
    }

    /// An option whose type is taken from its default value.
    pub const fn with_default(name: &'static str, flag: &'static str, default: OptionValue) -> Self {
        Self {
            name,
            flag,
            value_type: default.value_type(),
            default: Some(default),
        }
    }
}

/// Boolean flag that renders a distinct negative flag when false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualNameFlag {
    pub positive: &'static str,
    pub negative: &'static str,
}

impl DualNameFlag {
    pub const fn new(positive: &'static str, negative: &'static str) -> Self {
        Self { positive, negative }
    }
}

/// Flags of which only the first present one survives rendering.
///
/// Members are listed highest priority first. Groups with fewer than two
/// members have no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutualExclusionGroup(pub &'static [&'static str]);

impl MutualExclusionGroup {
    pub fn members(&self) -> &'static [&'static str] {
        self.0
    }
}

/// Everything needed to build and render one kind of option table.
#[derive(Debug)]
pub struct TableSchema {
    /// Table name used in errors and logs.
    pub name: &'static str,
    /// Options in render order.
    pub options: &'static [OptionSpec],
    pub dual_names: &'static [DualNameFlag],
    pub exclusions: &'static [MutualExclusionGroup],
}

impl TableSchema {
    pub fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.name == name)
    }

    /// Negative flag for `flag`, if one is declared.
    pub fn negative_flag(&self, flag: &str) -> Option<&'static str> {
        self.dual_names
            .iter()
            .find(|dual| dual.positive == flag)
            .map(|dual| dual.negative)
    }

    /// Check that logical names are unique and that no flag, including the
    /// negative half of a dual name, can be rendered by two options.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut names = HashSet::new();
        for spec in self.options {
            if !names.insert(spec.name) {
                return Err(SchemaError::DuplicateName {
                    table: self.name,
                    name: spec.name,
                });
            }
        }

        let mut flags = HashSet::new();
        let rendered = self.options.iter().flat_map(|spec| {
            std::iter::once(spec.flag).chain(self.negative_flag(spec.flag))
        });
        for flag in rendered {
            if !flags.insert(flag) {
                return Err(SchemaError::DuplicateFlag {
                    table: self.name,
                    flag,
                });
            }
        }
        Ok(())
    }

    /// Logical name to type mapping, in render order.
    pub fn parameters(&self) -> Vec<(&'static str, ValueType)> {
        self.options
            .iter()
            .map(|spec| (spec.name, spec.value_type))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SHARED_FLAG: [OptionSpec; 2] = [
        OptionSpec::new("duration", "t", ValueType::String),
        OptionSpec::new("limit", "t", ValueType::String),
    ];

    static SHARED_NAME: [OptionSpec; 2] = [
        OptionSpec::new("rate", "r", ValueType::Int),
        OptionSpec::new("rate", "ar", ValueType::String),
    ];

    static NEGATIVE_CLASH: [OptionSpec; 2] = [
        OptionSpec::with_default("stats", "stats", OptionValue::Bool(true)),
        OptionSpec::with_default("quiet", "nostats", OptionValue::Bool(false)),
    ];

    fn schema(options: &'static [OptionSpec]) -> TableSchema {
        TableSchema {
            name: "test",
            options,
            dual_names: &[DualNameFlag {
                positive: "stats",
                negative: "nostats",
            }],
            exclusions: &[],
        }
    }

    #[test]
    fn test_duplicate_flag() {
        assert_eq!(
            schema(&SHARED_FLAG).validate(),
            Err(SchemaError::DuplicateFlag {
                table: "test",
                flag: "t"
            })
        );
    }

    #[test]
    fn test_duplicate_name() {
        assert_eq!(
            schema(&SHARED_NAME).validate(),
            Err(SchemaError::DuplicateName {
                table: "test",
                name: "rate"
            })
        );
    }

    #[test]
    fn test_negative_flag_clash() {
        assert_eq!(
            schema(&NEGATIVE_CLASH).validate(),
            Err(SchemaError::DuplicateFlag {
                table: "test",
                flag: "nostats"
            })
        );
    }
}
