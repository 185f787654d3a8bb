//! Mutually exclusive option resolution.

use super::spec::{MutualExclusionGroup, OptionSpec};
use super::value::OptionValue;

/// Drop lower-priority members of each group from `present`.
///
/// `present` holds the options that have a value, in table order. For every
/// group with two or more members present, all but the highest-priority one
/// are removed. Returns the discarded flags in group order.
pub fn resolve_exclusions(
    present: &mut Vec<(&OptionSpec, &OptionValue)>,
    groups: &[MutualExclusionGroup],
) -> Vec<&'static str> {
    let mut discarded = Vec::new();

    for group in groups {
        let members = group.members();
        if members.len() <= 1 {
            continue;
        }

        let found: Vec<&'static str> = members
            .iter()
            .copied()
            .filter(|flag| present.iter().any(|(spec, _)| spec.flag == *flag))
            .collect();
        if found.len() <= 1 {
            continue;
        }

        let to_remove = &found[1..];
        log::info!(
            "Discarding arguments {:?} in favour of '{}'",
            to_remove,
            found[0]
        );
        present.retain(|(spec, _)| !to_remove.contains(&spec.flag));
        discarded.extend_from_slice(to_remove);
    }

    discarded
}
