//! Workspace groups.

use serde::{Deserialize, Serialize};

/// Names of the default groups, in order.
pub const GROUP_NAMES: [&str; 9] = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A named container of windows the host can switch between.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Groups `"1"` through `"9"`.
pub fn default_groups() -> Vec<Group> {
    GROUP_NAMES.iter().copied().map(Group::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_groups_in_order() {
        let groups = default_groups();
        assert_eq!(groups.len(), 9);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, GROUP_NAMES);
    }
}
