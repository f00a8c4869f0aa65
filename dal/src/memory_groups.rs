//! Resting place for [MemoryGroupLookup]

use dal_api::GroupLookup;
use model::client::Group;


/// [GroupLookup] over a fixed list of groups
#[derive(Debug, Clone)]
pub struct MemoryGroupLookup {
    groups: Vec<Group>,
}

impl MemoryGroupLookup {

    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

}

/// The usual administration ladder, from `guest` (level 0) to `superadmin` (level 100)
impl Default for MemoryGroupLookup {
    fn default() -> Self {
        let group = |id, name: &str, keyword: &str, level| Group { id, name: name.to_string(), keyword: keyword.to_string(), level };
        Self::new(vec![
            group(1, "Guest",        "guest",       0),
            group(2, "User",         "user",        1),
            group(3, "Regular",      "reg",         2),
            group(4, "Moderator",    "mod",         20),
            group(5, "Admin",        "admin",       40),
            group(6, "Full Admin",   "fulladmin",   60),
            group(7, "Senior Admin", "senioradmin", 80),
            group(8, "Super Admin",  "superadmin",  100),
        ])
    }
}

impl GroupLookup for MemoryGroupLookup {

    fn get_by_keyword(&self, keyword: &str) -> Option<Group> {
        self.groups.iter()
            .find(|group| group.keyword.eq_ignore_ascii_case(keyword))
            .cloned()
    }

}
