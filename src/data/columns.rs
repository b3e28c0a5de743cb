use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Role – the semantic meaning of a column
// ---------------------------------------------------------------------------

/// One of the five columns the dashboard looks for, whatever the header says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Name,
    Type,
    Flow,
    Pressure,
    Temperature,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Name,
        Role::Type,
        Role::Flow,
        Role::Pressure,
        Role::Temperature,
    ];

    /// Accepted header spellings, lowercase, highest priority first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Role::Name => &["equipment name", "name", "equipment"],
            Role::Type => &["type", "equipment type", "category"],
            Role::Flow => &["flowrate", "flow rate", "flow"],
            Role::Pressure => &["pressure", "press"],
            Role::Temperature => &["temperature", "temp"],
        }
    }

    /// Human-readable label used in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Role::Name => "Equipment Name",
            Role::Type => "Type",
            Role::Flow => "Flowrate",
            Role::Pressure => "Pressure",
            Role::Temperature => "Temperature",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// ColumnIndexMap – resolved column positions
// ---------------------------------------------------------------------------

/// Position of each role's column, or `None` when no header matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColumnIndexMap {
    pub name: Option<usize>,
    #[serde(rename = "type")]
    pub kind: Option<usize>,
    pub flow: Option<usize>,
    pub pressure: Option<usize>,
    pub temperature: Option<usize>,
}

impl ColumnIndexMap {
    /// Resolve every role against `headers`.
    ///
    /// Headers are trimmed and lowercased, then compared for exact equality.
    /// Aliases are tried in priority order; the first alias present anywhere
    /// wins, and among duplicate headers the leftmost one is used.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Self {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.as_ref().trim().to_lowercase())
            .collect();

        let find = |role: Role| {
            role.aliases()
                .iter()
                .find_map(|alias| normalized.iter().position(|h| h == alias))
        };

        ColumnIndexMap {
            name: find(Role::Name),
            kind: find(Role::Type),
            flow: find(Role::Flow),
            pressure: find(Role::Pressure),
            temperature: find(Role::Temperature),
        }
    }

    pub fn get(&self, role: Role) -> Option<usize> {
        match role {
            Role::Name => self.name,
            Role::Type => self.kind,
            Role::Flow => self.flow,
            Role::Pressure => self.pressure,
            Role::Temperature => self.temperature,
        }
    }

    /// Roles with no matching header, in [`Role::ALL`] order.
    pub fn missing_roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|&role| self.get(role).is_none())
            .collect()
    }
}
