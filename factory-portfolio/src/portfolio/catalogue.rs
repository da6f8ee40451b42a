use bevy::prelude::*;
use serde::{Deserialize, Serialize, Serializer};

/// Category a project belongs to. The first four also name scene areas
/// with an interactive marker and a camera viewpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Robots,
    Cranes,
    Plc,
    Conveyors,
    Github,
}

impl CategoryKey {
    pub const SCENE_CATEGORIES: [CategoryKey; 4] =
        [Self::Robots, Self::Cranes, Self::Plc, Self::Conveyors];

    /// Convert string identifier to category for RPC compatibility.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "robots" => Some(Self::Robots),
            "cranes" => Some(Self::Cranes),
            "plc" => Some(Self::Plc),
            "conveyors" => Some(Self::Conveyors),
            "github" => Some(Self::Github),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Robots => "robots",
            Self::Cranes => "cranes",
            Self::Plc => "plc",
            Self::Conveyors => "conveyors",
            Self::Github => "github",
        }
    }

    /// Tooltip text shown while hovering this category's marker.
    pub fn marker_label(&self) -> &'static str {
        match self {
            Self::Robots => "Robotics Projects",
            Self::Cranes => "Crane Automation",
            Self::Plc => "PLC/SCADA Systems",
            Self::Conveyors => "Material Handling",
            Self::Github => "Open Source",
        }
    }
}

/// Project list selection: every project, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectScope {
    #[default]
    All,
    Category(CategoryKey),
}

impl ProjectScope {
    pub fn from_string(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        CategoryKey::from_string(s).map(Self::Category)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category(key) => key.as_str(),
        }
    }
}

impl Serialize for ProjectScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single catalogue entry as displayed in cards and the detail modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub title: String,
    /// Human-readable category label, e.g. "Mobile Tower Crane".
    pub category: String,
    pub category_key: CategoryKey,
    pub description: String,
    pub tech: Vec<String>,
    pub features: Vec<String>,
    pub url: Option<String>,
    pub is_external: bool,
}

/// Built-in projects in manifest category order, then externally sourced
/// entries.
#[derive(Resource, Debug, Default, Clone)]
pub struct ProjectCatalogue {
    built_in: Vec<Project>,
    external: Vec<Project>,
}

impl ProjectCatalogue {
    pub fn new(built_in: Vec<Project>) -> Self {
        Self {
            built_in,
            external: Vec::new(),
        }
    }

    /// Replace every external entry. Built-ins keep their positions.
    pub fn merge_external(&mut self, projects: Vec<Project>) {
        self.external = projects;
    }

    pub fn external(&self) -> &[Project] {
        &self.external
    }

    pub fn is_empty(&self) -> bool {
        self.built_in.is_empty() && self.external.is_empty()
    }

    /// Ordered projects visible under `scope`.
    pub fn list(&self, scope: ProjectScope) -> Vec<&Project> {
        match scope {
            ProjectScope::All => self.built_in.iter().chain(self.external.iter()).collect(),
            ProjectScope::Category(CategoryKey::Github) => self.external.iter().collect(),
            ProjectScope::Category(key) => self
                .built_in
                .iter()
                .filter(|project| project.category_key == key)
                .collect(),
        }
    }

    pub fn len(&self, scope: ProjectScope) -> usize {
        self.list(scope).len()
    }

    pub fn get(&self, scope: ProjectScope, index: usize) -> Option<&Project> {
        self.list(scope).get(index).copied()
    }

    /// Full list payload for `projects_updated` and `get_projects`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "projects": self.list(ProjectScope::All),
            "external_count": self.external.len(),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn project(title: &str, key: CategoryKey) -> Project {
        Project {
            title: title.to_string(),
            category: "Test".to_string(),
            category_key: key,
            description: String::new(),
            tech: Vec::new(),
            features: Vec::new(),
            url: None,
            is_external: key == CategoryKey::Github,
        }
    }

    fn sample() -> ProjectCatalogue {
        ProjectCatalogue::new(vec![
            project("arm", CategoryKey::Robots),
            project("tower", CategoryKey::Cranes),
            project("ota", CategoryKey::Cranes),
            project("cip", CategoryKey::Plc),
        ])
    }

    #[test]
    fn category_lists_keep_manifest_order() {
        let catalogue = sample();
        let cranes: Vec<_> = catalogue
            .list(ProjectScope::Category(CategoryKey::Cranes))
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(cranes, ["tower", "ota"]);
        assert_eq!(catalogue.len(ProjectScope::Category(CategoryKey::Conveyors)), 0);
    }

    #[test]
    fn external_entries_follow_built_ins() {
        let mut catalogue = sample();
        catalogue.merge_external(vec![project("repo", CategoryKey::Github)]);

        let all = catalogue.list(ProjectScope::All);
        assert_eq!(all.len(), 5);
        assert_eq!(all[4].title, "repo");
        assert_eq!(catalogue.get(ProjectScope::All, 0).map(|p| p.title.as_str()), Some("arm"));
        assert_eq!(catalogue.len(ProjectScope::Category(CategoryKey::Github)), 1);
    }

    #[test]
    fn scope_strings_parse() {
        assert_eq!(ProjectScope::from_string("all"), Some(ProjectScope::All));
        assert_eq!(
            ProjectScope::from_string("PLC"),
            Some(ProjectScope::Category(CategoryKey::Plc))
        );
        assert_eq!(ProjectScope::from_string("warehouse"), None);
        assert_eq!(
            serde_json::to_value(ProjectScope::Category(CategoryKey::Cranes)).ok(),
            Some(serde_json::json!("cranes"))
        );
    }
}
