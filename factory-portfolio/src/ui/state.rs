use bevy::prelude::*;
use constants::camera::{HOME, ZOOM_BUTTON_DISTANCE, viewpoint};
use serde_json::{Value, json};

use crate::engine::camera::navigator::CameraCommand;
use crate::portfolio::catalogue::{CategoryKey, ProjectCatalogue, ProjectScope};

/// Information panels; at most one is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Overview,
    Projects,
    Skills,
    Contact,
}

impl Panel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Overview => "overview",
            Panel::Projects => "projects",
            Panel::Skills => "skills",
            Panel::Contact => "contact",
        }
    }
}

/// Top navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavSection {
    #[default]
    Home,
    Overview,
    Projects,
    Skills,
    Contact,
}

impl NavSection {
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "home" => Some(Self::Home),
            "overview" => Some(Self::Overview),
            "projects" => Some(Self::Projects),
            "skills" => Some(Self::Skills),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Overview => "overview",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    pub fn panel(&self) -> Option<Panel> {
        match self {
            Self::Home => None,
            Self::Overview => Some(Panel::Overview),
            Self::Projects => Some(Panel::Projects),
            Self::Skills => Some(Panel::Skills),
            Self::Contact => Some(Panel::Contact),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    /// Signed distance along the view direction.
    pub fn distance(&self) -> f32 {
        match self {
            Self::In => ZOOM_BUTTON_DISTANCE,
            Self::Out => -ZOOM_BUTTON_DISTANCE,
        }
    }
}

/// Overlay intents, from RPC, keyboard shortcuts or marker picks.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum UiCommand {
    Navigate(NavSection),
    ExploreScene,
    ClosePanels,
    SetFilter(ProjectScope),
    /// Card click; indexes the all list.
    OpenProject(usize),
    /// Marker click.
    OpenCategory(CategoryKey),
    PreviousProject,
    NextProject,
    CloseModal,
    ViewProject,
    /// Side navigation; unknown names are ignored.
    FlyToSection(String),
    ToggleDayNight,
    ToggleAutoRotate,
    Zoom(ZoomDirection),
    ResetView,
    ToggleFullscreen,
    ToggleMobileMenu,
    Escape,
}

/// Work a command hands to other subsystems.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    Camera(CameraCommand),
    ToggleDayNight,
    OpenExternalUrl(String),
    ToggleFullscreen,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct UiState {
    pub panel: Option<Panel>,
    pub hero_visible: bool,
    /// Filter applied to the project cards.
    pub filter: ProjectScope,
    /// List that previous/next and view step through.
    pub context: ProjectScope,
    pub current_index: usize,
    pub modal_open: bool,
    pub active_nav: NavSection,
    /// Highlighted side-nav viewpoint.
    pub active_section: Option<&'static str>,
    pub mobile_menu_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            panel: None,
            hero_visible: true,
            filter: ProjectScope::All,
            context: ProjectScope::All,
            current_index: 0,
            modal_open: false,
            active_nav: NavSection::Home,
            active_section: None,
            mobile_menu_open: false,
        }
    }
}

impl UiState {
    /// Apply one command and return the effects it requests.
    pub fn apply(&mut self, command: &UiCommand, catalogue: &ProjectCatalogue) -> Vec<UiEffect> {
        let mut effects = Vec::new();
        match command {
            UiCommand::Navigate(section) => {
                self.active_nav = *section;
                self.mobile_menu_open = false;
                self.close_panels();
                match section.panel() {
                    Some(panel) => self.panel = Some(panel),
                    None => {
                        self.navigate_to_section(HOME.name, &mut effects);
                        self.hero_visible = true;
                        effects.push(UiEffect::Camera(CameraCommand::SetAutoRotate(true)));
                    }
                }
            }
            UiCommand::ExploreScene => {
                self.hero_visible = false;
                effects.push(UiEffect::Camera(CameraCommand::SetAutoRotate(true)));
            }
            UiCommand::ClosePanels => {
                self.close_panels();
                self.hero_visible = true;
            }
            UiCommand::SetFilter(scope) => {
                self.filter = *scope;
                self.context = *scope;
            }
            UiCommand::OpenProject(index) => {
                if *index < catalogue.len(ProjectScope::All) {
                    self.context = ProjectScope::All;
                    self.current_index = *index;
                    self.modal_open = true;
                }
            }
            UiCommand::OpenCategory(key) => {
                let scope = ProjectScope::Category(*key);
                if catalogue.len(scope) > 0 {
                    self.filter = ProjectScope::All;
                    self.context = scope;
                    self.current_index = 0;
                    self.modal_open = true;
                }
            }
            UiCommand::PreviousProject => self.step_project(catalogue, -1),
            UiCommand::NextProject => self.step_project(catalogue, 1),
            UiCommand::CloseModal => self.modal_open = false,
            UiCommand::ViewProject => {
                if let Some(project) = catalogue.get(self.context, self.current_index) {
                    match (&project.url, project.is_external) {
                        (Some(url), true) => effects.push(UiEffect::OpenExternalUrl(url.clone())),
                        _ => {
                            self.modal_open = false;
                            self.navigate_to_section(project.category_key.as_str(), &mut effects);
                        }
                    }
                }
            }
            UiCommand::FlyToSection(name) => self.navigate_to_section(name, &mut effects),
            UiCommand::ToggleDayNight => effects.push(UiEffect::ToggleDayNight),
            UiCommand::ToggleAutoRotate => {
                effects.push(UiEffect::Camera(CameraCommand::ToggleAutoRotate))
            }
            UiCommand::Zoom(direction) => {
                effects.push(UiEffect::Camera(CameraCommand::Zoom(direction.distance())))
            }
            UiCommand::ResetView => {
                self.navigate_to_section(HOME.name, &mut effects);
                self.hero_visible = true;
                effects.push(UiEffect::Camera(CameraCommand::SetAutoRotate(true)));
            }
            UiCommand::ToggleFullscreen => effects.push(UiEffect::ToggleFullscreen),
            UiCommand::ToggleMobileMenu => self.mobile_menu_open = !self.mobile_menu_open,
            UiCommand::Escape => {
                self.modal_open = false;
                self.close_panels();
                self.mobile_menu_open = false;
            }
        }
        effects
    }

    /// Closing panels also hides the hero; callers that keep it re-show it.
    fn close_panels(&mut self) {
        self.panel = None;
        self.hero_visible = false;
    }

    fn navigate_to_section(&mut self, name: &str, effects: &mut Vec<UiEffect>) {
        let Some(target) = viewpoint(name) else {
            debug!("Ignoring navigation to unknown section '{}'", name);
            return;
        };
        self.hero_visible = false;
        self.active_section = Some(target.name);
        effects.push(UiEffect::Camera(CameraCommand::SetAutoRotate(false)));
        effects.push(UiEffect::Camera(CameraCommand::FlyTo(target)));
    }

    fn step_project(&mut self, catalogue: &ProjectCatalogue, offset: isize) {
        let len = catalogue.len(self.context);
        if len == 0 {
            return;
        }
        let index = (self.current_index as isize + offset).rem_euclid(len as isize);
        self.current_index = index as usize;
        self.modal_open = true;
    }

    /// Full state snapshot for `ui_state_changed`.
    pub fn to_json(&self, catalogue: &ProjectCatalogue) -> Value {
        let project = self
            .modal_open
            .then(|| catalogue.get(self.context, self.current_index))
            .flatten();
        json!({
            "panel": self.panel.map(|panel| panel.as_str()),
            "hero_visible": self.hero_visible,
            "filter": self.filter,
            "context": self.context,
            "current_index": self.current_index,
            "modal_open": self.modal_open,
            "project": project,
            "active_nav": self.active_nav.as_str(),
            "active_section": self.active_section,
            "mobile_menu_open": self.mobile_menu_open,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::catalogue::Project;
    use crate::portfolio::catalogue::tests::project;

    fn catalogue() -> ProjectCatalogue {
        let mut catalogue = ProjectCatalogue::new(vec![
            project("arm", CategoryKey::Robots),
            project("welder", CategoryKey::Robots),
            project("tower", CategoryKey::Cranes),
        ]);
        let mut repo: Project = project("repo", CategoryKey::Github);
        repo.url = Some("https://example.invalid/repo".to_string());
        repo.is_external = true;
        catalogue.merge_external(vec![repo]);
        catalogue
    }

    fn fly_target(effects: &[UiEffect]) -> Option<&'static str> {
        effects.iter().find_map(|effect| match effect {
            UiEffect::Camera(CameraCommand::FlyTo(viewpoint)) => Some(viewpoint.name),
            _ => None,
        })
    }

    #[test]
    fn marker_pick_opens_category_and_resets_filter() {
        let catalogue = catalogue();
        let mut state = UiState::default();
        state.apply(&UiCommand::SetFilter(ProjectScope::Category(CategoryKey::Cranes)), &catalogue);
        state.current_index = 3;

        state.apply(&UiCommand::OpenCategory(CategoryKey::Robots), &catalogue);
        assert_eq!(state.filter, ProjectScope::All);
        assert_eq!(state.context, ProjectScope::Category(CategoryKey::Robots));
        assert_eq!(state.current_index, 0);
        assert!(state.modal_open);
    }

    #[test]
    fn empty_category_is_ignored() {
        let catalogue = catalogue();
        let mut state = UiState::default();
        let before = state.clone();
        let effects = state.apply(&UiCommand::OpenCategory(CategoryKey::Plc), &catalogue);
        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn previous_and_next_wrap_around_the_context() {
        let catalogue = catalogue();
        let mut state = UiState::default();
        state.apply(&UiCommand::SetFilter(ProjectScope::All), &catalogue);
        state.apply(&UiCommand::OpenProject(0), &catalogue);

        state.apply(&UiCommand::PreviousProject, &catalogue);
        assert_eq!(state.current_index, 3);
        state.apply(&UiCommand::NextProject, &catalogue);
        assert_eq!(state.current_index, 0);

        state.apply(&UiCommand::OpenCategory(CategoryKey::Robots), &catalogue);
        state.apply(&UiCommand::NextProject, &catalogue);
        state.apply(&UiCommand::NextProject, &catalogue);
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn previous_from_the_first_of_three_lands_on_the_last() {
        let catalogue = ProjectCatalogue::new(vec![
            project("arm", CategoryKey::Robots),
            project("tower", CategoryKey::Cranes),
            project("cip", CategoryKey::Plc),
        ]);
        let mut state = UiState::default();
        state.apply(&UiCommand::OpenProject(0), &catalogue);

        state.apply(&UiCommand::PreviousProject, &catalogue);
        assert_eq!(state.current_index, 2);
        assert!(state.modal_open);
    }

    #[test]
    fn stepping_an_empty_list_does_nothing() {
        let catalogue = ProjectCatalogue::default();
        let mut state = UiState::default();
        state.apply(&UiCommand::NextProject, &catalogue);
        assert_eq!(state.current_index, 0);
        assert!(!state.modal_open);
    }

    #[test]
    fn view_project_opens_external_url() {
        let catalogue = catalogue();
        let mut state = UiState::default();
        state.apply(&UiCommand::OpenProject(3), &catalogue);

        let effects = state.apply(&UiCommand::ViewProject, &catalogue);
        assert_eq!(
            effects,
            vec![UiEffect::OpenExternalUrl("https://example.invalid/repo".to_string())]
        );
        assert!(state.modal_open);
    }

    #[test]
    fn view_project_flies_to_its_section() {
        let catalogue = catalogue();
        let mut state = UiState::default();
        state.apply(&UiCommand::OpenProject(2), &catalogue);

        let effects = state.apply(&UiCommand::ViewProject, &catalogue);
        assert!(!state.modal_open);
        assert!(!state.hero_visible);
        assert_eq!(fly_target(&effects), Some("cranes"));
        assert_eq!(state.active_section, Some("cranes"));
        assert!(effects.contains(&UiEffect::Camera(CameraCommand::SetAutoRotate(false))));
    }

    #[test]
    fn unknown_section_is_ignored() {
        let catalogue = catalogue();
        let mut state = UiState::default();
        let effects = state.apply(&UiCommand::FlyToSection("warehouse".to_string()), &catalogue);
        assert!(effects.is_empty());
        assert!(state.hero_visible);
        assert_eq!(state.active_section, None);
    }

    #[test]
    fn navigating_home_shows_hero_and_resumes_rotation() {
        let catalogue = catalogue();
        let mut state = UiState::default();
        state.apply(&UiCommand::Navigate(NavSection::Skills), &catalogue);
        assert_eq!(state.panel, Some(Panel::Skills));
        assert!(!state.hero_visible);

        let effects = state.apply(&UiCommand::Navigate(NavSection::Home), &catalogue);
        assert_eq!(state.panel, None);
        assert!(state.hero_visible);
        assert_eq!(fly_target(&effects), Some("home"));
        assert_eq!(
            effects.last(),
            Some(&UiEffect::Camera(CameraCommand::SetAutoRotate(true)))
        );
    }

    #[test]
    fn navigate_closes_mobile_menu() {
        let catalogue = catalogue();
        let mut state = UiState::default();
        state.apply(&UiCommand::ToggleMobileMenu, &catalogue);
        assert!(state.mobile_menu_open);
        state.apply(&UiCommand::Navigate(NavSection::Contact), &catalogue);
        assert!(!state.mobile_menu_open);
        assert_eq!(state.active_nav, NavSection::Contact);
    }

    #[test]
    fn escape_closes_everything() {
        let catalogue = catalogue();
        let mut state = UiState::default();
        state.apply(&UiCommand::Navigate(NavSection::Projects), &catalogue);
        state.apply(&UiCommand::OpenProject(1), &catalogue);
        state.apply(&UiCommand::ToggleMobileMenu, &catalogue);

        state.apply(&UiCommand::Escape, &catalogue);
        assert!(!state.modal_open);
        assert_eq!(state.panel, None);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn snapshot_carries_open_project() {
        let catalogue = catalogue();
        let mut state = UiState::default();
        assert!(state.to_json(&catalogue)["project"].is_null());

        state.apply(&UiCommand::OpenCategory(CategoryKey::Cranes), &catalogue);
        let snapshot = state.to_json(&catalogue);
        assert_eq!(snapshot["project"]["title"], "tower");
        assert_eq!(snapshot["context"], "cranes");
        assert_eq!(snapshot["filter"], "all");
    }
}
