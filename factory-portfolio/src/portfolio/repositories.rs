use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use super::catalogue::{CategoryKey, Project, ProjectCatalogue};
use super::manifest::RepositorySource;
use crate::rpc::web_rpc::WebRpcInterface;

/// Subset of the public repository listing that the catalogue displays.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub html_url: String,
}

#[derive(Debug, Error)]
pub enum RepositoryFetchError {
    #[error("repository request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("repository listing returned HTTP {0}")]
    Status(u16),
    #[error("repository listing could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("fetch runtime unavailable: {0}")]
    Runtime(#[from] std::io::Error),
}

pub type RepositoryFetchOutcome = Result<Vec<Project>, RepositoryFetchError>;

/// Completed fetches waiting for the main world. Filled from the fetch
/// task, drained by `merge_fetched_repositories`.
#[derive(Resource, Clone, Default)]
pub struct RepositoryInbox(Arc<Mutex<Vec<RepositoryFetchOutcome>>>);

impl RepositoryInbox {
    pub fn post(&self, outcome: RepositoryFetchOutcome) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(outcome);
        }
    }

    fn take(&self) -> Vec<RepositoryFetchOutcome> {
        if let Ok(mut queue) = self.0.lock() {
            std::mem::take(&mut *queue)
        } else {
            Vec::new()
        }
    }
}

/// Keep public, non-fork repositories and map them into catalogue entries.
pub fn map_repositories(records: Vec<RepositoryRecord>) -> Vec<Project> {
    records
        .into_iter()
        .filter(|repo| !repo.fork && repo.visibility.as_deref() == Some("public"))
        .map(map_repository)
        .collect()
}

fn map_repository(repo: RepositoryRecord) -> Project {
    let mut features = Vec::new();
    if repo.stargazers_count > 0 {
        features.push(format!("{} stars", repo.stargazers_count));
    }
    if repo.forks_count > 0 {
        features.push(format!("{} forks", repo.forks_count));
    }
    if let Some(date) = repo.updated_at.as_deref().and_then(|stamp| stamp.get(..10)) {
        features.push(format!("Updated {date}"));
    }

    Project {
        title: repo.name,
        category: "Open Source".to_string(),
        category_key: CategoryKey::Github,
        description: repo
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "No description available".to_string()),
        tech: repo.language.into_iter().collect(),
        features,
        url: Some(repo.html_url),
        is_external: true,
    }
}

pub async fn fetch_repositories(url: &str) -> RepositoryFetchOutcome {
    let client = reqwest::Client::new();
    let request = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/vnd.github+json");

    // Browsers supply their own user agent.
    #[cfg(not(target_arch = "wasm32"))]
    let request = request.header(reqwest::header::USER_AGENT, env!("CARGO_PKG_NAME"));

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(RepositoryFetchError::Status(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    let records: Vec<RepositoryRecord> = serde_json::from_slice(&bytes)?;
    Ok(map_repositories(records))
}

/// Spawn the one-shot listing fetch. The task only ever talks back through
/// the inbox.
pub fn start_repository_fetch(source: Option<Res<RepositorySource>>, inbox: Res<RepositoryInbox>) {
    let Some(url) = source.and_then(|s| s.url.clone()) else {
        info!("No repository listing configured, keeping built-in catalogue");
        return;
    };

    info!("Fetching repository listing from {}", url);
    let inbox = inbox.clone();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            inbox.post(fetch_repositories(&url).await);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::thread::spawn(move || {
            let outcome = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(RepositoryFetchError::from)
                .and_then(|runtime| runtime.block_on(fetch_repositories(&url)));
            inbox.post(outcome);
        });
    }
}

pub fn merge_fetched_repositories(
    inbox: Res<RepositoryInbox>,
    mut catalogue: ResMut<ProjectCatalogue>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for outcome in inbox.take() {
        match outcome {
            Ok(projects) => {
                info!("Merged {} public repositories into catalogue", projects.len());
                catalogue.merge_external(projects);
                rpc_interface.send_notification("projects_updated", catalogue.to_json());
            }
            Err(error) => {
                warn!("Could not fetch repositories: {}", error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::catalogue::ProjectScope;
    use crate::portfolio::catalogue::tests::project;

    fn record(name: &str) -> RepositoryRecord {
        RepositoryRecord {
            name: name.to_string(),
            description: None,
            language: None,
            fork: false,
            visibility: Some("public".to_string()),
            stargazers_count: 0,
            forks_count: 0,
            updated_at: Some("2024-03-09T10:15:00Z".to_string()),
            html_url: format!("https://example.invalid/{name}"),
        }
    }

    #[test]
    fn forks_and_private_repositories_are_dropped() {
        let mut fork = record("fork");
        fork.fork = true;
        let mut private = record("private");
        private.visibility = Some("private".to_string());

        let projects = map_repositories(vec![record("kept"), fork, private]);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "kept");
    }

    #[test]
    fn mapping_fills_display_fields() {
        let mut repo = record("plc-tools");
        repo.language = Some("Rust".to_string());
        repo.stargazers_count = 4;
        repo.description = Some("Ladder logic helpers".to_string());

        let project = map_repository(repo);
        assert_eq!(project.category, "Open Source");
        assert_eq!(project.category_key, CategoryKey::Github);
        assert_eq!(project.tech, vec!["Rust".to_string()]);
        assert_eq!(project.features, vec!["4 stars", "Updated 2024-03-09"]);
        assert_eq!(project.url.as_deref(), Some("https://example.invalid/plc-tools"));
        assert!(project.is_external);
    }

    #[test]
    fn missing_description_gets_placeholder() {
        let mut repo = record("bare");
        repo.forks_count = 2;
        let project = map_repository(repo);
        assert_eq!(project.description, "No description available");
        assert!(project.tech.is_empty());
        assert_eq!(project.features[0], "2 forks");
    }

    #[test]
    fn listing_json_decodes() {
        let raw = r#"[{"name": "scene", "fork": false, "visibility": "public",
            "description": null, "language": "TypeScript", "stargazers_count": 1,
            "forks_count": 0, "updated_at": "2025-01-02T00:00:00Z",
            "html_url": "https://example.invalid/scene", "size": 120}]"#;
        let records: Vec<RepositoryRecord> = serde_json::from_str(raw).expect("listing");
        let projects = map_repositories(records);
        assert_eq!(projects[0].features, vec!["1 stars", "Updated 2025-01-02"]);
    }

    fn merge_app(catalogue: ProjectCatalogue) -> App {
        let mut app = App::new();
        app.insert_resource(catalogue)
            .init_resource::<RepositoryInbox>()
            .init_resource::<WebRpcInterface>()
            .add_systems(Update, merge_fetched_repositories);
        app
    }

    #[test]
    fn failed_fetch_keeps_built_in_catalogue() {
        let mut app = merge_app(ProjectCatalogue::new(vec![project("arm", CategoryKey::Robots)]));
        app.world()
            .resource::<RepositoryInbox>()
            .post(Err(RepositoryFetchError::Status(403)));
        app.update();

        let catalogue = app.world().resource::<ProjectCatalogue>();
        assert_eq!(catalogue.len(ProjectScope::All), 1);
        assert!(catalogue.list(ProjectScope::All).iter().all(|p| p.category_key != CategoryKey::Github));
        assert_eq!(app.world().resource::<WebRpcInterface>().pending_notifications(), 0);
    }

    #[test]
    fn successful_fetch_appends_and_notifies() {
        let mut app = merge_app(ProjectCatalogue::new(vec![project("arm", CategoryKey::Robots)]));
        app.world()
            .resource::<RepositoryInbox>()
            .post(Ok(vec![project("repo", CategoryKey::Github)]));
        app.update();

        let catalogue = app.world().resource::<ProjectCatalogue>();
        let all = catalogue.list(ProjectScope::All);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "arm");
        assert_eq!(all[1].title, "repo");
        assert_eq!(
            app.world()
                .resource::<WebRpcInterface>()
                .last_notification("projects_updated")
                .map(|params| params["external_count"].clone()),
            Some(serde_json::json!(1))
        );
    }
}
