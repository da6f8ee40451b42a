use bevy::asset::LoadState;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::catalogue::{CategoryKey, Project};
use crate::constants::path::PORTFOLIO_MANIFEST_PATH;
use crate::engine::loading::progress::LoadingProgress;

/// Project entry as written in the manifest. The category key comes from
/// the enclosing section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySection {
    pub key: CategoryKey,
    pub projects: Vec<ProjectRecord>,
}

/// Built-in catalogue as a Bevy asset. Sections are kept in file order.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct PortfolioManifest {
    /// Public repository listing merged after startup, if any.
    #[serde(default)]
    pub repository_listing_url: Option<String>,
    pub categories: Vec<CategorySection>,
}

impl PortfolioManifest {
    /// Flatten sections into catalogue order.
    pub fn projects(&self) -> Vec<Project> {
        self.categories
            .iter()
            .flat_map(|section| {
                section.projects.iter().map(move |record| Project {
                    title: record.title.clone(),
                    category: record.category.clone(),
                    category_key: section.key,
                    description: record.description.clone(),
                    tech: record.tech.clone(),
                    features: record.features.clone(),
                    url: record.url.clone(),
                    is_external: false,
                })
            })
            .collect()
    }
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<PortfolioManifest>>,
}

/// Remote listing location, copied out of the manifest once it loads.
#[derive(Resource, Debug, Clone, Default)]
pub struct RepositorySource {
    pub url: Option<String>,
}

pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading portfolio manifest from {}", PORTFOLIO_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(PORTFOLIO_MANIFEST_PATH));
}

/// Build the catalogue as soon as the manifest asset is available.
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    manifests: Res<Assets<PortfolioManifest>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    let Some(handle) = manifest_loader.handle.as_ref() else {
        return;
    };
    let Some(manifest) = manifests.get(handle) else {
        if let Some(LoadState::Failed(error)) = asset_server.get_load_state(handle) {
            error!("Portfolio manifest failed to load: {}", error);
            loading_progress.manifest_loaded = true;
        }
        return;
    };

    let projects = manifest.projects();
    info!(
        "Portfolio manifest loaded: {} projects in {} categories",
        projects.len(),
        manifest.categories.len()
    );

    commands.insert_resource(super::catalogue::ProjectCatalogue::new(projects));
    commands.insert_resource(RepositorySource {
        url: manifest.repository_listing_url.clone(),
    });
    loading_progress.manifest_loaded = true;
}
