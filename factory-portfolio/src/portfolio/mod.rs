//! Project catalogue shown by the overlay.
//!
//! Built-in projects come from a JSON manifest asset. Public repositories
//! fetched at startup are appended once the request completes.

/// Category keys, project records and the catalogue resource.
pub mod catalogue;

/// Manifest asset describing the built-in projects.
pub mod manifest;

/// One-shot repository listing fetch and merge into the catalogue.
pub mod repositories;

use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::core::app_state::AppState;
use crate::engine::core::frame::FrameSet;
use manifest::PortfolioManifest;
use repositories::{RepositoryInbox, merge_fetched_repositories, start_repository_fetch};

pub struct PortfolioPlugin;

impl Plugin for PortfolioPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(JsonAssetPlugin::<PortfolioManifest>::new(&["json"]))
            .init_resource::<catalogue::ProjectCatalogue>()
            .init_resource::<RepositoryInbox>()
            .add_systems(OnEnter(AppState::Running), start_repository_fetch)
            .add_systems(
                Update,
                merge_fetched_repositories
                    .in_set(FrameSet::Input)
                    .run_if(in_state(AppState::Running)),
            );
    }
}
