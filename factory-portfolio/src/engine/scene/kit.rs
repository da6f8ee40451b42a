use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::engine::animation::registry::{AnimatedObject, AnimatedObjectRegistry, AnimationHandle};
use crate::engine::core::colour::{hex_colour, hex_linear};

/// Everything the factory builder touches while spawning.
#[derive(SystemParam)]
pub struct SceneKit<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub meshes: ResMut<'w, Assets<Mesh>>,
    pub materials: ResMut<'w, Assets<StandardMaterial>>,
    pub registry: ResMut<'w, AnimatedObjectRegistry>,
}

impl SceneKit<'_, '_> {
    /// Opaque surface in a palette colour.
    pub fn material(&mut self, hex: u32, metallic: f32, roughness: f32) -> Handle<StandardMaterial> {
        self.materials.add(StandardMaterial {
            base_color: hex_colour(hex),
            metallic,
            perceptual_roughness: roughness,
            ..default()
        })
    }

    /// Surface glowing in its own colour at `strength`.
    pub fn glowing(&mut self, hex: u32, strength: f32) -> Handle<StandardMaterial> {
        let colour = hex_linear(hex);
        self.materials.add(StandardMaterial {
            base_color: hex_colour(hex),
            emissive: LinearRgba::rgb(
                colour.red * strength,
                colour.green * strength,
                colour.blue * strength,
            ),
            metallic: 0.5,
            perceptual_roughness: 0.2,
            ..default()
        })
    }

    /// Empty transform node, optionally parented.
    pub fn group(&mut self, parent: Option<Entity>, transform: Transform) -> Entity {
        let mut entity = self.commands.spawn((transform, Visibility::default()));
        if let Some(parent) = parent {
            entity.insert(ChildOf(parent));
        }
        entity.id()
    }

    pub fn solid(
        &mut self,
        parent: Option<Entity>,
        shape: impl Into<Mesh>,
        material: &Handle<StandardMaterial>,
        transform: Transform,
    ) -> Entity {
        let mesh = self.meshes.add(shape.into());
        let mut entity = self
            .commands
            .spawn((Mesh3d(mesh), MeshMaterial3d(material.clone()), transform));
        if let Some(parent) = parent {
            entity.insert(ChildOf(parent));
        }
        entity.id()
    }

    pub fn register(&mut self, object: AnimatedObject) -> AnimationHandle {
        self.registry.register(object)
    }
}
