use bevy::prelude::*;
use bevy::{render::mesh::PrimitiveTopology, render::render_asset::RenderAssetUsages};
use constants::animation::{
    ATMOSPHERE_CEILING, ATMOSPHERE_FLOOR, ATMOSPHERE_FOOTPRINT, ATMOSPHERE_PARTICLE_COUNT,
    ATMOSPHERE_RISE_PER_FRAME, ATMOSPHERE_SPIN_RATE, SMOKE_CEILING, SMOKE_FOOTPRINT,
    SMOKE_PARTICLE_COUNT, SMOKE_RISE_PER_FRAME,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::registry::{AnimationFault, AnimationTargets, ensure_finite};

/// What happens to a particle that rises past the ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Respawn {
    /// Drop to the floor at a fresh spot inside the footprint.
    Scatter,
    /// Drop to the floor keeping its horizontal position.
    Floor,
}

/// A point cloud of rising particles, kept in a CPU buffer and copied
/// into its mesh every frame.
#[derive(Debug, Clone)]
pub struct ParticleStream {
    pub entity: Entity,
    pub mesh: Handle<Mesh>,
    pub positions: Vec<Vec3>,
    pub rise: f32,
    pub floor: f32,
    pub ceiling: f32,
    /// Side length of the square footprint centred on the emitter.
    pub footprint: f32,
    pub respawn: Respawn,
    /// Yaw of the whole cloud per elapsed second, if it spins.
    pub spin_rate: Option<f32>,
    seed: u64,
    rng: SmallRng,
}

impl ParticleStream {
    pub fn smoke(entity: Entity, mesh: Handle<Mesh>, seed: u64) -> Self {
        Self::seeded(
            entity,
            mesh,
            seed,
            ParticleSettings {
                count: SMOKE_PARTICLE_COUNT,
                rise: SMOKE_RISE_PER_FRAME,
                floor: 0.0,
                ceiling: SMOKE_CEILING,
                footprint: SMOKE_FOOTPRINT,
                respawn: Respawn::Scatter,
                spin_rate: None,
            },
        )
    }

    pub fn atmosphere(entity: Entity, mesh: Handle<Mesh>, seed: u64) -> Self {
        Self::seeded(
            entity,
            mesh,
            seed,
            ParticleSettings {
                count: ATMOSPHERE_PARTICLE_COUNT,
                rise: ATMOSPHERE_RISE_PER_FRAME,
                floor: ATMOSPHERE_FLOOR,
                ceiling: ATMOSPHERE_CEILING,
                footprint: ATMOSPHERE_FOOTPRINT,
                respawn: Respawn::Floor,
                spin_rate: Some(ATMOSPHERE_SPIN_RATE),
            },
        )
    }

    fn seeded(entity: Entity, mesh: Handle<Mesh>, seed: u64, settings: ParticleSettings) -> Self {
        let mut stream = Self {
            entity,
            mesh,
            positions: Vec::with_capacity(settings.count),
            rise: settings.rise,
            floor: settings.floor,
            ceiling: settings.ceiling,
            footprint: settings.footprint,
            respawn: settings.respawn,
            spin_rate: settings.spin_rate,
            seed,
            rng: SmallRng::seed_from_u64(seed),
        };
        stream.fill(settings.count);
        stream
    }

    fn fill(&mut self, count: usize) {
        self.positions.clear();
        for _ in 0..count {
            let height = self.rng.gen_range(self.floor..self.ceiling);
            let (x, z) = self.footprint_point();
            self.positions.push(Vec3::new(x, height, z));
        }
    }

    fn footprint_point(&mut self) -> (f32, f32) {
        let half = self.footprint * 0.5;
        (
            self.rng.gen_range(-half..half),
            self.rng.gen_range(-half..half),
        )
    }

    /// Reseed and regenerate the initial cloud. Replays the same sequence.
    pub fn restart(&mut self) {
        self.rng = SmallRng::seed_from_u64(self.seed);
        let count = self.positions.len();
        self.fill(count);
    }

    /// Rise every particle one frame, respawning those above the ceiling.
    pub fn step(&mut self) {
        for index in 0..self.positions.len() {
            let mut position = self.positions[index];
            position.y += self.rise;
            if position.y > self.ceiling {
                position.y = self.floor;
                if self.respawn == Respawn::Scatter {
                    let (x, z) = self.footprint_point();
                    position.x = x;
                    position.z = z;
                }
            }
            self.positions[index] = position;
        }
    }

    pub fn update(&mut self, elapsed: f32, targets: &mut AnimationTargets) -> Result<(), AnimationFault> {
        self.step();
        targets.write_points(&self.mesh, &self.positions);

        if let Some(rate) = self.spin_rate {
            let yaw = elapsed * rate;
            ensure_finite("particle spin", &[yaw])?;
            targets.with_transform(self.entity, |transform| {
                transform.rotation = Quat::from_rotation_y(yaw);
            });
        }
        Ok(())
    }

    /// Point-list mesh holding the current buffer.
    pub fn build_mesh(&self) -> Mesh {
        let points: Vec<[f32; 3]> = self.positions.iter().map(|p| p.to_array()).collect();
        Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, points)
    }
}

struct ParticleSettings {
    count: usize,
    rise: f32,
    floor: f32,
    ceiling: f32,
    footprint: f32,
    respawn: Respawn,
    spin_rate: Option<f32>,
}
