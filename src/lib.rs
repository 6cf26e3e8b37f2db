//! # Evolution FX
//!
//! Cosmetic visual effects for in-game evolution sequences: pooled particle
//! bursts and keyframed camera sweeps, driven by a caller-owned frame loop.
//!
//! ## Features
//!
//! - **Particle Engine**: Bounded particle store with five emitters (sparkle,
//!   burst, helix, orb, settle), per-frame kinematic update and pooled removal
//! - **Camera Animator**: Deterministic phase/progress keyframe interpolation
//!   with an additive decaying shake offset
//! - **Render Snapshot**: Flattened position/color/size sequences ready for
//!   upload by an external draw routine
//! - **Deterministic Emission**: Seedable random source for reproducible tests
//!
//! ## Architecture Design
//!
//! The engine owns no GPU resources: `render_snapshot()` is the hand-off
//! boundary, and the actual buffer upload and draw calls live with the caller.
//! Everything is single-threaded and frame-driven — one `update` call and
//! zero-or-more emissions per frame.
//!
//! ### Example
//!
//! ```
//! use evolution_fx::{EvolutionEffects, EvolutionPhase};
//! use glam::Vec3;
//!
//! let mut fx = EvolutionEffects::new(500);
//! fx.enter_phase(EvolutionPhase::BuildUp, Vec3::ZERO, 40);
//! fx.update(1.0 / 60.0, 0.1);
//!
//! let snapshot = fx.render_snapshot();
//! assert_eq!(snapshot.len(), 40);
//! let _view = fx.view_matrix();
//! ```
//!
//! ## Modules
//!
//! - [`particles`]: Particle store, emitters and per-frame updater
//! - [`camera`]: Phase-driven camera animator with shake
//! - [`phase`]: Evolution phases and their emission plans
//! - [`effects`]: Facade bundling particles + camera for one sequence
//! - [`config`]: TOML tuning configuration

/// Particle store, emitters and per-frame updater
pub mod particles;
/// Phase-driven camera animator with shake
pub mod camera;
/// Evolution phases and their emission plans
pub mod phase;
/// Facade bundling the particle system and camera animator
pub mod effects;
/// Configuration system
pub mod config;

pub use camera::{CameraAnimator, CameraPose};
pub use config::{CameraShakeConfig, ConfigError, EffectsConfig};
pub use effects::EvolutionEffects;
pub use particles::{Particle, ParticleKind, ParticleSystem, RenderSnapshot};
pub use phase::{EmissionBatch, EvolutionPhase};
