//! 进化特效门面
//!
//! 把一套演出所需的粒子系统和镜头动画器捆绑在一起：进入阶段时按计划
//! 发射，逐帧转发更新与快照。阶段切换的时机由外部时序控制器决定。

use glam::{Mat4, Vec3};

use crate::camera::CameraAnimator;
use crate::config::EffectsConfig;
use crate::particles::{ParticleSystem, RenderSnapshot};
use crate::phase::EvolutionPhase;

/// 一套进化演出的全部视觉状态
#[derive(Debug, Clone)]
pub struct EvolutionEffects {
    particles: ParticleSystem,
    camera: CameraAnimator,
    phase: EvolutionPhase,
}

impl EvolutionEffects {
    /// 创建特效，`max_particles` 为粒子存储上限
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: ParticleSystem::new(max_particles),
            camera: CameraAnimator::new(),
            phase: EvolutionPhase::Idle,
        }
    }

    /// 按配置创建特效（含固定种子与抖动调参）
    pub fn from_config(config: &EffectsConfig) -> Self {
        let particles = match config.seed {
            Some(seed) => ParticleSystem::with_seed(config.max_particles, seed),
            None => ParticleSystem::new(config.max_particles),
        };
        Self {
            particles,
            camera: CameraAnimator::with_shake(config.camera.intensity, config.camera.decay),
            phase: EvolutionPhase::Idle,
        }
    }

    /// 进入新阶段：执行该阶段的发射计划
    ///
    /// `center` 是演出主体位置，`count` 是发射基准数量。
    pub fn enter_phase(&mut self, phase: EvolutionPhase, center: Vec3, count: usize) {
        for batch in phase.emission_plan(count) {
            self.particles.emit(batch.kind, center, batch.count);
        }
        self.phase = phase;
        log::debug!("entered phase {:?} with base count {}", phase, count);
    }

    /// 推进一帧
    ///
    /// `dt` 为帧时长，`progress` 为当前阶段内进度 [0,1]。
    pub fn update(&mut self, dt: f32, progress: f32) {
        self.particles.update(dt);
        self.camera.animate(self.phase, progress);
        self.camera.update(dt);
    }

    /// 渲染快照（见 [`ParticleSystem::render_snapshot`]）
    pub fn render_snapshot(&self) -> RenderSnapshot {
        self.particles.render_snapshot()
    }

    /// 当前视图矩阵
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    /// 清空所有粒子并回到静止阶段
    pub fn reset(&mut self) {
        self.particles.clear();
        self.phase = EvolutionPhase::Idle;
        self.camera.animate(EvolutionPhase::Idle, 0.0);
    }

    /// 当前阶段
    pub fn phase(&self) -> EvolutionPhase {
        self.phase
    }

    /// 粒子系统
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    /// 粒子系统（可变）
    pub fn particles_mut(&mut self) -> &mut ParticleSystem {
        &mut self.particles
    }

    /// 镜头动画器
    pub fn camera(&self) -> &CameraAnimator {
        &self.camera
    }

    /// 镜头动画器（可变）
    pub fn camera_mut(&mut self) -> &mut CameraAnimator {
        &mut self.camera
    }
}

impl Default for EvolutionEffects {
    fn default() -> Self {
        Self::new(ParticleSystem::DEFAULT_MAX_PARTICLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_phase_applies_plan() {
        let mut fx = EvolutionEffects::new(500);
        fx.enter_phase(EvolutionPhase::Peak, Vec3::ZERO, 40);

        // burst 120 + helix 30
        assert_eq!(fx.particles().count(), 150);
        assert_eq!(fx.phase(), EvolutionPhase::Peak);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut fx = EvolutionEffects::new(500);
        fx.enter_phase(EvolutionPhase::BuildUp, Vec3::ZERO, 40);
        fx.update(0.016, 0.1);
        fx.reset();

        assert_eq!(fx.particles().count(), 0);
        assert_eq!(fx.phase(), EvolutionPhase::Idle);
        assert!(fx.render_snapshot().is_empty());
    }

    #[test]
    fn test_update_drives_camera_and_particles() {
        let mut fx = EvolutionEffects::new(500);
        fx.enter_phase(EvolutionPhase::Peak, Vec3::ZERO, 10);
        fx.update(0.016, 0.0);

        // 进入高潮触发抖动，并已衰减一次
        assert!((fx.camera().shake_intensity() - 0.15 * 0.95).abs() < 1e-6);
        assert!(fx.particles().count() > 0);
    }
}
