//! 粒子系统
//!
//! 拥有唯一的有界粒子存储，提供发射、逐帧更新、渲染快照与清空接口。
//! 单线程、帧驱动：由调用方的动画循环每帧调用一次 `update`。

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::particles::emitter;
use crate::particles::particle::{Particle, ParticleKind};

/// 粒子系统
///
/// 存储上限固定，超出时优先淘汰最旧条目。随机源可用固定种子构造，
/// 使发射结果可复现。
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    /// 粒子存储（追加在尾部，最旧在头部）
    particles: Vec<Particle>,
    /// 最大粒子数
    max_particles: usize,
    /// 发射用随机源
    rng: StdRng,
}

impl ParticleSystem {
    /// 默认最大粒子数
    pub const DEFAULT_MAX_PARTICLES: usize = 500;

    /// 创建粒子系统
    ///
    /// # 参数
    ///
    /// * `max_particles` - 最大粒子数，超出时最旧的条目先被淘汰
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles),
            max_particles,
            rng: StdRng::from_entropy(),
        }
    }

    /// 以固定随机种子创建粒子系统（确定性发射，用于测试与回放）
    pub fn with_seed(max_particles: usize, seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles),
            max_particles,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// 按种类发射 `count` 个新粒子
    ///
    /// 只追加，不在此处裁剪；容量上限由下一次 `update` 统一执行。
    pub fn emit(&mut self, kind: ParticleKind, center: Vec3, count: usize) {
        match kind {
            ParticleKind::Sparkle => {
                emitter::spawn_sparkles(&mut self.particles, &mut self.rng, center, count)
            }
            ParticleKind::Burst => {
                emitter::spawn_burst(&mut self.particles, &mut self.rng, center, count)
            }
            ParticleKind::Helix => {
                emitter::spawn_helix(&mut self.particles, &mut self.rng, center, count)
            }
            ParticleKind::Orb { .. } => {
                emitter::spawn_orbs(&mut self.particles, &mut self.rng, center, count)
            }
            ParticleKind::Settle => {
                emitter::spawn_settle(&mut self.particles, &mut self.rng, center, count)
            }
        }
        log::debug!("emitted {} particles of kind {:?}", count, kind);
    }

    /// 推进所有粒子一帧
    ///
    /// 依次执行：位置积分、重力（burst/settle）、生命衰减、种类专属行为、
    /// 过期剔除、容量淘汰。调用方保证 `dt >= 0`。
    pub fn update(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.position += p.velocity * dt;

            if p.kind.affected_by_gravity() {
                p.velocity.y -= 9.8 * dt * 0.2;
            }

            p.life -= p.decay * dt;

            match &mut p.kind {
                ParticleKind::Sparkle => {
                    // 透明度随剩余生命闪烁
                    p.color.w = 0.5 + 0.5 * (p.life * 20.0).sin();
                }
                ParticleKind::Orb { pulse } => {
                    *pulse += 5.0 * dt;
                    p.size = 5.0 + 3.0 * pulse.sin();
                }
                _ => {}
            }
        }

        self.particles.retain(|p| p.life > 0.0);

        if self.particles.len() > self.max_particles {
            let excess = self.particles.len() - self.max_particles;
            self.particles.drain(..excess);
            log::trace!("particle store over capacity, evicted {} oldest", excess);
        }
    }

    /// 生成渲染快照（不修改存储）
    ///
    /// 每个存活粒子展平为位置 (3 f32)、颜色 (RGB，丢弃 alpha) 和
    /// `size * life`（随生命逐渐缩小到零）。
    pub fn render_snapshot(&self) -> RenderSnapshot {
        let mut snapshot = RenderSnapshot {
            positions: Vec::with_capacity(self.particles.len() * 3),
            colors: Vec::with_capacity(self.particles.len() * 3),
            sizes: Vec::with_capacity(self.particles.len()),
        };

        for p in &self.particles {
            snapshot.positions.extend_from_slice(&p.position.to_array());
            snapshot.colors.extend_from_slice(&[p.color.x, p.color.y, p.color.z]);
            snapshot.sizes.push(p.size * p.life);
        }

        snapshot
    }

    /// 无条件清空存储
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// 当前粒子数
    pub fn count(&self) -> usize {
        self.particles.len()
    }

    /// 最大粒子数
    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    /// 只读访问粒子存储（诊断与测试用）
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_PARTICLES)
    }
}

/// 渲染快照
///
/// 三条平行有序序列，供外部绘制例程直接上传；字节视图通过 `bytemuck`
/// 零拷贝转换。
#[derive(Debug, Clone, Default)]
pub struct RenderSnapshot {
    /// 位置，每粒子 3 个 f32
    pub positions: Vec<f32>,
    /// 颜色 RGB，每粒子 3 个 f32
    pub colors: Vec<f32>,
    /// 尺寸，每粒子 1 个 f32
    pub sizes: Vec<f32>,
}

impl RenderSnapshot {
    /// 快照中的粒子数
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// 快照是否为空
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// 位置序列的字节视图
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// 颜色序列的字节视图
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// 尺寸序列的字节视图
    pub fn size_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.sizes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        let system = ParticleSystem::default();
        assert_eq!(system.max_particles(), 500);
        assert_eq!(system.count(), 0);
    }

    #[test]
    fn test_zero_dt_leaves_particles_untouched() {
        let mut system = ParticleSystem::with_seed(500, 7);
        system.emit(ParticleKind::Burst, Vec3::ZERO, 10);
        system.update(0.0);

        assert_eq!(system.count(), 10);
        for p in system.particles() {
            assert_eq!(p.position, Vec3::ZERO);
            assert_eq!(p.life, 1.0);
        }
    }

    #[test]
    fn test_expired_particle_removed_same_update() {
        let mut system = ParticleSystem::with_seed(500, 7);
        system.emit(ParticleKind::Settle, Vec3::ZERO, 5);
        // settle 的 decay 固定为 0.7，1.5 秒后 life < 0
        system.update(1.5);
        assert_eq!(system.count(), 0);
    }

    #[test]
    fn test_oldest_evicted_on_overflow() {
        let mut system = ParticleSystem::with_seed(8, 7);
        system.emit(ParticleKind::Helix, Vec3::ZERO, 4);
        system.emit(ParticleKind::Burst, Vec3::ONE, 8);

        // 发射不裁剪，更新才执行容量淘汰
        assert_eq!(system.count(), 12);
        system.update(0.0);
        assert_eq!(system.count(), 8);
        // 最旧的 4 个 helix 被淘汰，剩下的全是 burst
        assert!(system.particles().iter().all(|p| p.kind == ParticleKind::Burst));
    }

    #[test]
    fn test_life_monotonically_decreasing() {
        let mut system = ParticleSystem::with_seed(500, 7);
        system.emit(ParticleKind::Sparkle, Vec3::ZERO, 20);

        let mut prev: Vec<f32> = system.particles().iter().map(|p| p.life).collect();
        for _ in 0..10 {
            system.update(0.05);
            let lives: Vec<f32> = system.particles().iter().map(|p| p.life).collect();
            for (l, p) in lives.iter().zip(prev.iter()) {
                assert!(l <= p);
            }
            prev = lives;
        }
    }

    #[test]
    fn test_gravity_only_for_burst_and_settle() {
        let mut system = ParticleSystem::with_seed(500, 7);
        system.emit(ParticleKind::Helix, Vec3::ZERO, 1);
        let before = system.particles()[0].velocity.y;
        system.update(0.1);
        // helix 恒速上升，不受重力
        assert_eq!(system.particles()[0].velocity.y, before);

        let mut system = ParticleSystem::with_seed(500, 7);
        system.emit(ParticleKind::Burst, Vec3::ZERO, 1);
        let before = system.particles()[0].velocity.y;
        system.update(0.1);
        let after = system.particles()[0].velocity.y;
        assert!((before - after - 9.8 * 0.1 * 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_orb_pulse_advances() {
        let mut system = ParticleSystem::with_seed(500, 7);
        system.emit(ParticleKind::Orb { pulse: 0.0 }, Vec3::ZERO, 1);
        let start = match system.particles()[0].kind {
            ParticleKind::Orb { pulse } => pulse,
            _ => unreachable!(),
        };
        system.update(0.1);
        match system.particles()[0].kind {
            ParticleKind::Orb { pulse } => {
                assert!((pulse - start - 0.5).abs() < 1e-5);
                assert!((system.particles()[0].size - (5.0 + 3.0 * pulse.sin())).abs() < 1e-5);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_snapshot_size_fades_with_life() {
        let mut system = ParticleSystem::with_seed(500, 7);
        system.emit(ParticleKind::Settle, Vec3::ZERO, 3);
        system.update(0.5);

        let snapshot = system.render_snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.positions.len(), 9);
        assert_eq!(snapshot.colors.len(), 9);
        for (size, p) in snapshot.sizes.iter().zip(system.particles()) {
            assert!((size - p.size * p.life).abs() < 1e-6);
            assert!(*size < p.size);
        }
    }

    #[test]
    fn test_clear_empties_store_and_snapshot() {
        let mut system = ParticleSystem::with_seed(500, 7);
        system.emit(ParticleKind::Sparkle, Vec3::ZERO, 30);
        system.clear();

        assert_eq!(system.count(), 0);
        let snapshot = system.render_snapshot();
        assert!(snapshot.is_empty());
        assert!(snapshot.positions.is_empty());
        assert!(snapshot.colors.is_empty());
    }

    #[test]
    fn test_snapshot_byte_views() {
        let mut system = ParticleSystem::with_seed(500, 7);
        system.emit(ParticleKind::Burst, Vec3::ZERO, 4);
        let snapshot = system.render_snapshot();

        assert_eq!(snapshot.position_bytes().len(), 4 * 3 * 4);
        assert_eq!(snapshot.color_bytes().len(), 4 * 3 * 4);
        assert_eq!(snapshot.size_bytes().len(), 4 * 4);
    }

    #[test]
    fn test_seeded_emission_is_deterministic() {
        let mut a = ParticleSystem::with_seed(500, 99);
        let mut b = ParticleSystem::with_seed(500, 99);
        a.emit(ParticleKind::Sparkle, Vec3::ZERO, 10);
        b.emit(ParticleKind::Sparkle, Vec3::ZERO, 10);

        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.velocity, pb.velocity);
            assert_eq!(pa.size, pb.size);
        }
    }
}
