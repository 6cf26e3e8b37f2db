//! 粒子生成器
//!
//! 五种无状态生成函数，按种类把新粒子追加到存储中。
//! 所有随机参数都经由调用方传入的随机源抽取，便于用固定种子复现。

use glam::{Vec3, Vec4};
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use crate::particles::particle::{Particle, ParticleKind};

/// 金色闪光：在中心周围半径 [1,3] 的环上随机取点，高度 [0,3]，
/// 速度沿径向外加少量切向与竖直抖动。
pub fn spawn_sparkles(particles: &mut Vec<Particle>, rng: &mut StdRng, center: Vec3, count: usize) {
    for _ in 0..count {
        let angle = rng.gen_range(0.0..TAU);
        let radius = rng.gen_range(1.0..3.0);
        let height = rng.gen_range(0.0..3.0);

        let radial = Vec3::new(angle.cos(), 0.0, angle.sin());
        let tangent = Vec3::new(-angle.sin(), 0.0, angle.cos());

        particles.push(Particle {
            position: center + radial * radius + Vec3::Y * height,
            velocity: radial * rng.gen_range(0.5..1.5)
                + tangent * rng.gen_range(-0.5..0.5)
                + Vec3::Y * rng.gen_range(-0.25..0.25),
            color: Vec4::new(1.0, rng.gen_range(0.75..0.95), 0.3, 1.0),
            size: rng.gen_range(3.0..8.0),
            life: 1.0,
            decay: rng.gen_range(0.5..1.0),
            kind: ParticleKind::Sparkle,
        });
    }
}

/// 爆发：全部从中心出发，方向在单位球面上均匀采样，速率 2–5。
pub fn spawn_burst(particles: &mut Vec<Particle>, rng: &mut StdRng, center: Vec3, count: usize) {
    for _ in 0..count {
        // 单位球面均匀采样：y 在 [-1,1] 均匀，水平角均匀
        let y = rng.gen_range(-1.0f32..1.0);
        let theta = rng.gen_range(0.0..TAU);
        let r = (1.0 - y * y).sqrt();
        let direction = Vec3::new(r * theta.cos(), y, r * theta.sin());

        particles.push(Particle {
            position: center,
            velocity: direction * rng.gen_range(2.0..5.0),
            color: Vec4::new(rng.gen_range(0.45..0.65), 0.35, 1.0, 1.0),
            size: rng.gen_range(4.0..10.0),
            life: 1.0,
            decay: rng.gen_range(1.5..2.5),
            kind: ParticleKind::Burst,
        });
    }
}

/// 双螺旋：第 i 个粒子角度为 `(i/N)*8π`（奇数链偏移 π），半径固定 0.5，
/// 高度从 -2 线性升到 +2，速度恒为 (0, 1.5, 0)。
pub fn spawn_helix(particles: &mut Vec<Particle>, rng: &mut StdRng, center: Vec3, count: usize) {
    let n = count.max(1) as f32;
    for i in 0..count {
        let t = i as f32 / n;
        let mut angle = t * 8.0 * PI;
        if i % 2 == 1 {
            angle += PI;
        }
        let height = -2.0 + 4.0 * t;

        particles.push(Particle {
            position: center + Vec3::new(angle.cos() * 0.5, height, angle.sin() * 0.5),
            velocity: Vec3::new(0.0, 1.5, 0.0),
            color: Vec4::new(0.3, 0.85, 1.0, 1.0),
            size: rng.gen_range(3.0..6.0),
            life: 1.0,
            decay: 0.8,
            kind: ParticleKind::Helix,
        });
    }
}

/// 光球：在半径 2 的环上均匀分布（角度 `(i/N)*2π`），速度指向中心并带
/// 少量竖直抖动。初始脉动相位随机，使新生成的一圈错相闪动。
pub fn spawn_orbs(particles: &mut Vec<Particle>, rng: &mut StdRng, center: Vec3, count: usize) {
    let n = count.max(1) as f32;
    for i in 0..count {
        let angle = (i as f32 / n) * TAU;
        let position = center + Vec3::new(angle.cos() * 2.0, 0.0, angle.sin() * 2.0);

        particles.push(Particle {
            position,
            velocity: (center - position).normalize_or_zero() * 0.5
                + Vec3::Y * rng.gen_range(-0.2..0.2),
            color: Vec4::new(0.7, rng.gen_range(0.35..0.55), 1.0, 1.0),
            size: rng.gen_range(5.0..13.0),
            life: 1.0,
            decay: 0.6,
            kind: ParticleKind::Orb {
                pulse: rng.gen_range(0.0..TAU),
            },
        });
    }
}

/// 尘埃：在中心周围半宽 1.5 的立方体内随机取点（高度 0–3），
/// 以 0.3–0.8 的速率下落并带少量水平抖动。
pub fn spawn_settle(particles: &mut Vec<Particle>, rng: &mut StdRng, center: Vec3, count: usize) {
    for _ in 0..count {
        particles.push(Particle {
            position: center
                + Vec3::new(
                    rng.gen_range(-1.5..1.5),
                    rng.gen_range(0.0..3.0),
                    rng.gen_range(-1.5..1.5),
                ),
            velocity: Vec3::new(
                rng.gen_range(-0.1..0.1),
                -rng.gen_range(0.3..0.8),
                rng.gen_range(-0.1..0.1),
            ),
            color: Vec4::new(1.0, 0.95, rng.gen_range(0.6..0.8), 1.0),
            size: rng.gen_range(2.0..5.0),
            life: 1.0,
            decay: 0.7,
            kind: ParticleKind::Settle,
        });
    }
}
