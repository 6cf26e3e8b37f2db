//! 粒子数据结构
//!
//! 粒子是纯值记录，除存储位置外没有身份标识。

use glam::{Vec3, Vec4};

/// 粒子种类
///
/// 种类决定逐帧行为（重力、脉动、闪烁），在更新器中以单个 match 分发，
/// 种类专属状态作为变体负载携带。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleKind {
    /// 环状金色闪光，透明度随生命闪烁
    Sparkle,
    /// 球面全向爆发，受重力影响
    Burst,
    /// 双螺旋上升光点
    Helix,
    /// 环绕光球，`pulse` 为尺寸脉动的相位累加器
    Orb {
        /// 脉动相位（弧度），每帧推进 `5 * dt`
        pulse: f32,
    },
    /// 下落尘埃，受重力影响
    Settle,
}

impl ParticleKind {
    /// 该种类是否受向下加速度影响
    pub fn affected_by_gravity(self) -> bool {
        matches!(self, Self::Burst | Self::Settle)
    }
}

/// 单个粒子记录
///
/// 仅由发射器创建、由更新器修改，`life <= 0` 时在同一次更新中移除。
#[derive(Debug, Clone)]
pub struct Particle {
    /// 位置
    pub position: Vec3,
    /// 速度
    pub velocity: Vec3,
    /// 颜色（RGB + alpha），部分种类随生命变化
    pub color: Vec4,
    /// 尺寸
    pub size: f32,
    /// 剩余生命，概念区间 [0, 1]
    pub life: f32,
    /// 每秒生命衰减率
    pub decay: f32,
    /// 种类
    pub kind: ParticleKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_kinds() {
        assert!(ParticleKind::Burst.affected_by_gravity());
        assert!(ParticleKind::Settle.affected_by_gravity());
        assert!(!ParticleKind::Sparkle.affected_by_gravity());
        assert!(!ParticleKind::Helix.affected_by_gravity());
        assert!(!ParticleKind::Orb { pulse: 0.0 }.affected_by_gravity());
    }
}
