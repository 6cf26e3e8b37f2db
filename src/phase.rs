//! 进化阶段
//!
//! 阶段推进由外部时序控制器负责，这里只定义阶段本身与
//! 进入阶段时的发射计划。

use crate::particles::ParticleKind;

/// 进化演出阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvolutionPhase {
    /// 静止 / 未识别阶段，相机回落到默认机位
    #[default]
    Idle,
    /// 蓄力
    BuildUp,
    /// 高潮
    Peak,
    /// 变形
    Morphing,
    /// 收束
    Settling,
}

/// 进入阶段时的一批发射
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionBatch {
    /// 粒子种类
    pub kind: ParticleKind,
    /// 数量
    pub count: usize,
}

impl EvolutionPhase {
    /// 进入该阶段时的发射计划
    ///
    /// `count` 是外部给定的基准数量：蓄力发 sparkle(count)；高潮发
    /// burst(count*3) 外加固定 30 个 helix；变形发 orb(count)；收束发
    /// settle(count/2)。
    pub fn emission_plan(self, count: usize) -> Vec<EmissionBatch> {
        match self {
            Self::Idle => Vec::new(),
            Self::BuildUp => vec![EmissionBatch {
                kind: ParticleKind::Sparkle,
                count,
            }],
            Self::Peak => vec![
                EmissionBatch {
                    kind: ParticleKind::Burst,
                    count: count * 3,
                },
                EmissionBatch {
                    kind: ParticleKind::Helix,
                    count: 30,
                },
            ],
            Self::Morphing => vec![EmissionBatch {
                kind: ParticleKind::Orb { pulse: 0.0 },
                count,
            }],
            Self::Settling => vec![EmissionBatch {
                kind: ParticleKind::Settle,
                count: count / 2,
            }],
        }
    }
}
