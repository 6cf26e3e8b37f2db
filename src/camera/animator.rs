//! 镜头动画器
//!
//! 每次调用都由 (阶段, 进度) 重新计算位姿，是纯输入函数；只有抖动
//! 是积分状态：强度每次 `update` 几何衰减，偏移叠加在位姿之上。

use glam::{Mat4, Vec3};

use crate::camera::easing::{ease_in_out_cubic, ease_out_elastic};
use crate::phase::EvolutionPhase;

/// 默认机位
pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 2.0, 8.0);
/// 默认注视点
pub const DEFAULT_TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// 高潮阶段的固定注视点
pub const PEAK_TARGET: Vec3 = Vec3::new(0.0, 1.2, 0.0);

/// 抖动触发强度
const SHAKE_TRIGGER: f32 = 0.15;
/// 抖动强度每次更新的衰减系数
const SHAKE_DECAY: f32 = 0.95;
/// 低于该强度时跳过抖动，避免浮点颤动
const SHAKE_THRESHOLD: f32 = 0.01;

/// 相机位姿（位置 / 注视点 / 上方向）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// 位置
    pub position: Vec3,
    /// 注视点
    pub target: Vec3,
    /// 上方向
    pub up: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            target: DEFAULT_TARGET,
            up: Vec3::Y,
        }
    }
}

/// 镜头动画器
///
/// 机位约定：`position = (sin(angle) * d, h, cos(angle) * d)`，
/// 因此 angle = 0、d = 8、h = 2 正好还原默认机位。
#[derive(Debug, Clone)]
pub struct CameraAnimator {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    /// 抖动强度累加器
    shake_intensity: f32,
    /// 抖动时间累加器
    shake_time: f32,
    /// 进入高潮阶段时触发的强度
    trigger_intensity: f32,
    /// 每次更新的几何衰减系数
    shake_decay: f32,
    /// 上一次 animate 的阶段，用于检测阶段进入
    last_phase: EvolutionPhase,
}

impl Default for CameraAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraAnimator {
    /// 创建动画器，初始为默认机位
    pub fn new() -> Self {
        Self {
            position: DEFAULT_POSITION,
            target: DEFAULT_TARGET,
            up: Vec3::Y,
            shake_intensity: 0.0,
            shake_time: 0.0,
            trigger_intensity: SHAKE_TRIGGER,
            shake_decay: SHAKE_DECAY,
            last_phase: EvolutionPhase::Idle,
        }
    }

    /// 自定义抖动触发强度与衰减系数
    pub fn with_shake(trigger_intensity: f32, shake_decay: f32) -> Self {
        Self {
            trigger_intensity,
            shake_decay,
            ..Self::new()
        }
    }

    /// 按阶段与阶段内进度 `t ∈ [0,1]` 重算位姿
    ///
    /// 进入高潮阶段的那次调用会触发抖动；未识别的阶段回落到默认机位
    /// 并清除抖动。
    pub fn animate(&mut self, phase: EvolutionPhase, t: f32) {
        let t = t.clamp(0.0, 1.0);

        if phase == EvolutionPhase::Peak && self.last_phase != EvolutionPhase::Peak {
            self.shake_intensity = self.trigger_intensity;
            self.shake_time = 0.0;
        }
        self.last_phase = phase;

        let pose = match phase {
            EvolutionPhase::BuildUp => Self::build_up_pose(t),
            EvolutionPhase::Peak => Self::peak_pose(t),
            EvolutionPhase::Morphing => Self::morph_pose(t),
            EvolutionPhase::Settling => Self::settle_pose(t),
            EvolutionPhase::Idle => {
                self.shake_intensity = 0.0;
                CameraPose::default()
            }
        };

        self.position = pose.position;
        self.target = pose.target;
        self.up = pose.up;

        if self.shake_intensity > SHAKE_THRESHOLD {
            self.position += self.shake_offset();
        }
    }

    /// 推进抖动积分：时间前移，强度几何衰减
    pub fn update(&mut self, dt: f32) {
        if self.shake_intensity > 0.0 {
            self.shake_time += dt;
            self.shake_intensity *= self.shake_decay;
            if self.shake_intensity < SHAKE_THRESHOLD {
                self.shake_intensity = 0.0;
            }
        }
    }

    /// 手动触发一次抖动
    pub fn trigger_shake(&mut self, intensity: f32) {
        self.shake_intensity = intensity;
        self.shake_time = 0.0;
    }

    /// 蓄力：距离 8 → 6 三次缓动，高度绕 2 起伏一次，注视点缓缓抬升
    fn build_up_pose(t: f32) -> CameraPose {
        let distance = 8.0 + (6.0 - 8.0) * ease_in_out_cubic(t);
        let height = 2.0 + (t * std::f32::consts::PI).sin() * 0.3;
        CameraPose {
            position: Vec3::new(0.0, height, distance),
            target: Vec3::new(0.0, 1.0 + 0.2 * t, 0.0),
            up: Vec3::Y,
        }
    }

    /// 高潮：固定距离 6 环绕两周，高度以 sin(t·4π) 起伏
    fn peak_pose(t: f32) -> CameraPose {
        let angle = t * 4.0 * std::f32::consts::PI;
        let height = 2.0 + angle.sin() * 0.4;
        CameraPose {
            position: Vec3::new(angle.sin() * 6.0, height, angle.cos() * 6.0),
            target: PEAK_TARGET,
            up: Vec3::Y,
        }
    }

    /// 变形：距离 6 → 9 缓动，慢转 0.3 圈，高度起伏一次，注视点落回
    fn morph_pose(t: f32) -> CameraPose {
        let distance = 6.0 + 3.0 * ease_in_out_cubic(t);
        let angle = t * 0.3 * std::f32::consts::TAU;
        let height = 2.0 + (t * std::f32::consts::TAU).sin() * 0.3;
        CameraPose {
            position: Vec3::new(angle.sin() * distance, height, angle.cos() * distance),
            target: Vec3::new(0.0, 1.2 - 0.2 * t, 0.0),
            up: Vec3::Y,
        }
    }

    /// 收束：从变形末位姿弹性缓动回默认机位（闭式重算末位姿，无捕获状态）
    fn settle_pose(t: f32) -> CameraPose {
        let from = Self::morph_pose(1.0);
        let k = ease_out_elastic(t);
        CameraPose {
            position: from.position.lerp(DEFAULT_POSITION, k),
            target: from.target.lerp(DEFAULT_TARGET, k),
            up: Vec3::Y,
        }
    }

    /// 各轴频率不同的正弦叠加，按当前强度缩放
    ///
    /// 正弦不带相位偏移，刚触发（shake_time = 0）时偏移恰为零。
    fn shake_offset(&self) -> Vec3 {
        let t = self.shake_time;
        Vec3::new(
            (t * 31.0).sin() + 0.5 * (t * 47.0).sin(),
            (t * 23.0).sin() + 0.5 * (t * 41.0).sin(),
            (t * 19.0).sin() + 0.5 * (t * 37.0).sin(),
        ) * self.shake_intensity
    }

    /// 视图矩阵（标准 look-at 构造）
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// 当前位姿
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            target: self.target,
            up: self.up,
        }
    }

    /// 当前位置
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// 当前注视点
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// 当前抖动强度
    pub fn shake_intensity(&self) -> f32 {
        self.shake_intensity
    }
}
