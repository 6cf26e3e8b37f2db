//! 进化镜头模块
//!
//! 由 (阶段, 进度) 确定性插值出相机位姿，外加一个按几何衰减的抖动偏移。

pub mod animator;
pub mod easing;

pub use animator::{CameraAnimator, CameraPose};
pub use easing::{ease_in_out_cubic, ease_out_elastic};
