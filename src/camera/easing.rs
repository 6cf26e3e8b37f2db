//! 缓动曲线
//!
//! 镜头插值用的两条标准缓动函数，输入输出都在 [0,1]
//! （弹性缓动会越过 1 再回弹）。

use std::f32::consts::TAU;

/// 三次缓入缓出
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// 弹性缓出，结尾带越过目标的回弹
pub fn ease_out_elastic(t: f32) -> f32 {
    const C4: f32 = TAU / 3.0;

    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
    }
}
