//! 进化特效粒子系统模块
//!
//! CPU 侧粒子生命周期引擎：按种类生成、逐帧运动学更新、池化移除。
//!
//! ## 架构设计
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                 Particle Engine                     │
//! ├────────────────────────────────────────────────────┤
//! │  1. Emission (emitter)                              │
//! │     - 五种生成器：sparkle / burst / helix / orb /   │
//! │       settle                                        │
//! │     - 随机参数经可注入的随机源抽取                     │
//! │                                                     │
//! │  2. Update (system)                                 │
//! │     - 位置积分、重力、生命衰减                         │
//! │     - 种类专属行为（闪烁、脉动）                       │
//! │     - 过期剔除 + 最旧优先的容量淘汰                    │
//! │                                                     │
//! │  3. Snapshot (system)                               │
//! │     - 展平为 position / color / size 并行序列         │
//! │     - 实际绘制由外部渲染后端完成                       │
//! └────────────────────────────────────────────────────┘
//! ```

pub mod emitter;
pub mod particle;
pub mod system;

pub use particle::{Particle, ParticleKind};
pub use system::{ParticleSystem, RenderSnapshot};
