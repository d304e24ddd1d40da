/// Orrery Core Library - Manual transform pipeline and scene traversal
///
/// This library provides the hand-written modelview pipeline for the solar
/// system animation: column-major 4x4 matrices, a bounded transform stack,
/// the body table, animation state, and the per-frame scene traversal that
/// drives an immediate-mode rendering surface.

pub mod animation;
pub mod bodies;
pub mod matrix;
pub mod pipeline;
pub mod projection;
pub mod scene;
pub mod stack;

// Re-export commonly used types
pub use animation::AnimationState;
pub use bodies::{Body, Ring, BODIES, ORBITING_BODIES};
pub use matrix::Mat4;
pub use pipeline::RenderPipeline;
pub use projection::Camera;
pub use scene::SceneRenderer;
pub use stack::{MatrixStack, StackError, STACK_CAPACITY};
