/// Immediate-mode rendering surface consumed by the scene traversal
use crate::matrix::Mat4;

/// The collaborator surface the transform pipeline drives.
///
/// Every transform builder and every stack restore submits the updated
/// modelview transform through `submit_model_transform`; subsequent draw
/// calls are rendered under the most recently submitted transform.
pub trait RenderPipeline {
    /// Replace the active modelview transform
    fn submit_model_transform(&mut self, transform: &Mat4);

    /// Set the color used by subsequent draw calls
    fn set_color(&mut self, r: f32, g: f32, b: f32);

    /// Draw a wireframe sphere centered on the active transform's origin
    fn draw_wire_sphere(&mut self, radius: f32);

    /// Draw an annular disk in the local XY plane
    fn draw_annular_disk(&mut self, inner_radius: f32, outer_radius: f32);
}
