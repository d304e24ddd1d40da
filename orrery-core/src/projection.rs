/// Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};

use crate::matrix::Mat4;

/// Camera configuration for viewing the system
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            // Above and behind the orbital plane, looking at the star
            position: Point3::new(0.0, 10.0, 30.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::PI / 3.0, // 60 degrees
            aspect: width as f32 / height as f32,
            near: 1.0,
            far: 100.0,
        }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// The view matrix in the hand-written pipeline's layout, used to seed
    /// the traversal's current transform each frame. Both sides store
    /// column-major scalars so this is a straight copy.
    pub fn view_transform(&self) -> Mat4 {
        Mat4::from_column_slice(self.view_matrix().as_slice())
    }

    /// Create the perspective projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Project a point already in eye space (after the modelview transform)
    /// to 2D screen space, returning the depth for buffer comparisons
    pub fn project_to_screen(
        &self,
        eye: &Point3<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        // Points at or behind the near plane are clipped
        if eye.z > -self.near {
            return None;
        }

        // transform_point performs the perspective divide
        let ndc = self.projection_matrix().transform_point(eye);

        // Clip test
        if ndc.x < -1.0 || ndc.x > 1.0 || ndc.y < -1.0 || ndc.y > 1.0 {
            return None;
        }

        // Convert to screen space
        let screen_x = (ndc.x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc.y) * 0.5 * height as f32;

        Some((screen_x, screen_y, ndc.z))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(800, 600);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(camera.position, Point3::new(0.0, 10.0, 30.0));
    }

    #[test]
    fn test_view_transform_matches_view_matrix() {
        let camera = Camera::new(800, 600);
        let view = camera.view_matrix();
        let transform = camera.view_transform();
        for (i, value) in view.as_slice().iter().enumerate() {
            assert_relative_eq!(transform[i], *value);
        }
    }

    #[test]
    fn test_point_ahead_of_camera_projects_to_center() {
        let camera = Camera::new(800, 800);
        // Straight down the view axis in eye space
        let (x, y, _) = camera
            .project_to_screen(&Point3::new(0.0, 0.0, -10.0), 800, 800)
            .expect("point is in front of the camera");
        assert_relative_eq!(x, 400.0, epsilon = 1e-2);
        assert_relative_eq!(y, 400.0, epsilon = 1e-2);
    }

    #[test]
    fn test_point_behind_camera_is_clipped() {
        let camera = Camera::new(800, 600);
        assert!(camera
            .project_to_screen(&Point3::new(0.0, 0.0, 5.0), 800, 600)
            .is_none());
    }

    #[test]
    fn test_nearer_points_have_smaller_depth() {
        let camera = Camera::new(800, 600);
        let (_, _, near) = camera
            .project_to_screen(&Point3::new(0.0, 0.0, -5.0), 800, 600)
            .unwrap();
        let (_, _, far) = camera
            .project_to_screen(&Point3::new(0.0, 0.0, -50.0), 800, 600)
            .unwrap();
        assert!(near < far);
    }
}
