/// ASCII rasterizer implementing the immediate-mode rendering surface
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point3;
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::io::Write;

use orrery_core::{Camera, Mat4, RenderPipeline};

/// Character luminosity ramp for depth shading (farthest to nearest)
const LUMINOSITY_RAMP: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Wire sphere tessellation: longitude lines and latitude rings
const SPHERE_SLICES: usize = 20;
const SPHERE_STACKS: usize = 16;
/// Sample points per plotted circle or arc
const CIRCLE_SAMPLES: usize = 96;
const ARC_SAMPLES: usize = 48;
/// Concentric circles used to fill an annular disk
const DISK_RINGS: usize = 4;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

/// Renders wireframe primitives into character, color and depth buffers.
///
/// Holds the active modelview transform and color the way a fixed-function
/// pipeline would; draw calls rasterize under whatever was last submitted.
pub struct AsciiPipeline {
    width: usize,
    height: usize,
    camera: Camera,
    modelview: Mat4,
    color: Color,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl AsciiPipeline {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        let mut camera = Camera::new(width as u32, height as u32);
        camera.aspect = width as f32 / (height as f32 * CELL_ASPECT);
        Self {
            width,
            height,
            camera,
            modelview: Mat4::identity(),
            color: Color::White,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::White; size],
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Resize the buffers and projection when the terminal changes size
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == self.width && height == self.height {
            return;
        }
        let size = width * height;
        self.width = width;
        self.height = height;
        self.camera.aspect = width as f32 / (height as f32 * CELL_ASPECT);
        self.depth_buffer = vec![f32::INFINITY; size];
        self.char_buffer = vec![' '; size];
        self.color_buffer = vec![Color::White; size];
    }

    pub fn clear(&mut self) {
        for i in 0..self.depth_buffer.len() {
            self.depth_buffer[i] = f32::INFINITY;
            self.char_buffer[i] = ' ';
            self.color_buffer[i] = Color::White;
        }
    }

    /// Transform a local-space point through the active modelview, project
    /// it, and plot it with depth testing
    fn plot(&mut self, point: &Point3<f32>) {
        let eye = self.modelview.transform_point(point);
        let Some((x, y, depth)) =
            self.camera
                .project_to_screen(&eye, self.width as u32, self.height as u32)
        else {
            return;
        };

        let (col, row) = (x as usize, y as usize);
        if col >= self.width || row >= self.height {
            return;
        }

        let idx = row * self.width + col;
        if depth < self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.char_buffer[idx] = shade_for_depth(depth);
            self.color_buffer[idx] = self.color;
        }
    }

    /// Write the finished frame to the terminal
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl RenderPipeline for AsciiPipeline {
    fn submit_model_transform(&mut self, transform: &Mat4) {
        self.modelview = *transform;
    }

    fn set_color(&mut self, r: f32, g: f32, b: f32) {
        self.color = Color::Rgb {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
        };
    }

    fn draw_wire_sphere(&mut self, radius: f32) {
        // Latitude rings
        for stack in 1..SPHERE_STACKS {
            let phi = PI * stack as f32 / SPHERE_STACKS as f32 - FRAC_PI_2;
            let y = radius * phi.sin();
            let ring_radius = radius * phi.cos();
            for sample in 0..CIRCLE_SAMPLES {
                let theta = TAU * sample as f32 / CIRCLE_SAMPLES as f32;
                self.plot(&Point3::new(
                    ring_radius * theta.cos(),
                    y,
                    ring_radius * theta.sin(),
                ));
            }
        }

        // Longitude lines, pole to pole
        for slice in 0..SPHERE_SLICES {
            let theta = TAU * slice as f32 / SPHERE_SLICES as f32;
            for sample in 0..=ARC_SAMPLES {
                let phi = PI * sample as f32 / ARC_SAMPLES as f32 - FRAC_PI_2;
                let ring_radius = radius * phi.cos();
                self.plot(&Point3::new(
                    ring_radius * theta.cos(),
                    radius * phi.sin(),
                    ring_radius * theta.sin(),
                ));
            }
        }
    }

    fn draw_annular_disk(&mut self, inner_radius: f32, outer_radius: f32) {
        // Concentric circles in the local XY plane, inner edge to outer
        for ring in 0..DISK_RINGS {
            let t = ring as f32 / (DISK_RINGS - 1) as f32;
            let radius = inner_radius + t * (outer_radius - inner_radius);
            for sample in 0..CIRCLE_SAMPLES {
                let theta = TAU * sample as f32 / CIRCLE_SAMPLES as f32;
                self.plot(&Point3::new(
                    radius * theta.cos(),
                    radius * theta.sin(),
                    0.0,
                ));
            }
        }
    }
}

/// Nearer points get brighter characters
fn shade_for_depth(depth: f32) -> char {
    let brightness = ((1.0 - depth) * 0.5).clamp(0.0, 1.0);
    let index = (brightness * (LUMINOSITY_RAMP.len() - 1) as f32) as usize;
    LUMINOSITY_RAMP[index.min(LUMINOSITY_RAMP.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::{AnimationState, SceneRenderer};

    fn lit_cells(pipeline: &AsciiPipeline) -> usize {
        pipeline.char_buffer.iter().filter(|&&c| c != ' ').count()
    }

    #[test]
    fn test_sphere_in_view_lights_cells() {
        let mut pipeline = AsciiPipeline::new(80, 40);
        // Place the sphere in front of the camera in eye space
        pipeline.submit_model_transform(&Mat4::translation(0.0, 0.0, -20.0));
        pipeline.draw_wire_sphere(3.0);
        assert!(lit_cells(&pipeline) > 0);
    }

    #[test]
    fn test_sphere_behind_camera_is_clipped() {
        let mut pipeline = AsciiPipeline::new(80, 40);
        pipeline.submit_model_transform(&Mat4::translation(0.0, 0.0, 20.0));
        pipeline.draw_wire_sphere(3.0);
        assert_eq!(lit_cells(&pipeline), 0);
    }

    #[test]
    fn test_clear_resets_buffers() {
        let mut pipeline = AsciiPipeline::new(80, 40);
        pipeline.submit_model_transform(&Mat4::translation(0.0, 0.0, -20.0));
        pipeline.draw_wire_sphere(3.0);
        pipeline.clear();
        assert_eq!(lit_cells(&pipeline), 0);
        assert!(pipeline.depth_buffer.iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn test_full_frame_renders_under_camera_view() {
        let mut pipeline = AsciiPipeline::new(120, 50);
        let mut scene = SceneRenderer::new();
        let view = pipeline.camera().view_transform();

        scene.render_frame(&view, &AnimationState::new(), &mut pipeline);

        // The star alone covers a visible patch of the screen
        assert!(lit_cells(&pipeline) > 50);
    }

    #[test]
    fn test_resize_rebuilds_buffers() {
        let mut pipeline = AsciiPipeline::new(80, 40);
        pipeline.resize(100, 30);
        assert_eq!(pipeline.char_buffer.len(), 100 * 30);
        assert!((pipeline.camera().aspect - 100.0 / 60.0).abs() < 1e-6);
    }
}
