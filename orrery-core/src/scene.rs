/// Hierarchical scene traversal over the body table
use log::error;

use crate::animation::AnimationState;
use crate::bodies::BODIES;
use crate::matrix::Mat4;
use crate::pipeline::RenderPipeline;
use crate::stack::MatrixStack;

/// Owns the current modelview transform and the save/restore stack, and
/// walks the body table once per frame.
///
/// The current transform is reset from the camera view at the start of
/// every frame and never persists across frames.
pub struct SceneRenderer {
    current: Mat4,
    stack: MatrixStack,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self {
            current: Mat4::identity(),
            stack: MatrixStack::new(),
        }
    }

    /// Render one frame of the system.
    ///
    /// `view` is the camera view transform; the star is drawn at the view
    /// origin, then each orbiting body under its own saved/restored frame:
    /// orbit rotation, radial translation, axial spin, sphere, optional
    /// ring. The stack must be balanced when the walk finishes.
    pub fn render_frame<P: RenderPipeline>(
        &mut self,
        view: &Mat4,
        state: &AnimationState,
        pipeline: &mut P,
    ) {
        self.current = Mat4::identity();
        self.current.compose(view);
        pipeline.submit_model_transform(&self.current);

        let star = &BODIES[0];
        pipeline.set_color(star.color[0], star.color[1], star.color[2]);
        pipeline.draw_wire_sphere(star.radius);

        for (orbit, body) in BODIES[1..].iter().enumerate() {
            self.push();

            self.rotate_y(state.orbit_angle(orbit), pipeline);
            self.translate(body.distance, 0.0, 0.0, pipeline);
            self.rotate_y(state.axial_angle() * body.spin_factor, pipeline);

            pipeline.set_color(body.color[0], body.color[1], body.color[2]);
            pipeline.draw_wire_sphere(body.radius);

            if let Some(ring) = &body.ring {
                self.push();
                self.compose_submit(&quarter_turn_x(), pipeline);
                pipeline.set_color(ring.color[0], ring.color[1], ring.color[2]);
                pipeline.draw_annular_disk(
                    body.radius * ring.inner_scale,
                    body.radius * ring.outer_scale,
                );
                self.pop(pipeline);
            }

            self.pop(pipeline);
        }

        debug_assert_eq!(
            self.stack.depth(),
            0,
            "unbalanced push/pop after frame traversal"
        );
    }

    /// Compose a translation onto the current transform and submit it
    pub fn translate<P: RenderPipeline>(&mut self, x: f32, y: f32, z: f32, pipeline: &mut P) {
        self.compose_submit(&Mat4::translation(x, y, z), pipeline);
    }

    /// Compose a Y-axis rotation (degrees) onto the current transform and
    /// submit it
    pub fn rotate_y<P: RenderPipeline>(&mut self, degrees: f32, pipeline: &mut P) {
        self.compose_submit(&Mat4::rotation_y(degrees), pipeline);
    }

    fn compose_submit<P: RenderPipeline>(&mut self, transform: &Mat4, pipeline: &mut P) {
        self.current.compose(transform);
        pipeline.submit_model_transform(&self.current);
    }

    /// Save the current transform; overflow is reported and ignored
    pub fn push(&mut self) {
        if let Err(err) = self.stack.push(&self.current) {
            error!("{err}");
        }
    }

    /// Restore the most recently saved transform and submit it; underflow
    /// is reported and ignored
    pub fn pop<P: RenderPipeline>(&mut self, pipeline: &mut P) {
        match self.stack.pop() {
            Ok(restored) => {
                self.current = restored;
                pipeline.submit_model_transform(&self.current);
            }
            Err(err) => error!("{err}"),
        }
    }

    pub fn current_transform(&self) -> &Mat4 {
        &self.current
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Hand-built 90 degree rotation about X, used to lay rings flat in the
/// orbital plane
fn quarter_turn_x() -> Mat4 {
    let mut r = Mat4::identity();
    r[5] = 0.0;
    r[6] = 1.0;
    r[9] = -1.0;
    r[10] = 0.0;
    r
}
