//! Procedural idle sway of the whole model.
//!
//! A stateless function of elapsed time: the host samples it every frame and
//! applies the resulting rigid transform to the model root. The curves are
//! slow sine/cosine sweeps tuned for a gentle "floating product shot" feel.

use glam::{EulerRot, Mat4, Vec3};

/// Rigid pose of the model root: XYZ euler rotation (radians) plus a
/// translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPose {
    pub rotation: Vec3,
    pub translation: Vec3,
}

impl ModelPose {
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }
}

/// Sample the idle sway at `t` seconds of elapsed wall-clock time.
pub fn idle_pose(t: f32) -> ModelPose {
    let sway = 1.0 + (t / 1.5).sin();
    ModelPose {
        rotation: Vec3::new(
            (t / 4.0).cos() / 8.0,
            (t / 4.0).sin() / 8.0,
            -0.2 - sway / 20.0,
        ),
        translation: Vec3::new(0.0, sway / 10.0, 0.0),
    }
}
