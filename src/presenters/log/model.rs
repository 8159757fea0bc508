use crate::controllers::flight::ports::{AvatarRig, ModelPort};
use crate::core::data::aabb::Aabb;
use glam::{Mat4, Vec3};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, trace};

/// Stand-in for a rendered mesh: keeps its latest transform and traces changes.
#[derive(Debug)]
pub struct LoggedModel {
    name: &'static str,
    transform: Mutex<Mat4>,
    bounds: Aabb,
    darkened: AtomicBool,
}

impl LoggedModel {
    #[must_use]
    pub fn new(name: &'static str, bounds: Aabb) -> Self {
        Self {
            name,
            transform: Mutex::new(Mat4::IDENTITY),
            bounds,
            darkened: AtomicBool::new(false),
        }
    }
}

impl ModelPort for LoggedModel {
    fn set_transform(&self, transform: Mat4) {
        let mut current = self.transform.lock().unwrap_or_else(PoisonError::into_inner);
        if *current != transform {
            trace!(model = self.name, translation = ?transform.w_axis.truncate(), "model moved");
        }
        *current = transform;
    }

    fn local_bounds(&self) -> Aabb {
        self.bounds
    }

    fn darken(&self) {
        if !self.darkened.swap(true, Ordering::AcqRel) {
            info!(model = self.name, "model darkened");
        }
    }
}

/// Rig of logged models sized like the avatar meshes.
#[must_use]
pub fn logged_rig() -> AvatarRig {
    let wing = Aabb::new(Vec3::new(-0.01, -0.025, -0.002), Vec3::new(0.01, 0.025, 0.002));

    AvatarRig {
        body: Arc::new(LoggedModel::new(
            "body",
            Aabb::new(Vec3::new(-0.02, -0.005, -0.005), Vec3::new(0.02, 0.005, 0.01)),
        )),
        left_wing: Arc::new(LoggedModel::new("left_wing", wing)),
        right_wing: Arc::new(LoggedModel::new("right_wing", wing)),
        perch: Arc::new(LoggedModel::new(
            "perch",
            Aabb::new(Vec3::new(-0.5, -0.5, 0.0), Vec3::new(0.5, 0.5, 2.0)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembers_latest_transform() {
        let model = LoggedModel::new("body", Aabb::default());
        let transform = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));

        model.set_transform(transform);

        assert_eq!(*model.transform.lock().unwrap(), transform);
    }

    #[test]
    fn darken_is_sticky() {
        let model = LoggedModel::new("body", Aabb::default());

        model.darken();
        model.darken();

        assert!(model.darkened.load(Ordering::Acquire));
    }

    #[test]
    fn rig_bodies_have_nonempty_bounds() {
        let rig = logged_rig();

        for part in [&rig.body, &rig.left_wing, &rig.right_wing, &rig.perch] {
            let size = part.local_bounds().size();
            assert!(size.x > 0.0 && size.y > 0.0 && size.z > 0.0);
        }
    }
}
