use crate::core::data::aabb::Aabb;
use glam::Mat4;
use std::sync::{Arc, Mutex, PoisonError};

/// A renderable part of the scene that the simulator positions every frame.
pub trait ModelPort: Send + Sync {
    fn set_transform(&self, transform: Mat4);

    fn local_bounds(&self) -> Aabb;

    /// Visual cue for a crash. Models without such a cue ignore it.
    fn darken(&self) {}
}

/// The models the simulator drives: the avatar's body, its two wings and the perch prop.
#[derive(Clone)]
pub struct AvatarRig {
    pub body: Arc<dyn ModelPort>,
    pub left_wing: Arc<dyn ModelPort>,
    pub right_wing: Arc<dyn ModelPort>,
    pub perch: Arc<dyn ModelPort>,
}

impl AvatarRig {
    #[must_use]
    pub fn detached() -> Self {
        Self {
            body: Arc::new(DetachedModel::default()),
            left_wing: Arc::new(DetachedModel::default()),
            right_wing: Arc::new(DetachedModel::default()),
            perch: Arc::new(DetachedModel::default()),
        }
    }
}

/// Model that only remembers the last transform it was given.
#[derive(Debug, Default)]
pub struct DetachedModel {
    transform: Mutex<Mat4>,
}

impl DetachedModel {
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        *self.transform.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ModelPort for DetachedModel {
    fn set_transform(&self, transform: Mat4) {
        *self.transform.lock().unwrap_or_else(PoisonError::into_inner) = transform;
    }

    fn local_bounds(&self) -> Aabb {
        Aabb::default()
    }
}

#[cfg(test)]
mod tests {
    use super::{DetachedModel, ModelPort};
    use crate::core::data::aabb::Aabb;
    use glam::{Mat4, Vec3};

    #[test]
    fn detached_model_remembers_last_transform() {
        let model = DetachedModel::default();
        let transform = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));

        model.set_transform(transform);

        assert_eq!(model.transform(), transform);
    }

    #[test]
    fn detached_model_starts_at_identity_with_empty_bounds() {
        let model = DetachedModel::default();

        assert_eq!(model.local_bounds(), Aabb::default());
        assert_eq!(model.transform(), Mat4::IDENTITY);
    }
}
