#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Looping wind bed while airborne.
    Wind,
    /// One-shot chime when the avatar returns to the perch.
    Reset,
    /// One-shot call on take-off.
    Eagle,
}

impl SoundCue {
    #[must_use]
    pub fn is_looping(self) -> bool {
        matches!(self, Self::Wind)
    }
}

pub trait SoundEffectPort: Send + Sync {
    fn play(&self, cue: SoundCue);

    fn stop(&self, cue: SoundCue);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSoundEffects;

impl SoundEffectPort for SilentSoundEffects {
    #[inline]
    fn play(&self, _cue: SoundCue) {}

    #[inline]
    fn stop(&self, _cue: SoundCue) {}
}
