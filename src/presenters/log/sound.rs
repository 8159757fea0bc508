use crate::controllers::flight::ports::{SoundCue, SoundEffectPort};
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Writes sound cues to the log and tracks which looping cues are playing.
#[derive(Debug, Default)]
pub struct LoggedSoundEffects {
    playing: Mutex<HashSet<SoundCue>>,
}

impl LoggedSoundEffects {
    #[must_use]
    pub fn is_playing(&self, cue: SoundCue) -> bool {
        self.playing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&cue)
    }
}

impl SoundEffectPort for LoggedSoundEffects {
    fn play(&self, cue: SoundCue) {
        info!(?cue, "sound started");
        if cue.is_looping() {
            self.playing
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(cue);
        }
    }

    fn stop(&self, cue: SoundCue) {
        let was_playing = self
            .playing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&cue);
        if was_playing {
            info!(?cue, "sound stopped");
        }
    }
}
