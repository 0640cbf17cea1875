// SPDX-License-Identifier: MPL-2.0
//! Output port shared by both audio channels.

use super::clip::{Clip, OutputFormat};
use super::error::AudioError;
use crate::domain::Volume;
use std::rc::Rc;
use std::time::Duration;

/// A single playable slot: holds at most one clip and a play cursor.
pub trait AudioSink {
    /// Native format clips must be in.
    fn format(&self) -> OutputFormat;

    /// Replaces the current clip and rewinds. Playback stays paused.
    fn load(&mut self, clip: Clip) -> Result<(), AudioError>;

    /// Starts or resumes from the current cursor.
    fn play(&mut self) -> Result<(), AudioError>;

    fn pause(&mut self);

    /// Moves the cursor back to zero without changing play state.
    fn rewind(&mut self);

    /// Takes effect on the very next buffer, including mid-playback.
    fn set_volume(&mut self, volume: Volume);

    fn position(&self) -> Duration;

    /// Length of the loaded clip, `None` when empty.
    fn duration(&self) -> Option<Duration>;

    /// False once paused or after the clip ran to its end.
    fn is_playing(&self) -> bool;
}

/// Builds a sink on first use. Device sinks in production, doubles in tests.
pub type SinkFactory = Rc<dyn Fn() -> Result<Box<dyn AudioSink>, AudioError>>;

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory sink recording every call.

    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Default)]
    pub struct SinkLog {
        pub created: usize,
        pub loads: usize,
        pub plays: usize,
        pub pauses: usize,
        pub rewinds: usize,
        pub playing: bool,
        pub position: Duration,
        pub clip: Option<Clip>,
        pub volume: Option<Volume>,
        pub fail_play: bool,
    }

    pub struct FakeSink {
        log: Rc<RefCell<SinkLog>>,
    }

    impl AudioSink for FakeSink {
        fn format(&self) -> OutputFormat {
            OutputFormat::default()
        }

        fn load(&mut self, clip: Clip) -> Result<(), AudioError> {
            let mut log = self.log.borrow_mut();
            log.loads += 1;
            log.clip = Some(clip);
            log.position = Duration::ZERO;
            log.playing = false;
            Ok(())
        }

        fn play(&mut self) -> Result<(), AudioError> {
            let mut log = self.log.borrow_mut();
            if log.fail_play {
                return Err(AudioError::Device("rejected".into()));
            }
            if log.clip.is_none() {
                return Err(AudioError::NotLoaded);
            }
            log.plays += 1;
            log.playing = true;
            Ok(())
        }

        fn pause(&mut self) {
            let mut log = self.log.borrow_mut();
            log.pauses += 1;
            log.playing = false;
        }

        fn rewind(&mut self) {
            let mut log = self.log.borrow_mut();
            log.rewinds += 1;
            log.position = Duration::ZERO;
        }

        fn set_volume(&mut self, volume: Volume) {
            self.log.borrow_mut().volume = Some(volume);
        }

        fn position(&self) -> Duration {
            self.log.borrow().position
        }

        fn duration(&self) -> Option<Duration> {
            self.log.borrow().clip.as_ref().map(Clip::duration)
        }

        fn is_playing(&self) -> bool {
            self.log.borrow().playing
        }
    }

    /// Factory whose sinks all write into the returned log.
    pub fn recording_factory() -> (SinkFactory, Rc<RefCell<SinkLog>>) {
        let log = Rc::new(RefCell::new(SinkLog::default()));
        let shared = Rc::clone(&log);
        let factory: SinkFactory = Rc::new(move || {
            shared.borrow_mut().created += 1;
            Ok(Box::new(FakeSink {
                log: Rc::clone(&shared),
            }) as Box<dyn AudioSink>)
        });
        (factory, log)
    }

    /// Factory for a host without an output device.
    pub fn failing_factory() -> SinkFactory {
        Rc::new(|| Err(AudioError::NoOutputDevice))
    }

    pub fn clip(secs: u64) -> Clip {
        let format = OutputFormat::default();
        let len = format.sample_rate as usize * usize::from(format.channels) * secs as usize;
        Clip::new(vec![0.0; len], format)
    }
}
