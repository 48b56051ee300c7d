use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::warn;

struct AudioOutput {
    // Dropping the stream silences every sink, so it rides along for the
    // mixer's lifetime.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// Fire-and-forget playback of preloaded clips, one channel per signature.
/// When no output device is available the mixer runs disabled and every call
/// is a no-op.
pub struct AudioMixer {
    output: Option<AudioOutput>,
    clips: HashMap<String, Arc<[u8]>>,
    sinks: HashMap<String, Sink>,
    warned_keys: HashSet<String>,
}

impl AudioMixer {
    pub fn new() -> Self {
        let output = match OutputStream::try_default() {
            Ok((stream, handle)) => Some(AudioOutput {
                _stream: stream,
                handle,
            }),
            Err(error) => {
                warn!(error = %error, "audio_output_unavailable_mixer_disabled");
                None
            }
        };
        Self {
            output,
            clips: HashMap::new(),
            sinks: HashMap::new(),
            warned_keys: HashSet::new(),
        }
    }

    /// Mixer with no output device, for tests and headless runs.
    pub fn disabled() -> Self {
        Self {
            output: None,
            clips: HashMap::new(),
            sinks: HashMap::new(),
            warned_keys: HashSet::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    pub fn load_clip(&mut self, key: &str, bytes: Vec<u8>) {
        self.clips.insert(key.to_string(), Arc::from(bytes));
    }

    /// Plays the clip unless its channel is already sounding.
    pub fn play(&mut self, key: &str) {
        self.start(key, false);
    }

    /// Stops the clip's channel and plays it again from the start.
    pub fn restart(&mut self, key: &str) {
        self.start(key, true);
    }

    fn start(&mut self, key: &str, restart: bool) {
        let Some(output) = &self.output else {
            return;
        };
        let Some(bytes) = self.clips.get(key) else {
            warn_once(&mut self.warned_keys, key, "unknown_sound_signature");
            return;
        };

        if restart {
            // Dropping the sink stops whatever the channel was playing.
            self.sinks.remove(key);
        } else if let Some(sink) = self.sinks.get(key) {
            if !sink.empty() {
                return;
            }
        }

        let source = match Decoder::new(Cursor::new(Arc::clone(bytes))) {
            Ok(source) => source,
            Err(error) => {
                warn_once(
                    &mut self.warned_keys,
                    key,
                    &format!("audio_decode_failed:{error}"),
                );
                return;
            }
        };

        let sink = match self.sinks.entry(key.to_string()) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                match Sink::try_new(&output.handle) {
                    Ok(sink) => entry.insert(sink),
                    Err(error) => {
                        warn_once(
                            &mut self.warned_keys,
                            key,
                            &format!("audio_sink_failed:{error}"),
                        );
                        return;
                    }
                }
            }
        };
        sink.append(source);
        sink.play();
    }
}

impl Default for AudioMixer {
    fn default() -> Self {
        Self::new()
    }
}

fn warn_once(warned_keys: &mut HashSet<String>, key: &str, reason: &str) {
    if !warned_keys.insert(key.to_string()) {
        return;
    }
    warn!(sound_key = key, reason, "audio_playback_skipped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_mixer_ignores_playback() {
        let mut mixer = AudioMixer::disabled();
        mixer.load_clip("Click", vec![1, 2, 3]);
        mixer.play("Click");
        mixer.restart("Click");
        assert!(!mixer.is_enabled());
        assert_eq!(mixer.clip_count(), 1);
    }

    #[test]
    fn loading_same_key_replaces_clip() {
        let mut mixer = AudioMixer::disabled();
        mixer.load_clip("Click", vec![1]);
        mixer.load_clip("Click", vec![2]);
        assert_eq!(mixer.clip_count(), 1);
    }
}
