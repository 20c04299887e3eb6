//! Audio buffer type and WAV helpers

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::{Error, Result};

/// Default capture rate for speech recognition
pub const SPEECH_SAMPLE_RATE: u32 = 16_000;

/// Where the caller's audio comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    /// Record from the default input device for a fixed duration
    Device { duration: Duration },
    /// Read a WAV file supplied by the operator
    File(PathBuf),
}

/// Captured or synthesized audio
///
/// Samples are interleaved f32, normalized to [-1.0, 1.0].
#[derive(Clone)]
pub struct AudioBuffer {
    pub samples: Arc<[f32]>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl std::fmt::Debug for AudioBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioBuffer")
            .field("samples_len", &self.samples.len())
            .field("sample_rate", &self.sample_rate)
            .field("channels", &self.channels)
            .finish()
    }
}

impl AudioBuffer {
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples: samples.into(),
            sample_rate,
            channels: channels.max(1),
        }
    }

    /// Mono speech-rate buffer
    pub fn mono(samples: Vec<f32>) -> Self {
        Self::new(samples, SPEECH_SAMPLE_RATE, 1)
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(
            self.samples.len() as f64 / (self.sample_rate as f64 * self.channels as f64),
        )
    }

    /// Average interleaved channels down to one
    pub fn to_mono(&self) -> AudioBuffer {
        if self.channels == 1 {
            return self.clone();
        }
        let channels = self.channels as usize;
        let samples = self
            .samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect();
        AudioBuffer::new(samples, self.sample_rate, 1)
    }

    /// Mono at `target_rate`, the shape speech services expect
    pub fn to_speech_format(&self, target_rate: u32) -> Result<AudioBuffer> {
        self.to_mono().resample(target_rate)
    }

    /// Resample a mono buffer with Rubato's FFT resampler
    pub fn resample(&self, target_rate: u32) -> Result<AudioBuffer> {
        use rubato::{FftFixedIn, Resampler};

        if self.sample_rate == target_rate || self.is_empty() {
            return Ok(AudioBuffer::new(self.samples.to_vec(), target_rate, self.channels));
        }
        if self.channels != 1 {
            return self.to_mono().resample(target_rate);
        }

        const CHUNK_FRAMES: usize = 1024;

        let resample_err = |e: &dyn std::fmt::Display| Error::AudioCapture(format!("Resampling failed: {}", e));
        let mut resampler = FftFixedIn::<f64>::new(
            self.sample_rate as usize,
            target_rate as usize,
            CHUNK_FRAMES,
            2,
            1,
        )
        .map_err(|e| resample_err(&e))?;

        let input: Vec<f64> = self.samples.iter().map(|&s| s as f64).collect();
        let expected = (input.len() as u64 * target_rate as u64 / self.sample_rate as u64) as usize;
        let mut output: Vec<f32> = Vec::with_capacity(expected + CHUNK_FRAMES);

        let mut pos = 0;
        while input.len() - pos >= resampler.input_frames_next() {
            let frames = resampler.input_frames_next();
            let chunk = resampler
                .process(&[&input[pos..pos + frames]], None)
                .map_err(|e| resample_err(&e))?;
            output.extend(chunk[0].iter().map(|&s| s as f32));
            pos += frames;
        }
        if pos < input.len() {
            let tail: &[&[f64]] = &[&input[pos..]];
            let chunk = resampler
                .process_partial(Some(tail), None)
                .map_err(|e| resample_err(&e))?;
            output.extend(chunk[0].iter().map(|&s| s as f32));
        }
        output.truncate(expected);

        Ok(AudioBuffer::new(output, target_rate, 1))
    }

    /// Scale every sample by `gain`, clamped to [-1, 1]
    pub fn with_gain(&self, gain: f32) -> AudioBuffer {
        let samples = self
            .samples
            .iter()
            .map(|&s| (s * gain).clamp(-1.0, 1.0))
            .collect();
        AudioBuffer::new(samples, self.sample_rate, self.channels)
    }

    /// Read a WAV file, converting integer PCM to normalized f32
    pub fn read_wav(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = hound::WavReader::open(path).map_err(|e| {
            Error::AudioCapture(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let spec = reader.spec();
        let samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<std::result::Result<_, _>>()?,
            hound::SampleFormat::Int => {
                let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / max_val))
                    .collect::<std::result::Result<_, _>>()?
            },
        };

        tracing::debug!(
            path = %path.display(),
            samples = samples.len(),
            sample_rate = spec.sample_rate,
            channels = spec.channels,
            "Loaded WAV audio"
        );

        Ok(Self::new(samples, spec.sample_rate, spec.channels))
    }

    /// Write the buffer as 16-bit PCM WAV
    pub fn write_wav(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let spec = hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec)?;
        for &sample in self.samples.iter() {
            let clamped = sample.clamp(-1.0, 1.0);
            writer.write_sample((clamped * i16::MAX as f32).round() as i16)?;
        }
        writer.finalize()?;
        Ok(())
    }

    /// Encode as 16-bit PCM WAV bytes (for upload to inference services)
    pub fn to_wav_bytes(&self) -> Result<Vec<u8>> {
        let spec = hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = std::io::Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
            for &sample in self.samples.iter() {
                let clamped = sample.clamp(-1.0, 1.0);
                writer.write_sample((clamped * i16::MAX as f32).round() as i16)?;
            }
            writer.finalize()?;
        }
        Ok(cursor.into_inner())
    }

    /// Decode WAV bytes (e.g. a synthesis service response)
    pub fn from_wav_bytes(bytes: &[u8]) -> Result<Self> {
        let reader = hound::WavReader::new(std::io::Cursor::new(bytes))?;
        let spec = reader.spec();
        let samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<std::result::Result<_, _>>()?,
            hound::SampleFormat::Int => {
                let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / max_val))
                    .collect::<std::result::Result<_, _>>()?
            },
        };
        Ok(Self::new(samples, spec.sample_rate, spec.channels))
    }
}
