//! Microphone capture (CPAL) and speaker playback (Rodio)
//!
//! Both run on a blocking thread: CPAL streams are not `Send`.

use aurora_ivr_core::AudioBuffer;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::StreamConfig;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use crate::PipelineError;

/// Record `duration` from the default input device
pub(super) fn capture(
    duration: Duration,
    sample_rate: u32,
    channels: u16,
) -> Result<AudioBuffer, PipelineError> {
    let device = cpal::default_host()
        .default_input_device()
        .ok_or_else(|| PipelineError::Capture("No input device available".to_string()))?;

    tracing::debug!(
        device = %device.name().unwrap_or_else(|_| "Unknown".to_string()),
        sample_rate,
        channels,
        "Using input device"
    );

    let config = StreamConfig {
        channels,
        sample_rate: cpal::SampleRate(sample_rate),
        buffer_size: cpal::BufferSize::Default,
    };

    let expected = (duration.as_secs_f64() * sample_rate as f64 * channels as f64) as usize;
    let captured = Arc::new(Mutex::new(Vec::with_capacity(expected)));
    let sink = captured.clone();

    let stream = device
        .build_input_stream(
            &config,
            move |data: &[f32], _: &cpal::InputCallbackInfo| {
                let mut samples = sink.lock();
                let room = expected.saturating_sub(samples.len());
                samples.extend_from_slice(&data[..data.len().min(room)]);
            },
            |err| tracing::warn!("Audio stream error: {}", err),
            None,
        )
        .map_err(|e| PipelineError::Capture(e.to_string()))?;

    stream
        .play()
        .map_err(|e| PipelineError::Capture(e.to_string()))?;
    std::thread::sleep(duration);
    drop(stream);

    let samples = std::mem::take(&mut *captured.lock());
    if samples.is_empty() {
        return Err(PipelineError::Capture("Input device produced no samples".to_string()));
    }
    Ok(AudioBuffer::new(samples, sample_rate, channels))
}

/// Play on the default output device and wait until finished
pub(super) fn play(audio: &AudioBuffer) -> Result<(), PipelineError> {
    let (_stream, handle) = rodio::OutputStream::try_default()
        .map_err(|e| PipelineError::Playback(e.to_string()))?;
    let sink =
        rodio::Sink::try_new(&handle).map_err(|e| PipelineError::Playback(e.to_string()))?;

    sink.append(rodio::buffer::SamplesBuffer::new(
        audio.channels,
        audio.sample_rate,
        audio.samples.to_vec(),
    ));
    sink.sleep_until_end();
    Ok(())
}
