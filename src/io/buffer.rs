//! Multi-channel output buffers a voice can sum into.
//!
//! Voices never own the output. The host hands them whatever the audio
//! device gave it (planar channels or an interleaved slice) behind the
//! [`ChannelBuffer`] trait, and the voice adds its samples in place.

/// Writable view over `num_channels` channels of `len` frames each.
///
/// Writes past the end of a channel are ignored rather than panicking, since
/// they happen on the audio thread.
pub trait ChannelBuffer {
    fn num_channels(&self) -> usize;

    /// Frames available in the shortest channel.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add `value` to the existing sample at (`channel`, `frame`).
    fn add_sample(&mut self, channel: usize, frame: usize, value: f32);

    /// Zero frames `[start, start + count)` on every channel.
    fn clear_region(&mut self, start: usize, count: usize);
}

fn add_planar<C: AsMut<[f32]>>(channels: &mut [C], channel: usize, frame: usize, value: f32) {
    if let Some(sample) = channels
        .get_mut(channel)
        .and_then(|c| c.as_mut().get_mut(frame))
    {
        *sample += value;
    }
}

fn clear_planar<C: AsMut<[f32]>>(channels: &mut [C], start: usize, count: usize) {
    for channel in channels {
        let data = channel.as_mut();
        let start = start.min(data.len());
        let end = start.saturating_add(count).min(data.len());
        data[start..end].fill(0.0);
    }
}

impl ChannelBuffer for [Vec<f32>] {
    fn num_channels(&self) -> usize {
        <[Vec<f32>]>::len(self)
    }

    fn len(&self) -> usize {
        self.iter().map(Vec::len).min().unwrap_or(0)
    }

    fn add_sample(&mut self, channel: usize, frame: usize, value: f32) {
        add_planar(self, channel, frame, value);
    }

    fn clear_region(&mut self, start: usize, count: usize) {
        clear_planar(self, start, count);
    }
}

impl ChannelBuffer for Vec<Vec<f32>> {
    fn num_channels(&self) -> usize {
        self.as_slice().num_channels()
    }

    fn len(&self) -> usize {
        ChannelBuffer::len(self.as_slice())
    }

    fn add_sample(&mut self, channel: usize, frame: usize, value: f32) {
        add_planar(self.as_mut_slice(), channel, frame, value);
    }

    fn clear_region(&mut self, start: usize, count: usize) {
        clear_planar(self.as_mut_slice(), start, count);
    }
}

impl ChannelBuffer for [&mut [f32]] {
    fn num_channels(&self) -> usize {
        <[&mut [f32]]>::len(self)
    }

    fn len(&self) -> usize {
        self.iter().map(|c| c.len()).min().unwrap_or(0)
    }

    fn add_sample(&mut self, channel: usize, frame: usize, value: f32) {
        add_planar(self, channel, frame, value);
    }

    fn clear_region(&mut self, start: usize, count: usize) {
        clear_planar(self, start, count);
    }
}

/// Interleaved frames, as delivered by most device callbacks
/// (`L R L R ...` for stereo).
pub struct Interleaved<'a> {
    data: &'a mut [f32],
    channels: usize,
}

impl<'a> Interleaved<'a> {
    /// Wrap `data` holding `channels` interleaved channels. A trailing
    /// partial frame is ignored.
    pub fn new(data: &'a mut [f32], channels: usize) -> Self {
        Self { data, channels }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data[..]
    }
}

impl ChannelBuffer for Interleaved<'_> {
    fn num_channels(&self) -> usize {
        self.channels
    }

    fn len(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.data.len() / self.channels
        }
    }

    fn add_sample(&mut self, channel: usize, frame: usize, value: f32) {
        if channel >= self.channels || frame >= ChannelBuffer::len(self) {
            return;
        }
        self.data[frame * self.channels + channel] += value;
    }

    fn clear_region(&mut self, start: usize, count: usize) {
        let frames = ChannelBuffer::len(self);
        let start = start.min(frames);
        let end = start.saturating_add(count).min(frames);
        self.data[start * self.channels..end * self.channels].fill(0.0);
    }
}
