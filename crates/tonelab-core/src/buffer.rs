use ndarray::Array2;

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{Result, ToneError};

/// A single plane of 8-bit intensity samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel {
    /// Sample data, row-major, shape = (height, width)
    pub(crate) data: Array2<u8>,
}

impl Channel {
    /// Wrap an existing array. Both dimensions must be non-zero.
    pub fn new(data: Array2<u8>) -> Result<Self> {
        let (h, w) = data.dim();
        if h == 0 || w == 0 {
            return Err(ToneError::InvalidDimensions {
                width: w,
                height: h,
            });
        }
        Ok(Self { data })
    }

    /// Build a channel from row-major samples.
    pub fn from_raw(width: usize, height: usize, samples: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ToneError::InvalidDimensions { width, height });
        }
        let expected = width * height;
        let actual = samples.len();
        let data = Array2::from_shape_vec((height, width), samples)
            .map_err(|_| ToneError::ChannelSizeMismatch { expected, actual })?;
        Ok(Self { data })
    }

    /// A channel where every sample is `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self> {
        Self::new(Array2::from_elem((height, width), value))
    }

    /// Sample data, shape = (height, width).
    pub fn data(&self) -> &Array2<u8> {
        &self.data
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Number of samples (width * height).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: construction rejects empty channels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Smallest and largest sample.
    pub fn min_max(&self) -> (u8, u8) {
        self.data
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Apply a per-sample function, producing a channel of the same shape.
    pub fn map<F>(&self, f: F) -> Channel
    where
        F: FnMut(u8) -> u8,
    {
        Channel {
            data: self.data.mapv(f),
        }
    }
}

/// An image made of one (gray) or three (RGB) equally sized channels.
///
/// Planes are stored separately. Use [`PixelBuffer::from_interleaved`] and
/// [`PixelBuffer::to_interleaved`] to exchange data with codecs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    planes: Vec<Channel>,
}

impl PixelBuffer {
    pub fn gray(channel: Channel) -> Self {
        Self {
            planes: vec![channel],
        }
    }

    pub fn rgb(red: Channel, green: Channel, blue: Channel) -> Result<Self> {
        Self::from_planes(vec![red, green, blue])
    }

    /// Assemble a buffer from planes, checking count and dimensions.
    pub fn from_planes(planes: Vec<Channel>) -> Result<Self> {
        if planes.len() != 1 && planes.len() != COLOR_CHANNEL_COUNT {
            return Err(ToneError::UnsupportedChannelCount(planes.len()));
        }
        let dim = planes[0].data.dim();
        for plane in &planes[1..] {
            if plane.data.dim() != dim {
                return Err(ToneError::ChannelSizeMismatch {
                    expected: planes[0].len(),
                    actual: plane.len(),
                });
            }
        }
        Ok(Self { planes })
    }

    /// Split interleaved samples (`[c0, c1, c2, c0, ...]`) into planes.
    pub fn from_interleaved(
        width: usize,
        height: usize,
        channels: usize,
        samples: &[u8],
    ) -> Result<Self> {
        if channels != 1 && channels != COLOR_CHANNEL_COUNT {
            return Err(ToneError::UnsupportedChannelCount(channels));
        }
        if width == 0 || height == 0 {
            return Err(ToneError::InvalidDimensions { width, height });
        }
        let expected = width * height * channels;
        if samples.len() != expected {
            return Err(ToneError::ChannelSizeMismatch {
                expected,
                actual: samples.len(),
            });
        }

        let planes = (0..channels)
            .map(|c| {
                let plane: Vec<u8> = samples.iter().skip(c).step_by(channels).copied().collect();
                Channel::from_raw(width, height, plane)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { planes })
    }

    /// Interleave planes back into a single row-major sample vector.
    pub fn to_interleaved(&self) -> Vec<u8> {
        let n = self.planes.len();
        let mut out = vec![0u8; self.width() * self.height() * n];
        for (c, plane) in self.planes.iter().enumerate() {
            for (i, &v) in plane.data.iter().enumerate() {
                out[i * n + c] = v;
            }
        }
        out
    }

    pub fn width(&self) -> usize {
        self.planes[0].width()
    }

    pub fn height(&self) -> usize {
        self.planes[0].height()
    }

    pub fn channel_count(&self) -> usize {
        self.planes.len()
    }

    pub fn is_rgb(&self) -> bool {
        self.planes.len() == COLOR_CHANNEL_COUNT
    }

    pub fn channel(&self, index: usize) -> Option<&Channel> {
        self.planes.get(index)
    }

    pub fn planes(&self) -> &[Channel] {
        &self.planes
    }

    pub fn into_planes(self) -> Vec<Channel> {
        self.planes
    }

    /// Apply a fallible channel transform to every plane independently.
    ///
    /// RGB planes are processed concurrently.
    pub fn map_channels<F>(&self, f: F) -> Result<PixelBuffer>
    where
        F: Fn(&Channel) -> Result<Channel> + Sync,
    {
        match self.planes.as_slice() {
            [gray] => Ok(PixelBuffer::gray(f(gray)?)),
            [r, g, b] => {
                let (red, (green, blue)) =
                    rayon::join(|| f(r), || rayon::join(|| f(g), || f(b)));
                PixelBuffer::rgb(red?, green?, blue?)
            }
            planes => Err(ToneError::UnsupportedChannelCount(planes.len())),
        }
    }
}

impl From<Channel> for PixelBuffer {
    fn from(channel: Channel) -> Self {
        PixelBuffer::gray(channel)
    }
}
