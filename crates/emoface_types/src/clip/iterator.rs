//! Iterator over clip frames.

/// Iterator over the JPEG frames of a clip, in playback order
pub struct FrameIter<'a> {
	pub(super) frames: &'a [Vec<u8>],
	pub(super) current: usize,
}

impl<'a> Iterator for FrameIter<'a> {
	type Item = &'a [u8];

	fn next(&mut self) -> Option<Self::Item> {
		let frame = self.frames.get(self.current)?;
		self.current += 1;
		Some(frame.as_slice())
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.frames.len().saturating_sub(self.current);
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for FrameIter<'_> {}
