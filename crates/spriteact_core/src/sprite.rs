//! Rendering primitive the engine drives.
//!
//! The engine does not draw anything. It needs a sprite that can hold a frame
//! sequence, report and move a cursor within it, be placed on screen and be
//! flipped horizontally. [`Sprite`] describes that contract and
//! [`SpriteCursor`] is a plain in-memory implementation, enough for headless
//! simulation and for renderers that only read the resulting state.

use crate::body::Vec2;

/// Horizontal flip applied when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
	/// Drawn as authored
	#[default]
	None,
	/// Flipped horizontally
	Mirror,
}

/// Frame sequence and placement of a drawable sprite.
pub trait Sprite {
	/// Installs `frames` as the active sequence. The cursor position after
	/// installing is unspecified; callers set it explicitly.
	fn set_frame_sequence(&mut self, frames: &[u16]);

	/// Returns the cursor position within the active sequence.
	fn frame(&self) -> usize;

	/// Moves the cursor to `index` (clamped to the sequence).
	fn set_frame(&mut self, index: usize);

	/// Returns the length of the active sequence.
	fn sequence_len(&self) -> usize;

	/// Returns the frame value under the cursor, if any sequence is installed.
	fn displayed_frame(&self) -> Option<u16>;

	/// Places the sprite on screen.
	fn set_position(&mut self, position: Vec2);

	/// Sets the flip transform.
	fn set_transform(&mut self, transform: Transform);

	/// Advances the cursor by one, wrapping to the start after the last frame.
	fn next_frame(&mut self) {
		let len = self.sequence_len();
		if len > 0 {
			self.set_frame((self.frame() + 1) % len);
		}
	}
}

/// In-memory [`Sprite`].
///
/// # Examples
///
/// ```
/// use spriteact_core::sprite::{Sprite, SpriteCursor};
///
/// let mut sprite = SpriteCursor::new();
/// sprite.set_frame_sequence(&[3, 5, 7]);
/// sprite.set_frame(0);
/// sprite.next_frame();
/// assert_eq!(sprite.displayed_frame(), Some(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteCursor {
	frames: Vec<u16>,
	index: usize,
	position: Vec2,
	transform: Transform,
}

impl SpriteCursor {
	/// Creates a sprite with no frames at the origin.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the active sequence.
	pub fn frames(&self) -> &[u16] {
		&self.frames
	}

	/// Returns the last position set.
	pub fn position(&self) -> Vec2 {
		self.position
	}

	/// Returns the current transform.
	pub fn transform(&self) -> Transform {
		self.transform
	}
}

impl Sprite for SpriteCursor {
	fn set_frame_sequence(&mut self, frames: &[u16]) {
		self.frames.clear();
		self.frames.extend_from_slice(frames);
		self.index = 0;
	}

	fn frame(&self) -> usize {
		self.index
	}

	fn set_frame(&mut self, index: usize) {
		self.index = index.min(self.frames.len().saturating_sub(1));
	}

	fn sequence_len(&self) -> usize {
		self.frames.len()
	}

	fn displayed_frame(&self) -> Option<u16> {
		self.frames.get(self.index).copied()
	}

	fn set_position(&mut self, position: Vec2) {
		self.position = position;
	}

	fn set_transform(&mut self, transform: Transform) {
		self.transform = transform;
	}
}
