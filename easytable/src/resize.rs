//! Column resize drag state.
//!
//! A drag has three phases: press records the offset between the column's
//! right edge and the pointer, move derives the new width from the live
//! pointer position, and release ends the drag. Moves outside a press do
//! nothing.

/// Drag state for column resizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResizeState {
    #[default]
    Idle,
    Resizing {
        /// Index of the column being resized.
        column: usize,
        /// `initial_width - press_x`.
        start_offset: i32,
    },
}

impl ResizeState {
    /// Begin a drag on `column`, currently `width` pixels wide.
    pub fn press(column: usize, width: u32, pointer_x: i32) -> Self {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        ResizeState::Resizing {
            column,
            start_offset: width.saturating_sub(pointer_x),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ResizeState::Resizing { .. })
    }

    /// Column under drag, if any.
    pub fn column(&self) -> Option<usize> {
        match self {
            ResizeState::Idle => None,
            ResizeState::Resizing { column, .. } => Some(*column),
        }
    }

    /// New `(column, width)` for a pointer at `pointer_x`, or `None` when idle.
    ///
    /// The width is `initial_width + (pointer_x - press_x)`, floored at zero.
    pub fn width_at(&self, pointer_x: i32) -> Option<(usize, u32)> {
        match *self {
            ResizeState::Idle => None,
            ResizeState::Resizing {
                column,
                start_offset,
            } => {
                let width = start_offset.saturating_add(pointer_x).max(0);
                Some((column, width.unsigned_abs()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_follows_pointer_delta() {
        let state = ResizeState::press(1, 120, 300);
        assert_eq!(state.width_at(345), Some((1, 165)));
        assert_eq!(state.width_at(280), Some((1, 100)));
    }

    #[test]
    fn test_idle_has_no_width() {
        assert_eq!(ResizeState::Idle.width_at(10), None);
    }

    #[test]
    fn test_width_floors_at_zero() {
        let state = ResizeState::press(0, 50, 100);
        assert_eq!(state.width_at(0), Some((0, 0)));
    }
}
