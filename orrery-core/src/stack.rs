/// Fixed-capacity save/restore stack for transform matrices
use thiserror::Error;

use crate::matrix::Mat4;

/// Maximum nesting depth, matching the fixed-function modelview stack
pub const STACK_CAPACITY: usize = 32;

/// Errors reported by the stack; the offending operation is a no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("matrix stack overflow: depth already at capacity {STACK_CAPACITY}")]
    Overflow,
    #[error("matrix stack underflow: stack is empty")]
    Underflow,
}

/// Bounded stack of transforms enabling hierarchical composition.
///
/// Push and pop are the only mutators; the top index never leaves
/// `0..=STACK_CAPACITY`.
pub struct MatrixStack {
    slots: [Mat4; STACK_CAPACITY],
    top: usize,
}

impl MatrixStack {
    pub fn new() -> Self {
        Self {
            slots: [Mat4::IDENTITY; STACK_CAPACITY],
            top: 0,
        }
    }

    /// Save a transform onto the stack
    pub fn push(&mut self, transform: &Mat4) -> Result<(), StackError> {
        if self.top >= STACK_CAPACITY {
            return Err(StackError::Overflow);
        }
        self.slots[self.top] = *transform;
        self.top += 1;
        Ok(())
    }

    /// Restore the most recently saved transform
    pub fn pop(&mut self) -> Result<Mat4, StackError> {
        if self.top == 0 {
            return Err(StackError::Underflow);
        }
        self.top -= 1;
        Ok(self.slots[self.top])
    }

    pub fn depth(&self) -> usize {
        self.top
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_restores_transform() {
        let mut stack = MatrixStack::new();
        let saved = Mat4::translation(1.0, 2.0, 3.0);

        stack.push(&saved).unwrap();
        let restored = stack.pop().unwrap();

        assert_eq!(restored, saved);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_balanced_nesting_returns_to_start_depth() {
        let mut stack = MatrixStack::new();
        let m = Mat4::identity();

        stack.push(&m).unwrap();
        let base_depth = stack.depth();

        stack.push(&m).unwrap();
        stack.push(&m).unwrap();
        stack.pop().unwrap();
        stack.push(&m).unwrap();
        stack.pop().unwrap();
        stack.pop().unwrap();

        assert_eq!(stack.depth(), base_depth);
    }

    #[test]
    fn test_pop_on_empty_reports_underflow() {
        let mut stack = MatrixStack::new();
        assert_eq!(stack.pop(), Err(StackError::Underflow));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_push_at_capacity_reports_overflow() {
        let mut stack = MatrixStack::new();
        let m = Mat4::rotation_y(10.0);

        for _ in 0..STACK_CAPACITY {
            stack.push(&m).unwrap();
        }
        assert_eq!(stack.push(&m), Err(StackError::Overflow));
        assert_eq!(stack.depth(), STACK_CAPACITY);

        // The stack still unwinds cleanly after the rejected push
        for _ in 0..STACK_CAPACITY {
            stack.pop().unwrap();
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn test_lifo_order() {
        let mut stack = MatrixStack::new();
        let inner = Mat4::translation(0.0, 1.0, 0.0);
        let outer = Mat4::translation(0.0, 2.0, 0.0);

        stack.push(&outer).unwrap();
        stack.push(&inner).unwrap();

        assert_eq!(stack.pop().unwrap(), inner);
        assert_eq!(stack.pop().unwrap(), outer);
    }
}
