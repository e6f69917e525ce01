//! Capacity-bounded text buffer for one PO field

/// A growable string that never holds more than `capacity` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBuffer {
    text: String,
    capacity: usize,
}

/// Returned when an append would push a buffer past its capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    pub capacity: usize,
    pub required: usize,
}

impl FieldBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::new(),
            capacity,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Replace the contents with `value`, cutting it at the last character
    /// boundary that fits. Returns `true` when the value had to be cut.
    #[must_use]
    pub fn replace(&mut self, value: &str) -> bool {
        self.text.clear();
        let mut end = value.len().min(self.capacity);
        while !value.is_char_boundary(end) {
            end -= 1;
        }
        self.text.push_str(&value[..end]);
        end < value.len()
    }

    /// Append `value` whole, or leave the buffer untouched if it would not fit.
    pub fn append(&mut self, value: &str) -> Result<(), CapacityExceeded> {
        let required = self.text.len() + value.len();
        if required > self.capacity {
            return Err(CapacityExceeded {
                capacity: self.capacity,
                required,
            });
        }
        self.text.push_str(value);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Move the contents out, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}
