/// Limit/offset pair. Limit is never a statement of its own: it only attaches
/// to select and delete shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub count: u64,
    pub offset: u64,
}

impl Limit {
    pub fn new(count: u64) -> Self {
        Self { count, offset: 0 }
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }
}
