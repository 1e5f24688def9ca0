use crate::buffer::PixelBuffer;

/// Default number of undo steps kept in memory.
pub const DEFAULT_HISTORY_DEPTH: usize = 20;

/// A full copy of a pixel buffer's contents at one instant. Immutable
/// once created.
#[derive(Debug, Clone)]
struct Snapshot {
    data: Vec<u8>,
}

/// Bounded stack of full-buffer snapshots backing undo.
///
/// Capacity is enforced with FIFO eviction: when a save would exceed the
/// configured depth, the oldest snapshot is dropped first. This bounds
/// worst-case memory to depth * width * height * 4 bytes. Snapshots are
/// whole copies, no deltas; the depth is small enough that the simplicity
/// wins.
pub struct HistoryStack {
    snapshots: Vec<Snapshot>,
    max_depth: usize,
}

impl HistoryStack {
    pub fn new(max_depth: usize) -> Self {
        debug_assert!(max_depth > 0);
        Self {
            snapshots: Vec::new(),
            max_depth,
        }
    }

    /// Captures the buffer's current contents. Callers save *before* a
    /// destructive action, so undo restores the state that preceded it.
    pub fn save(&mut self, buffer: &PixelBuffer) {
        if self.snapshots.len() >= self.max_depth {
            self.snapshots.remove(0);
        }
        self.snapshots.push(Snapshot {
            data: buffer.data().to_vec(),
        });
    }

    /// Pops the most recent snapshot into `buffer`. Returns false when the
    /// stack is empty, leaving the buffer untouched.
    pub fn undo(&mut self, buffer: &mut PixelBuffer) -> bool {
        match self.snapshots.pop() {
            Some(snapshot) => {
                buffer.restore_from(&snapshot.data);
                true
            }
            None => false,
        }
    }

    /// Drops all snapshots. Called when the buffer is resized: the stored
    /// geometry no longer matches, so continuity loses to correctness.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}
