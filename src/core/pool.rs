//! Reusable scratch buffers
//!
//! A [`BufferPool`] keeps two independent free lists: growable line buffers
//! and small timestamp buffers. Buffers are handed out through
//! [`PooledBuffer`] guards which return them on drop, so every exit path of
//! a caller (including unwinding) gives the buffer back.
//!
//! Released buffers are truncated, never zeroed, and keep whatever capacity
//! they grew to. A free list that is already full drops the buffer instead.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::ops::{Deref, DerefMut};

/// Initial capacity of a fresh line buffer
pub const LINE_CAPACITY: usize = 256;

/// Initial capacity of a fresh timestamp buffer
pub const TIMESTAMP_CAPACITY: usize = 32;

/// Default number of idle buffers kept per free list
pub const DEFAULT_IDLE_LIMIT: usize = 64;

struct FreeList {
    sender: Sender<Vec<u8>>,
    receiver: Receiver<Vec<u8>>,
    initial_capacity: usize,
}

impl FreeList {
    fn new(idle_limit: usize, initial_capacity: usize) -> Self {
        let (sender, receiver) = bounded(idle_limit);
        Self {
            sender,
            receiver,
            initial_capacity,
        }
    }

    fn take(&self) -> Vec<u8> {
        match self.receiver.try_recv() {
            Ok(mut buf) => {
                buf.clear();
                buf
            }
            Err(_) => Vec::with_capacity(self.initial_capacity),
        }
    }

    fn put(&self, mut buf: Vec<u8>) {
        buf.clear();
        // Full free list: let the buffer go.
        let _ = self.sender.try_send(buf);
    }
}

/// Pool of line and timestamp buffers, safe for unbounded concurrent use
pub struct BufferPool {
    lines: FreeList,
    timestamps: FreeList,
}

impl BufferPool {
    #[must_use]
    pub fn new() -> Self {
        Self::with_idle_limit(DEFAULT_IDLE_LIMIT)
    }

    /// Pool keeping at most `idle_limit` idle buffers of each kind.
    #[must_use]
    pub fn with_idle_limit(idle_limit: usize) -> Self {
        let idle_limit = idle_limit.max(1);
        Self {
            lines: FreeList::new(idle_limit, LINE_CAPACITY),
            timestamps: FreeList::new(idle_limit, TIMESTAMP_CAPACITY),
        }
    }

    /// Borrow an empty line buffer.
    pub fn line(&self) -> PooledBuffer<'_> {
        PooledBuffer {
            buf: self.lines.take(),
            home: &self.lines,
        }
    }

    /// Borrow an empty timestamp buffer.
    pub fn timestamp(&self) -> PooledBuffer<'_> {
        PooledBuffer {
            buf: self.timestamps.take(),
            home: &self.timestamps,
        }
    }

    /// Number of idle line buffers
    pub fn idle_lines(&self) -> usize {
        self.lines.receiver.len()
    }

    /// Number of idle timestamp buffers
    pub fn idle_timestamps(&self) -> usize {
        self.timestamps.receiver.len()
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferPool")
            .field("idle_lines", &self.idle_lines())
            .field("idle_timestamps", &self.idle_timestamps())
            .finish()
    }
}

/// A buffer on loan from a [`BufferPool`]
pub struct PooledBuffer<'a> {
    buf: Vec<u8>,
    home: &'a FreeList,
}

impl Deref for PooledBuffer<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.home.put(std::mem::take(&mut self.buf));
    }
}
