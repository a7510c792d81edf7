// CLASSIFICATION: COMMUNITY
// Filename: mbuf.rs v0.5
// Author: Lukas Bower
// Date Modified: 2026-08-25

use log::debug;
use thiserror::Error;

/// Errors from mbuf pool operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MbufError {
    /// Every buffer in the pool is already outstanding.
    #[error("mbuf pool exhausted: all {total} buffers outstanding")]
    PoolExhausted { total: usize },
}

// === MbufPool Struct ===
/// Bookkeeping pool of fixed-size buffers.
///
/// The pool hands out empty [`Mbuf`] segments and takes whole chains back via
/// [`MbufPool::free_chain`]. It only tracks counts; segment storage lives in
/// the mbufs themselves.
pub struct MbufPool {
    buf_size: usize,
    total: usize,
    outstanding: usize,
}

impl MbufPool {
    /// Create a pool of `count` buffers of `buf_size` bytes each.
    pub fn new(buf_size: usize, count: usize) -> Self {
        debug!("mbuf pool created: {} buffers of {} bytes", count, buf_size);
        Self {
            buf_size,
            total: count,
            outstanding: 0,
        }
    }

    /// Capacity of a single buffer.
    pub fn buf_size(&self) -> usize {
        self.buf_size
    }

    /// Number of buffers currently available.
    pub fn free_count(&self) -> usize {
        self.total - self.outstanding
    }

    /// Hand out one empty mbuf.
    pub fn alloc(&mut self) -> Result<Mbuf, MbufError> {
        if self.outstanding == self.total {
            return Err(MbufError::PoolExhausted { total: self.total });
        }
        self.outstanding += 1;
        debug!("mbuf alloc: {}/{} outstanding", self.outstanding, self.total);
        Ok(Mbuf {
            data: Vec::with_capacity(self.buf_size),
            next: None,
        })
    }

    /// Return every segment of `chain` to the pool.
    ///
    /// The chain must have been allocated from this pool; accounting is
    /// saturating, so a foreign chain cannot underflow the counter.
    pub fn free_chain(&mut self, chain: Mbuf) {
        let segs = chain.seg_count();
        self.outstanding = self.outstanding.saturating_sub(segs);
        debug!(
            "mbuf free: {} segments returned, {}/{} outstanding",
            segs, self.outstanding, self.total
        );
    }
}

// === Mbuf Struct ===
/// One fixed-size buffer segment, linked into a chain.
///
/// A chain represents a longer logical byte stream without copying: appends
/// fill the tail segment and spill into fresh pool allocations as needed.
#[derive(Debug)]
pub struct Mbuf {
    data: Vec<u8>,
    next: Option<Box<Mbuf>>,
}

impl Mbuf {
    /// Bytes held by this segment only.
    pub fn seg_data(&self) -> &[u8] {
        &self.data
    }

    /// Number of segments in the chain starting here.
    pub fn seg_count(&self) -> usize {
        let mut n = 1;
        let mut seg = self;
        while let Some(next) = seg.next.as_deref() {
            n += 1;
            seg = next;
        }
        n
    }

    /// Logical byte length across the whole chain.
    pub fn len(&self) -> usize {
        let mut total = self.data.len();
        let mut seg = self;
        while let Some(next) = seg.next.as_deref() {
            total += next.data.len();
            seg = next;
        }
        total
    }

    /// True when the chain holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `bytes` at the chain tail, allocating further segments from
    /// `pool` once the tail is full.
    ///
    /// `pool` must be the pool this chain was allocated from; segment
    /// capacity is taken from it.
    pub fn append(&mut self, pool: &mut MbufPool, bytes: &[u8]) -> Result<(), MbufError> {
        let mut tail = self;
        while tail.next.is_some() {
            tail = tail.next.as_deref_mut().unwrap();
        }
        let mut rest = bytes;
        while !rest.is_empty() {
            let room = pool.buf_size().saturating_sub(tail.data.len());
            if room == 0 {
                tail.next = Some(Box::new(pool.alloc()?));
                tail = tail.next.as_deref_mut().unwrap();
                continue;
            }
            let take = room.min(rest.len());
            tail.data.extend_from_slice(&rest[..take]);
            rest = &rest[take..];
        }
        Ok(())
    }

    /// Link `other` onto the tail of this chain.
    pub fn concat(&mut self, other: Mbuf) {
        let mut tail = self;
        while tail.next.is_some() {
            tail = tail.next.as_deref_mut().unwrap();
        }
        tail.next = Some(Box::new(other));
    }

    /// Iterate the chain's bytes in logical order.
    pub fn iter(&self) -> MbufIter<'_> {
        MbufIter {
            seg: Some(self),
            pos: 0,
        }
    }
}

/// Byte iterator over an mbuf chain.
pub struct MbufIter<'a> {
    seg: Option<&'a Mbuf>,
    pos: usize,
}

impl<'a> Iterator for MbufIter<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            let seg = self.seg?;
            if self.pos < seg.data.len() {
                let b = seg.data[self.pos];
                self.pos += 1;
                return Some(b);
            }
            // empty segments are legal mid-chain
            self.seg = seg.next.as_deref();
            self.pos = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_until_exhausted() {
        let mut pool = MbufPool::new(64, 2);
        let a = pool.alloc().unwrap();
        let b = pool.alloc().unwrap();
        assert_eq!(pool.free_count(), 0);
        assert_eq!(
            pool.alloc().unwrap_err(),
            MbufError::PoolExhausted { total: 2 }
        );
        pool.free_chain(a);
        pool.free_chain(b);
        assert_eq!(pool.free_count(), 2);
    }

    #[test]
    fn append_spills_into_new_segments() {
        let mut pool = MbufPool::new(8, 4);
        let mut m = pool.alloc().unwrap();
        let data: Vec<u8> = (0..20).collect();
        m.append(&mut pool, &data).unwrap();
        assert_eq!(m.seg_count(), 3);
        assert_eq!(m.len(), 20);
        assert_eq!(m.seg_data().len(), 8);
        let collected: Vec<u8> = m.iter().collect();
        assert_eq!(collected, data);
        pool.free_chain(m);
        assert_eq!(pool.free_count(), 4);
    }

    #[test]
    fn append_fails_when_pool_runs_dry() {
        let mut pool = MbufPool::new(4, 1);
        let mut m = pool.alloc().unwrap();
        let err = m.append(&mut pool, &[0; 5]).unwrap_err();
        assert_eq!(err, MbufError::PoolExhausted { total: 1 });
        // the bytes that fit were kept
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn concat_preserves_logical_order() {
        let mut pool = MbufPool::new(16, 4);
        let mut m1 = pool.alloc().unwrap();
        m1.append(&mut pool, b"abc").unwrap();
        let mut m2 = pool.alloc().unwrap();
        m2.append(&mut pool, b"def").unwrap();
        let mut m3 = pool.alloc().unwrap();
        m3.append(&mut pool, b"gh").unwrap();
        m2.concat(m3);
        m1.concat(m2);
        assert_eq!(m1.seg_count(), 3);
        let bytes: Vec<u8> = m1.iter().collect();
        assert_eq!(bytes, b"abcdefgh");
    }

    #[test]
    fn chain_is_debug_formattable() {
        let mut pool = MbufPool::new(8, 2);
        let mut m = pool.alloc().unwrap();
        m.append(&mut pool, &[0xde, 0xad]).unwrap();
        let rendered = format!("{:?}", m);
        assert!(rendered.contains("222")); // 0xde
    }

    #[test]
    fn empty_chain_iterates_nothing() {
        let mut pool = MbufPool::new(16, 1);
        let m = pool.alloc().unwrap();
        assert!(m.is_empty());
        assert_eq!(m.iter().count(), 0);
    }
}
