//! A generic, reusable block arena.
//!
//! Realizes the §6 "arena allocator" collaborator contract
//! (`create`/`alloc`/`free`/`reset`/`destroy`, `used_size`/`total_size`)
//! as a typed, safe-Rust slab instead of a raw byte allocator: `alloc`
//! returns an opaque `Copy` handle rather than a pointer, and `free`
//! reclaims the slot onto a free list keyed by a generation counter so a
//! stale handle cannot silently alias a reused slot. An arena-level epoch,
//! bumped on every `reset`, closes the same gap across a full wipe: slot
//! indices and generations both restart from scratch on `reset`, so the
//! epoch is what stops a pre-reset handle from resolving against a
//! post-reset value that happens to land in the same slot.
//!
//! [`Graph`](crate::graph::Graph) does not require an arena to operate;
//! it may optionally be built `with_arena` so vertex storage is pulled
//! from a shared [`BlockArena`]. Every algorithm in this crate only ever
//! sees `&Graph`, so the choice of backing allocator is invisible to
//! Tarjan, Kosaraju, and the dispatcher.

use std::num::NonZeroU32;

/// Opaque handle into a [`BlockArena`]. Carries a per-slot generation (so
/// a handle obtained before the slot it names was freed and reused is
/// rejected) and the arena's epoch at issue time (so a handle obtained
/// before a [`BlockArena::reset`] is rejected even though `reset` clears
/// every slot back to generation 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArenaHandle {
    index: u32,
    generation: NonZeroU32,
    epoch: u32,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { value: T, generation: NonZeroU32 },
    Free { next_free: Option<u32>, generation: NonZeroU32 },
}

/// A generic block arena that hands out [`ArenaHandle`]s for values of
/// type `T`, reusing freed slots in block-sized batches.
///
/// `block_size` only affects how aggressively the backing `Vec` grows
/// (it reserves another `block_size` slots whenever it runs out of free
/// slots); it has no effect on the alignment or layout of `T`, which
/// Rust's allocator already guarantees.
#[derive(Debug)]
pub struct BlockArena<T> {
    block_size: usize,
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    live_count: usize,
    total_allocated: usize,
    epoch: u32,
}

impl<T> BlockArena<T> {
    /// Creates an empty arena that grows in batches of `block_size` slots.
    ///
    /// `block_size == 0` is rounded up to `1`, mirroring the §6 contract's
    /// "rounds up" behavior for degenerate parameters.
    pub fn with_block_size(block_size: usize) -> Self {
        BlockArena {
            block_size: block_size.max(1),
            slots: Vec::new(),
            free_head: None,
            live_count: 0,
            total_allocated: 0,
            epoch: 0,
        }
    }

    /// Allocates a new slot holding `value` and returns a handle to it.
    pub fn alloc(&mut self, value: T) -> ArenaHandle {
        self.live_count += 1;
        self.total_allocated += 1;

        if let Some(index) = self.free_head.take() {
            let generation = match &self.slots[index as usize] {
                Slot::Free {
                    next_free,
                    generation,
                } => {
                    self.free_head = *next_free;
                    *generation
                }
                Slot::Occupied { .. } => unreachable!("free list pointed at an occupied slot"),
            };
            self.slots[index as usize] = Slot::Occupied { value, generation };
            return ArenaHandle {
                index,
                generation,
                epoch: self.epoch,
            };
        }

        if self.slots.len() % self.block_size == 0 {
            self.slots.reserve(self.block_size);
        }

        let generation = NonZeroU32::new(1).unwrap();
        let index = self.slots.len() as u32;
        self.slots.push(Slot::Occupied { value, generation });
        ArenaHandle {
            index,
            generation,
            epoch: self.epoch,
        }
    }

    /// Reclaims the slot named by `handle`, returning the value it held.
    ///
    /// Returns `None` if the handle is stale (already freed, or from a
    /// generation invalidated by [`reset`](Self::reset)).
    pub fn free(&mut self, handle: ArenaHandle) -> Option<T> {
        if handle.epoch != self.epoch {
            return None;
        }
        let slot = self.slots.get_mut(handle.index as usize)?;
        match slot {
            Slot::Occupied { generation, .. } if *generation == handle.generation => {
                let next_generation = NonZeroU32::new(generation.get().wrapping_add(1))
                    .unwrap_or_else(|| NonZeroU32::new(1).unwrap());
                let Slot::Occupied { value, .. } = std::mem::replace(
                    slot,
                    Slot::Free {
                        next_free: self.free_head,
                        generation: next_generation,
                    },
                ) else {
                    unreachable!()
                };
                self.free_head = Some(handle.index);
                self.live_count -= 1;
                Some(value)
            }
            _ => None,
        }
    }

    /// Returns a reference to the value named by `handle`, or `None` if
    /// the handle is stale.
    pub fn get(&self, handle: ArenaHandle) -> Option<&T> {
        if handle.epoch != self.epoch {
            return None;
        }
        match self.slots.get(handle.index as usize)? {
            Slot::Occupied { value, generation } if *generation == handle.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    /// Returns a mutable reference to the value named by `handle`, or
    /// `None` if the handle is stale.
    pub fn get_mut(&mut self, handle: ArenaHandle) -> Option<&mut T> {
        if handle.epoch != self.epoch {
            return None;
        }
        match self.slots.get_mut(handle.index as usize)? {
            Slot::Occupied { value, generation } if *generation == handle.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    /// Logically wipes the arena: every previously issued handle becomes
    /// invalid, and the backing storage is dropped. Capacity bookkeeping
    /// (`total_size`) is reset along with it.
    ///
    /// Bumps the arena's epoch so that a handle issued before this call
    /// cannot alias a slot reused after it, even though slot indices and
    /// generations both restart from scratch (`index: 0, generation: 1`
    /// is reissued immediately on the next `alloc`).
    pub fn reset(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live_count = 0;
        self.total_allocated = 0;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Number of slots currently occupied.
    pub fn used_size(&self) -> usize {
        self.live_count
    }

    /// Number of slots ever allocated since the last [`reset`](Self::reset),
    /// including ones since freed.
    pub fn total_size(&self) -> usize {
        self.total_allocated
    }
}

impl<T> Default for BlockArena<T> {
    fn default() -> Self {
        Self::with_block_size(64)
    }
}
