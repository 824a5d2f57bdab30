/// A GPU resource with an explicit release step.
pub trait Release {
    /// Free the underlying GPU memory. Called exactly once per value.
    fn release(&mut self);
}

impl Release for wgpu::Buffer {
    fn release(&mut self) {
        self.destroy();
    }
}

/// Holds at most one live resource.
///
/// Replacing the content releases the previous value first, so repeated
/// regeneration never accumulates GPU memory.
pub struct GpuSlot<T: Release> {
    current: Option<T>,
    replacements: u64,
}

impl<T: Release> GpuSlot<T> {
    pub fn new() -> Self {
        Self {
            current: None,
            replacements: 0,
        }
    }

    /// Release the current value (if any) and install `next`.
    pub fn replace(&mut self, next: T) {
        self.clear();
        self.current = Some(next);
        self.replacements += 1;
    }

    pub fn clear(&mut self) {
        if let Some(mut old) = self.current.take() {
            old.release();
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    /// Number of values installed so far.
    pub fn replacements(&self) -> u64 {
        self.replacements
    }
}

impl<T: Release> Default for GpuSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Release> Drop for GpuSlot<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Ledger {
        live: i64,
        released: Vec<u32>,
    }

    struct Tracked {
        id: u32,
        ledger: Rc<RefCell<Ledger>>,
    }

    impl Tracked {
        fn new(id: u32, ledger: &Rc<RefCell<Ledger>>) -> Self {
            ledger.borrow_mut().live += 1;
            Self {
                id,
                ledger: Rc::clone(ledger),
            }
        }
    }

    impl Release for Tracked {
        fn release(&mut self) {
            let mut ledger = self.ledger.borrow_mut();
            ledger.live -= 1;
            ledger.released.push(self.id);
        }
    }

    #[test]
    fn starts_empty() {
        let slot: GpuSlot<Tracked> = GpuSlot::new();
        assert!(!slot.is_occupied());
        assert!(slot.get().is_none());
        assert_eq!(slot.replacements(), 0);
    }

    #[test]
    fn at_most_one_live_resource_across_replacements() {
        let ledger = Rc::new(RefCell::new(Ledger::default()));
        let mut slot = GpuSlot::new();
        for id in 0..50 {
            slot.replace(Tracked::new(id, &ledger));
            assert_eq!(ledger.borrow().live, 1);
            assert_eq!(slot.get().map(|t| t.id), Some(id));
        }
        assert_eq!(ledger.borrow().released, (0..49).collect::<Vec<_>>());
        assert_eq!(slot.replacements(), 50);
    }

    #[test]
    fn each_value_released_exactly_once() {
        let ledger = Rc::new(RefCell::new(Ledger::default()));
        {
            let mut slot = GpuSlot::new();
            slot.replace(Tracked::new(1, &ledger));
            slot.replace(Tracked::new(2, &ledger));
            slot.clear();
            slot.clear();
            slot.replace(Tracked::new(3, &ledger));
        }
        let ledger = ledger.borrow();
        assert_eq!(ledger.live, 0);
        assert_eq!(ledger.released, vec![1, 2, 3]);
    }
}
