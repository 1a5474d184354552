use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// Number of submitted transactions still waiting for inclusion.
#[derive(Debug, Clone, Default)]
pub struct PendingTxCounter {
    count: Arc<AtomicUsize>,
}

impl PendingTxCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn acquire(&self) -> PendingTx {
        self.count.fetch_add(1, Ordering::SeqCst);
        PendingTx {
            count: self.count.clone(),
        }
    }
}

/// Released on drop, whichever way the wait ends.
#[must_use]
#[derive(Debug)]
pub struct PendingTx {
    count: Arc<AtomicUsize>,
}

impl Drop for PendingTx {
    fn drop(&mut self) {
        self.count.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balances_on_drop() {
        let counter = PendingTxCounter::new();

        let first = counter.acquire();
        let second = counter.clone().acquire();
        assert_eq!(counter.get(), 2);

        drop(first);
        assert_eq!(counter.get(), 1);

        drop(second);
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn releases_on_early_return() {
        fn fails(counter: &PendingTxCounter) -> eyre::Result<()> {
            let _pending = counter.acquire();
            eyre::bail!("reverted")
        }

        let counter = PendingTxCounter::new();

        assert!(fails(&counter).is_err());
        assert_eq!(counter.get(), 0);
    }
}
