use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::interval::GenomicInterval;
use crate::types::VariantRecord;

pub type DataListener = Box<dyn Fn()>;

/// Handle returned by [`VariantSource::on_new_data`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Where a track gets its variants from.
pub trait VariantSource {
    /// Variants inside `interval`, in the order they should be drawn.
    fn features_in_range(&self, interval: &GenomicInterval) -> Vec<VariantRecord>;

    /// Register a callback fired whenever new data becomes available.
    fn on_new_data(&self, listener: DataListener) -> ListenerId;

    /// Drop a listener. Unknown ids are ignored.
    fn remove_listener(&self, id: ListenerId);
}

impl<T: VariantSource + ?Sized> VariantSource for Rc<T> {
    fn features_in_range(&self, interval: &GenomicInterval) -> Vec<VariantRecord> {
        (**self).features_in_range(interval)
    }

    fn on_new_data(&self, listener: DataListener) -> ListenerId {
        (**self).on_new_data(listener)
    }

    fn remove_listener(&self, id: ListenerId) {
        (**self).remove_listener(id)
    }
}

/// In-process variant store.
///
/// Cheap to clone; clones share records and listeners.
#[derive(Clone, Default)]
pub struct MemoryVariantSource {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    variants: RefCell<Vec<VariantRecord>>,
    listeners: RefCell<Vec<(ListenerId, Rc<dyn Fn()>)>>,
    next_listener: Cell<u64>,
}

impl MemoryVariantSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variants(variants: Vec<VariantRecord>) -> Self {
        let source = Self::new();
        *source.inner.variants.borrow_mut() = variants;
        source
    }

    /// Store more variants and notify listeners.
    pub fn add_variants(&self, variants: impl IntoIterator<Item = VariantRecord>) {
        {
            let mut stored = self.inner.variants.borrow_mut();
            stored.extend(variants);
            stored.sort_by_key(|v| v.position);
        }
        self.notify();
    }

    pub fn len(&self) -> usize {
        self.inner.variants.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    // Listeners run on a snapshot so they may subscribe or unsubscribe.
    fn notify(&self) {
        let listeners: Vec<_> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl VariantSource for MemoryVariantSource {
    fn features_in_range(&self, interval: &GenomicInterval) -> Vec<VariantRecord> {
        self.inner
            .variants
            .borrow()
            .iter()
            .filter(|v| interval.is_on_contig(&v.contig) && interval.contains(v.position))
            .cloned()
            .collect()
    }

    fn on_new_data(&self, listener: DataListener) -> ListenerId {
        let id = ListenerId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::from(listener)));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.inner.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }
}
