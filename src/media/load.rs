use super::EmbedDescriptor;

/// Transient loading flag of a mounted embed. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    NotApplicable,
}

type LoadObserver = Box<dyn FnMut(&EmbedDescriptor) + Send>;

/// One mount of an embed on the page. The observer fires at most once, on the
/// first load signal from the frame.
pub struct EmbedMount {
    descriptor: EmbedDescriptor,
    state: LoadState,
    on_loaded: Option<LoadObserver>,
}

impl EmbedMount {
    pub fn new(descriptor: EmbedDescriptor) -> Self {
        let state = if descriptor.is_placeholder() { LoadState::NotApplicable } else { LoadState::Loading };
        Self { descriptor, state, on_loaded: None }
    }

    pub fn with_observer(mut self, observer: impl FnMut(&EmbedDescriptor) + Send + 'static) -> Self {
        self.on_loaded = Some(Box::new(observer));
        self
    }

    pub fn descriptor(&self) -> &EmbedDescriptor { &self.descriptor }
    pub fn state(&self) -> LoadState { self.state }

    /// Whether the loading overlay should be drawn over the frame.
    pub fn show_spinner(&self) -> bool { self.state == LoadState::Loading }

    /// Frame `load` event. Repeated signals and placeholder mounts are ignored.
    pub fn mark_loaded(&mut self) {
        if self.state != LoadState::Loading {
            return;
        }
        self.state = LoadState::Loaded;
        tracing::debug!(src = ?self.descriptor.src, "embed loaded");
        if let Some(mut cb) = self.on_loaded.take() {
            cb(&self.descriptor);
        }
    }
}

impl std::fmt::Debug for EmbedMount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbedMount")
            .field("descriptor", &self.descriptor)
            .field("state", &self.state)
            .field("has_observer", &self.on_loaded.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{resolve, EmbedOptions, MediaType};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn framed_embed_loads_once() {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        let d = resolve(MediaType::Loom, "XYZ1", &EmbedOptions::default());
        let mut mount = EmbedMount::new(d).with_observer(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });
        assert!(mount.show_spinner());
        mount.mark_loaded();
        mount.mark_loaded();
        assert_eq!(mount.state(), LoadState::Loaded);
        assert!(!mount.show_spinner());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn placeholder_never_loads() {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        let d = resolve(MediaType::Placeholder, "", &EmbedOptions::default());
        let mut mount = EmbedMount::new(d).with_observer(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(mount.state(), LoadState::NotApplicable);
        assert!(!mount.show_spinner());
        mount.mark_loaded();
        assert_eq!(mount.state(), LoadState::NotApplicable);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
