//! Fixed set of data sources with one aggregated readiness flag.

use futures::future::{join_all, LocalBoxFuture};
use leptos::prelude::*;
use std::sync::Arc;

/// An independently loadable provider of one domain's records.
///
/// `load` resolves once the attempt is over. A failed attempt resolves too
/// but leaves `is_loaded` false; reporting the failure is the source's job.
pub trait DataSource: Send + Sync {
    fn name(&self) -> &'static str;

    fn is_loaded(&self) -> Signal<bool>;

    fn load(&self) -> LocalBoxFuture<'static, ()>;
}

/// Collects sources before the registry exists. Consumed by `build`, so the
/// set cannot change afterwards.
#[derive(Default)]
pub struct SourceRegistryBuilder {
    sources: Vec<Arc<dyn DataSource>>,
}

impl SourceRegistryBuilder {
    pub fn register<S: DataSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    pub fn build(self) -> SourceRegistry {
        let flags: Vec<Signal<bool>> = self.sources.iter().map(|s| s.is_loaded()).collect();
        let is_loaded = Memo::new(move |_| flags.iter().all(|flag| flag.get()));

        SourceRegistry {
            sources: self.sources,
            is_loaded,
        }
    }
}

pub struct SourceRegistry {
    sources: Vec<Arc<dyn DataSource>>,
    is_loaded: Memo<bool>,
}

impl SourceRegistry {
    pub fn builder() -> SourceRegistryBuilder {
        SourceRegistryBuilder::default()
    }

    /// True iff every registered source reports loaded
    pub fn is_loaded(&self) -> Memo<bool> {
        self.is_loaded
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Starts every source's load at once and waits for all of them.
    pub async fn load(&self) {
        log::info!("Loading data sources: {:?}", self.names());
        join_all(self.sources.iter().map(|s| s.load())).await;

        let pending: Vec<&'static str> = self
            .sources
            .iter()
            .filter(|s| !s.is_loaded().get_untracked())
            .map(|s| s.name())
            .collect();
        if pending.is_empty() {
            log::info!("All data sources loaded");
        } else {
            log::warn!("Data sources not loaded: {:?}", pending);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::sync::Mutex;

    #[derive(Clone, Copy)]
    struct FakeSource {
        name: &'static str,
        loaded: RwSignal<bool>,
        succeeds: bool,
    }

    impl FakeSource {
        fn new(name: &'static str, succeeds: bool) -> Self {
            Self {
                name,
                loaded: RwSignal::new(false),
                succeeds,
            }
        }
    }

    impl DataSource for FakeSource {
        fn name(&self) -> &'static str {
            self.name
        }

        fn is_loaded(&self) -> Signal<bool> {
            self.loaded.into()
        }

        fn load(&self) -> LocalBoxFuture<'static, ()> {
            let this = *self;
            async move {
                if this.succeeds {
                    this.loaded.set(true);
                }
            }
            .boxed_local()
        }
    }

    fn registry_of(sources: &[FakeSource]) -> SourceRegistry {
        sources
            .iter()
            .fold(SourceRegistry::builder(), |b, s| b.register(*s))
            .build()
    }

    #[test]
    fn test_loaded_only_after_last_source_in_every_order() {
        let orders: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];

        for order in orders {
            let sources = [
                FakeSource::new("assets", true),
                FakeSource::new("gameData", true),
                FakeSource::new("images", true),
            ];
            let registry = registry_of(&sources);
            assert!(!registry.is_loaded().get_untracked());

            for (step, &idx) in order.iter().enumerate() {
                sources[idx].loaded.set(true);
                let expected = step == order.len() - 1;
                assert_eq!(
                    registry.is_loaded().get_untracked(),
                    expected,
                    "order {:?}, after step {}",
                    order,
                    step
                );
            }
        }
    }

    #[test]
    fn test_flag_drop_is_reflected() {
        let sources = [FakeSource::new("a", true), FakeSource::new("b", true)];
        let registry = registry_of(&sources);

        sources[0].loaded.set(true);
        sources[1].loaded.set(true);
        assert!(registry.is_loaded().get_untracked());

        sources[1].loaded.set(false);
        assert!(!registry.is_loaded().get_untracked());
    }

    #[test]
    fn test_load_completes_all_sources() {
        let sources = [
            FakeSource::new("assets", true),
            FakeSource::new("gameData", true),
            FakeSource::new("images", true),
        ];
        let registry = registry_of(&sources);

        block_on(registry.load());
        assert!(registry.is_loaded().get_untracked());
    }

    #[test]
    fn test_failed_source_keeps_registry_unloaded() {
        let sources = [
            FakeSource::new("assets", true),
            FakeSource::new("gameData", false),
            FakeSource::new("images", true),
        ];
        let registry = registry_of(&sources);

        block_on(registry.load());
        assert!(sources[0].loaded.get_untracked());
        assert!(sources[2].loaded.get_untracked());
        assert!(!registry.is_loaded().get_untracked());
    }

    #[test]
    fn test_empty_registry_is_loaded() {
        let registry = SourceRegistry::builder().build();
        assert!(registry.is_empty());
        assert!(registry.is_loaded().get_untracked());
    }

    /// The first source only finishes once the second one has started, so a
    /// sequential load would never complete.
    #[test]
    fn test_sources_load_concurrently() {
        struct Waiting {
            rx: Mutex<Option<oneshot::Receiver<()>>>,
            loaded: RwSignal<bool>,
        }
        struct Signalling {
            tx: Mutex<Option<oneshot::Sender<()>>>,
            loaded: RwSignal<bool>,
        }

        impl DataSource for Waiting {
            fn name(&self) -> &'static str {
                "waiting"
            }
            fn is_loaded(&self) -> Signal<bool> {
                self.loaded.into()
            }
            fn load(&self) -> LocalBoxFuture<'static, ()> {
                let rx = self.rx.lock().unwrap().take();
                let loaded = self.loaded;
                async move {
                    if let Some(rx) = rx {
                        if rx.await.is_ok() {
                            loaded.set(true);
                        }
                    }
                }
                .boxed_local()
            }
        }

        impl DataSource for Signalling {
            fn name(&self) -> &'static str {
                "signalling"
            }
            fn is_loaded(&self) -> Signal<bool> {
                self.loaded.into()
            }
            fn load(&self) -> LocalBoxFuture<'static, ()> {
                let tx = self.tx.lock().unwrap().take();
                let loaded = self.loaded;
                async move {
                    if let Some(tx) = tx {
                        let _ = tx.send(());
                    }
                    loaded.set(true);
                }
                .boxed_local()
            }
        }

        let (tx, rx) = oneshot::channel();
        let waiting_flag = RwSignal::new(false);
        let signalling_flag = RwSignal::new(false);
        let registry = SourceRegistry::builder()
            .register(Waiting {
                rx: Mutex::new(Some(rx)),
                loaded: waiting_flag,
            })
            .register(Signalling {
                tx: Mutex::new(Some(tx)),
                loaded: signalling_flag,
            })
            .build();

        block_on(registry.load());
        assert!(waiting_flag.get_untracked());
        assert!(signalling_flag.get_untracked());
        assert!(registry.is_loaded().get_untracked());
    }
}
