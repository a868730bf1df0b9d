//! Recording of guard events.

use std::sync::Arc;

use cmd_starter::ModuleGuard;
use parking_lot::Mutex;

/// An event as observed by a listener, with borrowed data copied out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    /// Failing module, when the failure is tied to one.
    pub module: Option<String>,
    /// Types that loaded before the failure; zero for module listing failures.
    pub loaded: usize,
    /// Rendered error.
    pub message: String,
}

/// Collects the module and type load events raised by a [`ModuleGuard`].
///
/// ```
/// use cmd_starter::{ErrorHandlingMode, ModuleGuard};
/// use cmd_starter_test_helpers::events::EventRecorder;
/// use cmd_starter_test_helpers::hosts::FakeHost;
///
/// let recorder = EventRecorder::default();
/// let mut guard = ModuleGuard::new(FakeHost::failing("denied"));
/// guard.set_mode(ErrorHandlingMode::RaiseEvent);
/// recorder.attach(&mut guard);
/// let _ = guard.list_modules();
/// assert_eq!(recorder.module_events().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    modules: Arc<Mutex<Vec<RecordedEvent>>>,
    types: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl EventRecorder {
    /// Registers listeners on `guard` that record into this recorder.
    pub fn attach(&self, guard: &mut ModuleGuard) {
        let modules = Arc::clone(&self.modules);
        guard.on_module_load_error(move |event| {
            modules.lock().push(RecordedEvent {
                module: event.module().map(|module| module.name().to_owned()),
                loaded: 0,
                message: event.error().to_string(),
            });
        });
        let types = Arc::clone(&self.types);
        guard.on_type_load_error(move |event| {
            types.lock().push(RecordedEvent {
                module: Some(event.module().name().to_owned()),
                loaded: event.loaded(),
                message: event.error().to_string(),
            });
        });
    }

    /// Module listing failures observed so far.
    #[must_use]
    pub fn module_events(&self) -> Vec<RecordedEvent> {
        self.modules.lock().clone()
    }

    /// Type listing failures observed so far.
    #[must_use]
    pub fn type_events(&self) -> Vec<RecordedEvent> {
        self.types.lock().clone()
    }

    /// Total number of events observed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.lock().len() + self.types.lock().len()
    }

    /// Whether no event was observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
