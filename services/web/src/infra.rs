use metrics_exporter_prometheus::PrometheusHandle;
use proplus::notifications::NotificationCenter;
use proplus::site::SiteShell;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared handle passed to every request handler. The shell mutex models a
/// single browsing session; requests serialize on it.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) brand: Arc<str>,
    pub(crate) notifications: Arc<NotificationCenter>,
    pub(crate) shell: Arc<Mutex<SiteShell>>,
}

impl AppState {
    pub(crate) fn new(metrics: PrometheusHandle, brand: &str) -> Self {
        let notifications = Arc::new(NotificationCenter::new());
        let shell = SiteShell::new(notifications.clone());

        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            brand: Arc::from(brand),
            notifications,
            shell: Arc::new(Mutex::new(shell)),
        }
    }

    pub(crate) fn shell(&self) -> MutexGuard<'_, SiteShell> {
        self.shell.lock().expect("shell mutex poisoned")
    }
}
