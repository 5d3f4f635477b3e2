// ============================================================================
// VIEW STATE - Estado de la vista (props recientes + formulario)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::PropRecord;

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (cambio de sesión)
    FullRender,
}

/// Parte concreta de la pantalla a actualizar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// `disabled` del fieldset del formulario
    Form,
    /// Lista de props recientes (o el error de carga)
    RecentProps,
}

type Subscriber = Rc<dyn Fn(UpdateType)>;

/// Estado propio del ViewController (se resetea en cada cambio de sesión)
#[derive(Clone, Default)]
pub struct ViewState {
    pub recent_records: Rc<RefCell<Vec<PropRecord>>>,
    pub submitting: Rc<RefCell<bool>>,
    pub load_error: Rc<RefCell<Option<String>>>,
    /// La carga inicial ya se lanzó en este montaje
    pub fetch_started: Rc<RefCell<bool>>,
    /// Se incrementa en cada `reset`; lo que termine de un montaje anterior se descarta
    pub mount: Rc<RefCell<u64>>,

    change_subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recent_records(&self) -> Vec<PropRecord> {
        self.recent_records.borrow().clone()
    }

    /// Reemplazar la lista completa (sin merge)
    pub fn set_recent_records(&self, records: Vec<PropRecord>) {
        *self.recent_records.borrow_mut() = records;
        *self.load_error.borrow_mut() = None;
        self.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::RecentProps));
    }

    pub fn load_error(&self) -> Option<String> {
        self.load_error.borrow().clone()
    }

    pub fn set_load_error(&self, error: Option<String>) {
        *self.load_error.borrow_mut() = error;
        self.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::RecentProps));
    }

    pub fn is_submitting(&self) -> bool {
        *self.submitting.borrow()
    }

    pub fn form_enabled(&self) -> bool {
        !self.is_submitting()
    }

    /// Marcar `submitting`; `None` si ya hay un envío en curso.
    /// El guard devuelve el flag a `false` al soltarse.
    pub fn begin_submit(&self) -> Option<SubmittingGuard> {
        {
            let mut submitting = self.submitting.borrow_mut();
            if *submitting {
                return None;
            }
            *submitting = true;
        }
        self.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::Form));
        Some(SubmittingGuard {
            state: self.clone(),
            mount: self.current_mount(),
        })
    }

    pub fn current_mount(&self) -> u64 {
        *self.mount.borrow()
    }

    pub fn is_current_mount(&self, mount: u64) -> bool {
        self.current_mount() == mount
    }

    /// Reclamar la carga del montaje actual; `false` si ya se hizo
    pub fn claim_initial_fetch(&self) -> bool {
        let mut started = self.fetch_started.borrow_mut();
        if *started {
            return false;
        }
        *started = true;
        true
    }

    /// Volver a valores por defecto (nuevo montaje)
    pub fn reset(&self) {
        self.recent_records.borrow_mut().clear();
        *self.submitting.borrow_mut() = false;
        *self.load_error.borrow_mut() = None;
        *self.fetch_started.borrow_mut() = false;
        *self.mount.borrow_mut() += 1;
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers con el tipo de actualización
    pub fn notify_subscribers_with_type(&self, update_type: UpdateType) {
        // Copia para que un callback pueda suscribir sin chocar con el borrow
        let subscribers: Vec<Subscriber> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback(update_type);
        }
    }
}

/// Libera `submitting` en cualquier salida (éxito, error, panic).
/// Tras un `reset` el flag ya no es suyo y no lo toca.
pub struct SubmittingGuard {
    state: ViewState,
    mount: u64,
}

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        if !self.state.is_current_mount(self.mount) {
            return;
        }
        *self.state.submitting.borrow_mut() = false;
        self.state
            .notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::Form));
    }
}
