// ============================================================================
// VIEW CONTROLLER - LÓGICA DE LA PANTALLA DE PROPS
// ============================================================================
// Sin DOM: recibe los colaboradores inyectados, actualiza ViewState y
// deriva el Screen. Las views solo pintan lo que devuelve `screen()`.
// ============================================================================

use std::rc::Rc;

use crate::error::AppError;
use crate::models::GivePropsArgs;
use crate::services::{Alerts, RecordStore, SessionProvider};
use crate::state::{SessionState, SessionStatus, UpdateType, ViewState};
use crate::utils::SUBMIT_FAILED_ALERT;
use crate::viewmodels::Screen;

#[derive(Clone)]
pub struct ViewController {
    session: Rc<dyn SessionProvider>,
    store: Rc<dyn RecordStore>,
    alerts: Rc<dyn Alerts>,
    session_state: SessionState,
    state: ViewState,
}

impl ViewController {
    pub fn new(session: Rc<dyn SessionProvider>, store: Rc<dyn RecordStore>, alerts: Rc<dyn Alerts>) -> Self {
        let controller = Self {
            session,
            store,
            alerts,
            session_state: SessionState::new(),
            state: ViewState::new(),
        };
        controller.session_state.replace_status(controller.read_status());
        controller
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.session_state.get_status()
    }

    pub fn screen(&self) -> Screen {
        Screen::derive(&self.session_state.get_status(), &self.state)
    }

    fn read_status(&self) -> SessionStatus {
        if self.session.is_signed_in() {
            SessionStatus::SignedIn {
                account_id: self.session.account_id().unwrap_or_default(),
            }
        } else {
            SessionStatus::SignedOut
        }
    }

    /// Carga inicial del montaje. Solo la primera llamada hace fetch.
    pub async fn initialize(&self) {
        if !self.session_state.get_status().is_signed_in() {
            log::info!("🔒 [CONTROLLER] Sin sesión, mostrando login");
            return;
        }
        if !self.state.claim_initial_fetch() {
            log::debug!("⏭️ [CONTROLLER] Carga inicial ya lanzada en este montaje");
            return;
        }
        self.load_recent_props().await;
    }

    async fn load_recent_props(&self) {
        let mount = self.state.current_mount();
        let result = self.store.get_recent_props().await;
        if !self.state.is_current_mount(mount) {
            log::debug!("⏭️ [CONTROLLER] Carga de un montaje anterior descartada");
            return;
        }

        match result {
            Ok(records) => {
                log::info!("📋 [CONTROLLER] {} props recientes cargados", records.len());
                self.state.set_recent_records(records);
            }
            Err(e) => {
                log::error!("❌ [CONTROLLER] Error cargando props recientes: {}", e);
                self.state.set_load_error(Some(e.to_string()));
            }
        }
    }

    /// Enviar props. Sin validación: cualquier string se reenvía tal cual.
    /// En error muestra la alerta y devuelve el error al llamador.
    pub async fn submit(&self, receiver: String, message: String) -> Result<(), AppError> {
        let Some(guard) = self.state.begin_submit() else {
            log::warn!("⚠️ [CONTROLLER] Envío ignorado, ya hay uno en curso");
            return Err(AppError::SubmitInProgress);
        };

        log::info!("🎁 [CONTROLLER] Enviando props a '{}'", receiver);
        let mount = self.state.current_mount();
        let result = self.store.give_props(GivePropsArgs { receiver, message }).await;

        match result {
            Ok(()) => {
                drop(guard);
                if !self.state.is_current_mount(mount) {
                    log::debug!("⏭️ [CONTROLLER] Sesión cambiada durante el envío, sin recarga");
                    return Ok(());
                }
                // El contrato asigna sender/timestamp: recargar en vez de insertar localmente
                self.load_recent_props().await;
                Ok(())
            }
            Err(e) => {
                self.alerts.alert(SUBMIT_FAILED_ALERT);
                drop(guard);
                Err(e)
            }
        }
    }

    pub async fn sign_in(&self) -> Result<(), AppError> {
        self.session.request_sign_in().await?;
        self.refresh_session().await;
        Ok(())
    }

    pub async fn sign_out(&self) {
        self.session.sign_out();
        self.refresh_session().await;
    }

    /// Releer la sesión y hacer la transición si cambió.
    /// Entrar en SignedIn cuenta como montaje nuevo.
    pub async fn refresh_session(&self) {
        let status = self.read_status();
        if !self.session_state.replace_status(status.clone()) {
            return;
        }

        match &status {
            SessionStatus::SignedIn { account_id } => {
                log::info!("🔓 [CONTROLLER] Sesión iniciada como {}", account_id);
            }
            SessionStatus::SignedOut => log::info!("🔒 [CONTROLLER] Sesión cerrada"),
        }

        self.state.reset();
        self.state.notify_subscribers_with_type(UpdateType::FullRender);
        self.initialize().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropRecord;
    use crate::services::{Alerts, RecordStore, SessionProvider};
    use crate::state::IncrementalUpdate;
    use crate::viewmodels::SignedInScreen;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    struct FakeSession {
        account: RefCell<Option<String>>,
        sign_in_as: RefCell<Option<String>>,
    }

    impl FakeSession {
        fn signed_out() -> Rc<Self> {
            Rc::new(Self {
                account: RefCell::new(None),
                sign_in_as: RefCell::new(Some("dave.testnet".to_string())),
            })
        }

        fn signed_in(account: &str) -> Rc<Self> {
            Rc::new(Self {
                account: RefCell::new(Some(account.to_string())),
                sign_in_as: RefCell::new(None),
            })
        }
    }

    #[async_trait(?Send)]
    impl SessionProvider for FakeSession {
        fn is_signed_in(&self) -> bool {
            self.account.borrow().is_some()
        }

        fn account_id(&self) -> Option<String> {
            self.account.borrow().clone()
        }

        async fn request_sign_in(&self) -> Result<(), AppError> {
            match self.sign_in_as.borrow().clone() {
                Some(account) => {
                    *self.account.borrow_mut() = Some(account);
                    Ok(())
                }
                None => Err(AppError::Wallet("rejected".to_string())),
            }
        }

        fn sign_out(&self) {
            *self.account.borrow_mut() = None;
        }
    }

    #[derive(Default)]
    struct FakeStore {
        records: RefCell<Vec<PropRecord>>,
        fail_fetch: Cell<bool>,
        fail_give: Cell<bool>,
        fetches: Cell<u32>,
        given: RefCell<Vec<GivePropsArgs>>,
        /// Estado observado durante `give_props`
        probe: RefCell<Option<ViewState>>,
        submitting_during_call: RefCell<Vec<bool>>,
        /// Segundo envío lanzado desde dentro de `give_props`
        reentrant: RefCell<Option<ViewController>>,
        reentrant_result: RefCell<Option<Result<(), AppError>>>,
        /// Cerrar sesión (y opcionalmente volver a entrar y empezar otro envío)
        /// mientras `give_props` está en curso
        flip_session: RefCell<Option<ViewController>>,
        sign_back_in: Cell<bool>,
        next_submit: RefCell<Option<crate::state::SubmittingGuard>>,
    }

    #[async_trait(?Send)]
    impl RecordStore for FakeStore {
        async fn get_recent_props(&self) -> Result<Vec<PropRecord>, AppError> {
            self.fetches.set(self.fetches.get() + 1);
            if self.fail_fetch.get() {
                return Err(AppError::Network("offline".to_string()));
            }
            Ok(self.records.borrow().clone())
        }

        async fn give_props(&self, args: GivePropsArgs) -> Result<(), AppError> {
            if let Some(state) = self.probe.borrow().as_ref() {
                self.submitting_during_call.borrow_mut().push(state.is_submitting());
            }
            let reentrant = self.reentrant.borrow_mut().take();
            if let Some(controller) = reentrant {
                let second = controller.submit("eve".to_string(), "again".to_string()).await;
                *self.reentrant_result.borrow_mut() = Some(second);
            }
            let flip = self.flip_session.borrow_mut().take();
            if let Some(controller) = flip {
                controller.sign_out().await;
                if self.sign_back_in.get() {
                    controller.sign_in().await?;
                    *self.next_submit.borrow_mut() = controller.state().begin_submit();
                }
            }

            self.given.borrow_mut().push(args.clone());
            if self.fail_give.get() {
                return Err(AppError::Wallet("transaction rejected".to_string()));
            }
            self.records.borrow_mut().push(PropRecord {
                sender: "alice".to_string(),
                receiver: args.receiver,
                message: args.message,
                timestamp: 2,
            });
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeAlerts {
        shown: RefCell<Vec<String>>,
    }

    impl Alerts for FakeAlerts {
        fn alert(&self, message: &str) {
            self.shown.borrow_mut().push(message.to_string());
        }
    }

    fn thanks() -> PropRecord {
        PropRecord {
            sender: "alice".to_string(),
            receiver: "bob".to_string(),
            message: "thanks".to_string(),
            timestamp: 1,
        }
    }

    fn store_with(records: Vec<PropRecord>) -> Rc<FakeStore> {
        let store = FakeStore::default();
        *store.records.borrow_mut() = records;
        Rc::new(store)
    }

    fn signed_in_screen(controller: &ViewController) -> SignedInScreen {
        match controller.screen() {
            Screen::SignedIn(screen) => screen,
            Screen::SignedOut => panic!("expected signed-in screen"),
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn signed_out_shows_prompt_and_skips_fetch() {
        let store = store_with(vec![thanks()]);
        let controller = ViewController::new(FakeSession::signed_out(), store.clone(), Rc::new(FakeAlerts::default()));

        controller.initialize().await;

        assert_eq!(controller.screen(), Screen::SignedOut);
        assert_eq!(store.fetches.get(), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn signed_in_lists_recent_props() {
        let store = store_with(vec![thanks()]);
        let controller =
            ViewController::new(FakeSession::signed_in("alice.testnet"), store.clone(), Rc::new(FakeAlerts::default()));

        controller.initialize().await;

        let screen = signed_in_screen(&controller);
        assert_eq!(screen.greeting(), "Hello, alice.testnet!");
        assert_eq!(screen.summaries(), vec!["alice gave bob props for: thanks".to_string()]);
        assert!(!screen.form_disabled);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn fetch_runs_once_per_mount() {
        let store = store_with(vec![thanks()]);
        let controller =
            ViewController::new(FakeSession::signed_in("alice.testnet"), store.clone(), Rc::new(FakeAlerts::default()));

        controller.initialize().await;
        controller.initialize().await;
        // Cambios de estado no relacionados no relanzan la carga
        controller.state().set_load_error(None);
        controller.initialize().await;

        assert_eq!(store.fetches.get(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn fetch_failure_becomes_error_state() {
        let store = store_with(vec![]);
        store.fail_fetch.set(true);
        let alerts = Rc::new(FakeAlerts::default());
        let controller = ViewController::new(FakeSession::signed_in("alice.testnet"), store.clone(), alerts.clone());

        controller.initialize().await;

        let screen = signed_in_screen(&controller);
        assert_eq!(screen.load_error.as_deref(), Some("Network error: offline"));
        assert!(screen.records.is_empty());
        assert!(alerts.shown.borrow().is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn successful_submit_toggles_flag_and_refreshes() {
        let store = store_with(vec![thanks()]);
        let alerts = Rc::new(FakeAlerts::default());
        let controller = ViewController::new(FakeSession::signed_in("alice.testnet"), store.clone(), alerts.clone());
        *store.probe.borrow_mut() = Some(controller.state().clone());
        controller.initialize().await;

        controller
            .submit("carol".to_string(), "great job".to_string())
            .await
            .expect("submit succeeds");

        assert_eq!(*store.submitting_during_call.borrow(), vec![true]);
        assert!(!controller.state().is_submitting());
        assert!(alerts.shown.borrow().is_empty());
        assert_eq!(
            *store.given.borrow(),
            vec![GivePropsArgs { receiver: "carol".to_string(), message: "great job".to_string() }]
        );
        // mount + recarga tras el envío
        assert_eq!(store.fetches.get(), 2);
        assert_eq!(
            signed_in_screen(&controller).summaries().last().map(String::as_str),
            Some("alice gave carol props for: great job")
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_submit_alerts_once_and_returns_error() {
        let store = store_with(vec![thanks()]);
        store.fail_give.set(true);
        let alerts = Rc::new(FakeAlerts::default());
        let controller = ViewController::new(FakeSession::signed_in("alice.testnet"), store.clone(), alerts.clone());
        *store.probe.borrow_mut() = Some(controller.state().clone());

        let err = controller
            .submit("carol".to_string(), "great job".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, AppError::Wallet("transaction rejected".to_string()));
        assert_eq!(*alerts.shown.borrow(), vec![SUBMIT_FAILED_ALERT.to_string()]);
        assert_eq!(*store.submitting_during_call.borrow(), vec![true]);
        assert!(!controller.state().is_submitting());
        assert_eq!(store.fetches.get(), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn empty_fields_are_forwarded() {
        let store = store_with(vec![]);
        let controller =
            ViewController::new(FakeSession::signed_in("alice.testnet"), store.clone(), Rc::new(FakeAlerts::default()));

        controller.submit(String::new(), String::new()).await.unwrap();

        assert_eq!(
            *store.given.borrow(),
            vec![GivePropsArgs { receiver: String::new(), message: String::new() }]
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn second_submit_in_flight_is_rejected() {
        let store = store_with(vec![]);
        let controller =
            ViewController::new(FakeSession::signed_in("alice.testnet"), store.clone(), Rc::new(FakeAlerts::default()));
        *store.reentrant.borrow_mut() = Some(controller.clone());

        controller.submit("carol".to_string(), "first".to_string()).await.unwrap();

        assert_eq!(*store.reentrant_result.borrow(), Some(Err(AppError::SubmitInProgress)));
        assert_eq!(store.given.borrow().len(), 1);
        assert!(!controller.state().is_submitting());
    }

    fn returning_session(account: &str) -> Rc<FakeSession> {
        Rc::new(FakeSession {
            account: RefCell::new(Some(account.to_string())),
            sign_in_as: RefCell::new(Some(account.to_string())),
        })
    }

    #[tokio::test(flavor = "current_thread")]
    async fn submit_from_previous_session_keeps_new_submit_flag() {
        let store = store_with(vec![thanks()]);
        let controller =
            ViewController::new(returning_session("alice.testnet"), store.clone(), Rc::new(FakeAlerts::default()));
        *store.flip_session.borrow_mut() = Some(controller.clone());
        store.sign_back_in.set(true);

        controller.submit("carol".to_string(), "first".to_string()).await.unwrap();

        // El envío de la nueva sesión sigue en curso
        assert!(store.next_submit.borrow().is_some());
        assert!(controller.state().is_submitting());
        assert!(signed_in_screen(&controller).form_disabled);
        assert!(controller.state().begin_submit().is_none());
        // Solo la carga del nuevo montaje, sin recarga del envío viejo
        assert_eq!(store.fetches.get(), 1);

        store.next_submit.borrow_mut().take();
        assert!(!controller.state().is_submitting());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn submit_finishing_after_sign_out_leaves_signed_out_state_empty() {
        let store = store_with(vec![thanks()]);
        let controller =
            ViewController::new(FakeSession::signed_in("alice.testnet"), store.clone(), Rc::new(FakeAlerts::default()));
        *store.flip_session.borrow_mut() = Some(controller.clone());

        controller.submit("carol".to_string(), "bye".to_string()).await.unwrap();

        assert_eq!(controller.screen(), Screen::SignedOut);
        assert!(controller.state().recent_records().is_empty());
        assert!(!controller.state().is_submitting());
        assert_eq!(store.fetches.get(), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn form_disabled_while_submitting() {
        let store = store_with(vec![]);
        let controller =
            ViewController::new(FakeSession::signed_in("alice.testnet"), store.clone(), Rc::new(FakeAlerts::default()));

        let guard = controller.state().begin_submit();
        assert!(signed_in_screen(&controller).form_disabled);
        drop(guard);
        assert!(!signed_in_screen(&controller).form_disabled);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn sign_in_transitions_and_loads() {
        let session = FakeSession::signed_out();
        let store = store_with(vec![thanks()]);
        let controller = ViewController::new(session.clone(), store.clone(), Rc::new(FakeAlerts::default()));
        let updates = Rc::new(RefCell::new(Vec::new()));
        {
            let updates = updates.clone();
            controller.state().subscribe_to_changes(move |u| updates.borrow_mut().push(u));
        }

        controller.sign_in().await.unwrap();

        let screen = signed_in_screen(&controller);
        assert_eq!(screen.account_id, "dave.testnet");
        assert_eq!(screen.records, vec![thanks()]);
        assert_eq!(store.fetches.get(), 1);
        assert_eq!(
            *updates.borrow(),
            vec![UpdateType::FullRender, UpdateType::Incremental(IncrementalUpdate::RecentProps)]
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rejected_sign_in_keeps_prompt() {
        let session = FakeSession::signed_out();
        *session.sign_in_as.borrow_mut() = None;
        let controller = ViewController::new(session, store_with(vec![]), Rc::new(FakeAlerts::default()));

        assert!(controller.sign_in().await.is_err());
        assert_eq!(controller.screen(), Screen::SignedOut);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn sign_out_resets_view_state() {
        let store = store_with(vec![thanks()]);
        let controller =
            ViewController::new(FakeSession::signed_in("alice.testnet"), store.clone(), Rc::new(FakeAlerts::default()));
        controller.initialize().await;

        controller.sign_out().await;

        assert_eq!(controller.screen(), Screen::SignedOut);
        assert!(controller.state().recent_records().is_empty());
        assert!(!*controller.state().fetch_started.borrow());
        assert_eq!(store.fetches.get(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn refresh_without_change_is_a_noop() {
        let store = store_with(vec![thanks()]);
        let controller =
            ViewController::new(FakeSession::signed_in("alice.testnet"), store.clone(), Rc::new(FakeAlerts::default()));
        controller.initialize().await;

        controller.refresh_session().await;

        assert_eq!(store.fetches.get(), 1);
        assert_eq!(signed_in_screen(&controller).records, vec![thanks()]);
    }
}
