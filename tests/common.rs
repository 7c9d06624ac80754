#![allow(dead_code)]
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use futures::FutureExt;

use billed_front::dom::{Document, MemoryDocument, MemoryHistory};
use billed_front::error::StoreError;
use billed_front::models::{
    AuthToken, BillPayload, Credentials, NewUser, RawBill, Role, Session, UploadReceipt, UploadRequest,
};
use billed_front::navigator::{NavigationHandle, Navigator};
use billed_front::services::{BillsResource, Store, StoreFuture};
use billed_front::state::{AppContext, SessionState};
use billed_front::utils::MemoryStorage;

/// Store en memoria con contadores de llamadas y respuestas configurables
pub struct FakeStore {
    pub bills: RefCell<Result<Vec<RawBill>, StoreError>>,
    /// Respuestas de `authenticate` en orden; vacío => token "jwt-token"
    pub auth_results: RefCell<VecDeque<Result<AuthToken, StoreError>>>,
    pub create_user_result: RefCell<Result<(), StoreError>>,
    pub upload_result: RefCell<Result<UploadReceipt, StoreError>>,
    pub update_result: RefCell<Result<(), StoreError>>,
    /// Cada `list` consume un gate (si hay) y espera a que se abra
    pub list_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,

    pub authenticate_calls: RefCell<Vec<Credentials>>,
    pub created_users: RefCell<Vec<NewUser>>,
    pub list_calls: Cell<usize>,
    pub uploads: RefCell<Vec<UploadRequest>>,
    pub updates: RefCell<Vec<(BillPayload, String)>>,
}

impl Default for FakeStore {
    fn default() -> Self {
        Self {
            bills: RefCell::new(Ok(Vec::new())),
            auth_results: RefCell::new(VecDeque::new()),
            create_user_result: RefCell::new(Ok(())),
            upload_result: RefCell::new(Ok(UploadReceipt {
                file_url: "https://localhost:3456/images/ticket.jpg".to_string(),
                key: "1234".to_string(),
            })),
            update_result: RefCell::new(Ok(())),
            list_gates: RefCell::new(VecDeque::new()),
            authenticate_calls: RefCell::new(Vec::new()),
            created_users: RefCell::new(Vec::new()),
            list_calls: Cell::new(0),
            uploads: RefCell::new(Vec::new()),
            updates: RefCell::new(Vec::new()),
        }
    }
}

impl FakeStore {
    pub fn with_bills(bills: Vec<RawBill>) -> Self {
        let store = Self::default();
        *store.bills.borrow_mut() = Ok(bills);
        store
    }

    /// El próximo `list` queda pendiente hasta que se envíe por el sender
    pub fn gate_next_list(&self) -> oneshot::Sender<()> {
        let (sender, receiver) = oneshot::channel();
        self.list_gates.borrow_mut().push_back(receiver);
        sender
    }
}

impl Store for FakeStore {
    fn authenticate(&self, credentials: Credentials) -> StoreFuture<'_, AuthToken> {
        self.authenticate_calls.borrow_mut().push(credentials);
        let result = self.auth_results.borrow_mut().pop_front().unwrap_or_else(|| {
            Ok(AuthToken {
                jwt: "jwt-token".to_string(),
            })
        });
        async move { result }.boxed_local()
    }

    fn create_user(&self, user: NewUser) -> StoreFuture<'_, ()> {
        self.created_users.borrow_mut().push(user);
        let result = self.create_user_result.borrow().clone();
        async move { result }.boxed_local()
    }

    fn bills(&self) -> &dyn BillsResource {
        self
    }
}

impl BillsResource for FakeStore {
    fn list(&self) -> StoreFuture<'_, Vec<RawBill>> {
        self.list_calls.set(self.list_calls.get() + 1);
        let gate = self.list_gates.borrow_mut().pop_front();
        let result = self.bills.borrow().clone();
        async move {
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            result
        }
        .boxed_local()
    }

    fn create(&self, upload: UploadRequest) -> StoreFuture<'_, UploadReceipt> {
        self.uploads.borrow_mut().push(upload);
        let result = self.upload_result.borrow().clone();
        async move { result }.boxed_local()
    }

    fn update(&self, data: BillPayload, selector: String) -> StoreFuture<'_, ()> {
        self.updates.borrow_mut().push((data, selector));
        let result = self.update_result.borrow().clone();
        async move { result }.boxed_local()
    }
}

pub fn raw_bill(id: &str, date: &str, status: &str) -> RawBill {
    RawBill {
        id: id.to_string(),
        date: date.to_string(),
        status: status.to_string(),
        name: format!("note {}", id),
        amount: Some(100.0),
        file_url: Some(format!("https://files.test/{}.jpg", id)),
        file_name: Some(format!("{}.jpg", id)),
        email: Some("employee@test.tld".to_string()),
        expense_type: "Hôtel et logement".to_string(),
        vat: "80".to_string(),
        pct: Some(20.0),
        commentary: "séminaire billed".to_string(),
        comment_admin: String::new(),
    }
}

/// App completa sobre documento, storage e historial en memoria
pub struct Harness {
    pub pool: LocalPool,
    pub doc: Rc<MemoryDocument>,
    pub storage: Rc<MemoryStorage>,
    pub history: Rc<MemoryHistory>,
    pub store: Option<Rc<FakeStore>>,
    pub ctx: AppContext,
    pub navigator: Navigator,
}

impl Harness {
    pub fn new(store: Option<FakeStore>, initial_path: &str) -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        let doc = Rc::new(MemoryDocument::new());
        let storage = Rc::new(MemoryStorage::new());
        let history = Rc::new(MemoryHistory::new(initial_path));
        let store = store.map(Rc::new);

        let ctx = AppContext::new(
            doc.clone(),
            store.clone().map(|store| store as Rc<dyn Store>),
            SessionState::new(storage.clone()),
            Rc::new(move |future: LocalBoxFuture<'static, ()>| {
                spawner.spawn_local(future).expect("spawn on local pool");
            }),
        );
        let navigator = Navigator::new(ctx.clone(), history.clone());

        Self {
            pool,
            doc,
            storage,
            history,
            store,
            ctx,
            navigator,
        }
    }

    pub fn store(&self) -> &FakeStore {
        self.store.as_deref().expect("harness without store")
    }

    pub fn sign_in(&self, role: Role, email: &str) {
        self.ctx
            .session
            .sign_in(&Session {
                role,
                identity: email.to_string(),
                auth_token: "jwt-token".to_string(),
            })
            .expect("session write");
    }

    /// Ejecuta todo lo pendiente en el executor
    pub fn run(&mut self) {
        self.pool.run_until_stalled();
    }

    pub fn boot(&mut self) {
        let navigator = self.navigator.clone();
        self.ctx.spawn(async move { navigator.boot().await });
        self.run();
    }

    pub fn navigate(&mut self, path: &str) {
        let navigator = self.navigator.clone();
        let path = path.to_string();
        self.ctx.spawn(async move { navigator.navigate(&path).await });
        self.run();
    }

    /// Botón atrás del navegador
    pub fn back(&mut self) {
        self.history.back();
        let navigator = self.navigator.clone();
        self.ctx.spawn(async move { navigator.on_pop_state().await });
        self.run();
    }

    pub fn current_path(&self) -> String {
        use billed_front::dom::History;
        self.history.current_path()
    }

    pub fn root(&self) -> String {
        self.doc.root()
    }
}

/// Handle que solo registra las rutas pedidas
pub fn recording_handle() -> (NavigationHandle, Rc<RefCell<Vec<billed_front::models::Route>>>) {
    let requests = Rc::new(RefCell::new(Vec::new()));
    let sink = requests.clone();
    let handle = NavigationHandle::from_fn(move |route| sink.borrow_mut().push(route));
    (handle, requests)
}

/// Contexto suelto para probar un controller aislado
pub fn context(doc: Rc<MemoryDocument>, store: Option<Rc<FakeStore>>, storage: Rc<MemoryStorage>) -> AppContext {
    AppContext::new(
        doc as Rc<dyn Document>,
        store.map(|store| store as Rc<dyn Store>),
        SessionState::new(storage),
        Rc::new(|_future: LocalBoxFuture<'static, ()>| {}),
    )
}
