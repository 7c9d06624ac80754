// ============================================================================
// STORE - Contrato del backend (auth + recurso "bills")
// ============================================================================
// Sin lógica de negocio: solo las operaciones remotas que consume la app.
// Todo corre en el hilo de UI, por eso los futures no son Send.
// ============================================================================

use futures::future::LocalBoxFuture;

use crate::error::StoreError;
use crate::models::{AuthToken, BillPayload, Credentials, NewUser, RawBill, UploadReceipt, UploadRequest};

pub type StoreFuture<'a, T> = LocalBoxFuture<'a, Result<T, StoreError>>;

pub trait Store {
    fn authenticate(&self, credentials: Credentials) -> StoreFuture<'_, AuthToken>;

    fn create_user(&self, user: NewUser) -> StoreFuture<'_, ()>;

    /// Recurso "bills"
    fn bills(&self) -> &dyn BillsResource;
}

pub trait BillsResource {
    fn list(&self) -> StoreFuture<'_, Vec<RawBill>>;

    /// Sube el justificante; devuelve su URL y la clave de la nota creada
    fn create(&self, upload: UploadRequest) -> StoreFuture<'_, UploadReceipt>;

    /// Actualiza la nota identificada por `selector`
    fn update(&self, data: BillPayload, selector: String) -> StoreFuture<'_, ()>;
}
