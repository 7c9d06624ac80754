// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Implementación de `Store` sobre el backend REST de Billed.
// El token se lee del storage en cada request (clave `jwt`).
// ============================================================================

use std::rc::Rc;

use futures::FutureExt;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;

use crate::error::StoreError;
use crate::models::{AuthToken, BillPayload, Credentials, NewUser, RawBill, UploadReceipt, UploadRequest};
use crate::services::{BillsResource, Store, StoreFuture};
use crate::utils::{SessionStorage, JWT_KEY};

/// Cliente API - SOLO comunicación HTTP
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    storage: Rc<dyn SessionStorage>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiClient {
    pub fn new(base_url: &str, storage: Rc<dyn SessionStorage>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            storage,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.storage.get_item(JWT_KEY) {
            Some(jwt) if !jwt.is_empty() => builder.header("Authorization", &format!("Bearer {}", jwt)),
            _ => builder,
        }
    }

    async fn send(request: Request) -> Result<Response, StoreError> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        // Mensaje del servidor si lo hay, si no "Erreur {status}"
        match response.json::<ErrorBody>().await {
            Ok(body) if !body.message.is_empty() => Err(StoreError::Rejected(body.message)),
            _ => Err(StoreError::Http { status }),
        }
    }
}

impl Store for ApiClient {
    fn authenticate(&self, credentials: Credentials) -> StoreFuture<'_, AuthToken> {
        async move {
            log::info!("🔐 [API] Login de {}", credentials.email);
            let request = Request::post(&self.url("/auth/login"))
                .json(&credentials)
                .map_err(|e| StoreError::Parse(e.to_string()))?;
            let response = Self::send(request).await?;
            response
                .json::<AuthToken>()
                .await
                .map_err(|e| StoreError::Parse(e.to_string()))
        }
        .boxed_local()
    }

    fn create_user(&self, user: NewUser) -> StoreFuture<'_, ()> {
        async move {
            log::info!("👤 [API] Alta de usuario {}", user.email);
            let request = Request::post(&self.url("/users"))
                .json(&user)
                .map_err(|e| StoreError::Parse(e.to_string()))?;
            Self::send(request).await.map(|_| ())
        }
        .boxed_local()
    }

    fn bills(&self) -> &dyn BillsResource {
        self
    }
}

impl BillsResource for ApiClient {
    fn list(&self) -> StoreFuture<'_, Vec<RawBill>> {
        async move {
            let request = self
                .authorized(Request::get(&self.url("/bills")))
                .build()
                .map_err(|e| StoreError::Parse(e.to_string()))?;
            let response = Self::send(request).await?;
            response
                .json::<Vec<RawBill>>()
                .await
                .map_err(|e| StoreError::Parse(e.to_string()))
        }
        .boxed_local()
    }

    fn create(&self, upload: UploadRequest) -> StoreFuture<'_, UploadReceipt> {
        async move {
            log::info!("📎 [API] Subiendo justificante {}", upload.file.base_name());
            let form = web_sys::FormData::new().map_err(|e| StoreError::Parse(format!("{:?}", e)))?;
            form.append_with_blob("file", &upload.file.handle)
                .map_err(|e| StoreError::Parse(format!("{:?}", e)))?;
            form.append_with_str("email", &upload.email)
                .map_err(|e| StoreError::Parse(format!("{:?}", e)))?;
            // Sin Content-Type: el navegador pone el boundary multipart
            let request = self
                .authorized(Request::post(&self.url("/bills")))
                .body(form)
                .map_err(|e| StoreError::Parse(e.to_string()))?;
            let response = Self::send(request).await?;
            response
                .json::<UploadReceipt>()
                .await
                .map_err(|e| StoreError::Parse(e.to_string()))
        }
        .boxed_local()
    }

    fn update(&self, data: BillPayload, selector: String) -> StoreFuture<'_, ()> {
        async move {
            log::info!("📝 [API] Actualizando nota {}", selector);
            let request = self
                .authorized(Request::patch(&self.url(&format!("/bills/{}", selector))))
                .json(&data)
                .map_err(|e| StoreError::Parse(e.to_string()))?;
            Self::send(request).await.map(|_| ())
        }
        .boxed_local()
    }
}
