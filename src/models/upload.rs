use serde::{Deserialize, Serialize};

/// Archivo elegido en un `<input type="file">`.
/// En el navegador conserva el `File` para el upload multipart.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    #[cfg(target_arch = "wasm32")]
    pub handle: web_sys::File,
}

impl SelectedFile {
    /// Nombre sin la ruta falsa que añaden algunos navegadores (C:\fakepath\...)
    pub fn base_name(&self) -> &str {
        self.name.rsplit(['\\', '/']).next().unwrap_or(&self.name)
    }
}

#[derive(Clone, Debug)]
pub struct UploadRequest {
    pub file: SelectedFile,
    pub email: String,
}

/// Respuesta del store al subir un justificante
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub file_url: String,
    pub key: String,
}
