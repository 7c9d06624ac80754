/// Clave de la sesión serializada (`StoredUser`)
pub const USER_KEY: &str = "user";

/// Clave del token de autenticación
pub const JWT_KEY: &str = "jwt";

/// id del contenedor raíz que se reemplaza en cada render
pub const ROOT_ID: &str = "root";
