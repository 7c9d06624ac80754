/// Validación del justificante antes del upload
pub trait FileValidator {
    /// Err con el mensaje a mostrar al usuario
    fn validate(&self, file_name: &str) -> Result<(), String>;
}

/// Acepta solo las extensiones configuradas (sin distinguir mayúsculas)
pub struct ExtensionValidator {
    allowed: Vec<String>,
}

impl ExtensionValidator {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed: allowed.into_iter().map(|ext| ext.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn from_config(config: &crate::config::AppConfig) -> Self {
        Self::new(&config.allowed_file_extensions)
    }

    fn message(&self) -> String {
        format!(
            "Seuls les formats de fichier {} sont valides.",
            self.allowed.join(", ")
        )
    }
}

impl FileValidator for ExtensionValidator {
    fn validate(&self, file_name: &str) -> Result<(), String> {
        let name = file_name.rsplit(['\\', '/']).next().unwrap_or(file_name);
        let extension = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
            _ => return Err(self.message()),
        };
        if self.allowed.iter().any(|allowed| *allowed == extension) {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> ExtensionValidator {
        ExtensionValidator::new(["jpg", "jpeg", "png"])
    }

    #[test]
    fn accepts_images_case_insensitively() {
        assert!(validator().validate("ticket.PNG").is_ok());
        assert!(validator().validate("C:\\fakepath\\facture.jpeg").is_ok());
    }

    #[test]
    fn rejects_other_extensions_and_bare_names() {
        let err = validator().validate("facture.pdf").unwrap_err();
        assert_eq!(err, "Seuls les formats de fichier jpg, jpeg, png sont valides.");
        assert!(validator().validate("png").is_err());
        assert!(validator().validate(".png").is_err());
        assert!(validator().validate("").is_err());
    }
}
