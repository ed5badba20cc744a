use serde::{Deserialize, Serialize};

use crate::models::person::UserRole;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

/// Body de `POST /pessoas` (registro)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignUpRequest {
    #[serde(rename = "nome")]
    pub first_name: String,
    #[serde(rename = "sobrenome")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "tipoUsuario")]
    pub role: UserRole,
}

impl SignUpRequest {
    /// Validación mínima antes de llamar al backend
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("Informe o nome".to_string());
        }
        if !self.email.contains('@') {
            return Err("E-mail inválido".to_string());
        }
        if self.password.len() < 6 {
            return Err("A senha precisa ter ao menos 6 caracteres".to_string());
        }
        Ok(())
    }
}
