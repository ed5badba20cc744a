use serde::{Deserialize, Serialize};

// ============================================================================
// PERSON - Identidad del usuario logueado (paciente o profesional)
// ============================================================================

/// Tipo de usuario (el backend lo envía como `tipoUsuario`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Patient,
    Nutritionist,
    PhysicalEducator,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Patient => "Paciente",
            UserRole::Nutritionist => "Nutricionista",
            UserRole::PhysicalEducator => "Educador físico",
        }
    }

    pub fn is_professional(&self) -> bool {
        !matches!(self, UserRole::Patient)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "logradouro", default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(rename = "numero", default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(rename = "cidade", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "cep", default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    #[serde(rename = "nome")]
    pub first_name: String,
    #[serde(rename = "sobrenome", default)]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "telefone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "endereco", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(rename = "tipoUsuario")]
    pub role: UserRole,
}

impl Person {
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Edición parcial de dirección: `None` no toca el campo, `Some(None)` lo borra
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressPatch {
    pub street: Option<Option<String>>,
    pub number: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub state: Option<Option<String>>,
    pub postal_code: Option<Option<String>>,
}

impl AddressPatch {
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.number.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
    }

    fn apply(&self, address: &mut Address) {
        merge(&mut address.street, &self.street);
        merge(&mut address.number, &self.number);
        merge(&mut address.city, &self.city);
        merge(&mut address.state, &self.state);
        merge(&mut address.postal_code, &self.postal_code);
    }
}

/// Edición parcial del perfil.
///
/// `id` y `role` no son editables: el patch nunca cambia la identidad.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// `Some(None)` borra el teléfono
    pub phone: Option<Option<String>>,
    pub address: Option<AddressPatch>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.as_ref().map_or(true, AddressPatch::is_empty)
    }

    /// Devuelve una copia de `person` con los cambios aplicados
    pub fn apply(&self, person: &Person) -> Person {
        let mut updated = person.clone();

        if let Some(first_name) = &self.first_name {
            updated.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            updated.last_name = last_name.clone();
        }
        if let Some(email) = &self.email {
            updated.email = email.clone();
        }
        merge(&mut updated.phone, &self.phone);

        if let Some(patch) = self.address.as_ref().filter(|p| !p.is_empty()) {
            patch.apply(updated.address.get_or_insert_with(Address::default));
            if updated.address.as_ref() == Some(&Address::default()) {
                updated.address = None;
            }
        }

        updated
    }
}

fn merge(target: &mut Option<String>, value: &Option<Option<String>>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}
