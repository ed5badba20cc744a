/// Clave de localStorage donde se guarda la persona logueada (JSON)
pub const STORAGE_KEY_PERSON: &str = "fitcare_person";
