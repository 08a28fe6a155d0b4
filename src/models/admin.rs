use serde::{Deserialize, Serialize};

/// Perfil del administrador logueado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub f_name: String,
    pub l_name: String,
    pub contact_number: String,
    pub email_address: String,
}

impl AdminProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.f_name, self.l_name)
    }

    /// Ningún campo puede quedar vacío al actualizar el perfil.
    pub fn is_complete(&self) -> bool {
        !self.f_name.trim().is_empty()
            && !self.l_name.trim().is_empty()
            && !self.contact_number.trim().is_empty()
            && !self.email_address.trim().is_empty()
    }
}

/// Datos del formulario de registro de un admin nuevo.
#[derive(Debug, Clone, Serialize)]
pub struct SignUpData {
    pub f_name: String,
    pub l_name: String,
    pub email_id: String,
    pub contact: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AdminProfile {
        AdminProfile {
            f_name: "Ana".into(),
            l_name: "García".into(),
            contact_number: "600123456".into(),
            email_address: "ana@example.com".into(),
        }
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(profile().full_name(), "Ana García");
    }

    #[test]
    fn blank_field_makes_profile_incomplete() {
        let mut p = profile();
        assert!(p.is_complete());
        p.contact_number = "   ".into();
        assert!(!p.is_complete());
    }
}
