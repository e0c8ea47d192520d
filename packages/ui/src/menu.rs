//! Dashboard menu entries with role-based visibility.

use store::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub admin_only: bool,
}

pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        label: "Clientes",
        path: "/clientes",
        admin_only: false,
    },
    MenuEntry {
        label: "Obras",
        path: "/obras",
        admin_only: false,
    },
    MenuEntry {
        label: "Cadastrar Usuário",
        path: "/register",
        admin_only: true,
    },
];

/// Entries the given role may see. Admin implies everything.
pub fn visible_entries(role: UserRole) -> impl Iterator<Item = &'static MenuEntry> {
    MENU.iter().filter(move |e| !e.admin_only || role.is_admin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_sees_the_registration_entry() {
        let labels: Vec<_> = visible_entries(UserRole::Admin).map(|e| e.label).collect();
        assert!(labels.contains(&"Cadastrar Usuário"));
    }

    #[test]
    fn gestor_does_not_see_admin_entries() {
        let labels: Vec<_> = visible_entries(UserRole::Gestor).map(|e| e.label).collect();
        assert_eq!(labels, vec!["Clientes", "Obras"]);
    }
}
