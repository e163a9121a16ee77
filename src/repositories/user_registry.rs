//! Registro de identidad
//!
//! Usuarios indexados por nombre, con el orden de registro preservado
//! para que los reportes sean deterministas.

use std::collections::HashMap;

use crate::models::user::User;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::{AppError, AppResult};

#[derive(Debug, Default)]
pub struct UserRegistry {
    users: HashMap<String, User>,
    insertion_order: Vec<String>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alta de usuario; el nombre es la identidad
    pub fn register(&mut self, user: User) -> AppResult<()> {
        if self.users.contains_key(&user.name) {
            return Err(AppError::DuplicateUser(user.name));
        }
        self.insertion_order.push(user.name.clone());
        self.users.insert(user.name.clone(), user);
        Ok(())
    }

    /// Alta de vehículo para un dueño existente. No se comprueba unicidad
    /// de (nombre, matrícula) entre usuarios: eso lo impone el offer.
    pub fn add_vehicle(&mut self, owner_name: &str, vehicle: Vehicle) -> AppResult<()> {
        let user = self
            .users
            .get_mut(owner_name)
            .ok_or_else(|| AppError::UnknownUser(owner_name.to_string()))?;
        user.add_vehicle(vehicle);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut User> {
        self.users.get_mut(name)
    }

    /// Usuarios en orden de registro
    pub fn iter_in_order(&self) -> impl Iterator<Item = &User> {
        self.insertion_order.iter().filter_map(|name| self.users.get(name))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_duplicate_name() {
        let mut registry = UserRegistry::new();
        registry.register(User::new("Amit".to_string(), 36)).unwrap();

        let err = registry.register(User::new("Amit".to_string(), 40)).unwrap_err();
        assert!(matches!(err, AppError::DuplicateUser(name) if name == "Amit"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_vehicle_requires_known_owner() {
        let mut registry = UserRegistry::new();
        let vehicle = Vehicle::new("Ghost".to_string(), "Swift".to_string(), "KA-01-12345".to_string());

        let err = registry.add_vehicle("Ghost", vehicle).unwrap_err();
        assert!(matches!(err, AppError::UnknownUser(name) if name == "Ghost"));
    }

    #[test]
    fn test_find_vehicle_returns_first_match_by_name() {
        let mut registry = UserRegistry::new();
        registry.register(User::new("Ritu".to_string(), 27)).unwrap();
        registry
            .add_vehicle("Ritu", Vehicle::new("Ritu".to_string(), "Polo".to_string(), "KA-05-41491".to_string()))
            .unwrap();
        registry
            .add_vehicle("Ritu", Vehicle::new("Ritu".to_string(), "Polo".to_string(), "KA-99-00000".to_string()))
            .unwrap();

        let found = registry.get("Ritu").unwrap().find_vehicle("Polo").unwrap();
        assert_eq!(found.number, "KA-05-41491");
    }

    #[test]
    fn test_iteration_preserves_registration_order() {
        let mut registry = UserRegistry::new();
        for name in ["Amit", "Neeraj", "Sneha"] {
            registry.register(User::new(name.to_string(), 30)).unwrap();
        }

        let names: Vec<&str> = registry.iter_in_order().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Amit", "Neeraj", "Sneha"]);
    }
}
