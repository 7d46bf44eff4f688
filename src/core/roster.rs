//! Staff roster: the ordered list of staff members with lookup by id.

use std::collections::HashMap;

use crate::errors::{AppError, AppResult};
use crate::models::StaffMember;

#[derive(Debug, Clone, Default)]
pub struct StaffRoster {
    members: Vec<StaffMember>,
    by_id: HashMap<String, usize>,
}

impl StaffRoster {
    pub fn build(members: Vec<StaffMember>) -> AppResult<Self> {
        let mut by_id = HashMap::with_capacity(members.len());

        for (i, m) in members.iter().enumerate() {
            if m.weekday_rate <= 0 || m.holiday_rate <= 0 {
                return Err(AppError::InvalidRate(m.id.clone()));
            }
            if by_id.insert(m.id.clone(), i).is_some() {
                return Err(AppError::DuplicateStaff(m.id.clone()));
            }
        }

        Ok(Self { members, by_id })
    }

    pub fn get(&self, id: &str) -> Option<&StaffMember> {
        self.by_id.get(id).map(|&i| &self.members[i])
    }

    pub fn members(&self) -> &[StaffMember] {
        &self.members
    }

    pub fn with_role<'a>(&'a self, role: &'a str) -> impl Iterator<Item = &'a StaffMember> + 'a {
        self.members.iter().filter(move |m| m.role == role)
    }

    /// Distinct roles in first-seen roster order.
    pub fn roles(&self) -> Vec<String> {
        let mut roles: Vec<String> = Vec::new();
        for m in &self.members {
            if !roles.contains(&m.role) {
                roles.push(m.role.clone());
            }
        }
        roles
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
