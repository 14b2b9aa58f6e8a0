//! Department staff domain models.

/// Name parts of a person as stored on the user account.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonName {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
}

impl PersonName {
    pub fn from_entity(user: &entity::users::Model) -> Self {
        Self {
            first_name: user.first_name.clone(),
            middle_name: user.middle_name.clone(),
            last_name: user.last_name.clone(),
        }
    }

    /// `"Last First Middle"`, skipping empty parts.
    pub fn full_name(&self) -> String {
        [
            self.last_name.as_str(),
            self.first_name.as_str(),
            self.middle_name.as_deref().unwrap_or_default(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// `"Last F.M."` label used in supervisor selectors.
    pub fn short_label(&self) -> String {
        let initials: String = [
            Some(self.first_name.as_str()),
            self.middle_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter_map(|part| part.chars().next())
        .map(|c| format!("{}.", c))
        .collect();

        format!("{} {}", self.last_name, initials)
    }
}

/// A staff member as listed on the department page.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffMember {
    pub id: i32,
    pub name: String,
    /// Position with the science degree appended when there is one.
    pub position: String,
    pub contacts: Option<String>,
    pub avatar: Option<String>,
}

impl StaffMember {
    pub fn from_entity(staff: entity::staff::Model, user: &entity::users::Model) -> Self {
        let position = match staff.science_degree.as_deref() {
            Some(degree) if !degree.is_empty() => format!("{}, {}", staff.position, degree),
            _ => staff.position,
        };

        Self {
            id: staff.id,
            name: PersonName::from_entity(user).full_name(),
            position,
            contacts: staff.official_email,
            avatar: user.avatar_uri.clone(),
        }
    }
}
