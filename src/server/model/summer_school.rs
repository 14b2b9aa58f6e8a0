/// Year of the summer school edition published on the site.
pub const SUMMER_SCHOOL_YEAR: i32 = 2021;

#[derive(Debug, Clone, PartialEq)]
pub struct SummerSchoolProject {
    pub id: i32,
    pub project_name: String,
    pub description: String,
    pub tech: Option<String>,
    /// Repository links, one per line in the admin form.
    pub repos: Vec<String>,
    /// Demo links, one per line in the admin form.
    pub demos: Vec<String>,
    pub advisors: Option<String>,
    pub requirements: Option<String>,
}

impl SummerSchoolProject {
    pub fn from_entity(entity: entity::summer_school::Model) -> Self {
        Self {
            id: entity.id,
            project_name: entity.project_name,
            description: entity.description,
            tech: entity.tech,
            repos: split_lines(entity.repo.as_deref()),
            demos: split_lines(entity.demos.as_deref()),
            advisors: entity.advisors,
            requirements: entity.requirements,
        }
    }
}

fn split_lines(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
