/// Number of study years shown on a bachelor programme page.
pub const BACHELOR_STUDY_YEARS: i32 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct CurriculumEntry {
    pub discipline: String,
    pub kind: String,
}

impl CurriculumEntry {
    pub fn from_entity(entity: entity::curriculum::Model) -> Self {
        Self {
            discipline: entity.discipline,
            kind: entity.kind,
        }
    }
}

/// Disciplines of one study year, ordered by discipline block.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyYear {
    pub year: i32,
    pub entries: Vec<CurriculumEntry>,
}
