use serde::Serialize;

/// A single BNCC skill ("habilidade").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BnccSkill {
    pub code: &'static str,
    pub description: &'static str,
    pub knowledge_object: &'static str,
}

#[derive(Debug)]
pub struct BnccGrade {
    pub grade: &'static str,
    pub skills: &'static [BnccSkill],
}

/// A curricular component with its grades in table order.
#[derive(Debug)]
pub struct BnccComponent {
    pub name: &'static str,
    pub grades: &'static [BnccGrade],
}

impl BnccComponent {
    pub fn grade(&self, grade: &str) -> Option<&'static BnccGrade> {
        self.grades.iter().find(|g| g.grade == grade)
    }
}
