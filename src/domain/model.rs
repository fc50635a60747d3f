use serde::{Deserialize, Serialize};

/// 學生選課清單中記錄的課程摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub code: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: String,
    first_name: String,
    last_name: String,
    date_of_birth: String,
    enrolled_courses: Vec<CourseSummary>,
}

impl Student {
    pub(crate) fn new(id: String, first_name: String, last_name: String, date_of_birth: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
            date_of_birth,
            enrolled_courses: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    pub fn enrolled_courses(&self) -> &[CourseSummary] {
        &self.enrolled_courses
    }

    pub fn is_enrolled_in(&self, course_code: &str) -> bool {
        self.enrolled_courses.iter().any(|c| c.code == course_code)
    }

    pub(crate) fn attach_course(&mut self, summary: CourseSummary) {
        self.enrolled_courses.push(summary);
    }

    pub(crate) fn detach_course(&mut self, course_code: &str) -> bool {
        let before = self.enrolled_courses.len();
        self.enrolled_courses.retain(|c| c.code != course_code);
        self.enrolled_courses.len() != before
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    code: String,
    title: String,
    instructor: String,
    members: Vec<String>,
}

impl Course {
    pub(crate) fn new(code: String, title: String, instructor: String) -> Self {
        Self {
            code,
            title,
            instructor,
            members: Vec::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn enrollment(&self) -> usize {
        self.members.len()
    }

    pub fn has_member(&self, student_id: &str) -> bool {
        self.members.iter().any(|id| id == student_id)
    }

    pub fn summary(&self) -> CourseSummary {
        CourseSummary {
            code: self.code.clone(),
            title: self.title.clone(),
        }
    }

    pub(crate) fn attach_member(&mut self, student_id: String) {
        self.members.push(student_id);
    }

    pub(crate) fn detach_member(&mut self, student_id: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|id| id != student_id);
        self.members.len() != before
    }
}

/// 容量上限（學生數、課程數、每門課人數、每位學生課程數）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub max_students: usize,
    pub max_courses: usize,
    pub max_enrollment_per_course: usize,
    pub max_courses_per_student: usize,
}

impl Limits {
    pub const DEFAULT_MAX_STUDENTS: usize = 10;
    pub const DEFAULT_MAX_COURSES: usize = 5;
    pub const DEFAULT_MAX_ENROLLMENT_PER_COURSE: usize = 5;
    pub const DEFAULT_MAX_COURSES_PER_STUDENT: usize = 5;
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_students: Self::DEFAULT_MAX_STUDENTS,
            max_courses: Self::DEFAULT_MAX_COURSES,
            max_enrollment_per_course: Self::DEFAULT_MAX_ENROLLMENT_PER_COURSE,
            max_courses_per_student: Self::DEFAULT_MAX_COURSES_PER_STUDENT,
        }
    }
}
