use crate::core::ledger::EnrollmentLedger;
use crate::domain::model::{Course, Limits, Student};
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_date, validate_non_empty};

/// Owns every student and course record, in creation order.
///
/// Records are addressed by student ID or course code, never by position.
/// Not safe for concurrent mutation; wrap it in a lock if it must be shared
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    limits: Limits,
    students: Vec<Student>,
    courses: Vec<Course>,
}

impl Roster {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            students: Vec::new(),
            courses: Vec::new(),
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn is_student_roster_full(&self) -> bool {
        self.students.len() >= self.limits.max_students
    }

    pub fn is_course_catalog_full(&self) -> bool {
        self.courses.len() >= self.limits.max_courses
    }

    pub fn add_student(&mut self, first_name: &str, last_name: &str, dob: &str, id: &str) -> Result<()> {
        if self.is_student_roster_full() {
            tracing::info!("Rejected student '{}': roster is full", id);
            return Err(RegistryError::CapacityExceeded {
                entity: "students".to_string(),
                limit: self.limits.max_students,
            });
        }

        validate_non_empty("first name", first_name)?;
        validate_non_empty("last name", last_name)?;
        validate_date("date of birth", dob)?;
        validate_non_empty("student ID", id)?;

        if self.find_student(id).is_some() {
            tracing::info!("Rejected student '{}': duplicate ID", id);
            return Err(RegistryError::DuplicateId { id: id.to_string() });
        }

        self.students.push(Student::new(
            id.to_string(),
            first_name.to_string(),
            last_name.to_string(),
            dob.to_string(),
        ));
        tracing::debug!("Added student '{}' ({} {})", id, first_name, last_name);
        Ok(())
    }

    pub fn add_course(&mut self, code: &str, title: &str, instructor: &str) -> Result<()> {
        if self.is_course_catalog_full() {
            tracing::info!("Rejected course '{}': catalog is full", code);
            return Err(RegistryError::CapacityExceeded {
                entity: "courses".to_string(),
                limit: self.limits.max_courses,
            });
        }

        validate_non_empty("course code", code)?;
        validate_non_empty("course title", title)?;
        validate_non_empty("instructor", instructor)?;

        if self.find_course(code).is_some() {
            tracing::info!("Rejected course '{}': duplicate code", code);
            return Err(RegistryError::DuplicateCode {
                code: code.to_string(),
            });
        }

        self.courses.push(Course::new(
            code.to_string(),
            title.to_string(),
            instructor.to_string(),
        ));
        tracing::debug!("Added course '{}' - {}", code, title);
        Ok(())
    }

    /// 刪除學生，並透過 ledger 將其從所有課程中移除
    pub fn delete_student(&mut self, id: &str, ledger: &EnrollmentLedger) -> Result<Student> {
        let codes: Vec<String> = self
            .find_student(id)
            .ok_or_else(|| RegistryError::not_found_student(id))?
            .enrolled_courses()
            .iter()
            .map(|c| c.code.clone())
            .collect();

        for code in &codes {
            ledger.unregister(self, id, code)?;
        }

        let index = self
            .students
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| RegistryError::not_found_student(id))?;
        let removed = self.students.remove(index);

        tracing::debug!(
            "Deleted student '{}' (dropped from {} course(s))",
            id,
            codes.len()
        );
        Ok(removed)
    }

    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    pub fn find_course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code() == code)
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.iter()
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.courses.iter()
    }

    /// 同時取得學生與課程的可變參考，供 ledger 一次更新兩邊
    pub(crate) fn pair_mut(&mut self, id: &str, code: &str) -> Option<(&mut Student, &mut Course)> {
        let student = self.students.iter_mut().find(|s| s.id() == id)?;
        let course = self.courses.iter_mut().find(|c| c.code() == code)?;
        Some((student, course))
    }
}
