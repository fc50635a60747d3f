use crate::core::roster::Roster;
use crate::domain::model::{CourseSummary, Limits};
use crate::utils::error::{RegistryError, Result};

/// Keeps both sides of every student/course registration in sync.
///
/// This is the only writer of `Student::enrolled_courses` and
/// `Course::members`. Every check runs before the first write, so a failed
/// call leaves the roster exactly as it was.
#[derive(Debug, Clone, Copy)]
pub struct EnrollmentLedger {
    max_enrollment_per_course: usize,
    max_courses_per_student: usize,
}

impl Default for EnrollmentLedger {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

impl EnrollmentLedger {
    pub fn new(limits: Limits) -> Self {
        Self {
            max_enrollment_per_course: limits.max_enrollment_per_course,
            max_courses_per_student: limits.max_courses_per_student,
        }
    }

    fn ensure_exists(roster: &Roster, student_id: &str, course_code: &str) -> Result<()> {
        if roster.find_student(student_id).is_none() {
            return Err(RegistryError::not_found_student(student_id));
        }
        if roster.find_course(course_code).is_none() {
            return Err(RegistryError::not_found_course(course_code));
        }
        Ok(())
    }

    pub fn register(&self, roster: &mut Roster, student_id: &str, course_code: &str) -> Result<()> {
        Self::ensure_exists(roster, student_id, course_code)?;
        let (student, course) = roster
            .pair_mut(student_id, course_code)
            .ok_or_else(|| RegistryError::not_found_student(student_id))?;

        if course.has_member(student_id) || student.is_enrolled_in(course_code) {
            tracing::info!("'{}' is already registered in '{}'", student_id, course_code);
            return Err(RegistryError::AlreadyRegistered {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            });
        }

        if course.enrollment() >= self.max_enrollment_per_course {
            tracing::info!("Course '{}' is full", course_code);
            return Err(RegistryError::CourseFull {
                course_code: course_code.to_string(),
                limit: self.max_enrollment_per_course,
            });
        }

        if student.enrolled_courses().len() >= self.max_courses_per_student {
            tracing::info!("Student '{}' reached the course limit", student_id);
            return Err(RegistryError::StudentCourseLimitReached {
                student_id: student_id.to_string(),
                limit: self.max_courses_per_student,
            });
        }

        // 檢查全部通過後才寫入兩邊
        course.attach_member(student_id.to_string());
        student.attach_course(course.summary());

        tracing::debug!("Registered '{}' in '{}'", student_id, course_code);
        Ok(())
    }

    /// Removes the registration from both sides. Unregistering a pair that is
    /// not registered succeeds without changing anything.
    pub fn unregister(&self, roster: &mut Roster, student_id: &str, course_code: &str) -> Result<()> {
        Self::ensure_exists(roster, student_id, course_code)?;
        let (student, course) = roster
            .pair_mut(student_id, course_code)
            .ok_or_else(|| RegistryError::not_found_student(student_id))?;

        let removed_member = course.detach_member(student_id);
        let removed_course = student.detach_course(course_code);

        if removed_member || removed_course {
            tracing::debug!("Unregistered '{}' from '{}'", student_id, course_code);
        } else {
            tracing::debug!(
                "'{}' was not registered in '{}', nothing to do",
                student_id,
                course_code
            );
        }
        Ok(())
    }

    pub fn list_enrollments<'a>(&self, roster: &'a Roster, student_id: &str) -> Result<&'a [CourseSummary]> {
        roster
            .find_student(student_id)
            .map(|s| s.enrolled_courses())
            .ok_or_else(|| RegistryError::not_found_student(student_id))
    }

    pub fn members<'a>(&self, roster: &'a Roster, course_code: &str) -> Result<&'a [String]> {
        roster
            .find_course(course_code)
            .map(|c| c.members())
            .ok_or_else(|| RegistryError::not_found_course(course_code))
    }
}
