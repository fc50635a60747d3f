use crate::core::ledger::EnrollmentLedger;
use crate::core::roster::Roster;
use crate::domain::model::{Course, CourseSummary, Limits, Student};
use crate::utils::error::Result;

/// One roster plus the ledger that keeps its registrations consistent.
#[derive(Debug, Clone, Default)]
pub struct Registrar {
    roster: Roster,
    ledger: EnrollmentLedger,
}

impl Registrar {
    pub fn new(limits: Limits) -> Self {
        tracing::debug!("Creating registrar with limits: {:?}", limits);
        Self {
            roster: Roster::new(limits),
            ledger: EnrollmentLedger::new(limits),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn limits(&self) -> &Limits {
        self.roster.limits()
    }

    pub fn add_student(&mut self, first_name: &str, last_name: &str, dob: &str, id: &str) -> Result<()> {
        self.roster.add_student(first_name, last_name, dob, id)
    }

    pub fn add_course(&mut self, code: &str, title: &str, instructor: &str) -> Result<()> {
        self.roster.add_course(code, title, instructor)
    }

    pub fn delete_student(&mut self, id: &str) -> Result<Student> {
        self.roster.delete_student(id, &self.ledger)
    }

    pub fn register(&mut self, student_id: &str, course_code: &str) -> Result<()> {
        self.ledger.register(&mut self.roster, student_id, course_code)
    }

    pub fn unregister(&mut self, student_id: &str, course_code: &str) -> Result<()> {
        self.ledger.unregister(&mut self.roster, student_id, course_code)
    }

    pub fn list_enrollments(&self, student_id: &str) -> Result<&[CourseSummary]> {
        self.ledger.list_enrollments(&self.roster, student_id)
    }

    pub fn members(&self, course_code: &str) -> Result<&[String]> {
        self.ledger.members(&self.roster, course_code)
    }

    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.roster.find_student(id)
    }

    pub fn find_course(&self, code: &str) -> Option<&Course> {
        self.roster.find_course(code)
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.roster.students()
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.roster.courses()
    }
}
