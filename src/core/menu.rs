use crate::core::registrar::Registrar;
use crate::domain::ports::Console;
use crate::utils::error::Result;
use crate::utils::validation::validate_date;

pub const MENU: &str = "--- University Course Registration System ---
1. Add Student
2. Add Course
3. Register Student to Course
4. Delete Student
5. Show Student's Courses
6. Unregister Student from Course
7. List Students
8. List Courses
0. Quit
Enter choice: ";

pub const FAREWELL: &str = "Thank you for using the University Course Registration System!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// 互動式選單：讀取輸入、重新提示、呼叫 registrar 並輸出結果
pub struct MenuSession<C: Console> {
    registrar: Registrar,
    console: C,
}

impl<C: Console> MenuSession<C> {
    pub fn new(registrar: Registrar, console: C) -> Self {
        Self { registrar, console }
    }

    pub fn registrar(&self) -> &Registrar {
        &self.registrar
    }

    pub fn into_parts(self) -> (Registrar, C) {
        (self.registrar, self.console)
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("📋 Menu session started");

        loop {
            self.console.write(MENU)?;
            let Some(choice) = self.console.read_line()? else {
                break;
            };

            let flow = match choice.trim() {
                "0" => Flow::Quit,
                "1" => self.add_student()?,
                "2" => self.add_course()?,
                "3" => self.register()?,
                "4" => self.delete_student()?,
                "5" => self.show_enrollments()?,
                "6" => self.unregister()?,
                "7" => self.list_students()?,
                "8" => self.list_courses()?,
                other => {
                    tracing::debug!("Unknown menu choice: {:?}", other);
                    self.console
                        .write("Error: Invalid input, enter a number from 0-8")?;
                    Flow::Continue
                }
            };
            self.console.write("\n")?;

            if flow == Flow::Quit {
                break;
            }
        }

        self.console.write_line(FAREWELL)?;
        tracing::info!("👋 Menu session finished");
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        self.console.write(label)?;
        self.console.read_line()
    }

    /// 重複提示直到 check 通過；check 回傳的錯誤訊息會顯示給使用者
    fn prompt_until<F>(&mut self, label: &str, check: F) -> Result<Option<String>>
    where
        F: Fn(&Registrar, &str) -> std::result::Result<(), String>,
    {
        loop {
            let Some(value) = self.prompt(label)? else {
                return Ok(None);
            };
            match check(&self.registrar, &value) {
                Ok(()) => return Ok(Some(value)),
                Err(message) => self.console.write_line(&format!("Error: {}", message))?,
            }
        }
    }

    fn prompt_non_empty(&mut self, label: &str, name: &str) -> Result<Option<String>> {
        let message = format!("{} can not be empty.", name);
        self.prompt_until(label, |_, value| {
            if value.is_empty() {
                Err(message.clone())
            } else {
                Ok(())
            }
        })
    }

    fn report<T>(&mut self, outcome: Result<T>, success: &str) -> Result<()> {
        match outcome {
            Ok(_) => self.console.write_line(success),
            Err(e) => self.console.write_line(&format!("Error: {}", e)),
        }
    }

    fn add_student(&mut self) -> Result<Flow> {
        if self.registrar.roster().is_student_roster_full() {
            self.console.write_line("Error: Max number of students reached.")?;
            return Ok(Flow::Continue);
        }

        let Some(first_name) = self.prompt_non_empty("First Name: ", "First name")? else {
            return Ok(Flow::Quit);
        };
        let Some(last_name) = self.prompt_non_empty("Last Name: ", "Last name")? else {
            return Ok(Flow::Quit);
        };
        let Some(dob) = self.prompt_until("DOB (MM-DD-YYYY): ", |_, value| {
            validate_date("date of birth", value).map_err(|_| "Invalid date format.".to_string())
        })?
        else {
            return Ok(Flow::Quit);
        };
        let Some(id) = self.prompt_until("ID: ", |registrar, value| {
            if value.is_empty() {
                Err("Student ID can not be empty.".to_string())
            } else if registrar.find_student(value).is_some() {
                Err("Student ID must be unique.".to_string())
            } else {
                Ok(())
            }
        })?
        else {
            return Ok(Flow::Quit);
        };

        let outcome = self.registrar.add_student(&first_name, &last_name, &dob, &id);
        self.report(outcome, "Student added.")?;
        Ok(Flow::Continue)
    }

    fn add_course(&mut self) -> Result<Flow> {
        if self.registrar.roster().is_course_catalog_full() {
            self.console.write_line("Error: Max number of courses reached.")?;
            return Ok(Flow::Continue);
        }

        let Some(code) = self.prompt_until("Course Code: ", |registrar, value| {
            if value.is_empty() {
                Err("Course code can not be empty.".to_string())
            } else if registrar.find_course(value).is_some() {
                Err("Course code must be unique.".to_string())
            } else {
                Ok(())
            }
        })?
        else {
            return Ok(Flow::Quit);
        };
        let Some(title) = self.prompt_non_empty("Course Title: ", "Course title")? else {
            return Ok(Flow::Quit);
        };
        let Some(instructor) = self.prompt_non_empty("Instructor Name: ", "Instructor")? else {
            return Ok(Flow::Quit);
        };

        let outcome = self.registrar.add_course(&code, &title, &instructor);
        self.report(outcome, "Course added.")?;
        Ok(Flow::Continue)
    }

    fn prompt_existing_student(&mut self) -> Result<Option<String>> {
        self.prompt_until("Enter Student ID: ", |registrar, value| {
            match registrar.find_student(value) {
                Some(_) => Ok(()),
                None => Err("Student not found.".to_string()),
            }
        })
    }

    fn prompt_existing_course(&mut self) -> Result<Option<String>> {
        self.prompt_until("Enter Course Code: ", |registrar, value| {
            match registrar.find_course(value) {
                Some(_) => Ok(()),
                None => Err("Course not found.".to_string()),
            }
        })
    }

    fn register(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_existing_student()? else {
            return Ok(Flow::Quit);
        };
        let Some(code) = self.prompt_existing_course()? else {
            return Ok(Flow::Quit);
        };

        let outcome = self.registrar.register(&id, &code);
        self.report(outcome, "Registered.")?;
        Ok(Flow::Continue)
    }

    fn unregister(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt("Enter Student ID: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(code) = self.prompt("Enter Course Code: ")? else {
            return Ok(Flow::Quit);
        };

        let outcome = self.registrar.unregister(&id, &code);
        self.report(outcome, "Unregistered.")?;
        Ok(Flow::Continue)
    }

    // 找不到學生時只提示一次就回到選單
    fn delete_student(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt("Enter Student ID: ")? else {
            return Ok(Flow::Quit);
        };

        let outcome = self.registrar.delete_student(&id);
        self.report(outcome, "Student deleted.")?;
        Ok(Flow::Continue)
    }

    fn show_enrollments(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt("Enter Student ID: ")? else {
            return Ok(Flow::Quit);
        };

        let text = match self.registrar.list_enrollments(&id) {
            Ok([]) => "Courses Enrolled: none".to_string(),
            Ok(courses) => {
                let mut text = "Courses Enrolled:".to_string();
                for course in courses {
                    text.push_str(&format!("\n{} - {}", course.code, course.title));
                }
                text
            }
            Err(e) => format!("Error: {}", e),
        };
        self.console.write_line(&text)?;
        Ok(Flow::Continue)
    }

    fn list_students(&mut self) -> Result<Flow> {
        let roster = self.registrar.roster();
        let mut text = format!(
            "Students ({}/{}):",
            roster.student_count(),
            roster.limits().max_students
        );
        if roster.student_count() == 0 {
            text.push_str(" none");
        }
        for student in roster.students() {
            text.push_str(&format!(
                "\n{} - {} {} ({}) [{} course(s)]",
                student.id(),
                student.first_name(),
                student.last_name(),
                student.date_of_birth(),
                student.enrolled_courses().len()
            ));
        }
        self.console.write_line(&text)?;
        Ok(Flow::Continue)
    }

    fn list_courses(&mut self) -> Result<Flow> {
        let roster = self.registrar.roster();
        let mut text = format!(
            "Courses ({}/{}):",
            roster.course_count(),
            roster.limits().max_courses
        );
        if roster.course_count() == 0 {
            text.push_str(" none");
        }
        for course in roster.courses() {
            text.push_str(&format!(
                "\n{} - {} ({}) [{}/{} enrolled]",
                course.code(),
                course.title(),
                course.instructor(),
                course.enrollment(),
                roster.limits().max_enrollment_per_course
            ));
        }
        self.console.write_line(&text)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct ScriptedConsole {
        input: VecDeque<String>,
        output: String,
    }

    impl ScriptedConsole {
        fn new(lines: &[&str]) -> Self {
            Self {
                input: lines.iter().map(|l| l.to_string()).collect(),
                output: String::new(),
            }
        }
    }

    impl Console for ScriptedConsole {
        fn read_line(&mut self) -> Result<Option<String>> {
            Ok(self.input.pop_front())
        }

        fn write(&mut self, text: &str) -> Result<()> {
            self.output.push_str(text);
            Ok(())
        }
    }

    fn run(lines: &[&str]) -> (Registrar, String) {
        let mut session = MenuSession::new(Registrar::default(), ScriptedConsole::new(lines));
        session.run().unwrap();
        let (registrar, console) = session.into_parts();
        (registrar, console.output)
    }

    #[test]
    fn test_quit_immediately() {
        let (_, output) = run(&["0"]);
        assert!(output.starts_with(MENU));
        assert!(output.ends_with(&format!("{}\n", FAREWELL)));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (_, output) = run(&[]);
        assert!(output.contains(FAREWELL));
    }

    #[test]
    fn test_invalid_choice() {
        let (_, output) = run(&["9", "0"]);
        assert!(output.contains("Error: Invalid input, enter a number from 0-8"));
    }

    #[test]
    fn test_add_student_reprompts_until_valid() {
        let (registrar, output) = run(&[
            "1", "", "Ada", "", "Lovelace", "1815-12-10", "12-10-1815", "", "S1", "0",
        ]);

        assert!(output.contains("Error: First name can not be empty."));
        assert!(output.contains("Error: Last name can not be empty."));
        assert!(output.contains("Error: Invalid date format."));
        assert!(output.contains("Error: Student ID can not be empty."));
        assert!(output.contains("Student added."));
        assert_eq!(registrar.find_student("S1").unwrap().first_name(), "Ada");
    }

    #[test]
    fn test_end_of_input_mid_prompt_adds_nothing() {
        let (registrar, _) = run(&["1", "Ada", "Lovelace"]);
        assert_eq!(registrar.roster().student_count(), 0);
    }

    #[test]
    fn test_delete_unknown_student_returns_to_menu() {
        let (_, output) = run(&["4", "S404", "0"]);
        assert!(output.contains("Error: Student 'S404' not found"));
    }

    #[test]
    fn test_list_empty_roster() {
        let (_, output) = run(&["7", "8", "0"]);
        assert!(output.contains("Students (0/10): none"));
        assert!(output.contains("Courses (0/5): none"));
    }
}
