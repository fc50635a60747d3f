use course_registry::core::menu::FAREWELL;
use course_registry::{IoConsole, Limits, MenuSession, Registrar};
use std::io::Cursor;

fn run_session(registrar: Registrar, script: &str) -> (Registrar, String) {
    let console = IoConsole::new(Cursor::new(script.to_string()), Vec::new());
    let mut session = MenuSession::new(registrar, console);
    session.run().unwrap();

    let (registrar, console) = session.into_parts();
    let output = String::from_utf8(console.into_writer()).unwrap();
    (registrar, output)
}

/// 測試透過選單完成新增、選課、查詢、刪除
#[test]
fn test_full_menu_walkthrough() {
    let script = "\
1
Ada
Lovelace
12-10-1815
S1
2
CS101
Intro to CS
Turing
3
S1
CS101
5
S1
3
S1
CS101
4
S1
8
0
";

    let (registrar, output) = run_session(Registrar::default(), script);

    assert!(output.contains("Student added."));
    assert!(output.contains("Course added."));
    assert!(output.contains("Registered."));
    assert!(output.contains("Courses Enrolled:\nCS101 - Intro to CS"));
    assert!(output.contains("Error: Student 'S1' is already registered in course 'CS101'"));
    assert!(output.contains("Student deleted."));
    assert!(output.contains("CS101 - Intro to CS (Turing) [0/5 enrolled]"));
    assert!(output.trim_end().ends_with(FAREWELL));

    assert!(registrar.find_student("S1").is_none());
    assert!(registrar.members("CS101").unwrap().is_empty());
}

#[test]
fn test_register_reprompts_for_unknown_keys() {
    let script = "\
1
Ada
Lovelace
12-10-1815
S1
2
CS101
Intro to CS
Turing
3
S9
S1
CS999
CS101
0
";

    let (registrar, output) = run_session(Registrar::default(), script);

    assert!(output.contains("Error: Student not found."));
    assert!(output.contains("Error: Course not found."));
    assert!(output.contains("Registered."));
    assert_eq!(registrar.members("CS101").unwrap(), ["S1".to_string()]);
}

#[test]
fn test_duplicate_keys_are_reprompted() {
    let mut registrar = Registrar::default();
    registrar
        .add_student("Ada", "Lovelace", "12-10-1815", "S1")
        .unwrap();
    registrar.add_course("CS101", "Intro to CS", "Turing").unwrap();

    let script = "\
1
Alan
Turing
06-23-1912
S1
S2
2
CS101

CS102
Data Structures
Hopper
0
";

    let (registrar, output) = run_session(registrar, script);

    assert!(output.contains("Error: Student ID must be unique."));
    assert!(output.contains("Error: Course code must be unique."));
    assert!(output.contains("Error: Course code can not be empty."));
    assert_eq!(registrar.roster().student_count(), 2);
    assert_eq!(registrar.find_course("CS102").unwrap().instructor(), "Hopper");
}

#[test]
fn test_full_roster_skips_prompts() {
    let limits = Limits {
        max_students: 1,
        max_courses: 1,
        ..Limits::default()
    };
    let mut registrar = Registrar::new(limits);
    registrar
        .add_student("Ada", "Lovelace", "12-10-1815", "S1")
        .unwrap();
    registrar.add_course("CS101", "Intro to CS", "Turing").unwrap();

    let (_, output) = run_session(registrar, "1\n2\n7\n0\n");

    assert!(output.contains("Error: Max number of students reached."));
    assert!(output.contains("Error: Max number of courses reached."));
    assert!(!output.contains("First Name: "));
    assert!(output.contains("Students (1/1):\nS1 - Ada Lovelace (12-10-1815) [0 course(s)]"));
}

#[test]
fn test_unregister_through_menu() {
    let mut registrar = Registrar::default();
    registrar
        .add_student("Ada", "Lovelace", "12-10-1815", "S1")
        .unwrap();
    registrar.add_course("CS101", "Intro to CS", "Turing").unwrap();
    registrar.register("S1", "CS101").unwrap();

    let script = "6\nS1\nCS101\n6\nS1\nCS101\n5\nS1\n6\nS1\nCS404\n0\n";
    let (registrar, output) = run_session(registrar, script);

    assert_eq!(output.matches("Unregistered.").count(), 2);
    assert!(output.contains("Courses Enrolled: none"));
    assert!(output.contains("Error: Course 'CS404' not found"));
    assert!(registrar.list_enrollments("S1").unwrap().is_empty());
}

#[test]
fn test_windows_line_endings() {
    let (registrar, output) = run_session(
        Registrar::default(),
        "2\r\nCS101\r\nIntro to CS\r\nTuring\r\n0\r\n",
    );

    assert!(output.contains("Course added."));
    assert_eq!(registrar.find_course("CS101").unwrap().title(), "Intro to CS");
}
