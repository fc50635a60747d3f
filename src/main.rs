use anyhow::Context;
use clap::Parser;
use course_registry::utils::{logger, validation::Validate};
use course_registry::{CliConfig, IoConsole, MenuSession, Registrar};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 先載入設定，日誌格式取決於設定內容
    let config = match cli.load().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(cli.verbose, config.log_level(), config.log_format());
    tracing::debug!("CLI config: {:?}", cli);

    let limits = config.limits();
    tracing::info!(
        "🚀 Starting course-registry (students: {}, courses: {}, per course: {}, per student: {})",
        limits.max_students,
        limits.max_courses,
        limits.max_enrollment_per_course,
        limits.max_courses_per_student
    );

    let mut session = MenuSession::new(Registrar::new(limits), IoConsole::stdio());
    session.run().context("console session failed")?;

    Ok(())
}
