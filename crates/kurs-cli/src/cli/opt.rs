use clap::{Args, Parser, Subcommand};
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "kurs", about = "Manage disciplines, tests and student progress")]
pub(crate) struct Cli {
    #[arg(short, long, global = true, help = "Log debug output to stderr")]
    pub(crate) debug: bool,

    #[command(flatten)]
    pub(crate) db: Db,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Args)]
pub(crate) struct Db {
    #[arg(long, env = "DATABASE_URL")]
    pub(crate) db_url: Url,

    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Create the tables if they do not exist yet
    InitSchema,

    /// List disciplines
    Disciplines,
    /// Show a single discipline
    Discipline(DisciplineId),
    /// Create a discipline owned by a teacher
    CreateDiscipline(CreateDiscipline),
    /// Change the name or description of a discipline
    UpdateDiscipline(UpdateDiscipline),
    /// Hide a discipline from listings and progress reports
    DeleteDiscipline(DisciplineId),

    /// List the tests of a discipline
    Tests(DisciplineId),
    /// Create an inactive test in a discipline
    CreateTest(CreateTest),
    /// Show whether a test is active
    TestState(TestRef),
    /// Open a test for attempts
    Activate(TestRef),
    /// Deactivate a test and complete the attempts still in progress
    Deactivate(TestRef),
    /// Close a test and mark it deleted
    DeleteTest(TestRef),

    /// List the students enrolled in a discipline
    Students(DisciplineId),
    /// Enroll a user in a discipline
    Enroll(Enrollment),
    /// Remove a user from a discipline
    Unenroll(Enrollment),

    /// Show the progress report of a user
    Progress(UserId),

    /// List users
    Users,
    /// Show the name of a user
    User(UserId),
    /// Change the full name of a user
    RenameUser(RenameUser),
}

#[derive(Debug, Args)]
pub(crate) struct DisciplineId {
    pub(crate) discipline_id: i32,
}

#[derive(Debug, Args)]
pub(crate) struct UserId {
    pub(crate) user_id: i32,
}

#[derive(Debug, Args)]
pub(crate) struct TestRef {
    pub(crate) discipline_id: i32,
    pub(crate) test_id: i32,
}

#[derive(Debug, Args)]
pub(crate) struct CreateDiscipline {
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long, default_value = "")]
    pub(crate) description: String,
    #[arg(long)]
    pub(crate) teacher_id: i32,
}

#[derive(Debug, Args)]
pub(crate) struct UpdateDiscipline {
    pub(crate) discipline_id: i32,
    #[arg(long)]
    pub(crate) name: Option<String>,
    #[arg(long)]
    pub(crate) description: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct CreateTest {
    pub(crate) discipline_id: i32,
    #[arg(long)]
    pub(crate) name: String,
}

#[derive(Debug, Args)]
pub(crate) struct Enrollment {
    pub(crate) discipline_id: i32,
    pub(crate) user_id: i32,
}

#[derive(Debug, Args)]
pub(crate) struct RenameUser {
    pub(crate) user_id: i32,
    #[arg(long)]
    pub(crate) full_name: String,
}
