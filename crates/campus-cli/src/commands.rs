//! Subcommand definitions for the `campus` binary.

use std::net::IpAddr;

use clap::{Args, Subcommand};

use campus_axum::bootstrap::DEFAULT_PORT;

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Web(WebArgs),

    /// Show the resolved data directory and database path
    Paths,

    /// Manage students
    Students {
        #[command(subcommand)]
        command: StudentCommand,
    },

    /// Manage courses
    Courses {
        #[command(subcommand)]
        command: CourseCommand,
    },
}

/// Options for `campus web`.
#[derive(Debug, Clone, Args)]
pub struct WebArgs {
    /// Interface to bind
    #[arg(long, env = "CAMPUS_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "CAMPUS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Allowed CORS origin (repeatable). All origins are allowed when omitted.
    #[arg(
        long = "allowed-origin",
        env = "CAMPUS_ALLOWED_ORIGINS",
        value_delimiter = ','
    )]
    pub allowed_origins: Vec<String>,

    /// Reject courses with more than this many students
    #[arg(long, env = "CAMPUS_MAX_STUDENTS_PER_COURSE")]
    pub max_students_per_course: Option<usize>,
}

/// `campus students ...`
#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    /// List all students
    List,

    /// Add a student
    Add {
        /// Student name
        name: String,
    },

    /// Remove a student (course memberships are dropped, courses are kept)
    Remove {
        /// Student ID
        id: i64,
    },
}

/// `campus courses ...`
#[derive(Debug, Subcommand)]
pub enum CourseCommand {
    /// List courses
    List {
        /// Only show courses with exactly this name
        #[arg(long)]
        name: Option<String>,
    },

    /// Show a single course with its students
    Show {
        /// Course ID
        id: i64,
    },

    /// Add a course
    Add {
        /// Course name
        name: String,

        /// Enrol a student by ID (repeatable)
        #[arg(short = 's', long = "student")]
        students: Vec<i64>,
    },

    /// Remove a course
    Remove {
        /// Course ID
        id: i64,
    },
}
