//! Dataset Lookups
//!
//! Text reports over the workout history CSV, the user profile database and
//! the workout routine PDF.

use std::path::Path;
use storage::{
    ProfileRepository, RoutineDocument, StorageError, UserProfile, WorkoutDataset, WorkoutRecord,
};
use tracing::debug;

/// Default workout history file
pub const DEFAULT_WORKOUT_CSV: &str = "./data/workout_data.csv";
/// Default profile database
pub const DEFAULT_PROFILE_DB: &str = "./data/fitness_db.db";
/// Default routine document
pub const DEFAULT_ROUTINE_PDF: &str = "./data/workout_routines.pdf";

/// Characters of routine text shown in a report
pub const ROUTINE_PREVIEW_CHARS: usize = 500;

/// Format a user's workouts as a bulleted list
pub fn render_workouts(user_id: u32, workouts: &[WorkoutRecord]) -> String {
    if workouts.is_empty() {
        return format!("No workout data found for user {user_id}.");
    }

    let lines = workouts
        .iter()
        .map(|w| format!("- {} for {} minutes", w.workout_type, w.duration_minutes))
        .collect::<Vec<_>>()
        .join("\n");
    format!("User {user_id} has completed the following workouts:\n{lines}")
}

/// Format a user's profile
pub fn render_profile(user_id: u32, profile: Option<&UserProfile>) -> String {
    match profile {
        Some(p) => format!(
            "User Profile:\n- ID: {}\n- Name: {}\n- Age: {}\n- Gender: {}",
            p.user_id, p.name, p.age, p.gender
        ),
        None => format!("No profile found for user {user_id}."),
    }
}

/// Format the opening of the routine text
pub fn render_routines(text: &str) -> String {
    let preview = match text.char_indices().nth(ROUTINE_PREVIEW_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    };
    format!("Workout Routines:\n{preview}...")
}

/// Workout report for `user_id` from the CSV at `path`
pub fn lookup_workouts(path: &Path, user_id: u32) -> Result<String, StorageError> {
    let dataset = WorkoutDataset::open(path)?;
    let workouts = dataset.for_user(user_id)?;
    debug!("Rendering {} workouts", workouts.len());
    Ok(render_workouts(user_id, &workouts))
}

/// Profile report for `user_id` from the database at `path`
pub async fn lookup_profile(path: &Path, user_id: u32) -> Result<String, StorageError> {
    let repo = ProfileRepository::open(path).await?;
    let profile = repo.find(user_id).await?;
    repo.close().await;
    Ok(render_profile(user_id, profile.as_ref()))
}

/// Routine report from the PDF at `path`
pub fn lookup_routines(path: &Path) -> Result<String, StorageError> {
    let text = RoutineDocument::open(path)?.text()?;
    debug!("Extracted {} characters of routines", text.chars().count());
    Ok(render_routines(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout(workout_type: &str, duration_minutes: f64) -> WorkoutRecord {
        WorkoutRecord {
            user_id: 1,
            workout_type: workout_type.to_string(),
            duration_minutes,
        }
    }

    #[test]
    fn test_render_workouts() {
        let text = render_workouts(1, &[workout("Running", 30.0), workout("Yoga", 45.5)]);
        assert_eq!(
            text,
            "User 1 has completed the following workouts:\n\
             - Running for 30 minutes\n\
             - Yoga for 45.5 minutes"
        );
    }

    #[test]
    fn test_render_no_workouts() {
        assert_eq!(render_workouts(4, &[]), "No workout data found for user 4.");
    }

    #[test]
    fn test_render_profile() {
        let profile = UserProfile {
            user_id: 2,
            name: "Omar".to_string(),
            age: 41,
            gender: "Male".to_string(),
        };
        assert_eq!(
            render_profile(2, Some(&profile)),
            "User Profile:\n- ID: 2\n- Name: Omar\n- Age: 41\n- Gender: Male"
        );
        assert_eq!(render_profile(9, None), "No profile found for user 9.");
    }

    #[test]
    fn test_lookup_workouts_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workout_data.csv");
        std::fs::write(
            &path,
            "user_id,workout_type,duration_minutes\n5,Rowing,20\n6,Boxing,40\n",
        )
        .unwrap();

        let text = lookup_workouts(&path, 5).unwrap();
        assert!(text.contains("- Rowing for 20 minutes"));
        assert!(!text.contains("Boxing"));
    }

    #[tokio::test]
    async fn test_lookup_profile_from_database() {
        use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fitness_db.db");
        let pool = SqlitePoolOptions::new()
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(&path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Delete),
            )
            .await
            .unwrap();
        sqlx::query("CREATE TABLE users (user_id INTEGER, name TEXT, age INTEGER, gender TEXT)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO users VALUES (3, 'Lena', 35, 'Female')")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        let text = lookup_profile(&path, 3).await.unwrap();
        assert!(text.starts_with("User Profile:"));
        assert!(text.contains("- Name: Lena"));

        let missing = lookup_profile(&path, 4).await.unwrap();
        assert_eq!(missing, "No profile found for user 4.");
    }

    #[test]
    fn test_render_routines_truncates() {
        let text = "a".repeat(600);
        let report = render_routines(&text);
        assert_eq!(report, format!("Workout Routines:\n{}...", "a".repeat(500)));

        assert_eq!(render_routines("Plank 60s"), "Workout Routines:\nPlank 60s...");
    }

    #[test]
    fn test_render_routines_cuts_on_char_boundary() {
        let text = "é".repeat(501);
        let report = render_routines(&text);
        let preview = report
            .strip_prefix("Workout Routines:\n")
            .and_then(|r| r.strip_suffix("..."))
            .unwrap();
        assert_eq!(preview.chars().count(), 500);
    }

    #[tokio::test]
    async fn test_missing_files_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(lookup_routines(&dir.path().join("none.pdf")).is_err());
        assert!(lookup_workouts(&dir.path().join("none.csv"), 1).is_err());
        assert!(lookup_profile(&dir.path().join("none.db"), 1).await.is_err());
    }
}
